//! Audio cues
//!
//! Short WAV clips loaded into memory at startup and played fire-and-forget
//! on rodio's mixer.

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use game_core::Events;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Source};
use tracing::{debug, warn};

use crate::error::ClientError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    PaddleHit,
    WallHit,
    Score,
}

impl Cue {
    pub const ALL: [Cue; 3] = [Cue::PaddleHit, Cue::WallHit, Cue::Score];

    pub fn file_name(self) -> &'static str {
        match self {
            Cue::PaddleHit => "paddle_hit.wav",
            Cue::WallHit => "wall_hit.wav",
            Cue::Score => "score.wav",
        }
    }

    fn index(self) -> usize {
        match self {
            Cue::PaddleHit => 0,
            Cue::WallHit => 1,
            Cue::Score => 2,
        }
    }
}

/// Cues to play for one frame's events
pub fn cues_for(events: &Events) -> Vec<Cue> {
    let mut cues = Vec::new();
    if events.ball_hit_paddle {
        cues.push(Cue::PaddleHit);
    }
    if events.ball_hit_wall {
        cues.push(Cue::WallHit);
    }
    if events.scored() {
        cues.push(Cue::Score);
    }
    cues
}

pub fn cue_path(assets: &Path, cue: Cue) -> PathBuf {
    assets.join("sounds").join(cue.file_name())
}

/// Read and validate every clip; a missing or corrupt file is fatal
pub fn load_clips(assets: &Path) -> Result<[Arc<[u8]>; 3], ClientError> {
    let load = |cue: Cue| -> Result<Arc<[u8]>, ClientError> {
        let path = cue_path(assets, cue);
        let bytes: Arc<[u8]> = std::fs::read(&path)
            .map_err(|source| ClientError::Asset {
                path: path.clone(),
                source,
            })?
            .into();
        Decoder::new(Cursor::new(bytes.clone()))
            .map_err(|source| ClientError::Decode { path, source })?;
        Ok(bytes)
    };
    Ok([
        load(Cue::PaddleHit)?,
        load(Cue::WallHit)?,
        load(Cue::Score)?,
    ])
}

pub struct AudioCues {
    // Dropping the stream stops playback; keep it for the cues' lifetime
    _stream: OutputStream,
    handle: OutputStreamHandle,
    clips: [Arc<[u8]>; 3],
}

impl AudioCues {
    /// Load the clips and open the default output device.
    ///
    /// Returns `Ok(None)` when no output device is available; the game then
    /// runs silent.
    pub fn open(assets: &Path) -> Result<Option<Self>, ClientError> {
        let clips = load_clips(assets)?;
        match OutputStream::try_default() {
            Ok((stream, handle)) => Ok(Some(Self {
                _stream: stream,
                handle,
                clips,
            })),
            Err(e) => {
                warn!("no audio output device, running silent: {}", e);
                Ok(None)
            }
        }
    }

    pub fn play(&self, cue: Cue) {
        let clip = self.clips[cue.index()].clone();
        let source = match Decoder::new(Cursor::new(clip)) {
            Ok(source) => source,
            Err(e) => {
                warn!(?cue, "failed to decode cue: {}", e);
                return;
            }
        };
        if let Err(e) = self.handle.play_raw(source.convert_samples()) {
            debug!(?cue, "cue dropped: {}", e);
        }
    }

    pub fn play_events(&self, events: &Events) {
        for cue in cues_for(events) {
            self.play(cue);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_frame_has_no_cues() {
        assert!(cues_for(&Events::new()).is_empty());
    }

    #[test]
    fn test_each_event_maps_to_its_cue() {
        let events = Events {
            left_scored: false,
            right_scored: true,
            ball_hit_paddle: true,
            ball_hit_wall: true,
        };
        assert_eq!(
            cues_for(&events),
            vec![Cue::PaddleHit, Cue::WallHit, Cue::Score]
        );
    }

    #[test]
    fn test_cue_paths() {
        let path = cue_path(Path::new("resources"), Cue::WallHit);
        assert_eq!(path, PathBuf::from("resources/sounds/wall_hit.wav"));
        for cue in Cue::ALL {
            assert!(cue_path(Path::new("x"), cue).ends_with(cue.file_name()));
        }
    }

    #[test]
    fn test_missing_asset_is_an_error() {
        let result = load_clips(Path::new("/definitely/not/here"));
        assert!(matches!(result, Err(ClientError::Asset { .. })));
    }

    #[test]
    fn test_bundled_clips_decode() {
        let assets = Path::new(env!("CARGO_MANIFEST_DIR")).join("../resources");
        assert!(load_clips(&assets).is_ok());
    }
}
