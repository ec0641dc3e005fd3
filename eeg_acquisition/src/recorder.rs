//! Band-mean recorder
//!
//! Polls a board once per interval, averages each enabled band's power
//! across the first `channel_count` EEG channels and keeps a per-band
//! history of the results.

use std::future::Future;
use std::io::Write;
use std::time::Duration;

use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::bands::{band_power, Band, BandMeans, BandSelection};
use crate::board::Board;
use crate::error::{AcquisitionError, Result};
use crate::psd::{psd, WindowFunction};
use crate::threshold::moving_window_threshold;

/// Smallest window that resolves all five bands at 250 Hz
pub const NUM_SAMPLES: usize = 512;
pub const DEFAULT_CHANNEL_COUNT: usize = 8;
pub const WARMUP: Duration = Duration::from_secs(3);
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);
pub const THRESHOLD_WINDOW: usize = 10;

#[derive(Debug, Clone)]
pub struct RecorderConfig {
    pub channel_count: usize,
    pub bands: BandSelection,
    pub window: WindowFunction,
    pub num_samples: usize,
    pub warmup: Duration,
    pub poll_interval: Duration,
    pub threshold_window: usize,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            channel_count: DEFAULT_CHANNEL_COUNT,
            bands: BandSelection::default(),
            window: WindowFunction::default(),
            num_samples: NUM_SAMPLES,
            warmup: WARMUP,
            poll_interval: POLL_INTERVAL,
            threshold_window: THRESHOLD_WINDOW,
        }
    }
}

/// Every poll's means, one series per band
#[derive(Debug, Clone, Default)]
pub struct BandHistory {
    means: [Vec<f64>; 5],
}

impl BandHistory {
    pub fn push(&mut self, means: &BandMeans) {
        for band in Band::ALL {
            self.means[band.index()].push(means.get(band));
        }
    }

    pub fn len(&self) -> usize {
        self.means[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn means(&self, band: Band) -> &[f64] {
        &self.means[band.index()]
    }

    /// Moving-window threshold for every band
    pub fn thresholds(&self, window: usize) -> BandMeans {
        let mut out = BandMeans::default();
        for band in Band::ALL {
            out.set(band, moving_window_threshold(self.means(band), window));
        }
        out
    }
}

/// Average band power over the first `config.channel_count` EEG rows
pub fn compute_means(
    data: &[Vec<f64>],
    eeg_rows: &[usize],
    sampling_rate: f64,
    config: &RecorderConfig,
) -> Result<BandMeans> {
    let mut sums = BandMeans::default();

    for &row in eeg_rows.iter().take(config.channel_count) {
        let channel = data.get(row).map(Vec::as_slice).unwrap_or_default();
        if channel.len() < config.num_samples {
            return Err(AcquisitionError::NotEnoughData {
                needed: config.num_samples,
                available: channel.len(),
            });
        }
        let window = &channel[channel.len() - config.num_samples..];
        let spectrum = psd(window, sampling_rate, config.window)?;

        for band in config.bands.enabled() {
            let (low, high) = band.range();
            let power = band_power(&spectrum, low, high)?;
            sums.set(band, sums.get(band) + power);
        }
    }

    let mut means = BandMeans::default();
    for band in config.bands.enabled() {
        means.set(band, sums.get(band) / config.channel_count as f64);
    }
    Ok(means)
}

pub struct Recorder<B: Board> {
    board: B,
    config: RecorderConfig,
    history: BandHistory,
}

impl<B: Board> Recorder<B> {
    pub fn new(board: B, config: RecorderConfig) -> Result<Self> {
        let available = board.eeg_channels().len();
        if config.channel_count == 0 || config.channel_count > available {
            return Err(AcquisitionError::ChannelCount {
                requested: config.channel_count,
                available,
            });
        }
        Ok(Self {
            board,
            config,
            history: BandHistory::default(),
        })
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut B {
        &mut self.board
    }

    pub fn history(&self) -> &BandHistory {
        &self.history
    }

    /// Read the latest window and record its band means
    pub fn poll(&mut self) -> Result<BandMeans> {
        let data = self.board.current_data(self.config.num_samples)?;
        let means = compute_means(
            &data,
            self.board.eeg_channels(),
            self.board.sampling_rate() as f64,
            &self.config,
        )?;
        self.history.push(&means);
        Ok(means)
    }

    /// Stream until `shutdown` resolves or a fatal error occurs, printing
    /// one line of means per poll. The session is always stopped and
    /// released; an interrupt is reported as [`AcquisitionError::Interrupted`].
    pub async fn run<W, F>(&mut self, out: &mut W, shutdown: F) -> Result<()>
    where
        W: Write,
        F: Future<Output = ()>,
    {
        self.board.prepare_session()?;
        self.board.start_stream()?;
        info!(
            board = ?self.board.board_id(),
            channels = self.config.channel_count,
            window = ?self.config.window,
            "recording"
        );

        let outcome = tokio::select! {
            res = self.poll_loop(out) => res,
            _ = shutdown => Err(AcquisitionError::Interrupted),
        };

        let stopped = self.board.stop_stream();
        let released = self.board.release_session();
        info!(polls = self.history.len(), "session closed");

        outcome.and(stopped).and(released)
    }

    async fn poll_loop<W: Write>(&mut self, out: &mut W) -> Result<()> {
        time::sleep(self.config.warmup).await;

        let mut ticker = time::interval(self.config.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            match self.poll() {
                Ok(means) => {
                    writeln!(out, "{means}")?;
                    out.flush()?;
                    debug!(
                        thresholds = %self.history.thresholds(self.config.threshold_window),
                        "moving thresholds"
                    );
                }
                Err(e @ AcquisitionError::NotEnoughData { .. }) => {
                    warn!("skipping poll: {}", e);
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardId, InputParams, SessionState, SyntheticBoard};
    use tokio::sync::oneshot;

    fn streaming_board(samples: usize) -> SyntheticBoard {
        let mut board = SyntheticBoard::manual(11);
        board.prepare_session().unwrap();
        board.start_stream().unwrap();
        board.advance(samples).unwrap();
        board
    }

    fn quick_config() -> RecorderConfig {
        RecorderConfig {
            num_samples: 64,
            bands: BandSelection::only(&[Band::Beta, Band::Gamma]),
            warmup: Duration::from_millis(20),
            poll_interval: Duration::from_millis(10),
            ..RecorderConfig::default()
        }
    }

    #[test]
    fn test_means_cover_enabled_bands_only() {
        let mut board = streaming_board(NUM_SAMPLES);
        let data = board.current_data(NUM_SAMPLES).unwrap();
        let config = RecorderConfig {
            bands: BandSelection::only(&[Band::Delta, Band::Alpha]),
            ..RecorderConfig::default()
        };

        let means = compute_means(&data, board.eeg_channels(), 250.0, &config).unwrap();
        assert!(means.get(Band::Delta) > 0.0);
        assert!(means.get(Band::Alpha) > 0.0);
        assert_eq!(means.get(Band::Theta), 0.0);
        assert_eq!(means.get(Band::Beta), 0.0);
        assert_eq!(means.get(Band::Gamma), 0.0);
    }

    #[test]
    fn test_mean_is_average_over_channels() {
        let mut board = streaming_board(NUM_SAMPLES);
        let data = board.current_data(NUM_SAMPLES).unwrap();
        let rows = board.eeg_channels().to_vec();
        let one = |row: usize| {
            let config = RecorderConfig {
                channel_count: 1,
                ..RecorderConfig::default()
            };
            compute_means(&data, &[row], 250.0, &config).unwrap()
        };
        let config = RecorderConfig {
            channel_count: 2,
            ..RecorderConfig::default()
        };
        let both = compute_means(&data, &rows, 250.0, &config).unwrap();

        for band in Band::ALL {
            let expected = (one(rows[0]).get(band) + one(rows[1]).get(band)) / 2.0;
            assert!((both.get(band) - expected).abs() < 1e-9, "{band:?}");
        }
    }

    #[test]
    fn test_short_window_is_not_enough_data() {
        let board = streaming_board(100);
        let mut recorder = Recorder::new(board, RecorderConfig::default()).unwrap();
        let err = recorder.poll().unwrap_err();
        assert!(matches!(
            err,
            AcquisitionError::NotEnoughData {
                needed: 512,
                available: 100
            }
        ));
    }

    #[test]
    fn test_channel_count_is_validated() {
        for count in [0, 17] {
            let config = RecorderConfig {
                channel_count: count,
                ..RecorderConfig::default()
            };
            let err = Recorder::new(SyntheticBoard::manual(0), config).err();
            assert!(matches!(err, Some(AcquisitionError::ChannelCount { .. })));
        }
    }

    #[test]
    fn test_poll_records_history() {
        let board = streaming_board(NUM_SAMPLES);
        let mut recorder = Recorder::new(board, RecorderConfig::default()).unwrap();
        let first = recorder.poll().unwrap();
        recorder.board_mut().advance(250).unwrap();
        recorder.poll().unwrap();

        let history = recorder.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history.means(Band::Alpha)[0], first.get(Band::Alpha));
        assert!(history.thresholds(5).get(Band::Alpha) > 0.0);
    }

    #[tokio::test]
    async fn test_interrupt_releases_session() {
        let board = SyntheticBoard::new(InputParams::default());
        let mut recorder = Recorder::new(board, quick_config()).unwrap();
        let mut out = Vec::new();

        let result = recorder.run(&mut out, async {}).await;

        assert!(matches!(result, Err(AcquisitionError::Interrupted)));
        assert_eq!(recorder.board().state(), SessionState::Idle);
        assert!(out.is_empty(), "interrupted during warmup");
    }

    /// Manual board that produces a fresh window on every read and signals
    /// once `reads` windows have been handed out
    struct SteppedBoard {
        inner: SyntheticBoard,
        reads: usize,
        done: Option<oneshot::Sender<()>>,
    }

    impl Board for SteppedBoard {
        fn board_id(&self) -> BoardId {
            self.inner.board_id()
        }

        fn sampling_rate(&self) -> u32 {
            self.inner.sampling_rate()
        }

        fn eeg_channels(&self) -> &[usize] {
            self.inner.eeg_channels()
        }

        fn prepare_session(&mut self) -> Result<()> {
            self.inner.prepare_session()
        }

        fn start_stream(&mut self) -> Result<()> {
            self.inner.start_stream()
        }

        fn current_data(&mut self, samples: usize) -> Result<Vec<Vec<f64>>> {
            self.inner.advance(samples)?;
            self.reads = self.reads.saturating_sub(1);
            if self.reads == 0 {
                if let Some(done) = self.done.take() {
                    let _ = done.send(());
                }
            }
            self.inner.current_data(samples)
        }

        fn stop_stream(&mut self) -> Result<()> {
            self.inner.stop_stream()
        }

        fn release_session(&mut self) -> Result<()> {
            self.inner.release_session()
        }
    }

    #[tokio::test]
    async fn test_run_prints_band_lines() {
        let (tx, rx) = oneshot::channel();
        let board = SteppedBoard {
            inner: SyntheticBoard::manual(5),
            reads: 3,
            done: Some(tx),
        };
        let mut recorder = Recorder::new(board, quick_config()).unwrap();
        let mut out = Vec::new();

        let shutdown = async {
            let _ = rx.await;
        };
        let result = recorder.run(&mut out, shutdown).await;
        assert!(matches!(result, Err(AcquisitionError::Interrupted)));

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines.len() >= 3, "one line per poll, got {}", lines.len());
        for line in &lines {
            assert!(line.starts_with("Delta: 0.000000\tTheta: 0.000000\tAlpha: 0.000000\tBeta: "));
            assert!(line.ends_with('\t'));
        }
        assert!(recorder.history().len() >= 3);
        assert_eq!(recorder.board().inner.state(), SessionState::Idle);
    }
}
