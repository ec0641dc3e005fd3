//! Board sessions
//!
//! A [`Board`] is a data source with a session lifecycle:
//! prepare → start → read → stop → release. Only the synthetic board is
//! built in; hardware boards are rejected by [`open_board`].

use std::collections::VecDeque;
use std::f64::consts::TAU;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::error::{AcquisitionError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardId {
    #[default]
    Synthetic,
    Cyton,
    Other(i32),
}

impl BoardId {
    pub fn from_raw(id: i32) -> Self {
        match id {
            -1 => BoardId::Synthetic,
            0 => BoardId::Cyton,
            other => BoardId::Other(other),
        }
    }

    pub fn raw(self) -> i32 {
        match self {
            BoardId::Synthetic => -1,
            BoardId::Cyton => 0,
            BoardId::Other(id) => id,
        }
    }
}

/// Connection parameters; which fields matter depends on the board
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputParams {
    pub serial_port: String,
    pub mac_address: String,
    pub ip_address: String,
    pub ip_port: u16,
    pub ip_protocol: i32,
    pub serial_number: String,
    pub streamer_params: String,
    pub file: String,
    pub timeout: u32,
    pub master_board: Option<BoardId>,
}

pub trait Board {
    fn board_id(&self) -> BoardId;

    fn sampling_rate(&self) -> u32;

    /// Row indices of the EEG channels in [`Board::current_data`]
    fn eeg_channels(&self) -> &[usize];

    fn prepare_session(&mut self) -> Result<()>;

    fn start_stream(&mut self) -> Result<()>;

    /// The latest `samples` samples for every row, oldest first.
    /// Fewer are returned if the board has not produced that many yet.
    fn current_data(&mut self, samples: usize) -> Result<Vec<Vec<f64>>>;

    fn stop_stream(&mut self) -> Result<()>;

    fn release_session(&mut self) -> Result<()>;
}

impl<B: Board + ?Sized> Board for Box<B> {
    fn board_id(&self) -> BoardId {
        (**self).board_id()
    }

    fn sampling_rate(&self) -> u32 {
        (**self).sampling_rate()
    }

    fn eeg_channels(&self) -> &[usize] {
        (**self).eeg_channels()
    }

    fn prepare_session(&mut self) -> Result<()> {
        (**self).prepare_session()
    }

    fn start_stream(&mut self) -> Result<()> {
        (**self).start_stream()
    }

    fn current_data(&mut self, samples: usize) -> Result<Vec<Vec<f64>>> {
        (**self).current_data(samples)
    }

    fn stop_stream(&mut self) -> Result<()> {
        (**self).stop_stream()
    }

    fn release_session(&mut self) -> Result<()> {
        (**self).release_session()
    }
}

pub fn open_board(id: BoardId, params: InputParams) -> Result<Box<dyn Board>> {
    match id {
        BoardId::Synthetic => Ok(Box::new(SyntheticBoard::new(params))),
        other => Err(AcquisitionError::UnsupportedBoard(other.raw())),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Prepared,
    Streaming,
}

pub const SYNTHETIC_SAMPLING_RATE: u32 = 250;
pub const SYNTHETIC_EEG_CHANNELS: usize = 16;
pub const DEFAULT_SEED: u64 = 42;

/// Representative frequency (Hz) and amplitude (uV) for each band
const COMPONENTS: [(f64, f64); 5] = [
    (1.0, 12.0),
    (6.0, 8.0),
    (10.0, 10.0),
    (20.0, 4.0),
    (40.0, 2.0),
];
const NOISE_AMPLITUDE: f64 = 1.5;
const RING_SECONDS: usize = 60;

/// Seeded signal generator standing in for real hardware.
///
/// Row 0 is a package counter, rows 1..=16 are EEG. Each channel is a sum
/// of band-representative sines with per-channel gain and phase, plus
/// uniform noise.
pub struct SyntheticBoard {
    params: InputParams,
    state: SessionState,
    realtime: bool,
    rng: StdRng,
    gains: Vec<[f64; 5]>,
    phases: Vec<[f64; 5]>,
    eeg_rows: Vec<usize>,
    rows: Vec<VecDeque<f64>>,
    generated: u64,
    // stream start time and sample count at that moment
    started: Option<(Instant, u64)>,
}

impl SyntheticBoard {
    /// Board that produces samples as wall-clock time passes
    pub fn new(params: InputParams) -> Self {
        Self::with_seed(params, DEFAULT_SEED, true)
    }

    /// Board that only produces samples through [`SyntheticBoard::advance`]
    pub fn manual(seed: u64) -> Self {
        Self::with_seed(InputParams::default(), seed, false)
    }

    fn with_seed(params: InputParams, seed: u64, realtime: bool) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let gains: Vec<[f64; 5]> = (0..SYNTHETIC_EEG_CHANNELS)
            .map(|_| std::array::from_fn(|_| rng.gen_range(0.8..1.2)))
            .collect();
        let phases: Vec<[f64; 5]> = (0..SYNTHETIC_EEG_CHANNELS)
            .map(|_| std::array::from_fn(|_| rng.gen_range(0.0..TAU)))
            .collect();

        Self {
            params,
            state: SessionState::Idle,
            realtime,
            rng,
            gains,
            phases,
            eeg_rows: (1..=SYNTHETIC_EEG_CHANNELS).collect(),
            rows: vec![VecDeque::new(); SYNTHETIC_EEG_CHANNELS + 1],
            generated: 0,
            started: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Produce `samples` more samples; the stream must be running
    pub fn advance(&mut self, samples: usize) -> Result<()> {
        if self.state != SessionState::Streaming {
            return Err(AcquisitionError::SessionState("stream is not running"));
        }
        self.generate(samples);
        Ok(())
    }

    fn generate(&mut self, samples: usize) {
        let capacity = SYNTHETIC_SAMPLING_RATE as usize * RING_SECONDS;
        let fs = SYNTHETIC_SAMPLING_RATE as f64;

        for _ in 0..samples {
            let t = self.generated as f64 / fs;
            self.rows[0].push_back(self.generated as f64);
            for ch in 0..SYNTHETIC_EEG_CHANNELS {
                let mut value = self.rng.gen_range(-NOISE_AMPLITUDE..NOISE_AMPLITUDE);
                for (k, (freq, amp)) in COMPONENTS.iter().enumerate() {
                    value += amp * self.gains[ch][k] * (TAU * freq * t + self.phases[ch][k]).sin();
                }
                self.rows[ch + 1].push_back(value);
            }
            self.generated += 1;
        }

        for row in &mut self.rows {
            while row.len() > capacity {
                row.pop_front();
            }
        }
    }

    fn catch_up(&mut self) {
        let Some((started, base)) = self.started else {
            return;
        };
        let due = base + (started.elapsed().as_secs_f64() * SYNTHETIC_SAMPLING_RATE as f64) as u64;
        if due > self.generated {
            self.generate((due - self.generated) as usize);
        }
    }
}

impl Board for SyntheticBoard {
    fn board_id(&self) -> BoardId {
        BoardId::Synthetic
    }

    fn sampling_rate(&self) -> u32 {
        SYNTHETIC_SAMPLING_RATE
    }

    fn eeg_channels(&self) -> &[usize] {
        &self.eeg_rows
    }

    fn prepare_session(&mut self) -> Result<()> {
        if self.state != SessionState::Idle {
            return Err(AcquisitionError::SessionState("session already prepared"));
        }
        self.state = SessionState::Prepared;
        info!(board = ?self.board_id(), "session prepared");
        debug!(params = ?self.params, "ignoring connection parameters");
        Ok(())
    }

    fn start_stream(&mut self) -> Result<()> {
        match self.state {
            SessionState::Prepared => {
                self.state = SessionState::Streaming;
                if self.realtime {
                    self.started = Some((Instant::now(), self.generated));
                }
                info!(rate = SYNTHETIC_SAMPLING_RATE, "stream started");
                Ok(())
            }
            SessionState::Idle => Err(AcquisitionError::SessionState("session not prepared")),
            SessionState::Streaming => Err(AcquisitionError::SessionState("stream already running")),
        }
    }

    fn current_data(&mut self, samples: usize) -> Result<Vec<Vec<f64>>> {
        if self.state == SessionState::Idle {
            return Err(AcquisitionError::SessionState("session not prepared"));
        }
        if self.state == SessionState::Streaming && self.realtime {
            self.catch_up();
        }
        Ok(self
            .rows
            .iter()
            .map(|row| {
                let skip = row.len().saturating_sub(samples);
                row.iter().skip(skip).copied().collect()
            })
            .collect())
    }

    fn stop_stream(&mut self) -> Result<()> {
        if self.state != SessionState::Streaming {
            return Err(AcquisitionError::SessionState("stream is not running"));
        }
        self.state = SessionState::Prepared;
        self.started = None;
        debug!(samples = self.generated, "stream stopped");
        Ok(())
    }

    fn release_session(&mut self) -> Result<()> {
        if self.state == SessionState::Idle {
            return Err(AcquisitionError::SessionState("session not prepared"));
        }
        self.state = SessionState::Idle;
        self.started = None;
        for row in &mut self.rows {
            row.clear();
        }
        info!("session released");
        Ok(())
    }
}
