//! Prints averaged EEG band power once per second until interrupted

use std::process::ExitCode;

use eeg_acquisition::cli::{Args, USAGE};
use eeg_acquisition::{open_board, AcquisitionError, Recorder, RecorderConfig};
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(AcquisitionError::Args(msg)) => {
            eprintln!("{msg}\n{USAGE}");
            ExitCode::from(2)
        }
        Err(AcquisitionError::Interrupted) => {
            warn!("interrupted");
            ExitCode::from(130)
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AcquisitionError> {
    let args = Args::parse(std::env::args().skip(1))?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let board = open_board(args.board_id, args.params)?;
    let config = RecorderConfig {
        channel_count: args.eeg_channel_count,
        window: args.window,
        ..RecorderConfig::default()
    };
    let mut recorder = Recorder::new(board, config)?;

    let mut stdout = std::io::stdout();
    recorder.run(&mut stdout, ctrl_c()).await
}

async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("cannot listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
