//! Command-line flags
//!
//! ```text
//! eeg-pong [--ai | --opponent human|ai] [--mute] [--minimal]
//!          [--serve alternate|random] [--seed N] [--assets DIR]
//! ```

use std::path::PathBuf;

use game_core::{Config, Opponent, ServeMode};

use crate::error::ClientError;

pub const USAGE: &str = "Usage: eeg-pong [--ai | --opponent human|ai] [--mute] [--minimal] \
[--serve alternate|random] [--seed N] [--assets DIR]";

/// Everything the client needs to start a game
#[derive(Debug, Clone)]
pub struct Options {
    pub config: Config,
    pub assets: PathBuf,
    pub help: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            config: Config::default(),
            assets: PathBuf::from("resources"),
            help: false,
        }
    }
}

impl Options {
    pub fn parse<I>(args: I) -> Result<Self, ClientError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = Options::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--ai" => options.config.opponent = Opponent::SimpleChaseAi,
                "--mute" => options.config.audio = false,
                "--minimal" => {
                    options.config.minimal = true;
                    options.config.audio = false;
                }
                "--opponent" => {
                    options.config.opponent = match value(&mut args, &arg)?.as_str() {
                        "human" => Opponent::Human,
                        "ai" => Opponent::SimpleChaseAi,
                        other => return Err(invalid(&arg, other)),
                    }
                }
                "--serve" => {
                    options.config.serve_mode = match value(&mut args, &arg)?.as_str() {
                        "alternate" => ServeMode::Alternate,
                        "random" => ServeMode::Random,
                        other => return Err(invalid(&arg, other)),
                    }
                }
                "--seed" => {
                    let raw = value(&mut args, &arg)?;
                    options.config.seed = raw.parse().map_err(|_| invalid(&arg, &raw))?;
                }
                "--assets" => options.assets = PathBuf::from(value(&mut args, &arg)?),
                "-h" | "--help" => options.help = true,
                other => return Err(ClientError::Args(format!("unknown flag '{other}'"))),
            }
        }

        Ok(options)
    }
}

fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, ClientError> {
    args.next()
        .ok_or_else(|| ClientError::Args(format!("{flag} needs a value")))
}

fn invalid(flag: &str, value: &str) -> ClientError {
    ClientError::Args(format!("invalid value '{value}' for {flag}"))
}
