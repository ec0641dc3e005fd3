//! Command-line flags
//!
//! ```text
//! eeg-acquisition [-b|--board-id N] [-e|--eeg-channel-count N] [-p|--serial-port PATH]
//!                 [-w|--window N]
//! ```

use crate::board::{BoardId, InputParams};
use crate::error::{AcquisitionError, Result};
use crate::psd::WindowFunction;
use crate::recorder::DEFAULT_CHANNEL_COUNT;

pub const USAGE: &str = "Usage: eeg-acquisition [-b|--board-id N] \
[-e|--eeg-channel-count N] [-p|--serial-port PATH] [-w|--window N]

  -b, --board-id N            CYTON_BOARD=0, SYNTHETIC_BOARD=-1 (default -1)
  -e, --eeg-channel-count N   number of EEG channels connected (default 8)
  -p, --serial-port PATH      path to the board's serial port
  -w, --window N              PSD window: NONE=0, HANNING=1, HAMMING=2,
                              BLACKMAN_HARRIS=3 (default 3)";

#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub board_id: BoardId,
    pub eeg_channel_count: usize,
    pub params: InputParams,
    pub window: WindowFunction,
    pub help: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            board_id: BoardId::Synthetic,
            eeg_channel_count: DEFAULT_CHANNEL_COUNT,
            params: InputParams::default(),
            window: WindowFunction::default(),
            help: false,
        }
    }
}

impl Args {
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Args::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            // accept --flag=value as well as --flag value
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, v)) if flag.starts_with("--") => (flag.to_string(), Some(v.to_string())),
                _ => (arg.clone(), None),
            };
            let mut value = || match inline.clone() {
                Some(v) => Ok(v),
                None => args
                    .next()
                    .ok_or_else(|| AcquisitionError::Args(format!("{flag} needs a value"))),
            };

            match flag.as_str() {
                "-b" | "--board-id" => {
                    let raw = value()?;
                    let id: i32 = raw.parse().map_err(|_| invalid(&flag, &raw))?;
                    parsed.board_id = BoardId::from_raw(id);
                }
                "-e" | "--eeg-channel-count" => {
                    let raw = value()?;
                    parsed.eeg_channel_count = raw.parse().map_err(|_| invalid(&flag, &raw))?;
                }
                "-p" | "--serial-port" => parsed.params.serial_port = value()?,
                "-w" | "--window" => {
                    let raw = value()?;
                    parsed.window = raw
                        .parse::<i32>()
                        .ok()
                        .and_then(WindowFunction::from_raw)
                        .ok_or_else(|| invalid(&flag, &raw))?;
                }
                "-h" | "--help" => parsed.help = true,
                other => {
                    return Err(AcquisitionError::Args(format!("unknown flag '{other}'")));
                }
            }
        }

        Ok(parsed)
    }
}

fn invalid(flag: &str, value: &str) -> AcquisitionError {
    AcquisitionError::Args(format!("invalid value '{value}' for {flag}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args> {
        Args::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.board_id, BoardId::Synthetic);
        assert_eq!(args.eeg_channel_count, 8);
        assert!(args.params.serial_port.is_empty());
        assert_eq!(args.window, WindowFunction::BlackmanHarris);
    }

    #[test]
    fn test_short_and_long_flags() {
        let args = parse(&["-b", "0", "-e", "4", "-p", "/dev/ttyUSB0"]).unwrap();
        assert_eq!(args.board_id, BoardId::Cyton);
        assert_eq!(args.eeg_channel_count, 4);
        assert_eq!(args.params.serial_port, "/dev/ttyUSB0");

        let args = parse(&["--board-id=-1", "--eeg-channel-count", "16"]).unwrap();
        assert_eq!(args.board_id, BoardId::Synthetic);
        assert_eq!(args.eeg_channel_count, 16);
    }

    #[test]
    fn test_window_flag() {
        assert_eq!(parse(&["-w", "1"]).unwrap().window, WindowFunction::Hanning);
        assert_eq!(parse(&["--window=0"]).unwrap().window, WindowFunction::None);
        assert!(matches!(parse(&["-w", "4"]), Err(AcquisitionError::Args(_))));
        assert!(matches!(parse(&["-w", "hann"]), Err(AcquisitionError::Args(_))));
    }

    #[test]
    fn test_negative_board_id_as_separate_value() {
        assert_eq!(parse(&["-b", "-1"]).unwrap().board_id, BoardId::Synthetic);
    }

    #[test]
    fn test_bad_arguments() {
        assert!(matches!(parse(&["-x"]), Err(AcquisitionError::Args(_))));
        assert!(matches!(parse(&["-e"]), Err(AcquisitionError::Args(_))));
        assert!(matches!(parse(&["-e", "many"]), Err(AcquisitionError::Args(_))));
        assert!(matches!(parse(&["-e", "-3"]), Err(AcquisitionError::Args(_))));
    }
}
