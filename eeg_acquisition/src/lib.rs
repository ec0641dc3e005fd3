pub mod bands;
pub mod board;
pub mod cli;
pub mod error;
pub mod psd;
pub mod recorder;
pub mod threshold;

pub use bands::*;
pub use board::*;
pub use error::*;
pub use psd::*;
pub use recorder::*;
pub use threshold::*;
