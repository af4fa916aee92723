//! # pisweep-cli
//!
//! Interactive input, per-trial report rendering, JSON export, and shell
//! completion.

pub mod completion;
pub mod input;
pub mod output;
pub mod presenter;

pub use input::{parse_intervals, prompt_intervals};
pub use presenter::CLIResultPresenter;
