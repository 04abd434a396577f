//! Library components of the `dqcopilot` command-line tool.

pub mod logging;
pub mod pipeline;
