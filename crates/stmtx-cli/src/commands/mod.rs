//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod platforms;
pub mod process;
pub mod sample;
pub mod serve;
