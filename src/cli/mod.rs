//! Command implementations behind the `algos` binary.

pub mod commands;
