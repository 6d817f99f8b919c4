//! CLI module for paytrace - command-line interface and subcommands.

pub mod commands;

pub use commands::Cli;
