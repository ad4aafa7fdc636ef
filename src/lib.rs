#![deny(clippy::print_stdout)]

pub mod analysis;
pub mod command_line;
pub mod config;
pub mod pubchem;
pub mod report;
