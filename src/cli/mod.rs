mod args;
mod commands;
mod config_cmd;
mod form;
mod plan;
mod setup;
mod util;

pub use args::Cli;
