pub use crate::errors::{HarnessError, Result};

pub mod classify;
pub mod cli;
pub mod command;
pub mod config;
pub mod errors;
pub mod logs;
pub mod progress;
pub mod runner;
pub mod selector;
pub mod walker;
