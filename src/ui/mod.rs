//! UI utilities for terminal output
//!
//! This module provides user interface components like progress spinners
//! and interactive prompts.

mod prompt;
mod spinner;

pub use prompt::{BatchPrompter, InteractivePrompter, Prompter};
pub use spinner::{create_spinner, finish_spinner};
