//! Command handlers.  `main` picks one per invocation.

pub mod completions;
pub mod config;
pub mod scaffold;
