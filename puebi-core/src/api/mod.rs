//! Sanitizer API
//!
//! [`Sanitizer`] runs the full normalization pipeline under a [`Config`];
//! [`Output`] carries the result together with per-pass counters.

mod config;
mod output;
mod processor;

#[cfg(test)]
mod tests;

pub use config::{Config, ConfigBuilder, Pass};
pub use output::{Output, SanitizeStats};
pub use processor::Sanitizer;
