//! Orchestration for the outage normalization pipeline.

pub mod config;
pub mod logging;
pub mod pipeline;
