//! Tracing initialization and span-field conventions for Consorte.

pub mod metrics;
pub mod setup;

pub use setup::init_tracing;
