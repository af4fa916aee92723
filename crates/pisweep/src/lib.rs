//! pisweep library: application logic for the parallel π integration sweep.

pub mod app;
pub mod config;
pub mod errors;
