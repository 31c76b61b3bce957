//! Pay-period allocation: pure functions of obligations, configuration and
//! a reference date.

pub mod cadence;
pub mod config;
pub mod date;
pub mod monthly;
pub mod periods;
pub mod plan;
pub mod smoothing;
pub mod types;
