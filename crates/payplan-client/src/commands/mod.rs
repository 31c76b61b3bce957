pub mod cadence;
pub mod common;
pub mod export;
pub mod months;
pub mod periods;
