pub mod commands;
pub mod contracts;
pub mod error;
pub mod import;
pub mod schedule;
pub mod settings;

pub use contracts::envelope::{FailureEnvelope, SuccessEnvelope};
pub use error::{ClientError, ClientResult};

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");
