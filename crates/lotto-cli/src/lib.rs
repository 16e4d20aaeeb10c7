//! Lotto CLI: configuration and session wiring for the `lotto` binary
pub mod config;
pub mod session;

pub use config::{LottoConfig, ENV_HISTORY_CAPACITY, ENV_MAX_ATTEMPTS, MAX_HISTORY_CAPACITY};
pub use session::{Session, SessionState};
