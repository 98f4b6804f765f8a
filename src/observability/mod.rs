//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! bridge, wallet and chain code emit tracing events
//!     → logging.rs (subscriber with env filter)
//!     → stderr
//! ```
//!
//! # Design Decisions
//! - Structured fields (method, gas, tx_hash) rather than formatted strings
//! - `RUST_LOG` wins over the configured level

pub mod logging;

pub use logging::init_logging;
