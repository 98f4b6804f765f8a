//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize, env overrides)
//!     → validation.rs (semantic checks)
//!     → BridgeConfig (validated, immutable)
//!     → consumed once by the binary to build the bridge
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::BridgeConfig;
pub use schema::ChainConfig;
pub use schema::ContractConfig;
pub use schema::ExplorerConfig;
pub use schema::WalletConfig;
