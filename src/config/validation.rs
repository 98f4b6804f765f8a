//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Addresses parse as 20-byte hex, URLs parse, timeouts and batch limit > 0
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: BridgeConfig → Result<(), Vec<ValidationError>>

use alloy::primitives::Address;

use crate::config::schema::BridgeConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a deserialized configuration.
pub fn validate_config(config: &BridgeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_address(&mut errors, "contract.address", &config.contract.address);
    check_address(
        &mut errors,
        "contract.batch_recipient",
        &config.contract.batch_recipient,
    );

    if config.contract.max_batch_size == 0 {
        errors.push(ValidationError::new("contract.max_batch_size", "must be greater than 0"));
    }

    check_url(&mut errors, "chain.rpc_url", &config.chain.rpc_url);
    for (i, url) in config.chain.failover_urls.iter().enumerate() {
        check_url(&mut errors, &format!("chain.failover_urls[{}]", i), url);
    }
    if config.chain.rpc_timeout_secs == 0 {
        errors.push(ValidationError::new("chain.rpc_timeout_secs", "must be greater than 0"));
    }

    if config.wallet.enabled {
        check_url(&mut errors, "wallet.rpc_url", &config.wallet.rpc_url);
        if config.wallet.rpc_timeout_secs == 0 {
            errors.push(ValidationError::new("wallet.rpc_timeout_secs", "must be greater than 0"));
        }
        if let Some(selected) = &config.wallet.selected_address {
            check_address(&mut errors, "wallet.selected_address", selected);
        }
    }

    check_url(&mut errors, "explorer.tx_url", &config.explorer.tx_url);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_address(errors: &mut Vec<ValidationError>, field: &str, value: &str) {
    if let Err(e) = value.trim().parse::<Address>() {
        errors.push(ValidationError::new(field, format!("invalid address '{}': {}", value, e)));
    }
}

fn check_url(errors: &mut Vec<ValidationError>, field: &str, value: &str) {
    if let Err(e) = url::Url::parse(value) {
        errors.push(ValidationError::new(field, format!("invalid URL '{}': {}", value, e)));
    }
}
