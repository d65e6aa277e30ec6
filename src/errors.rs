//! Error Types
//!
//! This module defines the error types used throughout the simulation.
//!
//! # Overview
//!
//! The main error type [`LanderError`] covers the failure modes that can
//! surface outside the per-frame core:
//! - Settings and manifest I/O
//! - JSON decoding
//! - Missing mesh assets
//! - Settings that violate the pacing or projection preconditions
//!
//! The animation and picking core itself never fails: unknown commands are
//! no-ops and an empty scene simply yields no hit.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lander::errors::{LanderError, Result};
//!
//! fn load() -> Result<()> {
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for the lander simulation.
#[derive(Error, Debug)]
pub enum LanderError {
    // ========================================================================
    // Asset Loading Errors
    // ========================================================================
    /// The requested mesh asset was not found in the mesh source.
    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// A settings value is outside its valid range.
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    // ========================================================================
    // I/O & Format Errors
    // ========================================================================
    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parse error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Alias for `Result<T, LanderError>`.
pub type Result<T> = std::result::Result<T, LanderError>;
