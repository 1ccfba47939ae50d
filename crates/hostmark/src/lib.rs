//! # Hostmark
//!
//! Stable, low-entropy host fingerprints.
//!
//! ## Overview
//!
//! Hostmark derives a short, URL-safe token that identifies a host without
//! exposing hardware identifiers:
//!
//! 1. Read `/etc/machine-id` (best effort) and an optional caller salt.
//! 2. Compose the canonical message (`mid:<id>|salt:<salt>`, present parts
//!    only).
//! 3. Digest it with the built-in SHA-256 engine.
//! 4. Encode the digest as base64url without padding (43 characters).
//!
//! The salt scopes tokens per product or tenant, so the same host yields
//! unrelated tokens for unrelated consumers.
//!
//! ## Usage
//!
//! ```rust
//! use hostmark::{fingerprint, FingerprintConfig};
//!
//! let config = FingerprintConfig::default().with_salt("my-product-id");
//! let token = fingerprint(&config);
//! assert_eq!(token.len(), 43);
//! ```
//!
//! ## Re-exports
//!
//! The pure computation lives in [`hostmark_core`], re-exported as
//! [`core`](crate::core) for direct use.

pub mod config;
pub mod fingerprint;
pub mod source;

// Re-export the core crate
pub use hostmark_core as core;

// Re-export main types for convenience
pub use config::FingerprintConfig;
pub use fingerprint::{fingerprint, fingerprint_message};
pub use source::{read_machine_id, try_read_machine_id, SourceError, DEFAULT_MACHINE_ID_PATH};

// Re-export commonly used core types
pub use hostmark_core::{Digest, IdentityComposer, Sha256};
