//! # Hostmark Testkit
//!
//! Testing utilities for Hostmark.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: known message/digest/token triples for
//!   cross-implementation verification
//! - **Generators**: proptest strategies for property-based testing
//! - **Fixtures**: helpers for setting up identifier-source files on disk
//!
//! ## Golden Vectors
//!
//! ```rust
//! use hostmark::fingerprint_message;
//! use hostmark_testkit::vectors::all_vectors;
//!
//! for vector in all_vectors() {
//!     assert_eq!(
//!         fingerprint_message(vector.message.as_bytes()),
//!         vector.expected_token,
//!     );
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use hostmark_testkit::generators::{compose_from_params, IdentityParams};
//!
//! proptest! {
//!     #[test]
//!     fn composition_is_deterministic(params: IdentityParams) {
//!         prop_assert_eq!(compose_from_params(&params), compose_from_params(&params));
//!     }
//! }
//! ```
//!
//! ## Fixtures
//!
//! ```rust
//! use hostmark::fingerprint;
//! use hostmark_testkit::fixtures::MachineIdFixture;
//!
//! let fixture = MachineIdFixture::new("abc123");
//! let token = fingerprint(&fixture.config());
//! assert_eq!(token.len(), 43);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::MachineIdFixture;
pub use generators::{compose_from_params, component_value, IdentityParams};
pub use vectors::{all_vectors, vectors_json, verify_all_vectors, GoldenVector};
