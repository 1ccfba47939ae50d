//! # Hostmark Core
//!
//! Pure primitives for Hostmark: identity composition, the SHA-256 digest
//! engine, and URL-safe token encoding.
//!
//! This crate contains no I/O. It is pure computation over byte strings,
//! composed linearly:
//!
//! ```text
//! IdentityComposer -> Sha256 -> base64url -> token
//! ```
//!
//! ## Key Types
//!
//! - [`IdentityComposer`] - Deterministic canonical message builder
//! - [`Sha256`] - Streaming digest engine (from scratch, FIPS 180-4)
//! - [`Digest`] - The fixed 32-byte digest
//!
//! ## Determinism
//!
//! Every operation here is total and deterministic: identical inputs yield
//! identical tokens, regardless of how the input is chunked. The canonical
//! message format and the token encoding are frozen.

pub mod base64url;
pub mod compose;
pub mod sha256;

pub use compose::IdentityComposer;
pub use sha256::{Digest, Sha256};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_hash_encode_pipeline() {
        let message = IdentityComposer::new()
            .machine_id("abc123")
            .salt("x")
            .compose();
        let token = Digest::hash(message.as_bytes()).to_token();
        assert_eq!(token, "A4KrjvL7audZCYbmdU764H9_92af5YQ2ChKfCT8tQCg");
    }

    #[test]
    fn test_empty_identity_token() {
        // No components: digest of the empty message, 43-character token.
        let message = IdentityComposer::new().compose();
        let token = Digest::hash(message.as_bytes()).to_token();
        assert_eq!(token, "47DEQpj8HBSa-_TImW-5JCeuQeRkm5NMpJWZG3hSuFU");
        assert_eq!(token.len(), 43);
    }
}
