//! The end-to-end fingerprint pipeline.
//!
//! Read the identifier source (best effort), compose the canonical message,
//! digest it, and encode the digest as a URL-safe token. The operation is
//! total: every failure upstream of the core degrades to an absent component.

use hostmark_core::{Digest, IdentityComposer};

use crate::config::FingerprintConfig;
use crate::source;

/// Generate the fingerprint token for this host.
///
/// A missing or unreadable identifier source contributes no component; with
/// no salt configured either, the result is the token of the empty message.
pub fn fingerprint(config: &FingerprintConfig) -> String {
    let mut composer = IdentityComposer::new();

    if let Some(machine_id) = source::try_read_machine_id(&config.machine_id_path) {
        composer = composer.machine_id(machine_id);
    }
    if let Some(salt) = &config.salt {
        composer = composer.salt(salt.clone());
    }

    let message = composer.compose();
    tracing::debug!(message_len = message.len(), "composed canonical identity");

    fingerprint_message(message.as_bytes())
}

/// Digest and encode an already-composed canonical message.
pub fn fingerprint_message(message: &[u8]) -> String {
    Digest::hash(message).to_token()
}
