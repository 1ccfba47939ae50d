//! Canonical identity composition.
//!
//! The canonical message is the deterministic byte string fed into the digest
//! engine: present components rendered as `tag:value` and joined with `|`,
//! in a fixed tag order.
//!
//! **CRITICAL**: This format is FROZEN. Reordering tags, changing the
//! separator, or escaping values would re-key every deployed token.

use std::fmt;

/// Tag for the machine identifier component. Always first.
pub const MACHINE_ID_TAG: &str = "mid";

/// Tag for the partition salt component. Always second.
pub const SALT_TAG: &str = "salt";

/// Separator between rendered components.
pub const SEPARATOR: char = '|';

/// Builder for the canonical identity message.
///
/// Components are optional; absent or empty values are silently omitted.
/// Composition is total and deterministic: identical present components
/// always yield byte-identical messages.
///
/// # Limitation
///
/// Values are *not* escaped. A value containing `|` or `:` can compose to
/// the same message as a different set of components (e.g. a machine id of
/// `"a|salt:x"` is indistinguishable from machine id `"a"` with salt `"x"`).
/// Callers must supply values free of separator characters. This matches the
/// deployed format exactly and is deliberate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityComposer {
    machine_id: Option<String>,
    salt: Option<String>,
}

impl IdentityComposer {
    /// Create a composer with no components.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the machine identifier component.
    pub fn machine_id(mut self, value: impl Into<String>) -> Self {
        self.machine_id = Some(value.into());
        self
    }

    /// Set the partition salt component.
    pub fn salt(mut self, value: impl Into<String>) -> Self {
        self.salt = Some(value.into());
        self
    }

    /// Render the canonical message.
    ///
    /// Visits tags in their fixed order (`mid`, then `salt`), renders each
    /// present non-empty value as `tag:value`, and joins with [`SEPARATOR`].
    /// Returns the empty string when no components are present.
    pub fn compose(&self) -> String {
        let mut message = String::new();
        for (tag, value) in [
            (MACHINE_ID_TAG, &self.machine_id),
            (SALT_TAG, &self.salt),
        ] {
            if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
                if !message.is_empty() {
                    message.push(SEPARATOR);
                }
                message.push_str(tag);
                message.push(':');
                message.push_str(v);
            }
        }
        message
    }
}

impl fmt::Display for IdentityComposer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.compose())
    }
}
