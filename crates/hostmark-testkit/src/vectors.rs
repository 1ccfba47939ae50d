//! Golden test vectors for deterministic verification.
//!
//! These vectors pin the full pipeline: canonical message, SHA-256 digest,
//! and URL-safe token. Every implementation must reproduce them bit-for-bit.
//! The digest vectors for the empty message, `"abc"`, and the 56-byte
//! message are the standard NIST values.

use serde::Serialize;

use hostmark_core::Digest;

/// A golden test vector.
#[derive(Debug, Clone, Serialize)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// What the vector exercises.
    pub description: &'static str,
    /// Canonical message bytes (all vectors are ASCII).
    pub message: &'static str,
    /// Expected SHA-256 digest (hex).
    pub expected_digest: &'static str,
    /// Expected URL-safe token.
    pub expected_token: &'static str,
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "empty_message",
            description: "No components present: digest of the empty byte string",
            message: "",
            expected_digest: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
            expected_token: "47DEQpj8HBSa-_TImW-5JCeuQeRkm5NMpJWZG3hSuFU",
        },
        GoldenVector {
            name: "nist_abc",
            description: "FIPS 180-4 single-block vector",
            message: "abc",
            expected_digest: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
            expected_token: "ungWv48Bz-pBQUDeXa4iI7ADYaOWF3qctBD_YfIAFa0",
        },
        GoldenVector {
            name: "nist_two_block",
            description: "FIPS 180-4 56-byte vector forcing the extra padding block",
            message: "abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
            expected_digest: "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
            expected_token: "JI1qYdIGOLjlwCaTDD5gOaM85Flk_yFn9uzt1BnbBsE",
        },
        GoldenVector {
            name: "machine_id_only",
            description: "Machine identifier present, no salt",
            message: "mid:abc123",
            expected_digest: "cb7cd1964713beab3b88d8c1217cfbfc59e144eb10311138186fea7ece57c74c",
            expected_token: "y3zRlkcTvqs7iNjBIXz7_FnhROsQMRE4GG_qfs5Xx0w",
        },
        GoldenVector {
            name: "salt_only",
            description: "Salt present, machine identifier absent",
            message: "salt:x",
            expected_digest: "4b6eeb15cbd08747bbe61211312ba1a33f0aa5ecaf244d479f96cc5042a842a5",
            expected_token: "S27rFcvQh0e75hIRMSuhoz8KpeyvJE1Hn5bMUEKoQqU",
        },
        GoldenVector {
            name: "machine_id_and_salt",
            description: "Both components present",
            message: "mid:abc123|salt:x",
            expected_digest: "0382ab8ef2fb6ae7590986e6754efae07f7ff7669fe584360a129f093f2d4028",
            expected_token: "A4KrjvL7audZCYbmdU764H9_92af5YQ2ChKfCT8tQCg",
        },
        GoldenVector {
            name: "realistic_identity",
            description: "32-hex-digit machine id with a tenant salt",
            message: "mid:0123456789abcdef0123456789abcdef|salt:tenant-7",
            expected_digest: "d6124ebad16bbd4f9a22b9f36d3de20139ebfa31e65584e2b42b3ba9066dd632",
            expected_token: "1hJOutFrvU-aIrnzbT3iATnr-jHmVYTitCs7qQZt1jI",
        },
    ]
}

/// Verify all golden vectors against the engine.
///
/// Returns `(name, matches, computed_digest_hex)` per vector; call this to
/// verify an implementation matches the reference values.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let digest = Digest::hash(v.message.as_bytes());
            let matches =
                digest.to_hex() == v.expected_digest && digest.to_token() == v.expected_token;
            (v.name.to_string(), matches, digest.to_hex())
        })
        .collect()
}

/// Render all vectors as pretty JSON for export to other implementations.
pub fn vectors_json() -> String {
    #[derive(Serialize)]
    struct VectorFile {
        version: &'static str,
        description: &'static str,
        vectors: Vec<GoldenVector>,
    }

    let file = VectorFile {
        version: "0.1.0",
        description: "Golden vectors for Hostmark tokens. \
                      Every implementation must produce identical outputs.",
        vectors: all_vectors(),
    };
    serde_json::to_string_pretty(&file).expect("vectors serialize")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_vectors_match() {
        for (name, matches, computed) in verify_all_vectors() {
            assert!(matches, "vector '{}' mismatch, computed {}", name, computed);
        }
    }

    #[test]
    fn test_tokens_are_43_chars() {
        // Every 32-byte digest encodes to ceil(32*8/6) = 43 symbols.
        for vector in all_vectors() {
            assert_eq!(vector.expected_token.len(), 43, "vector '{}'", vector.name);
        }
    }

    #[test]
    fn test_vectors_json_is_valid() {
        let json = vectors_json();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value["vectors"].as_array().unwrap().len(),
            all_vectors().len()
        );
    }

    #[test]
    fn test_vector_names_are_unique() {
        let vectors = all_vectors();
        let mut names: Vec<_> = vectors.iter().map(|v| v.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), vectors.len());
    }
}
