//! URL-safe base64 encoding without padding (RFC 4648 §5).
//!
//! Every output character is safe to embed in a URL path or query without
//! escaping. No `=` padding is appended: the output length is exactly
//! `ceil(n * 8 / 6)` characters for `n` input bytes.

/// The 64-symbol URL-safe alphabet: `-` and `_` replace `+` and `/`.
const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Encode bytes as URL-safe base64 with no padding.
pub fn encode(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len().div_ceil(3) * 4);

    let mut chunks = data.chunks_exact(3);
    for chunk in &mut chunks {
        let n = (u32::from(chunk[0]) << 16) | (u32::from(chunk[1]) << 8) | u32::from(chunk[2]);
        out.push(ALPHABET[(n >> 18) as usize & 63] as char);
        out.push(ALPHABET[(n >> 12) as usize & 63] as char);
        out.push(ALPHABET[(n >> 6) as usize & 63] as char);
        out.push(ALPHABET[n as usize & 63] as char);
    }

    // One trailing byte yields two symbols, two bytes yield three. The last
    // symbol's low bits are zero-filled; no pad characters are emitted.
    match chunks.remainder() {
        &[b0] => {
            let n = u32::from(b0) << 16;
            out.push(ALPHABET[(n >> 18) as usize & 63] as char);
            out.push(ALPHABET[(n >> 12) as usize & 63] as char);
        }
        &[b0, b1] => {
            let n = (u32::from(b0) << 16) | (u32::from(b1) << 8);
            out.push(ALPHABET[(n >> 18) as usize & 63] as char);
            out.push(ALPHABET[(n >> 12) as usize & 63] as char);
            out.push(ALPHABET[(n >> 6) as usize & 63] as char);
        }
        _ => {}
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc4648_vectors() {
        // RFC 4648 §10 test vectors, pad characters stripped.
        assert_eq!(encode(b""), "");
        assert_eq!(encode(b"f"), "Zg");
        assert_eq!(encode(b"fo"), "Zm8");
        assert_eq!(encode(b"foo"), "Zm9v");
        assert_eq!(encode(b"foob"), "Zm9vYg");
        assert_eq!(encode(b"fooba"), "Zm9vYmE");
        assert_eq!(encode(b"foobar"), "Zm9vYmFy");
    }

    #[test]
    fn test_url_safe_symbols() {
        // High sextets hit the two symbols that differ from standard base64.
        assert_eq!(encode(&[0xfb]), "-w");
        assert_eq!(encode(&[0xff, 0xef]), "_-8");
        assert_eq!(encode(&[0xfb, 0xff, 0xbf]), "-_-_");
    }

    #[test]
    fn test_no_padding_lengths() {
        // ceil(n * 8 / 6) for n = 1, 2, 3, 32.
        assert_eq!(encode(&[0u8; 1]).len(), 2);
        assert_eq!(encode(&[0u8; 2]).len(), 3);
        assert_eq!(encode(&[0u8; 3]).len(), 4);
        assert_eq!(encode(&[0u8; 32]).len(), 43);

        for n in 0..64usize {
            let expected = (n * 8).div_ceil(6);
            assert_eq!(encode(&vec![0xabu8; n]).len(), expected, "length {}", n);
        }
    }

    #[test]
    fn test_never_emits_pad_or_unsafe_characters() {
        for n in 0..48usize {
            let encoded = encode(&vec![0xffu8; n]);
            assert!(encoded
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        }
    }
}
