//! Login token minting and the shape check applied to `authorization` headers.
//!
//! Tokens are opaque: nothing is stored server-side, so the only thing the
//! API can check later is the length of whatever the client sends back.

use rand::RngCore;

/// Generate a lowercase hex token of exactly `length` characters.
///
/// Draws `ceil(length / 2)` bytes from the thread-local CSPRNG and trims the
/// hex encoding to `length`.
pub fn generate_token(length: usize) -> String {
    let mut bytes = vec![0u8; length.div_ceil(2)];
    rand::rng().fill_bytes(&mut bytes);

    let mut token: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
    token.truncate(length);
    token
}

/// Length-only check; any value of the right length is accepted.
pub fn is_well_formed(value: &str, length: usize) -> bool {
    value.chars().count() == length
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_token_length_and_alphabet() {
        for length in [1, 15, 16, 17, 32] {
            let token = generate_token(length);
            assert_eq!(token.len(), length);
            assert!(token.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_generate_token_zero_length() {
        assert_eq!(generate_token(0), "");
    }

    #[test]
    fn test_tokens_differ() {
        assert_ne!(generate_token(16), generate_token(16));
    }

    #[test]
    fn test_is_well_formed() {
        assert!(is_well_formed("aaaaaaaaaaaaaaaa", 16));
        assert!(is_well_formed("not a real tok!!", 16));
        assert!(!is_well_formed("aaaaaaaaaaaaaaa", 16));
        assert!(!is_well_formed("aaaaaaaaaaaaaaaaa", 16));
        assert!(!is_well_formed("", 16));
    }
}
