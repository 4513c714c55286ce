/**
 * Session Tokens
 *
 * Opaque session token generation and expiry computation. A token is 32
 * bytes from the OS CSPRNG, hex-encoded to 64 characters. It carries no
 * claims and is never parsed; its only property is unguessability, and at
 * 256 bits of entropy collisions are not a practical concern.
 */

use chrono::{DateTime, Duration, Utc};

/// Default session lifetime.
pub const SESSION_TTL_DAYS: i64 = 7;

const TOKEN_BYTES: usize = 32;

/// Generate a fresh session token: 64 hex characters of CSPRNG output.
pub fn generate() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; TOKEN_BYTES] = rand::Rng::random(&mut rng);
    hex::encode(bytes)
}

/// Absolute UTC expiry `days` from now.
pub fn expiry_from(days: i64) -> DateTime<Utc> {
    Utc::now() + Duration::days(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_shape() {
        let token = generate();
        assert_eq!(token.len(), TOKEN_BYTES * 2);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_tokens_are_unique() {
        let tokens: std::collections::HashSet<String> = (0..64).map(|_| generate()).collect();
        assert_eq!(tokens.len(), 64);
    }

    #[test]
    fn test_expiry_is_in_the_future() {
        let expiry = expiry_from(SESSION_TTL_DAYS);
        let lower = Utc::now() + Duration::days(SESSION_TTL_DAYS) - Duration::minutes(1);
        let upper = Utc::now() + Duration::days(SESSION_TTL_DAYS) + Duration::minutes(1);
        assert!(expiry > lower && expiry < upper);
    }
}
