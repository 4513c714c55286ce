/**
 * Password Hashing
 *
 * bcrypt hashing and verification for member credentials. The output is a
 * self-describing modular-crypt string (algorithm, cost, salt, digest), so
 * the cost can be raised later without invalidating stored hashes.
 *
 * # Blocking
 *
 * bcrypt at cost 10 takes tens of milliseconds of pure CPU. Both
 * operations run on the blocking pool via `spawn_blocking`; hashing inline
 * on a runtime worker would let a burst of logins starve unrelated
 * requests.
 */

use crate::error::AuthError;

/// bcrypt work factor for newly stored hashes.
pub const HASH_COST: u32 = 10;

/// Hash a plaintext password with a fresh random salt.
pub async fn hash(password: &str) -> Result<String, AuthError> {
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || bcrypt::hash(password, HASH_COST))
        .await
        .map_err(|err| AuthError::Internal(format!("hash task failed: {err}")))?
        .map_err(|err| AuthError::Internal(format!("bcrypt hash failed: {err}")))
}

/// Verify a plaintext password against a stored hash.
///
/// A malformed stored hash counts as a mismatch rather than an error, so
/// a corrupt row can never authenticate anyone and never takes down the
/// login path.
pub async fn verify(password: &str, stored_hash: &str) -> Result<bool, AuthError> {
    let password = password.to_owned();
    let stored_hash = stored_hash.to_owned();
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &stored_hash).unwrap_or(false))
        .await
        .map_err(|err| AuthError::Internal(format!("verify task failed: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_round_trip() {
        let hashed = hash("Passw0rd!").await.unwrap();
        assert!(verify("Passw0rd!", &hashed).await.unwrap());
        assert!(!verify("wrong-password", &hashed).await.unwrap());
    }

    #[tokio::test]
    async fn test_hash_is_salted() {
        let first = hash("same-input").await.unwrap();
        let second = hash("same-input").await.unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_hash_encodes_cost() {
        let hashed = hash("Passw0rd!").await.unwrap();
        assert!(hashed.starts_with("$2"));
        assert!(hashed.contains("$10$"));
    }

    #[tokio::test]
    async fn test_malformed_hash_is_mismatch() {
        assert!(!verify("anything", "not-a-bcrypt-hash").await.unwrap());
        assert!(!verify("anything", "").await.unwrap());
    }
}
