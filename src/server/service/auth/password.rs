//! Argon2id password hashing.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::{auth::AuthError, Error};

/// Hashes a password into a PHC string suitable for storage.
///
/// Hashing is CPU bound, so it runs on the blocking thread pool.
pub async fn hash_password(password: &str) -> Result<String, Error> {
    let password = password.to_string();

    tokio::task::spawn_blocking(move || -> Result<String, Error> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AuthError::PasswordHash(e.to_string()).into())
    })
    .await
    .map_err(|e| Error::InternalError(format!("Password hashing task failed: {}", e)))?
}

/// Checks a password against a stored PHC hash.
///
/// A mismatch is `Ok(false)`, an unparseable hash is an error.
pub async fn verify_password(password: &str, password_hash: &str) -> Result<bool, Error> {
    let password = password.to_string();
    let password_hash = password_hash.to_string();

    tokio::task::spawn_blocking(move || -> Result<bool, Error> {
        let parsed_hash = PasswordHash::new(&password_hash)
            .map_err(|e| AuthError::PasswordHash(format!("Invalid password hash: {}", e)))?;

        match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AuthError::PasswordHash(e.to_string()).into()),
        }
    })
    .await
    .map_err(|e| Error::InternalError(format!("Password verification task failed: {}", e)))?
}
