use anyhow::Context as _;
use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};
use tokio::task;

use crate::domain::repository::PasswordDigestPort;
use crate::error::StaffsServiceError;

/// Argon2id cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashingParams {
    /// Memory cost in KiB.
    pub memory_kib: u32,
    /// Time cost (passes over memory).
    pub iterations: u32,
    /// Degree of parallelism (lanes).
    pub parallelism: u32,
}

impl Default for HashingParams {
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

/// Salted Argon2id digests in PHC string format.
#[derive(Clone)]
pub struct Argon2Digest {
    params: Params,
}

impl Argon2Digest {
    pub fn new(params: HashingParams) -> anyhow::Result<Self> {
        let params = Params::new(
            params.memory_kib,
            params.iterations,
            params.parallelism,
            None,
        )
        .map_err(|e| anyhow::anyhow!("invalid Argon2 params: {e}"))?;
        Ok(Self { params })
    }
}

fn hash_password(password: &str, params: Params) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("failed to hash password: {e}"))?;
    Ok(hash.to_string())
}

impl PasswordDigestPort for Argon2Digest {
    /// Hashing is CPU-bound, so it runs on the blocking pool.
    async fn digest(&self, password: &str) -> Result<String, StaffsServiceError> {
        let password = password.to_owned();
        let params = self.params.clone();
        let digest = task::spawn_blocking(move || hash_password(&password, params))
            .await
            .context("password hashing task panicked")??;
        Ok(digest)
    }
}
