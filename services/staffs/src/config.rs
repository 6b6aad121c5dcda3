use backoffice_core::config::{parse_or, process_env, required};

use crate::infra::password::HashingParams;

/// HTTP server configuration loaded from environment variables.
#[derive(Debug)]
pub struct StaffsConfig {
    /// Database connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3000). Env var: `STAFFS_PORT`.
    pub staffs_port: u16,
}

impl StaffsConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(process_env)
    }

    /// Build from any variable source, such as a fixed map in tests.
    pub fn from_lookup<F>(var: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> anyhow::Result<Option<String>>,
    {
        Ok(Self {
            database_url: required("DATABASE_URL", var("DATABASE_URL")?)?,
            staffs_port: parse_or("STAFFS_PORT", var("STAFFS_PORT")?, 3000)?,
        })
    }
}

/// Configuration for the `seed` command, the only binary that hashes
/// passwords.
#[derive(Debug)]
pub struct SeedConfig {
    /// Database connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// Argon2 cost settings. Env vars: `PASSWORD_HASH_MEMORY_KIB`,
    /// `PASSWORD_HASH_ITERATIONS`, `PASSWORD_HASH_PARALLELISM`.
    pub hashing: HashingParams,
}

impl SeedConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(process_env)
    }

    pub fn from_lookup<F>(var: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> anyhow::Result<Option<String>>,
    {
        let defaults = HashingParams::default();
        Ok(Self {
            database_url: required("DATABASE_URL", var("DATABASE_URL")?)?,
            hashing: HashingParams {
                memory_kib: parse_or(
                    "PASSWORD_HASH_MEMORY_KIB",
                    var("PASSWORD_HASH_MEMORY_KIB")?,
                    defaults.memory_kib,
                )?,
                iterations: parse_or(
                    "PASSWORD_HASH_ITERATIONS",
                    var("PASSWORD_HASH_ITERATIONS")?,
                    defaults.iterations,
                )?,
                parallelism: parse_or(
                    "PASSWORD_HASH_PARALLELISM",
                    var("PASSWORD_HASH_PARALLELISM")?,
                    defaults.parallelism,
                )?,
            },
        })
    }
}
