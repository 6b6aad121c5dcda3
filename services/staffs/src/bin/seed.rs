use anyhow::Context as _;
use clap::Parser;
use sea_orm::Database;
use tracing::info;

use backoffice_core::tracing::init_tracing;
use backoffice_staffs::config::SeedConfig;
use backoffice_staffs::infra::password::Argon2Digest;
use backoffice_staffs::usecase::seed::{
    DEFAULT_SEED_COUNT, DEFAULT_SEED_PASSWORD, SeedStaffsUseCase,
};
use backoffice_staffs::usecase::staff::SaveStaffUseCase;

/// Populate activated development staff accounts (`staff0@example.com`, ...).
#[derive(Debug, Parser)]
#[command(name = "seed")]
struct Args {
    /// Number of accounts to ensure.
    #[arg(long, default_value_t = DEFAULT_SEED_COUNT)]
    count: u32,
    /// Password given to newly created accounts.
    #[arg(long, default_value = DEFAULT_SEED_PASSWORD)]
    password: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = SeedConfig::from_env()?;
    let db = Database::connect(&config.database_url)
        .await
        .context("failed to connect to database")?;

    let state = backoffice_staffs::state::AppState { db };
    let seed = SeedStaffsUseCase {
        save: SaveStaffUseCase {
            repo: state.staff_repo(),
            digest: Argon2Digest::new(config.hashing)?,
        },
    };
    let report = seed
        .execute(args.count, &args.password)
        .await
        .context("seeding staffs failed")?;

    info!(
        created = report.created,
        existing = report.existing,
        rows = report.rows,
        "seed finished"
    );
    Ok(())
}
