//! Etl command implementation
//!
//! Loads the staging tables from object storage, then populates the fact
//! and dimension tables. Expects the schema to exist (see create-tables).

use anyhow::Result;
use tl_pipeline::{StagingLoader, TransformRunner};

use crate::cli::GlobalArgs;
use crate::commands::common::{print_final_counts, print_steps};
use crate::context::RuntimeContext;

/// Execute the etl command
pub async fn execute(global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    ctx.verbose(&format!(
        "connected to {} ({} dialect)",
        ctx.db.db_type(),
        ctx.catalog.dialect()
    ));

    println!("Loading staging tables...");
    let outcome = StagingLoader::new(ctx.db.as_ref(), &ctx.catalog)
        .load_staging()
        .await;
    print_steps(&outcome.results);
    outcome.into_result()?;

    println!("Running transforms...");
    let outcome = TransformRunner::new(ctx.db.as_ref(), &ctx.catalog)
        .run_transforms()
        .await;
    print_steps(&outcome.results);
    outcome.into_result()?;

    print_final_counts(ctx.db.as_ref()).await?;
    Ok(())
}
