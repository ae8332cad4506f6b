//! Create-tables command implementation

use anyhow::Result;
use tl_pipeline::SchemaManager;

use crate::cli::GlobalArgs;
use crate::commands::common::print_steps;
use crate::context::RuntimeContext;

/// Execute the create-tables command: drop everything, then recreate
pub async fn execute(global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    ctx.verbose(&format!(
        "connected to {} ({} dialect)",
        ctx.db.db_type(),
        ctx.catalog.dialect()
    ));

    let manager = SchemaManager::new(ctx.db.as_ref(), &ctx.catalog);

    println!(
        "Dropping {} relations...",
        ctx.catalog.drop_statements().len()
    );
    let outcome = manager.drop_all().await;
    print_steps(&outcome.results);
    outcome.into_result()?;

    println!(
        "Creating {} relations...",
        ctx.catalog.create_statements().len()
    );
    let outcome = manager.create_all().await;
    print_steps(&outcome.results);
    outcome.into_result()?;

    println!();
    println!("Schema reset complete");
    Ok(())
}
