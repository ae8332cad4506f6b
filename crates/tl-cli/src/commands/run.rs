//! Run command implementation: the full pipeline in one invocation

use anyhow::Result;
use tl_pipeline::Driver;

use crate::cli::GlobalArgs;
use crate::commands::common::print_steps;
use crate::context::RuntimeContext;

/// Execute the run command: drop, create, copy-load, insert-transform
pub async fn execute(global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    ctx.verbose(&format!(
        "connected to {} ({} dialect)",
        ctx.db.db_type(),
        ctx.catalog.dialect()
    ));

    let target_dir = ctx.target_dir();
    let driver = Driver::new(ctx.db.clone(), ctx.catalog);
    let total = driver.catalog().all_statements().count();
    println!("Running pipeline ({} statements)...", total);

    let report = driver.run().await;
    print_steps(&report.results);

    let report_path = target_dir.join("run_results.json");
    match report.save(&report_path) {
        Ok(()) => {
            if global.verbose {
                eprintln!("[verbose] wrote {}", report_path.display());
            }
        }
        Err(e) => log::warn!("Failed to write run results: {}", e),
    }

    let attempted = report.results.len();
    if attempted < total {
        println!(
            "  {} statement(s) skipped due to early termination",
            total - attempted
        );
    }

    println!();
    println!(
        "Completed: {} succeeded, {} failed",
        report.success_count, report.failure_count
    );
    println!("Total time: {}ms", (report.elapsed_secs * 1000.0) as u64);

    if report.failed() {
        std::process::exit(4);
    }

    Ok(())
}
