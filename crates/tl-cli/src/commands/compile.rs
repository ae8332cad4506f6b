//! Compile command implementation
//!
//! Renders the catalog and writes each statement to its own .sql file.
//! Never touches the warehouse, so it also works for the dialects without
//! an executing backend.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tl_catalog::{Catalog, CatalogParams};
use tl_core::config::Dialect;
use tl_core::Config;

use crate::cli::{CompileArgs, GlobalArgs};

/// Execute the compile command
pub async fn execute(args: &CompileArgs, global: &GlobalArgs) -> Result<()> {
    let root = PathBuf::from(&global.project_dir);

    let config = if let Some(config_path) = &global.config {
        Config::load(Path::new(config_path)).context("Failed to load configuration file")?
    } else {
        Config::load_from_dir(&root).context("Failed to load project configuration")?
    };

    let dialect = match &args.dialect {
        Some(name) => parse_dialect(name)?,
        None => config.dialect(),
    };

    let catalog = Catalog::new(&CatalogParams::from_config(&config), dialect)
        .context("Failed to render SQL catalog")?;

    let output_dir = match &args.output_dir {
        Some(dir) => root.join(dir),
        None => config.target_path_absolute(&root).join("compiled"),
    };
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    let mut count = 0;
    for statement in catalog.all_statements() {
        let path = output_dir.join(format!("{}.sql", statement.name()));
        std::fs::write(&path, format!("{};\n", statement.sql()))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        if global.verbose {
            eprintln!("[verbose] wrote {}", path.display());
        }
        count += 1;
    }

    println!(
        "Compiled {} statements ({}) to {}",
        count,
        dialect,
        output_dir.display()
    );
    Ok(())
}

fn parse_dialect(name: &str) -> Result<Dialect> {
    match name {
        "duckdb" => Ok(Dialect::DuckDb),
        "redshift" => Ok(Dialect::Redshift),
        other => anyhow::bail!("Unknown dialect '{}'. Valid dialects: duckdb, redshift", other),
    }
}
