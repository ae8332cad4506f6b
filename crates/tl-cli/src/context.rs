//! Runtime context for CLI commands

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tl_catalog::{Catalog, CatalogParams};
use tl_core::Config;
use tl_db::Database;

use crate::cli::GlobalArgs;

/// Runtime context containing the loaded config, the rendered catalog, and
/// the database connection
pub struct RuntimeContext {
    /// The loaded configuration
    pub config: Config,

    /// Catalog rendered for the configured dialect
    pub catalog: Catalog,

    /// Database connection
    pub db: Arc<dyn Database>,

    /// Project root directory
    pub root: PathBuf,

    /// Verbose output enabled
    pub verbose: bool,
}

impl RuntimeContext {
    /// Create a new runtime context from global arguments
    pub fn new(args: &GlobalArgs) -> Result<Self> {
        let root = PathBuf::from(&args.project_dir);

        let config = if let Some(config_path) = &args.config {
            Config::load(Path::new(config_path)).context("Failed to load configuration file")?
        } else {
            Config::load_from_dir(&root).context("Failed to load project configuration")?
        };

        let catalog = Catalog::new(&CatalogParams::from_config(&config), config.dialect())
            .context("Failed to render SQL catalog")?;

        let db = tl_db::connect(&config.database).context("Failed to connect to database")?;

        Ok(Self {
            config,
            catalog,
            db,
            root,
            verbose: args.verbose,
        })
    }

    /// Print verbose output if enabled
    pub fn verbose(&self, msg: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", msg);
        }
    }

    /// Target directory for run artifacts
    pub fn target_dir(&self) -> PathBuf {
        self.config.target_path_absolute(&self.root)
    }
}
