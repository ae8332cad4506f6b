//! Catalog construction: template rendering and statement lists

use crate::error::{CatalogError, CatalogResult};
use crate::templates;
use minijinja::{context, Environment, UndefinedBehavior, Value};
use std::fmt;
use tl_core::config::{Config, Dialect};
use tl_core::table::{Table, COPY_ORDER, CREATE_ORDER, DROP_ORDER, INSERT_ORDER};

/// Configuration parameters substituted into the SQL templates.
///
/// Substitution happens once at catalog construction; the rendered
/// statements are immutable afterwards. Values are not validated here. A
/// malformed ARN or bucket URI surfaces when the warehouse rejects the
/// statement that uses it.
#[derive(Debug, Clone)]
pub struct CatalogParams {
    /// IAM role ARN for COPY credentials
    pub iam_role: String,
    /// Event log dataset location
    pub log_data: String,
    /// JSON-path specification for the event log COPY
    pub log_jsonpath: String,
    /// Song metadata dataset location
    pub song_data: String,
    /// Storage bucket region
    pub region: String,
}

impl CatalogParams {
    /// Extract catalog parameters from the loaded configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            iam_role: config.iam_role.arn.clone(),
            log_data: config.storage.log_data.clone(),
            log_jsonpath: config.storage.log_jsonpath.clone(),
            song_data: config.storage.song_data.clone(),
            region: config.storage.region.clone(),
        }
    }
}

/// Logical operation a statement performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Drop,
    Create,
    Copy,
    Insert,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Drop => write!(f, "drop"),
            Operation::Create => write!(f, "create"),
            Operation::Copy => write!(f, "copy"),
            Operation::Insert => write!(f, "insert"),
        }
    }
}

/// A named, fully rendered SQL statement
#[derive(Debug, Clone)]
pub struct Statement {
    name: String,
    operation: Operation,
    sql: String,
}

impl Statement {
    /// Stable catalog name, e.g. "copy_staging_events"
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Logical operation
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Rendered SQL text
    pub fn sql(&self) -> &str {
        &self.sql
    }
}

/// Dialect-specific SQL fragments substituted into the shared templates
struct DialectFragments {
    surrogate_key: &'static str,
    distkey: &'static str,
    sortkey: &'static str,
    epoch_to_timestamp: &'static str,
    weekday_part: &'static str,
}

fn fragments(dialect: Dialect) -> DialectFragments {
    match dialect {
        Dialect::Redshift => DialectFragments {
            surrogate_key: "int IDENTITY(0,1)",
            distkey: " distkey",
            sortkey: "\nsortkey auto",
            epoch_to_timestamp: "TIMESTAMP 'epoch' + ts / 1000 * INTERVAL '1 second'",
            weekday_part: "WEEKDAY",
        },
        // No physical layout hints; the surrogate key draws from a sequence
        // and the epoch arithmetic uses integer division to keep the same
        // second precision.
        Dialect::DuckDb => DialectFragments {
            surrogate_key: "bigint DEFAULT nextval('songplay_id_seq')",
            distkey: "",
            sortkey: "",
            epoch_to_timestamp: "TIMESTAMP '1970-01-01' + ts // 1000 * INTERVAL 1 SECOND",
            weekday_part: "DOW",
        },
    }
}

fn create_template(table: Table) -> &'static str {
    match table {
        Table::StagingEvents => templates::STAGING_EVENTS_CREATE,
        Table::StagingSongs => templates::STAGING_SONGS_CREATE,
        Table::Songplays => templates::SONGPLAYS_CREATE,
        Table::Users => templates::USERS_CREATE,
        Table::Songs => templates::SONGS_CREATE,
        Table::Artists => templates::ARTISTS_CREATE,
        Table::Time => templates::TIME_CREATE,
    }
}

fn copy_template(table: Table, dialect: Dialect) -> &'static str {
    match (table, dialect) {
        (Table::StagingEvents, Dialect::Redshift) => templates::STAGING_EVENTS_COPY_REDSHIFT,
        (Table::StagingEvents, Dialect::DuckDb) => templates::STAGING_EVENTS_LOAD_DUCKDB,
        (Table::StagingSongs, Dialect::Redshift) => templates::STAGING_SONGS_COPY_REDSHIFT,
        (Table::StagingSongs, Dialect::DuckDb) => templates::STAGING_SONGS_LOAD_DUCKDB,
        (table, _) => unreachable!("no copy statement for {}", table),
    }
}

fn insert_template(table: Table) -> &'static str {
    match table {
        Table::Songplays => templates::SONGPLAYS_INSERT,
        Table::Users => templates::USERS_INSERT,
        Table::Songs => templates::SONGS_INSERT,
        Table::Artists => templates::ARTISTS_INSERT,
        Table::Time => templates::TIME_INSERT,
        table => unreachable!("no insert statement for {}", table),
    }
}

/// Renders templates against the parameter and fragment context
struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    fn new(params: &CatalogParams, dialect: Dialect) -> Self {
        let mut env = Environment::new();
        // Undefined variables are render errors, not silent empty strings.
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        env.add_global("iam_role", Value::from(params.iam_role.clone()));
        env.add_global("log_data", Value::from(params.log_data.clone()));
        env.add_global("log_jsonpath", Value::from(params.log_jsonpath.clone()));
        env.add_global("song_data", Value::from(params.song_data.clone()));
        env.add_global("region", Value::from(params.region.clone()));

        let fragments = fragments(dialect);
        env.add_global("surrogate_key", Value::from(fragments.surrogate_key));
        env.add_global("distkey", Value::from(fragments.distkey));
        env.add_global("sortkey", Value::from(fragments.sortkey));
        env.add_global(
            "epoch_to_timestamp",
            Value::from(fragments.epoch_to_timestamp),
        );
        env.add_global("weekday_part", Value::from(fragments.weekday_part));

        Self { env }
    }

    fn render(
        &self,
        name: impl Into<String>,
        operation: Operation,
        template: &str,
        table: Option<Table>,
    ) -> CatalogResult<Statement> {
        let name = name.into();
        let ctx = match table {
            Some(table) => context! { table => table.name() },
            None => context! {},
        };

        let sql = self
            .env
            .render_str(template, ctx)
            .map_err(|e| CatalogError::Render {
                statement: name.clone(),
                message: e.to_string(),
            })?;

        for token in ["{{", "}}", "{%", "%}"] {
            if sql.contains(token) {
                return Err(CatalogError::UnresolvedPlaceholder {
                    statement: name,
                    token: token.to_string(),
                });
            }
        }

        Ok(Statement {
            name,
            operation,
            sql,
        })
    }
}

/// The fixed set of named SQL statements for one dialect, rendered once
/// from configuration
pub struct Catalog {
    dialect: Dialect,
    drop_statements: Vec<Statement>,
    create_statements: Vec<Statement>,
    copy_statements: Vec<Statement>,
    insert_statements: Vec<Statement>,
}

impl Catalog {
    /// Render the full catalog for a dialect
    pub fn new(params: &CatalogParams, dialect: Dialect) -> CatalogResult<Self> {
        let renderer = Renderer::new(params, dialect);

        let mut drop_statements = Vec::with_capacity(DROP_ORDER.len() + 1);
        for table in DROP_ORDER {
            drop_statements.push(renderer.render(
                format!("drop_{}", table),
                Operation::Drop,
                templates::TABLE_DROP,
                Some(table),
            )?);
        }
        // The sequence is dropped after songplays, which references it.
        if dialect == Dialect::DuckDb {
            drop_statements.push(renderer.render(
                "drop_songplay_id_seq",
                Operation::Drop,
                templates::SEQUENCE_DROP,
                None,
            )?);
        }

        let mut create_statements = Vec::with_capacity(CREATE_ORDER.len() + 1);
        if dialect == Dialect::DuckDb {
            create_statements.push(renderer.render(
                "create_songplay_id_seq",
                Operation::Create,
                templates::SEQUENCE_CREATE,
                None,
            )?);
        }
        for table in CREATE_ORDER {
            create_statements.push(renderer.render(
                format!("create_{}", table),
                Operation::Create,
                create_template(table),
                Some(table),
            )?);
        }

        let mut copy_statements = Vec::with_capacity(COPY_ORDER.len());
        for table in COPY_ORDER {
            copy_statements.push(renderer.render(
                format!("copy_{}", table),
                Operation::Copy,
                copy_template(table, dialect),
                Some(table),
            )?);
        }

        let mut insert_statements = Vec::with_capacity(INSERT_ORDER.len());
        for table in INSERT_ORDER {
            insert_statements.push(renderer.render(
                format!("insert_{}", table),
                Operation::Insert,
                insert_template(table),
                Some(table),
            )?);
        }

        log::debug!(
            "rendered {} catalog statements for dialect {}",
            drop_statements.len()
                + create_statements.len()
                + copy_statements.len()
                + insert_statements.len(),
            dialect
        );

        Ok(Self {
            dialect,
            drop_statements,
            create_statements,
            copy_statements,
            insert_statements,
        })
    }

    /// Dialect this catalog was rendered for
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// DROP statements in execution order
    pub fn drop_statements(&self) -> &[Statement] {
        &self.drop_statements
    }

    /// CREATE statements in execution order
    pub fn create_statements(&self) -> &[Statement] {
        &self.create_statements
    }

    /// Staging bulk-load statements in execution order
    pub fn copy_statements(&self) -> &[Statement] {
        &self.copy_statements
    }

    /// Final-table INSERT statements in execution order
    pub fn insert_statements(&self) -> &[Statement] {
        &self.insert_statements
    }

    /// Every statement in pipeline execution order:
    /// drop, create, copy, insert
    pub fn all_statements(&self) -> impl Iterator<Item = &Statement> {
        self.drop_statements
            .iter()
            .chain(&self.create_statements)
            .chain(&self.copy_statements)
            .chain(&self.insert_statements)
    }

    /// Look up a statement by its catalog name
    pub fn get(&self, name: &str) -> Option<&Statement> {
        self.all_statements().find(|s| s.name() == name)
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
