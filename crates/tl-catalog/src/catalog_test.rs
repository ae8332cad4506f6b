use super::*;

fn params() -> CatalogParams {
    CatalogParams {
        iam_role: "arn:aws:iam::123456789012:role/warehouse-load".to_string(),
        log_data: "s3://streaming-raw/log_data".to_string(),
        log_jsonpath: "s3://streaming-raw/log_json_path.json".to_string(),
        song_data: "s3://streaming-raw/song_data".to_string(),
        region: "us-west-2".to_string(),
    }
}

#[test]
fn test_no_unresolved_placeholders() {
    for dialect in [Dialect::Redshift, Dialect::DuckDb] {
        let catalog = Catalog::new(&params(), dialect).unwrap();
        for statement in catalog.all_statements() {
            for token in ["{{", "}}", "{%", "%}"] {
                assert!(
                    !statement.sql().contains(token),
                    "{} ({}) contains '{}'",
                    statement.name(),
                    dialect,
                    token
                );
            }
        }
    }
}

#[test]
fn test_statement_counts() {
    let redshift = Catalog::new(&params(), Dialect::Redshift).unwrap();
    assert_eq!(redshift.drop_statements().len(), 7);
    assert_eq!(redshift.create_statements().len(), 7);
    assert_eq!(redshift.copy_statements().len(), 2);
    assert_eq!(redshift.insert_statements().len(), 5);

    // DuckDB carries one extra create/drop pair for the fact-key sequence.
    let duckdb = Catalog::new(&params(), Dialect::DuckDb).unwrap();
    assert_eq!(duckdb.drop_statements().len(), 8);
    assert_eq!(duckdb.create_statements().len(), 8);
    assert_eq!(duckdb.copy_statements().len(), 2);
    assert_eq!(duckdb.insert_statements().len(), 5);
}

#[test]
fn test_execution_order_contract() {
    let catalog = Catalog::new(&params(), Dialect::Redshift).unwrap();

    let drops: Vec<&str> = catalog.drop_statements().iter().map(|s| s.name()).collect();
    assert_eq!(
        drops,
        [
            "drop_staging_events",
            "drop_staging_songs",
            "drop_songplays",
            "drop_users",
            "drop_songs",
            "drop_artists",
            "drop_time",
        ]
    );

    let inserts: Vec<&str> = catalog
        .insert_statements()
        .iter()
        .map(|s| s.name())
        .collect();
    assert_eq!(
        inserts,
        [
            "insert_songplays",
            "insert_users",
            "insert_songs",
            "insert_artists",
            "insert_time",
        ]
    );

    let copies: Vec<&str> = catalog.copy_statements().iter().map(|s| s.name()).collect();
    assert_eq!(copies, ["copy_staging_events", "copy_staging_songs"]);
}

#[test]
fn test_duckdb_sequence_ordering() {
    let catalog = Catalog::new(&params(), Dialect::DuckDb).unwrap();

    // Created before any table that references it, dropped after songplays.
    assert_eq!(
        catalog.create_statements()[0].name(),
        "create_songplay_id_seq"
    );
    assert_eq!(
        catalog.drop_statements().last().unwrap().name(),
        "drop_songplay_id_seq"
    );
}

#[test]
fn test_redshift_copy_parameters() {
    let catalog = Catalog::new(&params(), Dialect::Redshift).unwrap();

    let events = catalog.get("copy_staging_events").unwrap();
    assert!(events.sql().starts_with("COPY staging_events FROM 's3://streaming-raw/log_data'"));
    assert!(events
        .sql()
        .contains("CREDENTIALS 'aws_iam_role=arn:aws:iam::123456789012:role/warehouse-load'"));
    assert!(events.sql().contains("REGION 'us-west-2'"));
    assert!(events
        .sql()
        .contains("FORMAT AS JSON 's3://streaming-raw/log_json_path.json'"));

    let songs = catalog.get("copy_staging_songs").unwrap();
    assert!(songs.sql().contains("JSON 'auto'"));
    assert!(!songs.sql().contains("log_json_path"));
}

#[test]
fn test_duckdb_copy_reads_json() {
    let catalog = Catalog::new(&params(), Dialect::DuckDb).unwrap();

    let events = catalog.get("copy_staging_events").unwrap();
    assert!(events
        .sql()
        .contains("read_json('s3://streaming-raw/log_data'"));
    assert!(events.sql().starts_with("INSERT INTO staging_events"));
    // No Redshift-only COPY clauses leak into the DuckDB rendition.
    assert!(!events.sql().contains("CREDENTIALS"));
    assert!(!events.sql().contains("REGION"));
}

#[test]
fn test_physical_hints_per_dialect() {
    let redshift = Catalog::new(&params(), Dialect::Redshift).unwrap();
    let songplays = redshift.get("create_songplays").unwrap();
    assert!(songplays.sql().contains("IDENTITY(0,1)"));
    assert!(songplays.sql().contains("distkey"));
    assert!(songplays.sql().contains("sortkey auto"));

    let duckdb = Catalog::new(&params(), Dialect::DuckDb).unwrap();
    let songplays = duckdb.get("create_songplays").unwrap();
    assert!(songplays.sql().contains("nextval('songplay_id_seq')"));
    assert!(!songplays.sql().contains("distkey"));
    assert!(!songplays.sql().contains("sortkey"));
    assert!(!songplays.sql().contains("IDENTITY"));
}

#[test]
fn test_logical_schema_identical_across_dialects() {
    // Same column lists in every INSERT regardless of dialect.
    let redshift = Catalog::new(&params(), Dialect::Redshift).unwrap();
    let duckdb = Catalog::new(&params(), Dialect::DuckDb).unwrap();

    for name in ["insert_users", "insert_songs", "insert_artists"] {
        assert_eq!(
            redshift.get(name).unwrap().sql(),
            duckdb.get(name).unwrap().sql(),
            "{} differs across dialects",
            name
        );
    }
}

#[test]
fn test_users_insert_null_filter() {
    let catalog = Catalog::new(&params(), Dialect::Redshift).unwrap();
    let users = catalog.get("insert_users").unwrap();

    assert!(users.sql().contains("userId IS NOT NULL"));
    assert!(!users.sql().contains("!= NULL"));
    assert!(users
        .sql()
        .contains("ROW_NUMBER() OVER (PARTITION BY userId ORDER BY ts DESC)"));
}

#[test]
fn test_weekday_part_per_dialect() {
    let redshift = Catalog::new(&params(), Dialect::Redshift).unwrap();
    assert!(redshift
        .get("insert_time")
        .unwrap()
        .sql()
        .contains("EXTRACT(WEEKDAY FROM"));

    let duckdb = Catalog::new(&params(), Dialect::DuckDb).unwrap();
    assert!(duckdb
        .get("insert_time")
        .unwrap()
        .sql()
        .contains("EXTRACT(DOW FROM"));
}

#[test]
fn test_get_unknown_statement() {
    let catalog = Catalog::new(&params(), Dialect::DuckDb).unwrap();
    assert!(catalog.get("vacuum_songplays").is_none());
}

#[test]
fn test_params_from_config() {
    let yaml = r#"
name: play_warehouse
iam_role:
  arn: arn:aws:iam::123456789012:role/warehouse-load
storage:
  log_data: s3://streaming-raw/log_data
  log_jsonpath: s3://streaming-raw/log_json_path.json
  song_data: s3://streaming-raw/song_data
"#;
    let config: tl_core::Config = serde_yaml::from_str(yaml).unwrap();
    let params = CatalogParams::from_config(&config);

    assert_eq!(params.iam_role, "arn:aws:iam::123456789012:role/warehouse-load");
    assert_eq!(params.log_data, "s3://streaming-raw/log_data");
    assert_eq!(params.region, "us-west-2");
}

#[test]
fn test_statement_accessors() {
    let catalog = Catalog::new(&params(), Dialect::Redshift).unwrap();
    let statement = catalog.get("insert_songplays").unwrap();

    assert_eq!(statement.name(), "insert_songplays");
    assert_eq!(statement.operation(), Operation::Insert);
    assert_eq!(statement.operation().to_string(), "insert");
    assert!(statement.sql().contains("page = 'NextSong'"));
}
