use super::*;

#[test]
fn test_parse_run() {
    let cli = Cli::try_parse_from(["tl", "run"]).unwrap();
    assert!(matches!(cli.command, Commands::Run));
    assert!(!cli.global.verbose);
    assert_eq!(cli.global.project_dir, ".");
    assert!(cli.global.config.is_none());
}

#[test]
fn test_parse_global_flags() {
    let cli = Cli::try_parse_from([
        "tl",
        "etl",
        "--verbose",
        "--project-dir",
        "/srv/warehouse",
        "--config",
        "dwh.yml",
    ])
    .unwrap();

    assert!(matches!(cli.command, Commands::Etl));
    assert!(cli.global.verbose);
    assert_eq!(cli.global.project_dir, "/srv/warehouse");
    assert_eq!(cli.global.config.as_deref(), Some("dwh.yml"));
}

#[test]
fn test_parse_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["tl", "create-tables", "-v"]).unwrap();
    assert!(matches!(cli.command, Commands::CreateTables));
    assert!(cli.global.verbose);
}

#[test]
fn test_parse_compile_args() {
    let cli = Cli::try_parse_from([
        "tl",
        "compile",
        "--dialect",
        "redshift",
        "--output-dir",
        "sql",
    ])
    .unwrap();

    match cli.command {
        Commands::Compile(args) => {
            assert_eq!(args.dialect.as_deref(), Some("redshift"));
            assert_eq!(args.output_dir.as_deref(), Some("sql"));
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_missing_subcommand_is_error() {
    assert!(Cli::try_parse_from(["tl"]).is_err());
}

#[test]
fn test_unknown_subcommand_is_error() {
    assert!(Cli::try_parse_from(["tl", "vacuum"]).is_err());
}
