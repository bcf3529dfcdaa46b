use super::*;
use clap::CommandFactory;

#[test]
fn verify_cli_args() {
    // Validates the entire command tree: short flag conflicts,
    // duplicate args, and other clap definition errors.
    Cli::command().debug_assert();
}

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("tb").chain(args.iter().copied()))
        .unwrap_or_else(|e| panic!("failed to parse {:?}: {}", args, e))
}

#[test]
fn test_table_add_parses_type_and_jobs() {
    let cli = parse(&[
        "table", "add", "orders", "-s", "sales", "-t", "mysql", "-j", "JOB_A,JOB_B", "-j", "JOB_C",
    ]);
    let Commands::Table(TableArgs {
        command: TableCommands::Add(args),
    }) = cli.command
    else {
        panic!("expected table add");
    };
    assert_eq!(args.table_type, TableType::MySql);
    assert_eq!(args.jobs, vec!["JOB_A", "JOB_B", "JOB_C"]);
    assert_eq!(args.description, "");
}

#[test]
fn test_unknown_table_type_rejected() {
    let result = Cli::try_parse_from(["tb", "table", "add", "t", "-s", "s", "-t", "sybase"]);
    assert!(result.is_err());
}

#[test]
fn test_transform_add_requires_inputs_and_outputs() {
    assert!(Cli::try_parse_from(["tb", "transform", "add", "t", "--to", "b"]).is_err());
    let cli = parse(&["transform", "add", "t", "--from", "a,b", "--to", "c", "-t", "etl"]);
    let Commands::Transform(TransformArgs {
        command: TransformCommands::Add(args),
    }) = cli.command
    else {
        panic!("expected transform add");
    };
    assert_eq!(args.inputs, vec!["a", "b"]);
    assert_eq!(args.transformation_type, TransformationType::Etl);
}

#[test]
fn test_lineage_overrides() {
    let cli = parse(&[
        "-p", "/tmp/proj", "lineage", "--columns", "--focus", "orders", "--layout", "circular",
        "--direction", "UD", "--theme", "dark", "--no-physics", "--spacing", "150", "--format",
        "dot",
    ]);
    assert_eq!(cli.global.project_dir, "/tmp/proj");
    let Commands::Lineage(args) = cli.command else {
        panic!("expected lineage");
    };
    assert_eq!(args.format, LineageFormat::Dot);
    let o = &args.overrides;
    assert!(o.columns);
    assert_eq!(o.focus.as_deref(), Some("orders"));
    assert_eq!(o.layout, Some(Layout::Circular));
    assert_eq!(o.direction, Some(Direction::UpDown));
    assert_eq!(o.theme, Some(Theme::Dark));
    assert!(o.no_physics);
    assert_eq!(o.spacing, Some(150));
}

#[test]
fn test_conflicting_flags_rejected() {
    assert!(Cli::try_parse_from(["tb", "lineage", "--columns", "--tables"]).is_err());
    assert!(Cli::try_parse_from(["tb", "table", "edit", "t", "-j", "A", "--clear-jobs"]).is_err());
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = parse(&["stats", "-v", "--catalog", "other.json"]);
    assert!(cli.global.verbose);
    assert_eq!(cli.global.catalog.as_deref(), Some("other.json"));
}
