//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};
use tb_core::{Direction, Layout, TableType, Theme, TransformationType};

/// Tributary - catalog data tables and transformations and explore their lineage
#[derive(Parser, Debug)]
#[command(name = "tb")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,

    /// Override config file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Override catalog document path
    #[arg(long, global = true)]
    pub catalog: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create tributary.yml and an empty catalog
    Init(InitArgs),

    /// Replace the catalog with demo data
    Sample(ConfirmArgs),

    /// Manage tables
    Table(TableArgs),

    /// Manage columns of a table
    Column(ColumnArgs),

    /// Manage transformations
    Transform(TransformArgs),

    /// Manage column mappings of a transformation
    Mapping(MappingArgs),

    /// Search tables, columns and transformations
    Search(SearchArgs),

    /// Render the lineage graph
    Lineage(LineageArgs),

    /// Manage saved views
    View(ViewArgs),

    /// Write the catalog to a JSON file
    Export(ExportArgs),

    /// Replace the catalog with a JSON file
    Import(ImportArgs),

    /// Show catalog statistics
    Stats(OutputArgs),

    /// List table types and their colors
    Types(OutputArgs),
}

/// Output formats for listings
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
}

/// Shared `--output` flag
#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}

/// Shared confirmation flag for destructive commands
#[derive(Args, Debug)]
pub struct ConfirmArgs {
    /// Skip the confirmation step and apply the change
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project name written to tributary.yml
    #[arg(short, long)]
    pub name: Option<String>,

    /// Seed the new catalog with demo data
    #[arg(long)]
    pub sample: bool,

    /// Overwrite an existing tributary.yml
    #[arg(long)]
    pub force: bool,
}

// ----- tables -----

#[derive(Args, Debug)]
pub struct TableArgs {
    #[command(subcommand)]
    pub command: TableCommands,
}

#[derive(Subcommand, Debug)]
pub enum TableCommands {
    /// Add a table
    Add(TableAddArgs),
    /// Edit a table's fields
    Edit(TableEditArgs),
    /// Delete a table
    Rm(NamedConfirmArgs),
    /// List tables
    Ls(OutputArgs),
    /// Show a table with its columns
    Show(NamedOutputArgs),
}

#[derive(Args, Debug)]
pub struct TableAddArgs {
    /// Table name
    pub name: String,

    /// Schema the table lives in
    #[arg(short, long)]
    pub schema: String,

    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Source system type (see `tb types`)
    #[arg(short = 't', long = "type", default_value = "Other")]
    pub table_type: TableType,

    /// Scheduler job name (repeatable or comma-separated)
    #[arg(short = 'j', long = "job", value_delimiter = ',')]
    pub jobs: Vec<String>,
}

#[derive(Args, Debug)]
pub struct TableEditArgs {
    /// Table to edit
    pub name: String,

    /// New table name
    #[arg(long)]
    pub rename: Option<String>,

    #[arg(short, long)]
    pub schema: Option<String>,

    #[arg(short, long)]
    pub description: Option<String>,

    #[arg(short = 't', long = "type")]
    pub table_type: Option<TableType>,

    /// Replace the job list (repeatable or comma-separated)
    #[arg(short = 'j', long = "job", value_delimiter = ',')]
    pub jobs: Vec<String>,

    /// Remove all jobs
    #[arg(long, conflicts_with = "jobs")]
    pub clear_jobs: bool,
}

/// A single entity name plus confirmation
#[derive(Args, Debug)]
pub struct NamedConfirmArgs {
    pub name: String,

    #[command(flatten)]
    pub confirm: ConfirmArgs,
}

/// A single entity name plus output format
#[derive(Args, Debug)]
pub struct NamedOutputArgs {
    pub name: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

// ----- columns -----

#[derive(Args, Debug)]
pub struct ColumnArgs {
    #[command(subcommand)]
    pub command: ColumnCommands,
}

#[derive(Subcommand, Debug)]
pub enum ColumnCommands {
    /// Add a column to a table
    Add(ColumnAddArgs),
    /// Edit a column
    Edit(ColumnEditArgs),
    /// Delete a column
    Rm(ColumnRmArgs),
}

#[derive(Args, Debug)]
pub struct ColumnAddArgs {
    /// Owning table
    pub table: String,

    /// Column name
    pub name: String,

    /// Data type, e.g. VARCHAR or DECIMAL(10,2)
    #[arg(short = 't', long = "type")]
    pub data_type: String,

    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Upstream column as table.column (repeatable or comma-separated)
    #[arg(short = 's', long = "source", value_delimiter = ',')]
    pub sources: Vec<String>,
}

#[derive(Args, Debug)]
pub struct ColumnEditArgs {
    pub table: String,

    pub name: String,

    /// New column name
    #[arg(long)]
    pub rename: Option<String>,

    #[arg(short = 't', long = "type")]
    pub data_type: Option<String>,

    #[arg(short, long)]
    pub description: Option<String>,

    /// Replace the source list (repeatable or comma-separated)
    #[arg(short = 's', long = "source", value_delimiter = ',')]
    pub sources: Vec<String>,

    /// Remove all source references
    #[arg(long, conflicts_with = "sources")]
    pub clear_sources: bool,
}

#[derive(Args, Debug)]
pub struct ColumnRmArgs {
    pub table: String,

    pub name: String,

    #[command(flatten)]
    pub confirm: ConfirmArgs,
}

// ----- transformations -----

#[derive(Args, Debug)]
pub struct TransformArgs {
    #[command(subcommand)]
    pub command: TransformCommands,
}

#[derive(Subcommand, Debug)]
pub enum TransformCommands {
    /// Add a transformation
    Add(TransformAddArgs),
    /// Edit a transformation
    Edit(TransformEditArgs),
    /// Delete a transformation
    Rm(NamedConfirmArgs),
    /// List transformations
    Ls(OutputArgs),
    /// Show a transformation with its mappings
    Show(NamedOutputArgs),
}

#[derive(Args, Debug)]
pub struct TransformAddArgs {
    /// Transformation name
    pub name: String,

    /// SQL, Python, ETL or Custom
    #[arg(short = 't', long = "type", default_value = "SQL")]
    pub transformation_type: TransformationType,

    /// Input table (repeatable or comma-separated)
    #[arg(short = 'f', long = "from", value_delimiter = ',', required = true)]
    pub inputs: Vec<String>,

    /// Output table (repeatable or comma-separated)
    #[arg(long = "to", value_delimiter = ',', required = true)]
    pub outputs: Vec<String>,

    /// Transformation code or query
    #[arg(short, long, default_value = "", conflicts_with = "logic_file")]
    pub logic: String,

    /// Read the code or query from a file
    #[arg(long)]
    pub logic_file: Option<String>,

    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Scheduler job name (repeatable or comma-separated)
    #[arg(short = 'j', long = "job", value_delimiter = ',')]
    pub jobs: Vec<String>,
}

#[derive(Args, Debug)]
pub struct TransformEditArgs {
    pub name: String,

    #[arg(long)]
    pub rename: Option<String>,

    #[arg(short = 't', long = "type")]
    pub transformation_type: Option<TransformationType>,

    /// Replace the input tables
    #[arg(short = 'f', long = "from", value_delimiter = ',')]
    pub inputs: Vec<String>,

    /// Replace the output tables
    #[arg(long = "to", value_delimiter = ',')]
    pub outputs: Vec<String>,

    #[arg(short, long, conflicts_with = "logic_file")]
    pub logic: Option<String>,

    #[arg(long)]
    pub logic_file: Option<String>,

    #[arg(short, long)]
    pub description: Option<String>,

    /// Replace the job list
    #[arg(short = 'j', long = "job", value_delimiter = ',')]
    pub jobs: Vec<String>,

    #[arg(long, conflicts_with = "jobs")]
    pub clear_jobs: bool,
}

// ----- mappings -----

#[derive(Args, Debug)]
pub struct MappingArgs {
    #[command(subcommand)]
    pub command: MappingCommands,
}

#[derive(Subcommand, Debug)]
pub enum MappingCommands {
    /// Map a source column to a target column
    Add(MappingAddArgs),
    /// Remove a column mapping
    Rm(MappingRmArgs),
}

#[derive(Args, Debug)]
pub struct MappingAddArgs {
    /// Transformation carrying the mapping
    pub transformation: String,

    /// Source column as table.column
    pub source: String,

    /// Target column as table.column
    pub target: String,

    /// How the target value is derived
    #[arg(short, long, default_value = "")]
    pub rule: String,
}

#[derive(Args, Debug)]
pub struct MappingRmArgs {
    pub transformation: String,

    pub source: String,

    pub target: String,
}

// ----- search -----

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Case-insensitive text to look for
    pub query: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}

// ----- lineage and views -----

/// Lineage output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineageFormat {
    /// Interactive vis-network page
    Html,
    /// Graphviz digraph
    Dot,
    /// Nodes and edges as JSON
    Json,
}

/// Render option overrides shared by `lineage` and `view save`
#[derive(Args, Debug, Default)]
pub struct RenderOverrides {
    /// Column-level lineage
    #[arg(long)]
    pub columns: bool,

    /// Table-level lineage, even if the view says otherwise
    #[arg(long, conflicts_with = "columns")]
    pub tables: bool,

    /// Only show this table or table.column
    #[arg(short, long)]
    pub focus: Option<String>,

    /// Drop the focus of the base view
    #[arg(long, conflicts_with = "focus")]
    pub no_focus: bool,

    /// hierarchical, circular or force
    #[arg(long)]
    pub layout: Option<Layout>,

    /// LR, RL, UD or DU (hierarchical layout only)
    #[arg(long)]
    pub direction: Option<Direction>,

    /// light or dark
    #[arg(long)]
    pub theme: Option<Theme>,

    /// Disable the physics simulation
    #[arg(long)]
    pub no_physics: bool,

    /// Draw straight edges
    #[arg(long)]
    pub no_smooth: bool,

    /// Node spacing in pixels (50-200)
    #[arg(long)]
    pub spacing: Option<u32>,
}

#[derive(Args, Debug)]
pub struct LineageArgs {
    /// Output format
    #[arg(long, value_enum, default_value = "html")]
    pub format: LineageFormat,

    /// Output file (html defaults to lineage.html in the project; dot and json default to stdout)
    #[arg(long)]
    pub out: Option<String>,

    /// Start from a saved view
    #[arg(long)]
    pub view: Option<String>,

    #[command(flatten)]
    pub overrides: RenderOverrides,

    /// Also capture the HTML page as a PNG
    #[arg(long)]
    pub screenshot: Option<String>,

    /// Open the HTML page in the default browser
    #[arg(long)]
    pub open: bool,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    #[command(subcommand)]
    pub command: ViewCommands,
}

#[derive(Subcommand, Debug)]
pub enum ViewCommands {
    /// Save render options under a name
    Save(ViewSaveArgs),
    /// List saved views
    Ls(OutputArgs),
    /// Delete a saved view
    Rm(ViewRmArgs),
}

#[derive(Args, Debug)]
pub struct ViewSaveArgs {
    /// View name
    pub name: String,

    /// Start from another saved view instead of the render defaults
    #[arg(long)]
    pub from: Option<String>,

    #[command(flatten)]
    pub overrides: RenderOverrides,
}

#[derive(Args, Debug)]
pub struct ViewRmArgs {
    pub name: String,
}

// ----- import / export -----

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Destination JSON file
    pub path: String,
}

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// JSON file to read
    pub path: String,

    #[command(flatten)]
    pub confirm: ConfirmArgs,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
