use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). Ignored when RUST_LOG is set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print a greeting.
    Hello(HelloArgs),
    /// Print or write the documentation generator settings.
    DocsConfig(DocsConfigArgs),
    /// Print the copyright line for the package metadata.
    Metadata(MetadataArgs),
}

#[derive(Debug, Args)]
pub struct HelloArgs {
    /// Who to greet (default: World).
    #[arg(long)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DocsFormat {
    Yaml,
    Json,
    /// Python `conf.py` fragment.
    Conf,
}

#[derive(Debug, Args)]
pub struct DocsConfigArgs {
    /// Settings file to start from (`.yaml`, `.yml` or `.json`); defaults apply otherwise.
    #[arg(long)]
    pub from: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = DocsFormat::Conf)]
    pub format: DocsFormat,

    /// Output file path (default: stdout).
    #[arg(long)]
    pub out: Option<String>,

    /// Overwrite the output file if it already exists.
    #[arg(long, default_value_t = false)]
    pub force: bool,
}

#[derive(Debug, Args)]
pub struct MetadataArgs {
    /// Package author (default: the author placeholder).
    #[arg(long)]
    pub author: Option<String>,

    /// Package name (default: the package placeholder).
    #[arg(long)]
    pub package: Option<String>,

    /// Copyright year.
    #[arg(long, default_value_t = 2022)]
    pub year: u16,
}
