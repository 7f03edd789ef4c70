use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser as _;

fn main() -> ExitCode {
    if let Err(err) = try_main() {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn try_main() -> anyhow::Result<()> {
    let cli = template::cli::Cli::parse();
    template::logging::init(cli.verbose).context("init logging")?;
    tracing::debug!(?cli, "parsed cli");

    match cli.command {
        template::cli::Command::Hello(args) => {
            println!("{}", template::greeting::hi(args.name.as_deref()));
        }
        template::cli::Command::DocsConfig(args) => {
            template::docs::run(args).context("docs-config")?;
        }
        template::cli::Command::Metadata(args) => {
            template::metadata::run(args).context("metadata")?;
        }
    }

    Ok(())
}
