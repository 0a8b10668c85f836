use clap::Parser;
use miette::Result;
use phpdoc::cli::{Cli, Commands};
use phpdoc::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Fmt(args) => phpdoc::cli::fmt::run(args, &printer)?,
        Commands::Check(args) => phpdoc::cli::check::run(args, &printer)?,
        Commands::Dump(args) => phpdoc::cli::dump::run(args)?,
        Commands::Init(args) => phpdoc::cli::init::run(args, &printer)?,
        Commands::Completions(args) => phpdoc::cli::completions::run(args)?,
    }

    Ok(())
}
