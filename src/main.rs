use clap::Parser;
use imageset_gen::cli::{Cli, Commands};
use imageset_gen::logging::init_logging;
use imageset_gen::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let printer = Printer::new();

    match cli.command {
        Commands::Generate(args) => imageset_gen::cli::generate::run(args, cli.verbose, &printer)?,
        Commands::List(args) => imageset_gen::cli::list::run(args, &printer)?,
        Commands::Validate(args) => imageset_gen::cli::validate::run(args, &printer)?,
        Commands::Completions(args) => imageset_gen::cli::completions::run(args)?,
    }

    Ok(())
}
