//! expand-template - build-time template expander
//!
//! Splices named source files into a template and rewrites the generated
//! file only when its content changes.

mod cli;
mod config;
mod error;
mod resolve;
mod template;

use cli::Cli;
use config::ExpanderConfig;
use error::Result;
use resolve::LiteralResolver;
use template::Expander;

fn main() {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

/// Run one expansion; returns whether the generated file is current
fn run(cli: &Cli) -> Result<bool> {
    let config = match &cli.config {
        Some(path) => config::load(path)?,
        None => ExpanderConfig::default(),
    };

    let resolver = LiteralResolver::new(config.source_extension.clone());
    let expander = Expander::new(config, resolver).check_only(cli.check);

    let outcome = expander.expand(&cli.base, cli.source_folder.as_deref())?;
    println!("{}", outcome);

    Ok(outcome.is_current())
}
