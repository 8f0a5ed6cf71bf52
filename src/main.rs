use anyhow::Result;
use clap::Parser;
use std::collections::BTreeSet;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod cli;
mod document;
mod enrich;
mod io;

use cli::RootArgs;

fn main() -> Result<()> {
    let args = RootArgs::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    run(args)
}

fn run(args: RootArgs) -> Result<()> {
    let input = io::find_input(&args.input_dir, &args.input_name)?;
    let mut document = io::read_document(&input)?;

    let codes = enrich::resolve(args.profile, &args.codes);
    tracing::debug!(input = %input.display(), codes = codes.len(), "resolved enrichment policy");
    enrich::enrich(&mut document, &codes);

    let formats: BTreeSet<_> = args.format.iter().copied().collect();
    for format in formats {
        let path = io::write_document(&document, &args.output_dir, &args.output_name, format)?;
        println!("Wrote post-processed specification to {}", path.display());
    }
    Ok(())
}
