use anyhow::Result;
use clap::Parser;

use shelfsim::catalog::{demo_catalog, load_catalog};
use shelfsim::cli::Cli;
use shelfsim::inventory::Inventory;
use shelfsim::output;
use shelfsim::report::ReportBuilder;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let items = match &cli.catalog {
        Some(path) => load_catalog(path)?,
        None => demo_catalog(),
    };

    let mut builder = ReportBuilder::new(Inventory::new(items));

    if !cli.quiet {
        output::print_day(&builder.snapshots()[0]);
    }

    for _ in 0..cli.days {
        let snapshot = builder.advance_day();
        if !cli.quiet {
            output::print_day(snapshot);
        }
    }

    let report = builder.build();

    if !cli.quiet {
        output::print_footer(&report);
    }

    if let Some(path) = &cli.output {
        output::write_report(&report, path)?;
        println!("Full report written to: {}", path.display());
    }

    Ok(())
}
