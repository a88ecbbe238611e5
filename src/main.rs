extern crate env_logger;
#[macro_use]
extern crate log;
use std::io::{stdout, Write};

use anyhow::{Context, Result};
use clap::Parser;

mod actions;
mod cli;
mod error;
mod filter;
mod io;
mod reader;
mod record;
mod stats;

use actions::{Action, Options, Outcome};
use cli::Cli;

fn try_main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    let cli = Cli::parse();

    info!("tfam v{}", cli::VERSION);

    // resolve the action before any input is read or any output file is created
    let action: Action = cli.action.parse()?;
    info!("Using action {:?}", action);

    let filter_set = cli
        .list
        .as_deref()
        .map(filter::load_filter_set)
        .transpose()?;

    let empty_filter = filter_set.as_ref().map_or(true, filter::FilterSet::is_empty);
    if empty_filter && matches!(action, Action::Keep | Action::Remove) {
        warn!("The filter list is empty or missing: `{}` will use an empty filter", cli.action);
    }

    if action.is_report() {
        if let Some(output) = &cli.output {
            warn!("`{}` prints a report, so {output} will not be written", cli.action);
        }
    }

    let input_name = cli.input.as_deref().unwrap_or("standard input");
    let records = {
        let reader = reader::open_input(cli.input.as_deref())?;
        reader::fasta::read_fasta(reader)
            .with_context(|| format!("Unable to read records from {input_name}"))?
    };
    info!("Read {} records from {input_name}", records.len());

    let opts = Options {
        filter_set,
        name_prefix: cli.prefix.clone(),
    };

    match action.apply(records, &opts) {
        Outcome::Transformed(records) => {
            let mut writer = io::get_writer(cli.output.as_deref())?;
            io::write_fasta(&mut writer, &records).context("Unable to write records")?;
            writer.flush().context("Unable to write records")?;
            info!("Wrote {} records", records.len());
        }
        Outcome::Report(report) => {
            if report.is_empty() {
                info!("Nothing to report");
            }
            let mut writer = stdout().lock();
            io::write_report(&mut writer, &report).context("Unable to write report")?;
            writer.flush().context("Unable to write report")?;
        }
    }

    Ok(())
}

fn main() {
    if let Err(err) = try_main() {
        error!("{}", err);

        // report any errors that are produced
        err.chain()
            .skip(1)
            .for_each(|cause| error!("  because: {}", cause));

        std::process::exit(1);
    }
}
