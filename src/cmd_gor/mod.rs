//! Subcommand modules for the `gor` binary.

pub mod resolve;
pub mod stats;

use clap::{Arg, ArgAction, ArgMatches};
use indexmap::IndexMap;

use gor::libs::gff::{read_regions, Region};
use gor::libs::interval::GroupKey;
use gor::libs::schedule::{group_by, ResolveConfig};

/// Arguments shared by every subcommand.
fn common_args() -> Vec<Arg> {
    vec![
        Arg::new("infile")
            .default_value("stdin")
            .index(1)
            .help("Input GFF file. [stdin] for standard input, .gz is decompressed"),
        Arg::new("sorted")
            .long("sorted")
            .short('s')
            .action(ArgAction::SetTrue)
            .help("Input is sorted by start within each group; checked, not re-sorted"),
        Arg::new("outfile")
            .long("outfile")
            .short('o')
            .default_value("stdout")
            .help("Output filename. [stdout] for screen"),
    ]
}

/// Reads and groups the whole input before anything is written.
fn load_groups(
    args: &ArgMatches,
    config: &ResolveConfig,
) -> anyhow::Result<IndexMap<GroupKey, Vec<Region>>> {
    let infile = args.get_one::<String>("infile").unwrap();

    let regions = read_regions(gor::reader(infile)?)?;
    tracing::debug!(infile = %infile, regions = regions.len(), "loaded features");

    let groups = group_by(regions, |reg| reg.key.clone(), config.presorted)?;
    Ok(groups)
}
