use clap::*;
use std::io::Write;

use gor::libs::gff::write_header;
use gor::libs::schedule::{resolve, ResolveConfig};

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("resolve")
        .about("Keep the best-scoring non-overlapping features")
        .after_help(
            r###"
Within each group of features sharing sequence id, type and strand, selects the subset of
pairwise non-overlapping features with the largest total score (column 6) and writes their
lines unchanged.

* Coordinates are closed, features sharing an endpoint overlap
* Scores must be integers; a '.' score is an error
* Among equally good subsets, the one made of earlier-ending features wins
* Groups are written in order of first appearance

Examples:
  gor resolve in.gff -o out.gff
  gor resolve --sorted in.sorted.gff.gz
  gor resolve --no-header in.gff

"###,
        )
        .args(super::common_args())
        .arg(
            Arg::new("no_header")
                .long("no-header")
                .action(ArgAction::SetTrue)
                .help("Don't write the ##gff-version and ##date lines"),
        )
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    //----------------------------
    // Args
    //----------------------------
    let config = ResolveConfig {
        presorted: args.get_flag("sorted"),
        diagnostics: false,
    };
    let no_header = args.get_flag("no_header");

    //----------------------------
    // Ops
    //----------------------------
    let groups = super::load_groups(args, &config)?;
    let aggregator = resolve(&groups, &config);

    //----------------------------
    // Output
    //----------------------------
    let mut writer = gor::writer(args.get_one::<String>("outfile").unwrap())?;
    if !no_header {
        write_header(&mut writer, chrono::Local::now().date_naive())?;
    }
    for reg in aggregator.selected() {
        write!(writer, "{}", reg)?;
    }
    writer.flush()?;

    Ok(())
}
