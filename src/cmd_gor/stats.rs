use clap::*;
use std::io::Write;

use gor::libs::schedule::{resolve, ResolveConfig};

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("stats")
        .about("Per-group scores of the best selection")
        .after_help(
            r###"
Runs the same selection as `gor resolve` but writes one line per group instead of the
selected features:

    # Type '<seqid><type><strand>' scored: <total score>\t<selected count>

The selected count shares the line with the score, separated by a tab; it is not written
on a line of its own. Totals are exact for any integer scores.

Examples:
  gor stats in.gff
  gor stats --total in.gff -o scores.txt

"###,
        )
        .args(super::common_args())
        .arg(
            Arg::new("total")
                .long("total")
                .action(ArgAction::SetTrue)
                .help("Append a line with the totals over all groups"),
        )
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    //----------------------------
    // Args
    //----------------------------
    let config = ResolveConfig {
        presorted: args.get_flag("sorted"),
        diagnostics: true,
    };
    let is_total = args.get_flag("total");

    //----------------------------
    // Ops
    //----------------------------
    let groups = super::load_groups(args, &config)?;
    let aggregator = resolve(&groups, &config);

    //----------------------------
    // Output
    //----------------------------
    let mut writer = gor::writer(args.get_one::<String>("outfile").unwrap())?;
    for group in aggregator.groups() {
        writeln!(
            writer,
            "# Type '{}' scored: {:10}\t{}",
            group.key, group.weight, group.count
        )?;
    }
    if is_total {
        writeln!(
            writer,
            "# Total scored: {}\t{}",
            aggregator.total_weight(),
            aggregator.total_count()
        )?;
    }
    writer.flush()?;

    Ok(())
}
