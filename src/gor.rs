extern crate clap;
use clap::*;
use tracing_subscriber::EnvFilter;

mod cmd_gor;

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr, GOR_LOG=debug shows per-group progress
    let log_level = std::env::var("GOR_LOG").unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::new(log_level))
        .init();

    let app = Command::new("gor")
        .version(crate_version!())
        .author(crate_authors!())
        .about("`gor` - GFF Overlap Resolver")
        .propagate_version(true)
        .arg_required_else_help(true)
        .color(ColorChoice::Auto)
        .subcommand(cmd_gor::resolve::make_subcommand())
        .subcommand(cmd_gor::stats::make_subcommand())
        .after_help(
            r###"Subcommands:

* resolve - Keep the best-scoring non-overlapping features
* stats   - Per-group scores of the best selection

Features are grouped by sequence id, type and strand; groups never compete.

"###,
        );

    // Check which subcomamnd the user ran...
    match app.get_matches().subcommand() {
        Some(("resolve", sub_matches)) => cmd_gor::resolve::execute(sub_matches),
        Some(("stats", sub_matches)) => cmd_gor::stats::execute(sub_matches),
        _ => unreachable!(),
    }?;

    Ok(())
}
