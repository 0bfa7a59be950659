mod collapse;
mod emit;
mod ingest;
mod label;

use anyhow::Result;
use bpaf::Bpaf;
use collapse_stats::Summary;
use ingest::Delimiter;
use log::*;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Collapse rows which share an id (the first field) into a single row per
/// id, by taking the mean or median of each column
#[derive(Bpaf, Debug, Clone)]
#[bpaf(options, version)]
struct Options {
    /// Split fields on tabs only, rather than on any run of whitespace
    tabs: bool,
    /// The table to collapse.  Its first line must be a header
    #[bpaf(positional("INPATH"))]
    input: PathBuf,
    /// Where to write the collapsed table.  Overwritten if it exists
    #[bpaf(positional("OUTPATH"))]
    output: PathBuf,
    /// Either "mean" (alias F) or "median" (alias T)
    #[bpaf(positional("MODE"))]
    mode: Summary,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let opts = options().run();
    match run(&opts) {
        Ok(()) => (),
        Err(e) => {
            // Ignore EPIPE
            if let Some(e) = e.downcast_ref::<std::io::Error>() {
                if e.kind() == std::io::ErrorKind::BrokenPipe {
                    return;
                }
            }
            eprintln!("Error: {:#}", e);
            std::process::exit(1)
        }
    }
}

// ingest -> collapse -> emit
fn run(opts: &Options) -> Result<()> {
    let start = Instant::now();
    let delimiter = if opts.tabs {
        Delimiter::Tab
    } else {
        Delimiter::Whitespace
    };
    debug!("Reading {} ({:?} delimited)", opts.input.display(), delimiter);
    let grouped = ingest::read_table(&opts.input, delimiter)?;
    let collapsed = collapse::collapse(grouped, opts.mode);
    emit::write_table_to_path(&opts.output, &collapsed)?;
    info!(
        "Done in {}",
        humantime::format_duration(round_to_millis(start.elapsed()))
    );
    Ok(())
}

fn round_to_millis(d: Duration) -> Duration {
    let millis = (d + Duration::from_micros(500)).as_millis();
    Duration::from_millis(u64::try_from(millis).unwrap_or(u64::MAX))
}
