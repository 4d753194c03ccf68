use anyhow::Context;
use clap::Parser;
use keyside::{logger, Options, SortOrder, DEFAULT_THRESHOLD};
use rayon::ThreadPoolBuilder;
use std::path::PathBuf;

/// Tally which letters begin and end common words, and how that typing load splits across the
/// two halves of the keyboard.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Tab-separated file of `word<TAB>count` lines.
    #[clap(default_value = "google-books-common-words.txt")]
    input: PathBuf,

    /// Sort letters by descending count instead of alphabetically.
    #[clap(long)]
    sort_count: bool,

    /// Words seen fewer times than this are ignored.
    #[clap(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: u64,

    /// Sets the number of threads to use in thread pool.
    ///
    /// By default, only one thread is used.
    ///
    /// Specifying this with no value or a value of 0 uses the
    /// default number of threads for rayon.
    #[clap(short, long, default_value = "1", default_missing_value = "0")]
    threads: usize,

    /// Log what was skipped while loading, and other details, to stderr.
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init(args.verbose);

    let mut options = Options::default();
    options.threshold = args.threshold;
    if args.sort_count {
        options.sort = SortOrder::Count;
    }

    ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build_global()
        .context("could not set up the thread pool")?;

    let report = options.analyze(&args.input)?;
    print!("{}", report);
    Ok(())
}
