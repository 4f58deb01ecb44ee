use std::path::PathBuf;

use clap::Parser;
use text_similarity::{
    config::{
        CorpusConfig, StopWordSet, DEFAULT_CORPUS_SIZE, DEFAULT_PROFILE_LIMIT, DEFAULT_TOP_K,
    },
    error::Result,
    source::{DirectorySource, DocumentSource, NumberedFileSource, DEFAULT_PREFIX},
    SimilarityPipeline, SimilarityReport,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory holding the documents
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,

    /// File name prefix of numbered documents (`<prefix><index>.txt`)
    #[arg(long, default_value = DEFAULT_PREFIX)]
    prefix: String,

    /// Number of numbered documents in the corpus (ignored with --dir-mode)
    #[arg(short = 'n', long, default_value_t = DEFAULT_CORPUS_SIZE)]
    count: usize,

    /// Use every file under the data directory instead of numbered documents
    #[arg(long, default_value = "false")]
    dir_mode: bool,

    /// Number of most similar pairs to report
    #[arg(short = 'k', long, default_value_t = DEFAULT_TOP_K)]
    top_k: usize,

    /// Maximum number of terms kept per document
    #[arg(long, default_value_t = DEFAULT_PROFILE_LIMIT)]
    profile_limit: usize,

    /// Comma separated stop words replacing the default set
    #[arg(long, value_delimiter = ',')]
    stop_words: Option<Vec<String>>,

    /// Profile documents in parallel
    #[arg(short, long, default_value = "false")]
    parallel: bool,

    /// Print the report as JSON
    #[arg(long, default_value = "false")]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

impl Args {
    /// `corpus_size` is `--count` for numbered documents, or the number of
    /// files found in directory mode.
    fn config(&self, corpus_size: usize) -> CorpusConfig {
        CorpusConfig {
            corpus_size,
            stop_words: self
                .stop_words
                .as_ref()
                .map_or_else(StopWordSet::default, StopWordSet::from_words),
            profile_limit: self.profile_limit,
            top_k: self.top_k,
            parallel: self.parallel,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose {
        "text_similarity=debug"
    } else {
        "text_similarity=info"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let directory = if args.dir_mode {
        Some(DirectorySource::new(&args.data_dir)?)
    } else {
        None
    };

    let config = args.config(directory.as_ref().map_or(args.count, DocumentSource::len));
    config.validate()?;

    let pipeline = SimilarityPipeline::new(&config);

    let report: SimilarityReport = if let Some(source) = directory {
        pipeline.run(&source)
    } else {
        let source = NumberedFileSource::new(&args.data_dir, &args.prefix, config.corpus_size);
        pipeline.run(&source)
    };

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{report}");
    }

    Ok(())
}
