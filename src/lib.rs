pub mod config;
pub mod error;
pub mod pipeline;
pub mod profile;
pub mod ranker;
pub mod report;
pub mod similarity;
pub mod source;
pub mod tokenizer;

pub use config::{CorpusConfig, StopWordSet};
pub use error::{Error, Result};
pub use pipeline::SimilarityPipeline;
pub use profile::{FrequencyProfile, Profiler};
pub use ranker::{PairwiseRanker, RankedPair, SimilarityMatrix};
pub use report::SimilarityReport;
pub use source::{DirectorySource, DocumentSource, MemorySource, NumberedFileSource};
