use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::{
    config::CorpusConfig,
    profile::{FrequencyProfile, Profiler},
    ranker::{PairwiseRanker, SimilarityMatrix},
    report::SimilarityReport,
    source::DocumentSource,
};

/// Per-document profiles in index order, plus the indices that failed to load.
#[derive(Debug, Clone, Default)]
pub struct CorpusProfiles {
    pub profiles: Vec<FrequencyProfile>,
    pub unavailable: Vec<usize>,
}

/// Load, profile, score and rank a whole corpus.
pub struct SimilarityPipeline {
    profiler: Profiler,
    ranker: PairwiseRanker,
    parallel: bool,
}

impl SimilarityPipeline {
    pub fn new(config: &CorpusConfig) -> Self {
        Self {
            profiler: Profiler::from_config(config),
            ranker: PairwiseRanker::from_config(config),
            parallel: config.parallel,
        }
    }

    pub fn run<S>(&self, source: &S) -> SimilarityReport
    where
        S: DocumentSource + ?Sized,
    {
        info!(documents = source.len(), parallel = self.parallel, "Profiling corpus");

        let corpus = self.profile_corpus(source);
        let matrix = SimilarityMatrix::from_profiles(&corpus.profiles);
        let pairs = self.ranker.rank(&matrix);

        info!(
            documents = matrix.size(),
            unavailable = corpus.unavailable.len(),
            reported = pairs.len(),
            "Ranked document pairs"
        );

        SimilarityReport::new(matrix.size(), self.ranker.top_k(), pairs, corpus.unavailable)
    }

    /// Profiles every document of `source`. A document that cannot be loaded
    /// gets an empty profile and is reported once in `unavailable`.
    pub fn profile_corpus<S>(&self, source: &S) -> CorpusProfiles
    where
        S: DocumentSource + ?Sized,
    {
        let results: Vec<Option<FrequencyProfile>> = if self.parallel {
            (0..source.len())
                .into_par_iter()
                .map(|index| self.profile_document(source, index))
                .collect()
        } else {
            (0..source.len())
                .map(|index| self.profile_document(source, index))
                .collect()
        };

        let mut corpus = CorpusProfiles::default();

        for (index, result) in results.into_iter().enumerate() {
            if let Some(profile) = result {
                corpus.profiles.push(profile);
            } else {
                corpus.unavailable.push(index);
                corpus.profiles.push(FrequencyProfile::default());
            }
        }

        corpus
    }

    fn profile_document<S>(&self, source: &S, index: usize) -> Option<FrequencyProfile>
    where
        S: DocumentSource + ?Sized,
    {
        match source.load(index) {
            Ok(text) => {
                let profile = self.profiler.profile(&text);
                debug!(
                    index,
                    accepted = profile.accepted_tokens(),
                    terms = profile.len(),
                    "Profiled document"
                );
                Some(profile)
            }
            Err(e) => {
                warn!(index, document = %source.describe(index), error = %e, "Document unavailable");
                None
            }
        }
    }
}
