use std::collections::HashMap;

use crate::profile::FrequencyProfile;

/// Additive overlap score: for every term present in both profiles, the sum of
/// its frequency in each. Terms present on one side only contribute nothing.
///
/// Zero for disjoint or empty profiles, at most 2, and bit-for-bit symmetric.
pub fn similarity(a: &FrequencyProfile, b: &FrequencyProfile) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    if small.is_empty() {
        return 0.0;
    }

    let lookup: HashMap<&str, f64> = large.iter().collect();

    let mut shared: Vec<(&str, f64)> = small
        .iter()
        .filter_map(|(term, frequency)| {
            lookup
                .get(term)
                .map(|other| (term, frequency + other))
        })
        .collect();

    // Summation order must not depend on argument order.
    shared.sort_unstable_by(|x, y| x.0.cmp(y.0));

    // `Sum` for floats starts from -0.0; disjoint profiles must score +0.0.
    shared.iter().fold(0.0, |total, (_, score)| total + score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::CorpusConfig, profile::Profiler};

    fn profile(text: &str) -> FrequencyProfile {
        Profiler::from_config(&CorpusConfig::default()).profile(text)
    }

    #[test]
    fn identical_documents() {
        let a = profile("cat cat dog");
        let b = profile("cat cat dog");

        assert!((similarity(&a, &b) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn disjoint_vocabularies() {
        let a = profile("apple apple banana");
        let b = profile("cherry cherry date");

        let score = similarity(&a, &b);
        assert!(score.abs() < f64::EPSILON);
        assert!(score.is_sign_positive());
        assert!(similarity(&b, &a).is_sign_positive());
    }

    #[test]
    fn partial_overlap() {
        // CAT: 0.5 + 0.25, DOG: 0.5 + 0.25
        let a = profile("cat dog");
        let b = profile("cat dog fish bird");

        assert!((similarity(&a, &b) - 1.5).abs() < 1e-9);
    }

    #[test]
    fn empty_profiles() {
        let empty = FrequencyProfile::default();
        let a = profile("cat cat dog");

        assert!(similarity(&empty, &empty).abs() < f64::EPSILON);
        assert!(similarity(&empty, &a).abs() < f64::EPSILON);
        assert!(similarity(&a, &empty).abs() < f64::EPSILON);
    }

    #[test]
    fn symmetric() {
        let texts = [
            "the quick brown fox jumps over the lazy dog",
            "a lazy dog sleeps in the sun all day long dog",
            "quick quick quick fox",
            "",
            "sun moon stars sun moon fox dog brown",
        ];
        let profiles: Vec<_> = texts.iter().map(|text| profile(text)).collect();

        for a in &profiles {
            for b in &profiles {
                assert_eq!(similarity(a, b).to_bits(), similarity(b, a).to_bits());
            }
        }
    }
}
