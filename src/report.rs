use std::fmt;

use serde::Serialize;

use crate::{error::Result, ranker::RankedPair};

const SIGNIFICANT_DIGITS: usize = 6;
const MIN_FIXED_EXPONENT: i32 = -4;

/// Outcome of one similarity run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityReport {
    pub corpus_size: usize,
    pub top_k: usize,
    pub pairs: Vec<RankedPair>,
    /// Indices of documents that could not be loaded and were scored as empty
    pub unavailable: Vec<usize>,
}

impl SimilarityReport {
    pub const fn new(
        corpus_size: usize,
        top_k: usize,
        pairs: Vec<RankedPair>,
        unavailable: Vec<usize>,
    ) -> Self {
        Self {
            corpus_size,
            top_k,
            pairs,
            unavailable,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for SimilarityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Top {} similar pairs of text books:", self.top_k)?;

        for pair in &self.pairs {
            writeln!(
                f,
                "Pair ({}, {}) with similarity index: {}",
                pair.first,
                pair.second,
                format_score(pair.score)
            )?;
        }

        Ok(())
    }
}

/// Six significant digits with trailing zeros removed, switching to an
/// exponent outside `1e-4..1e6`: `2`, `0.5`, `1.66667`, `9.5e-06`.
pub fn format_score(score: f64) -> String {
    if score == 0.0 || !score.is_finite() {
        return format!("{score}");
    }

    // Rounding to the significant digits may bump the exponent.
    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, score);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let max_fixed_exponent = i32::try_from(SIGNIFICANT_DIGITS).unwrap_or(i32::MAX);

    if exponent < MIN_FIXED_EXPONENT || exponent >= max_fixed_exponent {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        );
    }

    let decimals = usize::try_from(max_fixed_exponent - 1 - exponent).unwrap_or(0);
    trim_fraction(&format!("{score:.decimals$}")).to_string()
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_formatting() {
        assert_eq!(format_score(0.0), "0");
        assert_eq!(format_score(2.0), "2");
        assert_eq!(format_score(0.5), "0.5");
        assert_eq!(format_score(5.0 / 3.0), "1.66667");
        assert_eq!(format_score(0.123_456_789), "0.123457");
        assert_eq!(format_score(0.02), "0.02");
    }

    #[test]
    fn exponent_for_small_and_large_scores() {
        assert_eq!(format_score(0.000_009_5), "9.5e-06");
        assert_eq!(format_score(1.234_5e-7), "1.2345e-07");
        assert_eq!(format_score(0.0001), "0.0001");
        assert_eq!(format_score(0.000_099_999_99), "0.0001");
        assert_eq!(format_score(1_234_567.0), "1.23457e+06");
    }

    #[test]
    fn text_rendering() {
        let report = SimilarityReport::new(
            4,
            10,
            vec![RankedPair::new(2.0, 0, 3), RankedPair::new(0.5, 1, 2)],
            vec![],
        );

        assert_eq!(
            report.to_string(),
            "Top 10 similar pairs of text books:\n\
             Pair (0, 3) with similarity index: 2\n\
             Pair (1, 2) with similarity index: 0.5\n"
        );
    }

    #[test]
    fn json_rendering() {
        let report = SimilarityReport::new(3, 10, vec![RankedPair::new(1.5, 0, 2)], vec![1]);
        let value: serde_json::Value =
            serde_json::from_str(&report.to_json().expect("Failed to serialize"))
                .expect("Failed to parse");

        assert_eq!(value["corpus_size"], 3);
        assert_eq!(value["top_k"], 10);
        assert_eq!(value["pairs"][0]["first"], 0);
        assert_eq!(value["pairs"][0]["second"], 2);
        assert_eq!(value["pairs"][0]["score"], 1.5);
        assert_eq!(value["unavailable"][0], 1);
    }
}
