// crates/districtdb-core/src/search.rs

//! # Matcher & Ranker
//!
//! Candidates come from [`DistrictDb::expand`]; a candidate survives when
//! its decomposed form contains the decomposed query as a contiguous
//! substring. Separators are replaced with spaces before decomposition so a
//! query can span region levels.
//!
//! Survivors are ranked by tier, then by address length, with the stable
//! sort keeping encounter order for full ties.

use crate::common::DbStats;
use crate::hangul::decompose;
use crate::model::PlaceRecord;
use crate::traits::{DistrictSearch, NameMatch};
use crate::tree::{DistrictDb, PATH_SEPARATOR};

/// Upper bound on returned records per query.
pub const RESULT_LIMIT: usize = 50;

/// Relevance tier of one candidate. Lower sorts first.
///
/// An exact display-name hit beats a display-name substring hit, which
/// beats a hit that only occurred elsewhere in the full path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum MatchTier {
    ExactName,
    NameContains,
    PathOnly,
}

fn classify(record: &PlaceRecord, query_folded: &str, query_jamo: &str) -> MatchTier {
    if record.is_named(query_folded, query_jamo) {
        MatchTier::ExactName
    } else if record.name_contains(query_jamo) {
        MatchTier::NameContains
    } else {
        MatchTier::PathOnly
    }
}

impl DistrictSearch for DistrictDb {
    fn stats(&self) -> DbStats {
        self.level_counts()
    }

    fn search(&self, query: &str) -> Vec<PlaceRecord> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }

        let query_folded = trimmed.to_lowercase();
        let query_jamo = decompose(trimmed);

        // Re-deriving the candidate list per query is a few milliseconds
        // for tens of thousands of entries; callers that need more cache
        // upstream.
        let mut hits: Vec<(MatchTier, PlaceRecord)> = Vec::new();
        for path in self.expand() {
            // Separators must not block a match spanning levels.
            let normalized = path.replace(PATH_SEPARATOR, " ");
            if !decompose(&normalized).contains(&query_jamo) {
                continue;
            }
            let record = PlaceRecord::from_path(&path);
            let tier = classify(&record, &query_folded, &query_jamo);
            hits.push((tier, record));
        }

        // Address length in chars, not bytes: the names are multi-byte.
        hits.sort_by_cached_key(|(tier, record)| (*tier, record.full_address.chars().count()));
        hits.truncate(RESULT_LIMIT);
        hits.into_iter().map(|(_, record)| record).collect()
    }
}
