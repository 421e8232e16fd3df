// crates/districtdb-core/src/traits.rs

use crate::common::DbStats;
use crate::hangul::decompose;
use crate::model::PlaceRecord;

/// Name-based matching helpers for types that expose a canonical display
/// name.
///
/// Comparisons run on decomposed jamo, so half-typed Hangul and leading
/// consonants still match. Callers pass the query in prepared form — folded
/// once and decomposed once per search — instead of this trait re-deriving
/// them per candidate.
pub trait NameMatch {
    /// The canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Exact-name check: raw case-folded equality or jamo equality, either
    /// one suffices.
    fn is_named(&self, query_folded: &str, query_jamo: &str) -> bool {
        self.name_str().to_lowercase() == query_folded
            || decompose(self.name_str()) == query_jamo
    }

    /// Substring check on the decomposed name.
    ///
    /// ```
    /// use districtdb_core::{NameMatch, PlaceRecord};
    /// use districtdb_core::hangul::decompose;
    ///
    /// let record = PlaceRecord::from_path("서울특별시-강남구");
    /// assert!(record.name_contains(&decompose("강ㄴ")));
    /// ```
    fn name_contains(&self, query_jamo: &str) -> bool {
        decompose(self.name_str()).contains(query_jamo)
    }
}

impl NameMatch for PlaceRecord {
    fn name_str(&self) -> &str {
        &self.display_name
    }
}

/// The search operations available on the district database.
pub trait DistrictSearch {
    /// Entry counts per region level.
    fn stats(&self) -> DbStats;

    /// Jamo-aware substring search over every region path, ranked and
    /// bounded to [`RESULT_LIMIT`](crate::search::RESULT_LIMIT) records.
    ///
    /// Never fails: empty and whitespace-only queries return an empty list,
    /// as does anything that simply matches nothing.
    ///
    /// ```no_run
    /// use districtdb_core::{DistrictDb, DistrictSearch};
    ///
    /// let db = DistrictDb::load().unwrap();
    /// for record in db.search("강남") {
    ///     println!("{} — {}", record.display_name, record.full_address);
    /// }
    /// ```
    fn search(&self, query: &str) -> Vec<PlaceRecord>;
}
