use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the district tree.
///
/// Returned by [`DistrictSearch::stats`](crate::traits::DistrictSearch::stats),
/// these counts reflect the materialized in-memory tree after loading.
/// Entries deeper than three levels are counted as towns.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DbStats {
    pub provinces: usize,
    pub cities: usize,
    pub towns: usize,
}
