// crates/districtdb-core/src/model.rs

use crate::tree::PATH_SEPARATOR;
use serde::{Deserialize, Serialize};

/// Fallback coordinates (Seoul City Hall). The tree alone cannot resolve
/// coordinates; an external geocoder overrides these after the fact, but
/// downstream consumers can always rely on the fields being present.
pub const FALLBACK_LAT: f64 = 37.5665;
pub const FALLBACK_LON: f64 = 126.9780;

/// A structured search result for one region at any depth.
///
/// Constructed fresh on every query and never mutated. Persisting selected
/// records (favorites) is a caller concern; field names serialize in
/// camelCase for those stores.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceRecord {
    /// The full path string itself — stable and collision-free.
    pub id: String,
    pub province: String,
    pub city: Option<String>,
    pub town: Option<String>,
    /// The most specific component: town, else city, else province.
    pub display_name: String,
    /// All components joined with single spaces.
    pub full_address: String,
    pub lat: f64,
    pub lon: f64,
}

impl PlaceRecord {
    /// Map a full path string to a record. Total: any path the expander
    /// produces (and any other string) yields a well-formed record.
    ///
    /// ```
    /// use districtdb_core::PlaceRecord;
    ///
    /// let record = PlaceRecord::from_path("서울특별시-강남구-압구정동");
    /// assert_eq!(record.province, "서울특별시");
    /// assert_eq!(record.display_name, "압구정동");
    /// assert_eq!(record.full_address, "서울특별시 강남구 압구정동");
    /// ```
    pub fn from_path(path: &str) -> Self {
        let parts: Vec<&str> = path.split(PATH_SEPARATOR).collect();
        let province = parts.first().copied().unwrap_or_default().to_string();
        let city = parts.get(1).map(|part| part.to_string());
        let town = parts.get(2).map(|part| part.to_string());

        let display_name = town
            .clone()
            .or_else(|| city.clone())
            .unwrap_or_else(|| province.clone());

        PlaceRecord {
            id: path.to_string(),
            province,
            city,
            town,
            display_name,
            full_address: parts.join(" "),
            lat: FALLBACK_LAT,
            lon: FALLBACK_LON,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_three_component_paths() {
        let record = PlaceRecord::from_path("서울특별시-강남구-압구정동");
        assert_eq!(record.id, "서울특별시-강남구-압구정동");
        assert_eq!(record.province, "서울특별시");
        assert_eq!(record.city.as_deref(), Some("강남구"));
        assert_eq!(record.town.as_deref(), Some("압구정동"));
        assert_eq!(record.display_name, "압구정동");
        assert_eq!(record.full_address, "서울특별시 강남구 압구정동");
    }

    #[test]
    fn maps_two_component_paths() {
        let record = PlaceRecord::from_path("서울특별시-강남구");
        assert_eq!(record.city.as_deref(), Some("강남구"));
        assert_eq!(record.town, None);
        assert_eq!(record.display_name, "강남구");
        assert_eq!(record.full_address, "서울특별시 강남구");
    }

    #[test]
    fn maps_single_component_paths() {
        let record = PlaceRecord::from_path("세종특별자치시");
        assert_eq!(record.city, None);
        assert_eq!(record.town, None);
        assert_eq!(record.display_name, "세종특별자치시");
        assert_eq!(record.full_address, "세종특별자치시");
    }

    #[test]
    fn coordinates_are_always_present() {
        let record = PlaceRecord::from_path("부산광역시");
        assert_eq!(record.lat, FALLBACK_LAT);
        assert_eq!(record.lon, FALLBACK_LON);
    }

    #[cfg(feature = "json")]
    #[test]
    fn serialized_field_names_are_camel_case() {
        let record = PlaceRecord::from_path("서울특별시-중구");
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("displayName").is_some());
        assert!(json.get("fullAddress").is_some());
    }
}
