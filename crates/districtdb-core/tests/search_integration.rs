//! Integration tests over the bundled dataset: loading, expansion, and the
//! full query pipeline from keystrokes to ranked records.

use districtdb_core::{DistrictDb, DistrictSearch, NameMatch, PlaceRecord, RESULT_LIMIT};

#[test]
fn bundled_dataset_loads_and_has_content() {
    let db = DistrictDb::load().expect("bundled dataset should load");
    let stats = db.stats();
    assert!(stats.provinces >= 4);
    assert!(stats.cities > stats.provinces);
    assert!(stats.towns > stats.cities);
}

#[test]
fn intermediate_levels_are_searchable() {
    let db = DistrictDb::load().unwrap();
    // 강남구 exists only as a branch key in the dataset, never as its own
    // entry, yet it must come back as a selectable region.
    let results = db.search("강남구");
    assert_eq!(results[0].id, "서울특별시-강남구");
    assert_eq!(results[0].display_name, "강남구");
}

#[test]
fn province_with_no_city_level_is_searchable() {
    let db = DistrictDb::load().unwrap();
    let results = db.search("조치원");
    assert!(results
        .iter()
        .any(|record| record.id == "세종특별자치시-조치원읍"));
}

#[test]
fn half_typed_query_reaches_full_names() {
    let db = DistrictDb::load().unwrap();
    // 압구정 mid-type: 압구ㅈ
    let results = db.search("압구ㅈ");
    assert!(results
        .iter()
        .any(|record| record.display_name == "압구정동"));
}

#[test]
fn shared_town_names_rank_general_regions_first() {
    let db = DistrictDb::load().unwrap();
    // 중구 exists in both 서울 and 부산; both must surface, city level
    // before any town that merely contains the query in its path.
    let results = db.search("중구");
    let exact: Vec<&PlaceRecord> = results
        .iter()
        .filter(|record| record.display_name == "중구")
        .collect();
    assert_eq!(exact.len(), 2);
    assert!(results
        .iter()
        .position(|r| r.id == "서울특별시-중구")
        .unwrap()
        < results.iter().position(|r| r.id == "서울특별시-중구-명동").unwrap());
}

#[test]
fn results_never_exceed_the_limit() {
    let db = DistrictDb::load().unwrap();
    // ㅇ appears in almost every name's jamo stream.
    let results = db.search("ㅇ");
    assert!(results.len() <= RESULT_LIMIT);
    assert!(!results.is_empty());
}

#[test]
fn records_expose_the_full_hierarchy() {
    let db = DistrictDb::load().unwrap();
    let results = db.search("명동");
    let record = results
        .iter()
        .find(|record| record.display_name == "명동")
        .expect("명동 should be found");
    assert_eq!(record.province, "서울특별시");
    assert_eq!(record.city.as_deref(), Some("중구"));
    assert_eq!(record.town.as_deref(), Some("명동"));
    assert_eq!(record.full_address, "서울특별시 중구 명동");
    // Sentinel coordinates until a geocoder fills in real ones.
    assert!(record.lat > 0.0 && record.lon > 0.0);
}

#[test]
fn name_match_helpers_agree_with_search() {
    use districtdb_core::hangul::decompose;

    let record = PlaceRecord::from_path("서울특별시-강남구");
    assert!(record.is_named("강남구", &decompose("강남구")));
    assert!(record.name_contains(&decompose("강ㄴ")));
    assert!(!record.name_contains(&decompose("부산")));
}

#[test]
fn repeated_queries_are_stable() {
    let db = DistrictDb::load().unwrap();
    let first = db.search("동");
    let second = db.search("동");
    assert_eq!(first, second);
}
