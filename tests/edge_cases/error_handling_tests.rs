//! Error Handling and Edge Case Tests
//!
//! Dangling cast links must be dropped quietly; malformed tables must fail
//! the load with a data source error.

use degrees_engine::{
    load_dataset, DegreesError, MovieId, NeighborResolver, PathSearch, PersonId, SearchOutcome,
};

use crate::common::TestDataset;

// ============================================================================
// REFERENTIAL INTEGRITY
// ============================================================================

#[test]
fn test_dangling_links_are_dropped() {
    let index = TestDataset::new()
        .person("1", "Ann", "1970")
        .person("2", "Ben", "1971")
        .movie("10", "Shared", "2000")
        .star("1", "10")
        .star("2", "10")
        .star("3", "10")
        .star("1", "11")
        .star("ghost", "phantom")
        .load();

    let stats = index.stats();
    assert_eq!(stats.links, 2);
    assert_eq!(stats.skipped_links, 3);

    let movie = index.movie(&MovieId::from("10")).unwrap();
    assert_eq!(movie.star_ids.len(), 2);
    assert!(index.movie(&MovieId::from("11")).is_none());
    assert!(index.person(&PersonId::from("3")).is_none());

    let ann = index.person(&PersonId::from("1")).unwrap();
    assert_eq!(ann.movie_ids.len(), 1);
    assert_eq!(ann.name, "Ann");
    assert_eq!(ann.birth.as_deref(), Some("1970"));
}

#[test]
fn test_dangling_links_never_appear_as_neighbors() {
    let index = TestDataset::new()
        .person("1", "Ann", "")
        .movie("10", "Solo", "2000")
        .star("1", "10")
        .star("ghost", "10")
        .load();

    let neighbors = NeighborResolver::new(&index).neighbors(&PersonId::from("1"));
    assert_eq!(neighbors.len(), 1);
    assert!(neighbors.iter().all(|step| step.person_id.as_str() == "1"));
}

#[test]
fn test_duplicate_links_are_idempotent() {
    let index = TestDataset::new()
        .person("1", "Ann", "")
        .person("2", "Ben", "")
        .movie("10", "Shared", "2000")
        .star("1", "10")
        .star("1", "10")
        .star("2", "10")
        .load();

    let outcome = PathSearch::new(&index)
        .shortest_path(&PersonId::from("1"), &PersonId::from("2"))
        .unwrap();
    assert_eq!(outcome.degrees(), Some(1));
    assert_eq!(index.movie(&MovieId::from("10")).unwrap().star_ids.len(), 2);
    assert_eq!(index.stats().links, 2);
}

// ============================================================================
// EMPTY AND MALFORMED TABLES
// ============================================================================

#[test]
fn test_header_only_tables_load_empty() {
    let data = TestDataset::new();
    let index = data.load();
    assert_eq!(index.stats().people, 0);
    assert_eq!(index.stats().movies, 0);
}

#[test]
fn test_person_without_movies_is_isolated() {
    let index = TestDataset::new()
        .person("1", "Ann", "")
        .person("2", "Ben", "")
        .load();

    let outcome = PathSearch::new(&index)
        .shortest_path(&PersonId::from("1"), &PersonId::from("2"))
        .unwrap();
    assert_eq!(outcome, SearchOutcome::NotConnected);
}

#[test]
fn test_missing_required_column() {
    let data = TestDataset::new();
    data.write();
    data.write_raw("movies.csv", "id,title\n10,Untimed\n");

    let err = load_dataset(data.path()).unwrap_err();
    match err {
        DegreesError::MissingColumn { path, column } => {
            assert!(path.ends_with("movies.csv"));
            assert_eq!(column, "year");
        }
        other => panic!("expected missing column, got {other}"),
    }
}

#[test]
fn test_empty_file_has_no_header() {
    let data = TestDataset::new();
    data.write();
    data.write_raw("people.csv", "");

    let err = load_dataset(data.path()).unwrap_err();
    assert!(matches!(err, DegreesError::MissingColumn { .. }));
}

#[test]
fn test_quoted_fields_round_trip() {
    let index = TestDataset::new()
        .person("1", "O\"Brien, Pat", "")
        .movie("10", "Good, the Bad and the Ugly, The", "1966")
        .star("1", "10")
        .load();

    let movie = index.movie(&MovieId::from("10")).unwrap();
    assert_eq!(movie.title, "Good, the Bad and the Ugly, The");
    assert_eq!(
        index.person(&PersonId::from("1")).unwrap().name,
        "O\"Brien, Pat"
    );
}

#[test]
fn test_columns_in_any_order() {
    let data = TestDataset::new();
    data.write();
    data.write_raw("people.csv", "birth,name,id\n1950,Ann,1\n");
    data.write_raw("movies.csv", "year,id,title\n2000,10,Shared\n");
    data.write_raw("stars.csv", "movie_id,person_id\n10,1\n");

    let index = load_dataset(data.path()).unwrap();
    let ann = index.person(&PersonId::from("1")).unwrap();
    assert_eq!(ann.birth.as_deref(), Some("1950"));
    assert_eq!(ann.movie_ids.len(), 1);
}
