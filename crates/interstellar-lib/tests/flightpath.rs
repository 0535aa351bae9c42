use std::io::Cursor;

use interstellar_lib::{
    load_celestials, load_connections, Error, FlightPath, Starmap,
};

/// Systems A, B, C with directed connections A -> B and B -> C only.
fn chain_map() -> Starmap {
    let mut map = Starmap::new();
    load_celestials(Cursor::new("System,A\nSystem,B\nSystem,C\n"), &mut map)
        .expect("in-memory input");
    load_connections(Cursor::new("A,B\nB,C\n"), &mut map).expect("in-memory input");
    map
}

fn path_of(map: &Starmap, names: &[&str]) -> FlightPath {
    let mut path = FlightPath::new();
    for name in names {
        path.append(map, name).expect("known system");
    }
    path
}

#[test]
fn path_following_connections_is_valid() {
    let map = chain_map();
    assert!(path_of(&map, &["A", "B", "C"]).is_valid(&map));
}

#[test]
fn path_skipping_a_hop_is_invalid() {
    let map = chain_map();
    assert!(!path_of(&map, &["A", "C"]).is_valid(&map));
}

#[test]
fn path_against_edge_direction_is_invalid() {
    let map = chain_map();
    assert!(!path_of(&map, &["C", "B"]).is_valid(&map));
}

#[test]
fn empty_and_single_step_paths_are_vacuously_valid() {
    let map = chain_map();
    assert!(FlightPath::new().is_valid(&map));
    assert!(path_of(&map, &["B"]).is_valid(&map));
}

#[test]
fn append_unknown_name_leaves_path_unchanged() {
    let map = chain_map();
    let mut path = path_of(&map, &["A"]);
    let error = path.append(&map, "D").expect_err("unknown system");
    assert!(matches!(error, Error::UnknownSystem { ref name, .. } if name == "D"));
    assert_eq!(path.len(), 1);
    assert_eq!(path.steps(), &[map.system_id_by_name("A").unwrap()]);
}

#[test]
fn append_failure_carries_fuzzy_suggestions() {
    let mut map = Starmap::new();
    load_celestials(Cursor::new("System,Alpha Centauri\n"), &mut map)
        .expect("in-memory input");

    let mut path = FlightPath::new();
    let error = path.append(&map, "Alpha Centuri").expect_err("misspelled");
    match error {
        Error::UnknownSystem { suggestions, .. } => {
            assert_eq!(suggestions, vec!["Alpha Centauri".to_string()]);
        }
        other => panic!("expected UnknownSystem, got {other:?}"),
    }
}

#[test]
fn clear_resets_to_empty() {
    let map = chain_map();
    let mut path = path_of(&map, &["A", "B"]);
    path.clear();
    assert!(path.is_empty());
    assert!(path.is_valid(&map));
}

#[test]
fn route_string_joins_names_with_arrows() {
    let map = chain_map();
    let path = path_of(&map, &["A", "B", "C"]);
    assert_eq!(path.route_string(&map), "A -> B -> C");
}

#[test]
fn connections_string_renders_each_step() {
    let map = chain_map();
    let path = path_of(&map, &["A", "B", "C"]);
    assert_eq!(
        path.connections_string(&map),
        "A -> {B}\nB -> {C}\nC -> {}"
    );
}

#[test]
fn describe_celestials_lists_systems_in_order() {
    let mut map = Starmap::new();
    load_celestials(
        Cursor::new("Star,Sun,Sol,G2V,5778,1.0\nSystem,Vega\n"),
        &mut map,
    )
    .expect("in-memory input");

    let path = path_of(&map, &["Sol", "Vega"]);
    let details = path.describe_celestials(&map);
    assert!(details.starts_with("Sol\n  Star Sun of type G2V"));
    assert!(details.ends_with("\nVega"));
}

#[test]
fn validation_is_read_only() {
    let map = chain_map();
    let path = path_of(&map, &["A", "C"]);
    assert!(!path.is_valid(&map));
    // A second run over the same state answers identically.
    assert!(!path.is_valid(&map));
    assert_eq!(path.len(), 2);
}
