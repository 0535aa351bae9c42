use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::PathBuf;

use interstellar_lib::{load_celestials, load_connections, Starmap};

fn three_systems() -> Starmap {
    let mut map = Starmap::new();
    load_celestials(Cursor::new("System,A\nSystem,B\nSystem,C\n"), &mut map)
        .expect("in-memory input");
    map
}

fn connect(map: &mut Starmap, input: &str) -> usize {
    load_connections(Cursor::new(input), map)
        .expect("in-memory input")
        .connections_added
}

#[test]
fn connections_are_directed_edges() {
    let mut map = three_systems();
    let added = connect(&mut map, "A,B\nB,C\n");
    assert_eq!(added, 2);

    let a = map.system_id_by_name("A").unwrap();
    let b = map.system_id_by_name("B").unwrap();
    assert!(map.connection_exists(a, "B"));
    assert!(map.connection_exists(b, "C"));
    // A -> B does not imply B -> A.
    assert!(!map.connection_exists(b, "A"));
}

#[test]
fn duplicate_targets_collapse_to_one_connection() {
    let mut map = three_systems();
    connect(&mut map, "A,B,B\nA,B\n");
    let a = map.system_id_by_name("A").unwrap();
    assert_eq!(map.get(a).unwrap().num_connections(), 1);
}

#[test]
fn unresolved_source_leaves_collection_unchanged() {
    let mut map = three_systems();
    let added = connect(&mut map, "Nowhere,A,B\n");
    assert_eq!(added, 0);
    assert_eq!(map.len(), 3, "connections file cannot create systems");
    assert!(map.iter().all(|system| system.num_connections() == 0));
}

#[test]
fn unresolved_targets_are_silently_dropped() {
    let mut map = three_systems();
    let added = connect(&mut map, "A,Nowhere,B,Elsewhere\n");
    assert_eq!(added, 1);
    let a = map.system_id_by_name("A").unwrap();
    assert!(map.connection_exists(a, "B"));
    assert_eq!(map.len(), 3);
}

#[test]
fn line_without_delimiter_is_skipped_without_error() {
    // Deliberate asymmetry with the celestial parser, which reports the
    // analogous case as an error.
    let mut map = three_systems();
    let report = load_connections(Cursor::new("A\n"), &mut map).expect("in-memory input");
    assert_eq!(report.lines_read, 1);
    assert_eq!(report.connections_added, 0);
}

#[test]
fn self_connections_are_not_filtered() {
    let mut map = three_systems();
    let added = connect(&mut map, "A,A\n");
    assert_eq!(added, 1);
    let a = map.system_id_by_name("A").unwrap();
    assert!(map.connection_exists(a, "A"));
}

#[test]
fn empty_fields_and_comments_are_skipped() {
    let mut map = three_systems();
    let added = connect(&mut map, "# comment\n\nA,,B,\n");
    assert_eq!(added, 1);
    let a = map.system_id_by_name("A").unwrap();
    assert_eq!(map.get(a).unwrap().num_connections(), 1);
}

#[test]
fn clear_connections_keeps_systems_and_bodies() {
    let mut map = three_systems();
    connect(&mut map, "A,B\nB,C\n");
    map.clear_connections();
    assert_eq!(map.len(), 3);
    assert!(map.iter().all(|system| system.num_connections() == 0));
}

#[test]
fn fixture_connections_load() {
    let fixtures = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures");
    let mut map = Starmap::new();
    let systems = File::open(fixtures.join("systems.csv")).expect("fixture present");
    load_celestials(BufReader::new(systems), &mut map).expect("fixture loads");

    let connections = File::open(fixtures.join("connections.csv")).expect("fixture present");
    let report =
        load_connections(BufReader::new(connections), &mut map).expect("fixture loads");

    assert_eq!(report.connections_added, 4);
    let sol = map.system_id_by_name("Sol").unwrap();
    assert!(map.connection_exists(sol, "Alpha Centauri"));
    assert!(map.connection_exists(sol, "Barnard"));
}
