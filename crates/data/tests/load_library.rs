//! Integration tests for the CSV loader boundary

use nact_data::{read_activation_file, read_store, DataStore, LimitKind};
use nact_nuclide::Nuclide;
use rstest::{fixture, rstest};

#[fixture]
fn store() -> DataStore {
    read_store(
        "./data/activation.csv",
        "./data/decay.csv",
        "./data/limits.csv",
    )
    .unwrap()
}

#[rstest]
fn bad_rows_drop_during_construction(store: DataStore) {
    // the Zz parent and the unparseable daughter never make it in
    let names = store.nuclide_names();
    assert!(!names.iter().any(|n| n.starts_with("Zz")));
    assert!(names.contains(&"Co-59".to_string()));
    assert!(names.contains(&"Hf-177".to_string()));
}

#[rstest]
fn flexible_numbers_round_trip() {
    let records = read_activation_file("./data/activation.csv").unwrap();

    // "2090" and the comma-decimal "1,2068e-6" both read cleanly
    let lu176 = records
        .iter()
        .find(|r| r.symbol == "Lu" && r.mass == 176)
        .unwrap();
    assert_eq!(lu176.cross_section, 2090.0);
    assert_eq!(lu176.daughter_lambda, 1.2068e-6);
}

#[rstest]
fn abundances_follow_record_order(store: DataStore) {
    let isotopes = store.isotopes_of("Lu");
    assert_eq!(isotopes.len(), 2);
    assert_eq!(isotopes[0].mass, 176);
    assert_eq!(isotopes[0].abundance, 0.0259);
    assert_eq!(isotopes[1].mass, 175);
    assert_eq!(isotopes[1].abundance, 0.9741);

    // case-insensitive element lookup, unknown elements are empty
    assert_eq!(store.isotopes_of("lu").len(), 2);
    assert!(store.isotopes_of("Xx").is_empty());
}

#[rstest]
#[case("Co-60", Some(0.1), Some(10.0))] // case 1
#[case("Fe-55", Some(1000.0), Some(100000.0))] // case 2
#[case("Tc-99m", Some(100.0), None)] // case 3
#[case("Ni-60", None, None)] // case 4
fn limits_read_per_kind(
    store: DataStore,
    #[case] nuclide: &str,
    #[case] clearance: Option<f64>,
    #[case] exemption: Option<f64>,
) {
    let nuclide = Nuclide::try_from(nuclide).unwrap();
    assert_eq!(store.limit(&nuclide, LimitKind::Clearance), clearance);
    assert_eq!(store.limit(&nuclide, LimitKind::Exemption), exemption);
}

#[rstest]
fn decay_chain_is_connected(store: DataStore) {
    let tc99m = Nuclide::try_from("Tc-99m").unwrap();
    let edges = store.decay_edges_from(&tc99m);
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].daughter, Nuclide::try_from("Tc-99").unwrap());
    assert_eq!(edges[0].branching, 1.0);

    // half-life of Tc-99m is close to 6 hours
    let half_life = store.half_life(&tc99m).unwrap();
    assert!((half_life - 6.0067 * 3600.0).abs() / half_life < 1e-3);
}
