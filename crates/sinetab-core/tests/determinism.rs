use sinetab_core::{generate_table, Amplitude, Wavetable};

#[test]
fn deterministic_table() {
    for k in [1.0, 0.85, 0.3] {
        let t1 = generate_table(k).unwrap();
        let t2 = generate_table(k).unwrap();
        assert_eq!(t1, t2, "k={k}");
        assert_eq!(t1.id_hex(), t2.id_hex());
    }
}

#[test]
fn typed_and_checked_paths_agree() {
    let a = Amplitude::new(0.85).unwrap();
    assert_eq!(Wavetable::generate(a), generate_table(0.85).unwrap());
    assert_eq!(Wavetable::generate(Amplitude::default()), generate_table(1.0).unwrap());
}
