// File: crates/ring-bench/tests/extract.rs
// Purpose: Ordering, unit conversion and determinism of series extraction.

use ring_bench::{extract, parse_dataset, SeriesTriple, MILLIS_PER_SECOND, SAMPLE_DATASET};

#[test]
fn end_to_end_example() {
    let ds = parse_dataset(r#"{"1": {"generation": 6, "verification": 8}, "101": {"generation": 346, "verification": 342}}"#)
        .unwrap();
    let t = extract(&ds);
    assert_eq!(t.sizes, vec![1, 101]);
    assert_eq!(t.generation_seconds, vec![0.006, 0.346]);
    assert_eq!(t.verification_seconds, vec![0.008, 0.342]);
}

#[test]
fn sorts_numerically_not_lexically() {
    // As strings "1001" < "101" < "2"; as ring sizes the order is 2, 101, 1001.
    let ds = parse_dataset(
        r#"{"1001": {"generation": 3, "verification": 3},
            "101": {"generation": 2, "verification": 2},
            "2": {"generation": 1, "verification": 1}}"#,
    )
    .unwrap();
    assert_eq!(extract(&ds).sizes, vec![2, 101, 1001]);
}

#[test]
fn input_key_order_does_not_matter() {
    let a = parse_dataset(r#"{"101": {"generation": 346, "verification": 342}, "1": {"generation": 6, "verification": 8}}"#).unwrap();
    let b = parse_dataset(r#"{"1": {"generation": 6, "verification": 8}, "101": {"generation": 346, "verification": 342}}"#).unwrap();
    assert_eq!(extract(&a).sizes, vec![1, 101]);
    assert_eq!(extract(&a), extract(&b));
}

#[test]
fn sample_is_strictly_ascending_and_converted() {
    let ds = parse_dataset(SAMPLE_DATASET).unwrap();
    let t = extract(&ds);
    assert_eq!(t.len(), ds.len());
    assert!(t.is_aligned());
    assert!(t.sizes.windows(2).all(|w| w[0] < w[1]));

    for (i, size) in t.sizes.iter().enumerate() {
        let r = ds.get(*size).unwrap();
        assert_eq!(t.generation_seconds[i], r.generation_ms / MILLIS_PER_SECOND);
        assert_eq!(t.verification_seconds[i], r.verification_ms / MILLIS_PER_SECOND);
    }
}

#[test]
fn repeated_runs_are_bit_identical() {
    let bits = |t: &SeriesTriple| -> (Vec<i64>, Vec<u64>, Vec<u64>) {
        (
            t.sizes.clone(),
            t.generation_seconds.iter().map(|v| v.to_bits()).collect(),
            t.verification_seconds.iter().map(|v| v.to_bits()).collect(),
        )
    };
    let first = extract(&parse_dataset(SAMPLE_DATASET).unwrap());
    let second = extract(&parse_dataset(SAMPLE_DATASET).unwrap());
    assert_eq!(bits(&first), bits(&second));
}

#[test]
fn empty_dataset_gives_empty_triple() {
    let t = extract(&parse_dataset("{}").unwrap());
    assert!(t.is_empty());
    assert!(t.is_aligned());
    assert_eq!(t, SeriesTriple::default());
}

#[test]
fn points_pair_sizes_with_seconds() {
    let t = extract(&parse_dataset(r#"{"5": {"generation": 500, "verification": 250}}"#).unwrap());
    assert_eq!(t.generation_points(), vec![(5.0, 0.5)]);
    assert_eq!(t.verification_points(), vec![(5.0, 0.25)]);
}
