//! Integration tests for the dimension model through its owning data array.

use nixpy::prelude::*;

fn strings(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_sampled_offset_scenario() {
    let mut array = DataArray::new("signal", "nix.sampled");
    let mut dim = array.append_sampled_dimension(0.5).expect("Failed to append sampled dimension");

    dim.set_offset(1.25);
    assert_eq!(dim.offset(), Some(1.25));

    dim.set_offset(None);
    assert_eq!(dim.offset(), None);
    assert_eq!(dim.sampling_interval(), 0.5);
}

#[test]
fn test_range_ticks_scenario() {
    let mut array = DataArray::new("signal", "nix.range");
    let mut dim = array.append_range_dimension(vec![10.0]);

    dim.set_ticks(vec![0.0, 0.5, 1.0, 1.5]);
    assert_eq!(dim.ticks(), &[0.0, 0.5, 1.0, 1.5]);
}

#[test]
fn test_set_labels_scenario() {
    let mut array = DataArray::new("signal", "nix.set");
    let mut dim = array.append_set_dimension();

    dim.set_labels(strings(&["a", "b", "c"]));
    assert_eq!(dim.labels(), strings(&["a", "b", "c"]).as_slice());
    assert!(dim.has_labels());

    dim.set_labels(Vec::new());
    assert!(dim.labels().is_empty());
    assert!(!dim.has_labels(), "Empty labels must clear the field");
}

#[test]
fn test_empty_ticks_vs_empty_labels() {
    let mut array = DataArray::new("signal", "test");
    array.append_range_dimension(vec![1.0, 2.0]);
    array.append_set_dimension().set_labels(strings(&["x"]));

    // Range: empty is a stored value
    array.range_dimension_mut(1).unwrap().set_ticks(Vec::new());
    assert!(array.range_dimension(1).unwrap().ticks().is_empty());

    // Set: empty clears to absent
    array.set_dimension_mut(2).unwrap().set_labels(Vec::new());
    assert!(!array.set_dimension(2).unwrap().has_labels());
}

#[test]
fn test_ticks_preserve_order_and_duplicates() {
    let mut array = DataArray::new("signal", "test");
    let mut dim = array.append_range_dimension(Vec::new());

    let ticks = vec![5.0, -1.0, 2.0, 2.0, 0.0];
    dim.set_ticks(ticks.clone());
    assert_eq!(dim.ticks(), ticks.as_slice());
}

#[test]
fn test_label_roundtrip_all_variants() {
    let mut array = DataArray::new("signal", "test");
    array.append_sampled_dimension(1.0).unwrap();
    array.append_range_dimension(vec![0.0]);

    for value in ["time", "", "µs"] {
        {
            let mut sampled = array.sampled_dimension_mut(1).unwrap();
            sampled.set_label(value.to_string());
            assert_eq!(sampled.label(), Some(value));
            sampled.set_unit(value.to_string());
            assert_eq!(sampled.unit(), Some(value));
        }

        let mut range = array.range_dimension_mut(2).unwrap();
        range.set_label(value.to_string());
        assert_eq!(range.label(), Some(value));
        range.set_unit(value.to_string());
        assert_eq!(range.unit(), Some(value));
    }

    // Clearing is idempotent
    for _ in 0..2 {
        array.sampled_dimension_mut(1).unwrap().set_label(None);
        array.range_dimension_mut(2).unwrap().set_label(None);
        assert_eq!(array.dimension(1).unwrap().label(), None);
        assert_eq!(array.dimension(2).unwrap().label(), None);
    }
}

#[test]
fn test_dimension_types_are_fixed() {
    let mut array = DataArray::new("signal", "test");
    array.append_set_dimension();
    array.append_range_dimension((0..10).map(f64::from).collect());
    array.append_sampled_dimension(0.1).unwrap();

    assert_eq!(array.dimension_count(), 3);
    let types: Vec<DimensionType> = array.dimensions().iter().map(Dimension::dimension_type).collect();
    assert_eq!(types, vec![DimensionType::Set, DimensionType::Range, DimensionType::Sample]);

    // Mutating metadata never changes the kind
    array.sampled_dimension_mut(3).unwrap().set_offset(2.0);
    array.set_dimension_mut(1).unwrap().set_labels(strings(&["a"]));
    assert_eq!(array.dimension(3).unwrap().dimension_type(), DimensionType::Sample);
    assert_eq!(array.dimension(1).unwrap().dimension_type(), DimensionType::Set);
}

#[test]
fn test_append_lookup_delete() {
    let mut array = DataArray::new("test array", "signal");
    assert_eq!(array.dimension_count(), 0);

    array.append_set_dimension();
    array.append_range_dimension((0..10).map(f64::from).collect());
    array.append_sampled_dimension(0.1).unwrap();

    let indices: Vec<usize> = array.dimensions().iter().map(Dimension::index).collect();
    assert_eq!(indices, vec![1, 2, 3]);

    assert_eq!(
        array.dimension(4).unwrap_err(),
        Error::DimensionOutOfBounds { index: 4, count: 3 }
    );
    assert!(array.dimension(0).is_err());

    // Delete the middle one; the sampled dimension moves to index 2
    let removed = array.delete_dimension(2).unwrap();
    assert_eq!(removed.dimension_type(), DimensionType::Range);
    assert_eq!(array.sampled_dimension(2).unwrap().index(), 2);

    array.delete_dimension(2).unwrap();
    array.delete_dimension(1).unwrap();
    assert_eq!(array.dimension_count(), 0);
    assert!(array.delete_dimension(1).is_err());
}

#[test]
fn test_lookup_after_delete() {
    let mut array = DataArray::new("signal", "test");
    array.append_set_dimension();
    array.append_range_dimension(vec![0.0, 1.0]);
    array.append_sampled_dimension(0.1).unwrap();

    array.delete_dimension(1).unwrap();

    // The range dimension moved from index 2 to 1; index 2 now holds the sampled one
    assert_eq!(array.range_dimension(1).unwrap().ticks(), &[0.0, 1.0]);
    assert_eq!(
        array.range_dimension(2).unwrap_err(),
        Error::type_mismatch(DimensionType::Range, DimensionType::Sample)
    );
    assert_eq!(
        array.range_dimension_mut(3).unwrap_err(),
        Error::DimensionOutOfBounds { index: 3, count: 2 }
    );

    array.delete_dimension(1).unwrap();
    assert_eq!(
        array.range_dimension(2).unwrap_err(),
        Error::DimensionOutOfBounds { index: 2, count: 1 }
    );
    assert_eq!(array.sampled_dimension(1).unwrap().index(), 1);
}

#[test]
fn test_swapped_dimensions_keep_their_index() {
    let mut first = DataArray::new("first", "test");
    first.append_set_dimension().set_labels(strings(&["a"]));

    let mut second = DataArray::new("second", "test");
    second.append_range_dimension(Vec::new());
    second.append_set_dimension().set_labels(strings(&["b"]));

    std::mem::swap(
        &mut *first.set_dimension_mut(1).unwrap(),
        &mut *second.set_dimension_mut(2).unwrap(),
    );

    let set = first.set_dimension(1).unwrap();
    assert_eq!(set.labels(), strings(&["b"]).as_slice());
    assert_eq!(set.index(), 1);

    let set = second.set_dimension(2).unwrap();
    assert_eq!(set.labels(), strings(&["a"]).as_slice());
    assert_eq!(set.index(), 2);
}

#[test]
fn test_sampling_interval_validation() {
    let mut array = DataArray::new("signal", "test");
    assert!(matches!(
        array.append_sampled_dimension(0.0),
        Err(Error::InvalidSamplingInterval(_))
    ));

    let mut dim = array.append_sampled_dimension(2.0).unwrap();
    assert!(dim.set_sampling_interval(-2.0).is_err());
    assert_eq!(dim.sampling_interval(), 2.0);
}

#[test]
fn test_shared_array_across_threads() {
    let shared = DataArray::new("signal", "test").shared();
    shared.write().append_range_dimension(Vec::new());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let shared = shared.clone();
            std::thread::spawn(move || {
                let mut array = shared.write();
                let mut dim = array.range_dimension_mut(1).unwrap();
                let mut ticks = dim.ticks().to_vec();
                ticks.push(i as f64);
                dim.set_ticks(ticks);
            })
        })
        .collect();
    for h in handles {
        h.join().expect("Worker thread panicked");
    }

    assert_eq!(shared.read().range_dimension(1).unwrap().ticks().len(), 4);
}

#[test]
fn test_dimensions_summary() {
    let mut array = DataArray::new("signal", "test");
    array.append_sampled_dimension(0.5).unwrap().set_unit("s".to_string());
    array.append_set_dimension();

    let json = array.dimensions().to_json();
    println!("{}", serde_json::to_string_pretty(&json).unwrap());
    assert_eq!(json[0]["unit"], "s");
    assert_eq!(json[1]["labels"], serde_json::json!([]));
    assert_eq!(array.dimensions().to_string(), "[Sample x Set]");
}
