// ChainedHashMap integration test suite (consolidated).
//
// Each test documents what behavior is being verified and which
// invariants are assumed or asserted. The core invariants exercised:
// - Uniqueness: no two entries ever share a key; duplicate inserts are
//   rejected without mutation.
// - Size/content consistency: len() always equals the number of entries
//   reachable by full iteration.
// - Load-factor policy: an insert never leaves len/capacity above 0.75;
//   erasing the last entry collapses capacity to 1; a shrink fires when
//   an erase drops the load factor below 0.25.
// - Resize transparency: rehashing (growing or shrinking) preserves every
//   key-value pair.
// - Equality: structural, not positional.
use chained_hashmap::{ChainedHashMap, Dictionary, MapError, DEFAULT_CAPACITY, MAX_LOAD_FACTOR};

// Test: the worked example from the reference behavior.
// Verifies: default shape, insert bumping size but not capacity, upsert
// overwriting in place, and sequence construction collapsing duplicates
// with the last write winning.
#[test]
fn reference_scenario() {
    let mut h = ChainedHashMap::new();
    assert_eq!(h.len(), 0);
    assert_eq!(h.capacity(), 16);

    assert!(h.insert(1, 10));
    assert_eq!(h.len(), 1);
    assert_eq!(h.capacity(), 16);

    *h.entry_or_default(1) = 8;
    assert_eq!(h.len(), 1);
    assert_eq!(h.at(&1), Ok(&8));

    let dana = ChainedHashMap::from_keys_and_values(vec![1, 1, 1], vec![2, 2, 3]).unwrap();
    assert_eq!(dana.len(), 1);
    assert_eq!(dana.at(&1), Ok(&3));
}

// Test: growth across multiple doublings.
// Assumes: capacity doubles whenever an insert pushes the load factor
// past 0.75, and the rehash recomputes bucket indices under the new
// capacity.
// Verifies: every inserted pair stays retrievable and len matches
// iteration after each resize.
#[test]
fn growth_is_lossless() {
    let mut m = ChainedHashMap::new();
    for i in 0..200u64 {
        assert!(m.insert(i, i.wrapping_mul(7)));
        assert!(m.load_factor() <= MAX_LOAD_FACTOR);
        assert!(m.capacity().is_power_of_two());
        assert_eq!(m.len() as u64, i + 1);
    }
    assert!(m.capacity() >= 256);

    for i in 0..200u64 {
        assert_eq!(m.at(&i), Ok(&i.wrapping_mul(7)));
    }
    assert_eq!(m.iter().count(), 200);
}

// Test: shrink path down to the collapse special case.
// Assumes: one halving per erase when the load factor dips below 0.25;
// size 0 collapses capacity to 1 regardless of the starting capacity.
// Verifies: remaining entries survive every shrink rehash.
#[test]
fn shrink_is_lossless_and_collapses_at_zero() {
    let mut m = ChainedHashMap::new();
    for i in 0..100u32 {
        m.insert(i, i);
    }

    for i in 0..100u32 {
        assert!(m.erase(&i));
        assert!(m.capacity().is_power_of_two());
        for j in (i + 1)..100 {
            assert_eq!(m.at(&j), Ok(&j), "entry lost during shrink");
        }
        assert_eq!(m.iter().count(), m.len());
    }
    assert!(m.is_empty());
    assert_eq!(m.capacity(), 1);
}

// Test: interleaved churn keeps size, iteration, and contents consistent.
// Verifies: size/content consistency under a mixed workload that crosses
// resize thresholds in both directions.
#[test]
fn interleaved_insert_erase_consistency() {
    let mut m = ChainedHashMap::new();
    let mut expected = std::collections::BTreeMap::new();

    for round in 0..5u64 {
        for i in 0..50u64 {
            let k = round * 50 + i;
            assert!(m.insert(k, k * 2));
            expected.insert(k, k * 2);
        }
        // Erase every other key from this round.
        for i in (0..50u64).step_by(2) {
            let k = round * 50 + i;
            assert!(m.erase(&k));
            expected.remove(&k);
        }

        assert_eq!(m.len(), expected.len());
        let mut seen: Vec<_> = m.iter().map(|(k, v)| (*k, *v)).collect();
        seen.sort_unstable();
        let want: Vec<_> = expected.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(seen, want);
    }
}

// Test: equality across insertion orders and capacity histories.
// Verifies: two maps with the same final pairs compare equal even when one
// was driven through grow/shrink cycles; a single differing value breaks
// equality.
#[test]
fn structural_equality() {
    let mut a = ChainedHashMap::new();
    let mut b = ChainedHashMap::new();

    for i in 0..20 {
        a.insert(i, i * i);
    }
    // b takes a different route to the same contents.
    for i in 20..40 {
        b.insert(i, 0);
    }
    for i in (0..20).rev() {
        b.insert(i, i * i);
    }
    for i in 20..40 {
        b.erase(&i);
    }

    assert_eq!(a, b);
    assert_eq!(b, a);

    *b.entry_or_default(0) = 999;
    assert_ne!(a, b);
}

// Test: clear versus erase capacity semantics.
// Verifies: clear empties the table but keeps capacity; subsequent inserts
// reuse the retained buckets.
#[test]
fn clear_retains_capacity() {
    let mut m = ChainedHashMap::new();
    for i in 0..30 {
        m.insert(i, i);
    }
    let grown = m.capacity();
    assert!(grown > DEFAULT_CAPACITY);

    m.clear();
    assert_eq!(m.len(), 0);
    assert_eq!(m.capacity(), grown);
    assert_eq!(m.iter().next(), None);

    assert!(m.insert(1, 1));
    assert_eq!(m.capacity(), grown);
}

// Test: fallible accessors agree on absence.
// Verifies: at, at_mut, bucket_size, and bucket_index all report
// KeyNotFound for an absent key and leave the table untouched.
#[test]
fn read_paths_fail_closed() {
    let mut m: ChainedHashMap<&str, i32> = ChainedHashMap::new();
    m.insert("present", 1);

    assert_eq!(m.at(&"absent"), Err(MapError::KeyNotFound));
    assert_eq!(m.at_mut(&"absent"), Err(MapError::KeyNotFound));
    assert_eq!(m.bucket_size(&"absent"), Err(MapError::KeyNotFound));
    assert_eq!(m.bucket_index(&"absent"), Err(MapError::KeyNotFound));
    assert_eq!(m.len(), 1);
}

// Test: Dictionary end-to-end over the table.
// Verifies: bulk update overwrites, strict erase errors on a missing key,
// and the error Display output names the key.
#[test]
fn dictionary_over_table() {
    let mut d = Dictionary::from_keys_and_values(
        vec!["a".into(), "b".into()],
        vec!["1".into(), "2".into()],
    )
    .unwrap();

    d.update(vec![
        ("b".to_string(), "20".to_string()),
        ("c".to_string(), "30".to_string()),
    ]);
    assert_eq!(d.len(), 3);
    assert_eq!(d.at("b"), Ok(&"20".to_string()));
    assert_eq!(d.at("c"), Ok(&"30".to_string()));

    assert_eq!(d.erase("b"), Ok(()));
    let err = d.erase("b").unwrap_err();
    assert_eq!(err, MapError::InvalidKey("b".to_string()));
    assert_eq!(err.to_string(), "invalid key: \"b\"");
}
