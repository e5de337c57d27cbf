pub(crate) use super::*;

/// Unit-length vector from raw `(dimension, weight)` pairs.
fn unit(entries: Vec<(usize, f64)>) -> SparseVector {
    let mut v = SparseVector::from_entries(entries);
    v.normalize();
    v
}

// ========== Construction ==========

#[test]
fn test_pairwise_on_empty_input() {
    let sim = SimilarityMatrix::pairwise(&[]);
    assert!(sim.is_empty());
    assert_eq!(sim.len(), 0);
    assert_eq!(sim.row(0), None);
}

#[test]
fn test_pairwise_single_item() {
    let sim = SimilarityMatrix::pairwise(&[unit(vec![(0, 2.0)])]);
    assert_eq!(sim.len(), 1);
    assert_eq!(sim.get(0, 0), 1.0);
}

#[test]
fn test_known_pair_score() {
    let a = unit(vec![(0, 3.0), (1, 4.0)]);
    let b = unit(vec![(0, 1.0)]);
    let sim = SimilarityMatrix::pairwise(&[a, b]);
    assert_eq!(sim.get(0, 1), 0.6);
}

#[test]
fn test_disjoint_vectors_score_zero() {
    let a = unit(vec![(0, 1.0)]);
    let b = unit(vec![(1, 1.0)]);
    let sim = SimilarityMatrix::pairwise(&[a, b]);
    assert_eq!(sim.get(0, 1), 0.0);
    assert_eq!(sim.get(1, 0), 0.0);
}

// ========== Diagonal ==========

#[test]
fn test_diagonal_is_exactly_one_for_nonzero_rows() {
    let vectors = vec![
        unit(vec![(0, 1.0), (3, 2.0)]),
        unit(vec![(1, 0.7), (2, 0.7), (4, 0.1)]),
        unit(vec![(5, 9.0)]),
    ];
    let sim = SimilarityMatrix::pairwise(&vectors);
    for i in 0..sim.len() {
        assert_eq!(sim.get(i, i), 1.0);
    }
}

#[test]
fn test_diagonal_is_zero_for_zero_rows() {
    let vectors = vec![unit(vec![(0, 1.0)]), SparseVector::new()];
    let sim = SimilarityMatrix::pairwise(&vectors);
    assert_eq!(sim.get(0, 0), 1.0);
    assert_eq!(sim.get(1, 1), 0.0);
}

#[test]
fn test_zero_row_is_orthogonal_to_everything() {
    let vectors = vec![
        unit(vec![(0, 1.0), (1, 1.0)]),
        SparseVector::new(),
        unit(vec![(1, 2.0), (2, 3.0)]),
    ];
    let sim = SimilarityMatrix::pairwise(&vectors);
    let row = sim.row(1).expect("row should exist");
    assert!(row.iter().all(|&score| score == 0.0));
}

// ========== Symmetry ==========

#[test]
fn test_symmetric_bit_for_bit() {
    // Weights chosen so the dot products are not round numbers.
    let vectors = vec![
        unit(vec![(0, 1.0), (1, 2.0), (5, 0.3)]),
        unit(vec![(1, 3.0), (2, 1.0)]),
        unit(vec![(0, 0.1), (2, 7.0), (5, 2.0)]),
        unit(vec![(3, 1.0)]),
    ];
    let sim = SimilarityMatrix::pairwise(&vectors);
    for i in 0..sim.len() {
        for j in 0..sim.len() {
            assert_eq!(sim.get(i, j).to_bits(), sim.get(j, i).to_bits());
        }
    }
}

// ========== Access ==========

#[test]
fn test_row_matches_get() {
    let vectors = vec![
        unit(vec![(0, 1.0), (1, 1.0)]),
        unit(vec![(1, 1.0)]),
        unit(vec![(2, 1.0)]),
    ];
    let sim = SimilarityMatrix::pairwise(&vectors);
    let row = sim.row(0).expect("row should exist");
    assert_eq!(row.len(), 3);
    for (j, &score) in row.iter().enumerate() {
        assert_eq!(score, sim.get(0, j));
    }
}

#[test]
fn test_row_out_of_bounds_is_none() {
    let sim = SimilarityMatrix::pairwise(&[unit(vec![(0, 1.0)])]);
    assert!(sim.row(1).is_none());
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_get_out_of_bounds_panics() {
    let sim = SimilarityMatrix::pairwise(&[unit(vec![(0, 1.0)])]);
    let _ = sim.get(0, 1);
}

// ========== Determinism ==========

#[test]
fn test_rebuild_is_bit_identical() {
    let vectors = vec![
        unit(vec![(0, 1.0), (1, 2.0)]),
        unit(vec![(1, 3.0), (2, 1.0)]),
        SparseVector::new(),
        unit(vec![(0, 0.5), (2, 0.5)]),
    ];
    let first = SimilarityMatrix::pairwise(&vectors);
    let second = SimilarityMatrix::pairwise(&vectors);
    assert_eq!(first, second);
}
