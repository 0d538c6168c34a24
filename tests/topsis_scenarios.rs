//! Integration tests for TOPSIS scoring through the public API.
//!
//! Covers the reference ranking scenarios, degenerate inputs, and
//! property checks over generated matrices.

use proptest::prelude::*;

use topsis_ranker::application::{ScoreMatrixCommand, ScoreMatrixHandler};
use topsis_ranker::domain::topsis::{
    DecisionMatrix, ImpactVector, RankingMethod, ScoredMatrix, TopsisError, TopsisScorer,
    WeightVector,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn phones() -> DecisionMatrix {
    DecisionMatrix::builder()
        .label_header("Model")
        .criteria(vec!["Price", "Storage"])
        .alternative("A", vec![250.0, 16.0])
        .alternative("B", vec![200.0, 16.0])
        .alternative("C", vec![300.0, 32.0])
        .build()
        .unwrap()
}

fn score(
    matrix: &DecisionMatrix,
    weights: &str,
    impacts: &str,
) -> Result<ScoredMatrix, TopsisError> {
    TopsisScorer::default().score(
        matrix,
        &WeightVector::parse(weights)?,
        &ImpactVector::parse(impacts)?,
    )
}

fn order(scored: &ScoredMatrix) -> Vec<&str> {
    scored.by_rank().iter().map(|a| a.label.as_str()).collect()
}

// =============================================================================
// Reference Scenarios
// =============================================================================

#[test]
fn all_benefit_ranks_largest_values_first() {
    let scored = score(&phones(), "1,1", "+,+").unwrap();

    assert_eq!(scored.best().unwrap().label, "C");
    assert_eq!(order(&scored), vec!["C", "A", "B"]);
    assert_eq!(scored.ranks(), vec![2, 3, 1]);
}

#[test]
fn cost_criterion_reverses_the_preference() {
    let benefit = score(&phones(), "1,1", "+,+").unwrap();
    let mixed = score(&phones(), "1,1", "+,-").unwrap();

    assert_eq!(order(&mixed), vec!["A", "B", "C"]);
    assert_ne!(order(&benefit), order(&mixed));
}

#[test]
fn zero_column_contributes_nothing() {
    let with_zeros = DecisionMatrix::builder()
        .criteria(vec!["Price", "Storage", "Unused"])
        .alternative("A", vec![250.0, 16.0, 0.0])
        .alternative("B", vec![200.0, 16.0, 0.0])
        .alternative("C", vec![300.0, 32.0, 0.0])
        .build()
        .unwrap();

    let scored = score(&with_zeros, "1,1,1", "+,+,-").unwrap();
    let reference = score(&phones(), "1,1", "+,+").unwrap();

    assert!(scored.closeness_scores().iter().all(|c| c.is_finite()));
    assert_eq!(scored.ranks(), reference.ranks());
    for (a, b) in scored.closeness_scores().iter().zip(reference.closeness_scores()) {
        assert!((a - b).abs() < 1e-12);
    }
}

#[test]
fn extra_weight_is_a_dimension_mismatch() {
    let err = score(&phones(), "1,1,1", "+,+").unwrap_err();

    assert_eq!(
        err,
        TopsisError::DimensionMismatch {
            weights: 3,
            impacts: 2,
            criteria: 2
        }
    );
    assert_eq!(
        err.to_string(),
        "Dimension mismatch: 3 weights and 2 impacts for 2 criteria"
    );
}

#[test]
fn unknown_impact_symbol_is_rejected() {
    let err = score(&phones(), "1,1", "+,*").unwrap_err();

    assert_eq!(
        err,
        TopsisError::InvalidImpactSymbol {
            position: 1,
            symbol: "*".to_string()
        }
    );
}

#[test]
fn identical_alternatives_share_first_place() {
    let matrix = DecisionMatrix::builder()
        .criteria(vec!["X", "Y"])
        .alternative("P", vec![3.0, 4.0])
        .alternative("Q", vec![3.0, 4.0])
        .build()
        .unwrap();

    let scored = score(&matrix, "1,2", "+,-").unwrap();

    assert_eq!(scored.closeness_scores(), vec![0.5, 0.5]);
    assert_eq!(scored.ranks(), vec![1, 1]);
}

#[test]
fn dense_ranking_is_opt_in() {
    let matrix = DecisionMatrix::builder()
        .criteria(vec!["Score"])
        .alternative("X", vec![5.0])
        .alternative("Y", vec![5.0])
        .alternative("Z", vec![1.0])
        .build()
        .unwrap();
    let weights = WeightVector::parse("1").unwrap();
    let impacts = ImpactVector::parse("+").unwrap();

    let competition = TopsisScorer::default()
        .score(&matrix, &weights, &impacts)
        .unwrap();
    let dense = TopsisScorer::with_ranking_method(RankingMethod::Dense)
        .score(&matrix, &weights, &impacts)
        .unwrap();

    assert_eq!(competition.ranks(), vec![1, 1, 3]);
    assert_eq!(dense.ranks(), vec![1, 1, 2]);
}

#[test]
fn empty_matrix_is_insufficient_data() {
    let matrix = DecisionMatrix::builder().criteria(vec!["X"]).build().unwrap();

    assert_eq!(
        score(&matrix, "1", "+").unwrap_err(),
        TopsisError::InsufficientData {
            alternatives: 0,
            criteria: 1
        }
    );
}

#[test]
fn inline_handler_matches_direct_scoring() {
    let cmd = ScoreMatrixCommand {
        headers: vec!["Model".into(), "Price".into(), "Storage".into()],
        rows: vec![
            vec!["A".into(), "250".into(), "16".into()],
            vec!["B".into(), "200".into(), "16".into()],
            vec!["C".into(), "300".into(), "32".into()],
        ],
        weights: "1,1".into(),
        impacts: "+,-".into(),
    };

    let via_handler = ScoreMatrixHandler::default().handle(cmd).unwrap();
    let direct = score(&phones(), "1,1", "+,-").unwrap();

    assert_eq!(via_handler, direct);
}

// =============================================================================
// Properties
// =============================================================================

fn scoring_input() -> impl Strategy<Value = (Vec<Vec<f64>>, Vec<f64>, Vec<bool>)> {
    (1usize..8, 1usize..5).prop_flat_map(|(rows, cols)| {
        (
            prop::collection::vec(prop::collection::vec(-1.0e6..1.0e6f64, cols), rows),
            prop::collection::vec(weight(), cols),
            prop::collection::vec(any::<bool>(), cols),
        )
    })
}

/// Log-uniform weights from 1e-150 to 1e150.
fn weight() -> impl Strategy<Value = f64> {
    (-150.0..150.0f64).prop_map(|exponent| 10f64.powf(exponent))
}

fn build(
    values: &[Vec<f64>],
    weights: &[f64],
    benefit: &[bool],
) -> (DecisionMatrix, WeightVector, ImpactVector) {
    let criteria: Vec<String> = (0..weights.len()).map(|j| format!("C{}", j + 1)).collect();
    let mut builder = DecisionMatrix::builder().criteria(criteria);
    for (i, row) in values.iter().enumerate() {
        builder = builder.alternative(format!("R{}", i + 1), row.clone());
    }
    let impacts: Vec<&str> = benefit.iter().map(|&b| if b { "+" } else { "-" }).collect();

    (
        builder.build().unwrap(),
        WeightVector::new(weights.to_vec()).unwrap(),
        ImpactVector::parse(&impacts.join(",")).unwrap(),
    )
}

proptest! {
    #[test]
    fn closeness_is_within_unit_interval((values, weights, benefit) in scoring_input()) {
        let (matrix, weights, impacts) = build(&values, &weights, &benefit);
        let scored = TopsisScorer::default().score(&matrix, &weights, &impacts).unwrap();

        for closeness in scored.closeness_scores() {
            prop_assert!((0.0..=1.0).contains(&closeness));
        }
    }

    #[test]
    fn scoring_is_deterministic((values, weights, benefit) in scoring_input()) {
        let (matrix, weights, impacts) = build(&values, &weights, &benefit);
        let scorer = TopsisScorer::default();

        let first = scorer.score(&matrix, &weights, &impacts).unwrap();
        let second = scorer.score(&matrix, &weights, &impacts).unwrap();

        let first_bits: Vec<u64> = first.closeness_scores().iter().map(|c| c.to_bits()).collect();
        let second_bits: Vec<u64> = second.closeness_scores().iter().map(|c| c.to_bits()).collect();
        prop_assert_eq!(first_bits, second_bits);
        prop_assert_eq!(first.ranks(), second.ranks());
    }

    #[test]
    fn row_order_and_values_are_preserved((values, weights, benefit) in scoring_input()) {
        let (matrix, weights, impacts) = build(&values, &weights, &benefit);
        let scored = TopsisScorer::default().score(&matrix, &weights, &impacts).unwrap();

        prop_assert_eq!(scored.len(), values.len());
        for (i, (alternative, row)) in scored.alternatives.iter().zip(&values).enumerate() {
            prop_assert_eq!(&alternative.label, &format!("R{}", i + 1));
            prop_assert_eq!(&alternative.values, row);
        }
    }

    #[test]
    fn ranks_follow_closeness((values, weights, benefit) in scoring_input()) {
        let (matrix, weights, impacts) = build(&values, &weights, &benefit);
        let scored = TopsisScorer::default().score(&matrix, &weights, &impacts).unwrap();
        let rows = scored.len() as u32;

        let max = scored
            .closeness_scores()
            .into_iter()
            .fold(f64::NEG_INFINITY, f64::max);
        for a in &scored.alternatives {
            prop_assert!(a.rank >= 1 && a.rank <= rows);
            prop_assert_eq!(a.rank == 1, a.closeness == max);
            for b in &scored.alternatives {
                if a.closeness > b.closeness {
                    prop_assert!(a.rank < b.rank);
                }
                if a.closeness == b.closeness {
                    prop_assert_eq!(a.rank, b.rank);
                }
            }
        }
    }

    #[test]
    fn distinct_values_never_tie_at_any_weight_scale(
        low in 1u32..1000,
        gap in 1u32..1000,
        scale in weight(),
    ) {
        let values = vec![vec![f64::from(low)], vec![f64::from(low + gap)]];
        let (matrix, weights, impacts) = build(&values, &[scale], &[true]);
        let scored = TopsisScorer::default().score(&matrix, &weights, &impacts).unwrap();

        prop_assert_eq!(scored.ranks(), vec![2, 1]);
        for closeness in scored.closeness_scores() {
            prop_assert!(closeness.is_finite());
        }
    }
}
