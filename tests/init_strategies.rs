//! Chip initialization strategies on the demo topology.

use rand::{SeedableRng, rngs::StdRng};
use schelling_graph::{ChipInit, Error, MULTINOMIAL_BUDGET};

mod common;

#[test]
fn multinomial_assigns_the_full_budget_over_ten_nodes() {
    let mut graph = common::demo_graph(&[]);
    assert_eq!(graph.len(), 10);

    let mut rng = StdRng::seed_from_u64(42);
    ChipInit::Multinomial {
        pvals: vec![0.1; 10],
    }
    .apply(&mut graph, &mut rng)
    .unwrap();

    let counts: Vec<u32> = graph
        .node_ids()
        .iter()
        .map(|&id| graph.node(id).chips())
        .collect();
    let total: u32 = counts.iter().sum();
    assert_eq!(total, MULTINOMIAL_BUDGET);
    assert!(
        counts.iter().filter(|&&c| c > 0).count() > 1,
        "a uniform pval vector should spread the budget: {counts:?}"
    );
}

#[test]
fn multinomial_rejects_bad_probability_vectors() {
    let mut graph = common::demo_graph(&[]);
    let mut rng = StdRng::seed_from_u64(42);

    let err = ChipInit::Multinomial {
        pvals: vec![0.5, 0.5],
    }
    .apply(&mut graph, &mut rng)
    .unwrap_err();
    assert!(matches!(
        err,
        Error::InitLengthMismatch {
            expected: 10,
            got: 2,
        }
    ));

    let err = ChipInit::Multinomial {
        pvals: vec![0.2; 10],
    }
    .apply(&mut graph, &mut rng)
    .unwrap_err();
    assert!(matches!(err, Error::ProbabilitySum { .. }));
}

#[test]
fn uniform_respects_the_inclusive_range() {
    let mut graph = common::demo_graph(&[]);
    let mut rng = StdRng::seed_from_u64(9);
    ChipInit::Uniform { min: 1, max: 4 }
        .apply(&mut graph, &mut rng)
        .unwrap();
    for &id in graph.node_ids() {
        let chips = graph.node(id).chips();
        assert!((1..=4).contains(&chips), "out of range: {chips}");
    }
}

#[test]
fn explicit_randomized_assignment_conserves_the_values() {
    let mut graph = common::demo_graph(&[]);
    let values: Vec<u32> = (0..10).collect();
    let mut rng = StdRng::seed_from_u64(3);
    ChipInit::Explicit {
        chips: values.clone(),
        randomize: true,
    }
    .apply(&mut graph, &mut rng)
    .unwrap();

    let mut assigned: Vec<u32> = graph
        .node_ids()
        .iter()
        .map(|&id| graph.node(id).chips())
        .collect();
    assigned.sort_unstable();
    assert_eq!(assigned, values);
}

#[test]
fn explicit_rejects_a_short_list() {
    let mut graph = common::demo_graph(&[]);
    let mut rng = StdRng::seed_from_u64(3);
    let err = ChipInit::Explicit {
        chips: vec![1, 2, 3],
        randomize: false,
    }
    .apply(&mut graph, &mut rng)
    .unwrap_err();
    assert!(matches!(
        err,
        Error::InitLengthMismatch {
            expected: 10,
            got: 3,
        }
    ));
}
