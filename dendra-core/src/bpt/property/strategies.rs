//! Strategy builders for BPT property-based tests.
//!
//! Provides graph generation strategies that produce varied weight
//! distributions and topologies. Each generator builds a [`Graph`] with a
//! parallel weight array, seeded through `SmallRng` so proptest shrinking
//! stays deterministic.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Graph;

use super::types::{BptFixture, WeightDistribution};

/// Minimum vertex count for most generated graphs.
const MIN_VERTICES: usize = 4;
/// Maximum vertex count for most generated graphs.
const MAX_VERTICES: usize = 48;
/// Maximum vertex count for dense graphs (kept smaller to avoid quadratic
/// edge explosion).
const DENSE_MAX_VERTICES: usize = 24;

/// Generates BPT fixtures covering all five weight distributions.
pub(super) fn bpt_fixture_strategy() -> impl Strategy<Value = BptFixture> {
    (any_distribution(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific weight distribution.
///
/// Useful for targeted rstest cases where the distribution is chosen
/// explicitly rather than sampled by proptest.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> BptFixture {
    match distribution {
        WeightDistribution::Unique => generate_probabilistic(
            rng,
            MAX_VERTICES,
            (0.2, 0.6),
            distribution,
            |r| r.gen_range(0.1_f32..100.0),
        ),
        WeightDistribution::ManyIdentical => generate_identical_weights(rng),
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => generate_probabilistic(
            rng,
            DENSE_MAX_VERTICES,
            (0.7, 0.95),
            distribution,
            |r| r.gen_range(0.1_f32..100.0),
        ),
        WeightDistribution::Disconnected => generate_disconnected(rng),
    }
}

fn any_distribution() -> impl Strategy<Value = WeightDistribution> {
    prop_oneof![
        2 => Just(WeightDistribution::Unique),
        3 => Just(WeightDistribution::ManyIdentical),
        2 => Just(WeightDistribution::Sparse),
        2 => Just(WeightDistribution::Dense),
        2 => Just(WeightDistribution::Disconnected),
    ]
}

/// Generates a graph by probabilistically adding edges between all unique
/// vertex pairs, using a caller-supplied weight generator.
fn generate_probabilistic(
    rng: &mut SmallRng,
    max_vertices: usize,
    edge_prob_range: (f64, f64),
    distribution: WeightDistribution,
    mut weight_generator: impl FnMut(&mut SmallRng) -> f32,
) -> BptFixture {
    let num_vertices = rng.gen_range(MIN_VERTICES..=max_vertices);
    let edge_probability: f64 = rng.gen_range(edge_prob_range.0..=edge_prob_range.1);
    let mut builder = FixtureBuilder::new(num_vertices);

    for i in 0..num_vertices {
        for j in (i + 1)..num_vertices {
            if rng.gen_bool(edge_probability) {
                builder.push(i, j, weight_generator(rng));
            }
        }
    }

    builder.ensure_at_least_one_edge(rng);
    builder.finish(distribution)
}

/// Generates a graph where large groups of edges share the same weight,
/// the key stress case for the index-based tie-break.
fn generate_identical_weights(rng: &mut SmallRng) -> BptFixture {
    let pool_size = rng.gen_range(1..=3);
    let weight_pool: Vec<f32> = (0..pool_size)
        .map(|_| f32::from(rng.gen_range(1_u8..=10)))
        .collect();

    generate_probabilistic(
        rng,
        MAX_VERTICES,
        (0.3, 0.7),
        WeightDistribution::ManyIdentical,
        move |r| weight_pool[r.gen_range(0..weight_pool.len())],
    )
}

/// Generates a sparse graph by first building a random spanning tree
/// (guaranteeing connectivity) and then adding a small number of extra
/// edges.
fn generate_sparse(rng: &mut SmallRng) -> BptFixture {
    let num_vertices = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut builder = FixtureBuilder::new(num_vertices);

    let mut perm: Vec<usize> = (0..num_vertices).collect();
    shuffle(&mut perm, rng);
    for i in 1..num_vertices {
        builder.push(perm[i - 1], perm[i], rng.gen_range(0.1_f32..100.0));
    }

    let extra_count = rng.gen_range(num_vertices / 2..=num_vertices);
    for _ in 0..extra_count {
        let i = rng.gen_range(0..num_vertices);
        let j = rng.gen_range(0..num_vertices);
        if i != j {
            builder.push(i, j, rng.gen_range(0.1_f32..100.0));
        }
    }

    builder.finish(WeightDistribution::Sparse)
}

/// Generates a graph with 2-5 disconnected components, each with random
/// internal structure and no cross-component edges.
fn generate_disconnected(rng: &mut SmallRng) -> BptFixture {
    let component_count = rng.gen_range(2..=5);
    let component_sizes: Vec<usize> = (0..component_count)
        .map(|_| rng.gen_range(2..=10))
        .collect();
    let num_vertices: usize = component_sizes.iter().sum();
    let mut builder = FixtureBuilder::new(num_vertices);
    let mut offset = 0;

    for &size in &component_sizes {
        builder.generate_component(offset, size, rng);
        offset += size;
    }

    builder.finish(WeightDistribution::Disconnected)
}

/// Accumulates edges and their weights in insertion order.
struct FixtureBuilder {
    num_vertices: usize,
    edges: Vec<(usize, usize)>,
    weights: Vec<f32>,
}

impl FixtureBuilder {
    fn new(num_vertices: usize) -> Self {
        Self {
            num_vertices,
            edges: Vec::new(),
            weights: Vec::new(),
        }
    }

    fn push(&mut self, source: usize, target: usize, weight: f32) {
        self.edges.push((source, target));
        self.weights.push(weight);
    }

    /// Generates edges for a single component within a disconnected graph,
    /// guaranteeing at least one edge when the component has two or more
    /// vertices.
    fn generate_component(&mut self, offset: usize, size: usize, rng: &mut SmallRng) {
        let edge_probability: f64 = rng.gen_range(0.3..=0.8);
        let start_len = self.edges.len();

        for i in 0..size {
            for j in (i + 1)..size {
                if rng.gen_bool(edge_probability) {
                    self.push(offset + i, offset + j, rng.gen_range(0.1_f32..100.0));
                }
            }
        }

        if size >= 2 && self.edges.len() == start_len {
            self.push(offset, offset + 1, rng.gen_range(0.1_f32..100.0));
        }
    }

    fn ensure_at_least_one_edge(&mut self, rng: &mut SmallRng) {
        if self.edges.is_empty() && self.num_vertices >= 2 {
            self.push(0, 1, rng.gen_range(0.1_f32..100.0));
        }
    }

    fn finish(self, distribution: WeightDistribution) -> BptFixture {
        let mut graph = Graph::new(self.num_vertices);
        for (source, target) in self.edges {
            graph
                .add_edge(source, target)
                .expect("generated endpoints are in range");
        }
        BptFixture {
            graph,
            weights: self.weights,
            distribution,
        }
    }
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle(slice: &mut [usize], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}
