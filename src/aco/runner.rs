//! ACO execution loop.

use super::config::AcoConfig;
use super::selection::weighted_choice;
use super::types::{DistanceMatrix, Tour};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// One ant's completed walk. Consumed within the iteration that
/// produced it.
struct Trial {
    cost: f64,
    route: Tour,
}

/// Result of an ACO run.
///
/// The three history sequences are parallel: entry `i` describes
/// iteration `i`. They are append-only during the run and have exactly
/// `num_iterations` entries afterwards.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoResult {
    /// The route recorded at the final iteration.
    pub best_route: Tour,

    /// Cost of [`AcoResult::best_route`].
    pub best_cost: f64,

    /// Best (minimum) ant cost per iteration.
    pub best_costs: Vec<f64>,

    /// Arithmetic mean ant cost per iteration.
    pub average_costs: Vec<f64>,

    /// Best ant's route per iteration.
    pub best_routes: Vec<Tour>,
}

/// Executes the ant colony over a distance matrix.
///
/// # Usage
///
/// ```
/// use antrail::aco::{AcoConfig, AcoRunner, DistanceMatrix};
///
/// let matrix = DistanceMatrix::new(vec![
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 3.0],
///     vec![2.0, 3.0, 0.0],
/// ]).unwrap();
/// let config = AcoConfig::default().with_seed(42);
/// let result = AcoRunner::run(&matrix, &config);
/// assert_eq!(result.best_route[0], 0);
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Runs the colony for exactly `config.num_iterations` iterations.
    ///
    /// Iterations are strictly sequential: each walks its ants against
    /// the pheromone state left by the previous iteration, then applies
    /// evaporation and deposition once.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`AcoConfig::validate`]
    /// first to get a descriptive error) or if `config.start` is out of
    /// range for the matrix.
    pub fn run(matrix: &DistanceMatrix, config: &AcoConfig) -> AcoResult {
        config.validate().expect("invalid AcoConfig");
        let n = matrix.len();
        assert!(
            config.start < n,
            "start index {} out of range for {n} nodes",
            config.start
        );

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let attractiveness = matrix.attractiveness();

        // One uniform draw per cell, row-major; seeded runs depend on
        // this consumption order staying fixed.
        let mut pheromone: Vec<Vec<f64>> = (0..n)
            .map(|_| (0..n).map(|_| rng.random_range(0.0..1.0)).collect())
            .collect();

        let mut best_costs = Vec::with_capacity(config.num_iterations);
        let mut average_costs = Vec::with_capacity(config.num_iterations);
        let mut best_routes: Vec<Tour> = Vec::with_capacity(config.num_iterations);

        for iteration in 0..config.num_iterations {
            // All ants walk against the iteration-start pheromone state.
            let trials: Vec<Trial> = (0..config.num_ants)
                .map(|_| walk(matrix, &attractiveness, &pheromone, config, &mut rng))
                .collect();

            evaporate(&mut pheromone, config.evaporation_rate);
            for trial in &trials {
                deposit(&mut pheromone, &trial.route, config.deposit / trial.cost);
            }

            let mut best = 0;
            for (i, trial) in trials.iter().enumerate().skip(1) {
                if trial.cost < trials[best].cost {
                    best = i;
                }
            }
            let average =
                trials.iter().map(|t| t.cost).sum::<f64>() / trials.len() as f64;

            best_costs.push(trials[best].cost);
            average_costs.push(average);
            best_routes.push(trials[best].route.clone());

            if config.verbose {
                println!(
                    "iteration {iteration}: avg cost {average:.3}, best cost {:.3}, best route {:?}",
                    trials[best].cost, trials[best].route
                );
            }
        }

        let last = config.num_iterations - 1;
        AcoResult {
            best_route: best_routes[last].clone(),
            best_cost: best_costs[last],
            best_costs,
            average_costs,
            best_routes,
        }
    }
}

/// Constructs one complete tour from the configured start node.
fn walk<R: Rng>(
    matrix: &DistanceMatrix,
    attractiveness: &[Vec<f64>],
    pheromone: &[Vec<f64>],
    config: &AcoConfig,
    rng: &mut R,
) -> Trial {
    let n = matrix.len();
    let mut current = config.start;
    let mut route = Vec::with_capacity(n);
    route.push(current);

    // Ascending original-index order; the relative order of candidates
    // feeds the weighted draw and must stay stable for reproducibility.
    let mut unvisited: Vec<usize> = (0..n).filter(|&i| i != current).collect();
    let mut desirability = Vec::with_capacity(n.saturating_sub(1));
    let mut cost = 0.0;

    while !unvisited.is_empty() {
        desirability.clear();
        desirability.extend(unvisited.iter().map(|&j| {
            pheromone[current][j].powf(config.alpha)
                * attractiveness[current][j].powf(config.beta)
        }));

        let next = unvisited[weighted_choice(&desirability, rng)];
        cost += matrix.distance(current, next);
        current = next;
        route.push(current);
        unvisited.retain(|&j| j != current);
    }

    Trial { cost, route }
}

/// Scales every pheromone entry by the retention factor `1 - rho`.
fn evaporate(pheromone: &mut [Vec<f64>], rho: f64) {
    let retention = 1.0 - rho;
    for row in pheromone.iter_mut() {
        for p in row.iter_mut() {
            *p *= retention;
        }
    }
}

/// Adds `amount` to every directed edge traversed by `route`.
///
/// Direction matters: `(u, v)` is reinforced, `(v, u)` is not.
fn deposit(pheromone: &mut [Vec<f64>], route: &[usize], amount: f64) {
    for leg in route.windows(2) {
        pheromone[leg[0]][leg[1]] += amount;
    }
}
