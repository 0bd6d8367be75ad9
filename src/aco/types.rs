//! Solver input types.

/// An ordered sequence of node indices. Open: the return edge to the
/// start node is not appended.
pub type Tour = Vec<usize>;

/// Attractiveness assigned to a zero-distance edge.
///
/// A zero off-diagonal distance means "no meaningful distance" (for
/// example, a provider returning 0 for coincident points). Inverting it
/// would divide by zero, so the edge gets this fixed large attractiveness
/// instead. It does not mean "infinitely close".
pub const ZERO_DISTANCE_ATTRACTIVENESS: f64 = 1e3;

/// A validated square matrix of non-negative finite distances.
///
/// Entry `(i, j)` is the cost of traveling from node `i` to node `j`.
/// Symmetry is not assumed; road networks are routinely asymmetric.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceMatrix {
    entries: Vec<Vec<f64>>,
}

impl DistanceMatrix {
    /// Validates and wraps a raw matrix.
    ///
    /// Rejects empty, non-square, non-finite, and negative input. This is
    /// the caller-side guard the solver relies on; the solver itself never
    /// re-checks.
    pub fn new(entries: Vec<Vec<f64>>) -> Result<Self, String> {
        let n = entries.len();
        if n == 0 {
            return Err("distance matrix must not be empty".into());
        }
        for (i, row) in entries.iter().enumerate() {
            if row.len() != n {
                return Err(format!(
                    "distance matrix must be square: row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    n
                ));
            }
            for (j, &d) in row.iter().enumerate() {
                if !d.is_finite() || d < 0.0 {
                    return Err(format!(
                        "distance ({i}, {j}) must be finite and non-negative, got {d}"
                    ));
                }
            }
        }
        Ok(Self { entries })
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distance from node `i` to node `j`.
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        self.entries[i][j]
    }

    /// Total cost of a tour: the sum of consecutive edge distances.
    pub fn tour_cost(&self, tour: &[usize]) -> f64 {
        tour.windows(2).map(|leg| self.distance(leg[0], leg[1])).sum()
    }

    /// Derives the static heuristic attractiveness matrix.
    ///
    /// Entry `(i, j)` is `1 / distance(i, j)`, or
    /// [`ZERO_DISTANCE_ATTRACTIVENESS`] when the distance is exactly zero.
    /// Computed once per run; read-only afterwards.
    pub fn attractiveness(&self) -> Vec<Vec<f64>> {
        self.entries
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&d| {
                        if d == 0.0 {
                            ZERO_DISTANCE_ATTRACTIVENESS
                        } else {
                            1.0 / d
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_asymmetric() {
        let m = DistanceMatrix::new(vec![vec![0.0, 1.0], vec![7.0, 0.0]]).unwrap();
        assert_eq!(m.len(), 2);
        assert!((m.distance(0, 1) - 1.0).abs() < 1e-12);
        assert!((m.distance(1, 0) - 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_empty() {
        assert!(DistanceMatrix::new(vec![]).is_err());
    }

    #[test]
    fn test_rejects_ragged() {
        let raw = vec![vec![0.0, 1.0], vec![1.0]];
        assert!(DistanceMatrix::new(raw).is_err());
    }

    #[test]
    fn test_rejects_negative() {
        let raw = vec![vec![0.0, -1.0], vec![1.0, 0.0]];
        assert!(DistanceMatrix::new(raw).is_err());
    }

    #[test]
    fn test_rejects_non_finite() {
        let raw = vec![vec![0.0, f64::NAN], vec![1.0, 0.0]];
        assert!(DistanceMatrix::new(raw).is_err());
        let raw = vec![vec![0.0, f64::INFINITY], vec![1.0, 0.0]];
        assert!(DistanceMatrix::new(raw).is_err());
    }

    #[test]
    fn test_tour_cost() {
        let m = DistanceMatrix::new(vec![
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0, 3.0],
            vec![2.0, 3.0, 0.0],
        ])
        .unwrap();
        assert!((m.tour_cost(&[0, 1, 2]) - 4.0).abs() < 1e-12);
        assert!((m.tour_cost(&[0, 2, 1]) - 5.0).abs() < 1e-12);
        assert!(m.tour_cost(&[0]).abs() < 1e-12);
    }

    #[test]
    fn test_attractiveness_inverts_distance() {
        let m = DistanceMatrix::new(vec![vec![0.0, 4.0], vec![2.0, 0.0]]).unwrap();
        let att = m.attractiveness();
        assert!((att[0][1] - 0.25).abs() < 1e-12);
        assert!((att[1][0] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_attractiveness_zero_distance_sentinel() {
        // A zero off-diagonal entry must map to the sentinel, not inf/NaN.
        let m = DistanceMatrix::new(vec![
            vec![0.0, 0.0, 2.0],
            vec![1.0, 0.0, 3.0],
            vec![2.0, 3.0, 0.0],
        ])
        .unwrap();
        let att = m.attractiveness();
        assert!((att[0][1] - ZERO_DISTANCE_ATTRACTIVENESS).abs() < 1e-12);
        assert!((att[0][0] - ZERO_DISTANCE_ATTRACTIVENESS).abs() < 1e-12);
        assert!(att.iter().flatten().all(|a| a.is_finite()));
    }
}
