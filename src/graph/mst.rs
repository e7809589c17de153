use tracing::trace;

use crate::point::Point;

/// Per-vertex bookkeeping for one run of Prim's algorithm.
#[derive(Clone, Copy, Debug)]
struct PrimState {
    in_tree: bool,
    /// Squared distance of the cheapest known edge into the tree
    best_edge_weight: f64,
    parent: Option<usize>,
}

impl Default for PrimState {
    fn default() -> Self {
        Self {
            in_tree: false,
            best_edge_weight: f64::INFINITY,
            parent: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree {
    /// Sum of the true (not squared) edge lengths. Infinite if the zone barrier disconnects the points.
    pub weight: f64,
    /// Parent of each vertex, indexed by position in the view the tree was built over.
    /// The root (position 0) and any unreachable vertex have no parent.
    pub parents: Vec<Option<usize>>,
}

impl SpanningTree {
    /// Undirected edges as `(smaller, larger)` pairs, one for each vertex with a parent, in vertex order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.parents
            .iter()
            .enumerate()
            .filter_map(|(i, parent)| parent.map(|parent| (i.min(parent), i.max(parent))))
    }

    /// First vertex that could not be connected to the root, if any.
    pub fn first_unreachable(&self) -> Option<usize> {
        self.parents
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, parent)| parent.is_none())
            .map(|(i, _)| i)
    }
}

/// Compute the MST of the points named by `view` with Prim's algorithm in O(V^2) time.
///
/// The first vertex of the view is the root. A dense linear scan beats a heap here since every
/// pair of points is a candidate edge. Minimum selection prefers the lowest position on ties.
/// Edges between the main and medical campuses are unusable when the points carry zones.
///
/// <https://en.wikipedia.org/wiki/Prim%27s_algorithm#Time_complexity>
pub fn prim(points: &[Point], view: &[usize]) -> SpanningTree {
    let n = view.len();
    let mut state = vec![PrimState::default(); n];
    if let Some(root) = state.first_mut() {
        root.best_edge_weight = 0.;
    }

    let mut weight = 0.;
    for _ in 0..n {
        let mut closest: Option<usize> = None;
        for (j, vertex) in state.iter().enumerate() {
            if vertex.in_tree {
                continue;
            }
            match closest {
                Some(c) if state[c].best_edge_weight <= vertex.best_edge_weight => {}
                _ => closest = Some(j),
            }
        }
        // Every iteration adds exactly one vertex, so one is always left
        let Some(closest) = closest else { break };

        state[closest].in_tree = true;
        weight += state[closest].best_edge_weight.sqrt();

        let from = &points[view[closest]];
        for (h, vertex) in state.iter_mut().enumerate() {
            if vertex.in_tree {
                continue;
            }
            let distance = from.distance_squared(&points[view[h]], true);
            if distance < vertex.best_edge_weight {
                vertex.best_edge_weight = distance;
                vertex.parent = Some(closest);
            }
        }
    }
    trace!("Spanning tree over {} points weighs {}", n, weight);

    SpanningTree {
        weight,
        parents: state.into_iter().map(|vertex| vertex.parent).collect(),
    }
}

/// Spanning tree over every point, rooted at point 0.
pub fn minimum_spanning_tree(points: &[Point]) -> SpanningTree {
    let view = (0..points.len()).collect::<Vec<_>>();
    prim(points, &view)
}

/// Weight of the spanning tree over the points named by `view`.
pub fn spanning_tree_weight(points: &[Point], view: &[usize]) -> f64 {
    prim(points, view).weight
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::classify_all;
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

    fn points(coords: &[[i64; 2]]) -> Vec<Point> {
        coords.iter().map(|[x, y]| Point::new(*x, *y)).collect()
    }

    #[test]
    fn mst_is_correct_for_trivial_case() {
        let mut points = points(&[[0, 0], [1, 0], [2, 0]]);
        classify_all(&mut points);
        let tree = minimum_spanning_tree(&points);
        assert_eq!(tree.weight, 2.);
        assert_eq!(tree.edges().collect::<Vec<_>>(), vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn mst_reports_edges_smaller_index_first() {
        let points = points(&[[5, 5], [0, 0], [1, 0], [5, 6]]);
        let tree = minimum_spanning_tree(&points);
        assert_eq!(tree.parents, vec![None, Some(2), Some(0), Some(0)]);
        assert_eq!(
            tree.edges().collect::<Vec<_>>(),
            vec![(1, 2), (0, 2), (0, 3)]
        );
        let expected = 1. + 1. + 41f64.sqrt();
        assert!((tree.weight - expected).abs() < 1e-9);
    }

    #[test]
    fn mst_of_single_point_is_empty() {
        let tree = minimum_spanning_tree(&points(&[[3, 4]]));
        assert_eq!(tree.weight, 0.);
        assert_eq!(tree.edges().count(), 0);
        assert_eq!(tree.first_unreachable(), None);
    }

    #[test]
    fn mst_ties_go_to_the_lowest_index() {
        // 1 and 2 are both at distance 1 from the root
        let points = points(&[[0, 0], [1, 0], [0, 1]]);
        let tree = minimum_spanning_tree(&points);
        assert_eq!(tree.parents, vec![None, Some(0), Some(0)]);
        assert_eq!(tree.weight, 2.);
    }

    #[test]
    fn mst_routes_through_the_border() {
        let mut points = points(&[[1, 1], [-1, -1], [0, 0]]);
        classify_all(&mut points);
        let tree = minimum_spanning_tree(&points);
        assert_eq!(tree.edges().collect::<Vec<_>>(), vec![(1, 2), (0, 2)]);
        assert!((tree.weight - 2. * 2f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn mst_is_infinite_across_the_barrier() {
        let mut points = points(&[[1, 1], [-1, -1]]);
        classify_all(&mut points);
        let tree = minimum_spanning_tree(&points);
        assert_eq!(tree.weight, f64::INFINITY);
        assert_eq!(tree.first_unreachable(), Some(1));
        assert_eq!(tree.edges().count(), 0);
    }

    #[test]
    fn mst_over_a_view() {
        let points = points(&[[100, 100], [0, 0], [0, 3], [4, 0]]);
        assert_eq!(spanning_tree_weight(&points, &[1, 2, 3]), 7.);
        assert_eq!(spanning_tree_weight(&points, &[3, 2, 1]), 7.);
        assert_eq!(spanning_tree_weight(&points, &[2]), 0.);
        assert_eq!(spanning_tree_weight(&points, &[]), 0.);
        let tree = prim(&points, &[3, 1, 2]);
        assert_eq!(tree.parents, vec![None, Some(0), Some(1)]);
    }

    #[test]
    fn mst_weight_is_invariant_to_point_order() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..20 {
            let mut points = (0..rng.gen_range(2..40))
                .map(|_| Point::new(rng.gen_range(-50..50), rng.gen_range(-50..50)))
                .collect::<Vec<_>>();
            classify_all(&mut points);
            let weight = minimum_spanning_tree(&points).weight;
            points.shuffle(&mut rng);
            let shuffled = minimum_spanning_tree(&points).weight;
            if weight.is_finite() {
                assert!((weight - shuffled).abs() < 1e-6, "{} != {}", weight, shuffled);
            } else {
                assert_eq!(shuffled, f64::INFINITY);
            }
        }
    }
}
