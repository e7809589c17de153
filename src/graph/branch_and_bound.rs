use serde::Serialize;
use tracing::{debug, info, trace};

use super::{
    mst::spanning_tree_weight,
    tsp::{cheapest_insertion, Tour},
};
use crate::point::Point;

/// Counters describing how much of the permutation tree was explored.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Partial tours that passed the bound and had their children enumerated
    pub expanded: u64,
    /// Partial tours cut by the two connecting edges alone
    pub pruned_by_edges: u64,
    /// Partial tours cut once the spanning tree over the unvisited points was added
    pub pruned_by_tree: u64,
    /// Complete tours that beat the best known tour
    pub improvements: u64,
}

/// Exact closed loop TSP by depth-first branch and bound over permutations of the points.
///
/// Position 0 of the tour stays fixed, positions `1..depth` are decided, and the rest of the path
/// holds the unvisited points in arbitrary order. A partial tour is only extended when its length,
/// plus the shortest edges joining either end of it to an unvisited point, plus a minimum spanning
/// tree over the unvisited points, is below the best complete tour. None of these terms can
/// overestimate the cost of finishing the tour, so the optimum is never cut.
///
/// The search is seeded with the [cheapest insertion](cheapest_insertion) tour.
pub struct BranchAndBound<'a> {
    points: &'a [Point],
    path: Vec<usize>,
    /// Length of the edges between positions `0..depth`
    current_length: f64,
    best: Tour,
    stats: SearchStats,
    edge_precheck: bool,
}

impl<'a> BranchAndBound<'a> {
    pub fn new(points: &'a [Point]) -> Self {
        let best = cheapest_insertion(points);
        debug!("Seeding search with a tour of length {}", best.length);
        Self {
            points,
            path: best.order.clone(),
            current_length: 0.,
            best,
            stats: SearchStats::default(),
            edge_precheck: true,
        }
    }

    /// Skip the cheap edge bound and always compute the spanning tree.
    #[cfg(test)]
    fn without_edge_precheck(mut self) -> Self {
        self.edge_precheck = false;
        self
    }

    pub fn solve(mut self) -> (Tour, SearchStats) {
        if !self.path.is_empty() {
            self.permute(1);
        }
        info!(
            "Optimal tour of length {} ({} expanded, {} pruned by edges, {} pruned by tree, {} improvements)",
            self.best.length,
            self.stats.expanded,
            self.stats.pruned_by_edges,
            self.stats.pruned_by_tree,
            self.stats.improvements,
        );
        (self.best, self.stats)
    }

    fn distance(&self, a: usize, b: usize) -> f64 {
        self.points[self.path[a]].distance(&self.points[self.path[b]])
    }

    fn permute(&mut self, depth: usize) {
        let n = self.path.len();
        if depth == n {
            let length = self.current_length + self.distance(n - 1, 0);
            if length < self.best.length {
                trace!("Improved tour to {}", length);
                self.stats.improvements += 1;
                self.best = Tour {
                    length,
                    order: self.path.clone(),
                };
            }
            return;
        }

        if !self.promising(depth) {
            return;
        }
        self.stats.expanded += 1;

        for i in depth..n {
            self.path.swap(depth, i);
            let previous_length = self.current_length;
            self.current_length += self.distance(depth - 1, depth);

            self.permute(depth + 1);

            self.current_length = previous_length;
            self.path.swap(depth, i);
        }
    }

    /// Whether the partial tour fixed in `path[..depth]` could still be completed into a better tour.
    fn promising(&mut self, depth: usize) -> bool {
        let first = &self.points[self.path[0]];
        let last = &self.points[self.path[depth - 1]];
        let (min_first, min_last) = self.path[depth..].iter().fold(
            (f64::INFINITY, f64::INFINITY),
            |(min_first, min_last), &i| {
                let unvisited = &self.points[i];
                (
                    min_first.min(first.distance(unvisited)),
                    min_last.min(last.distance(unvisited)),
                )
            },
        );

        if self.edge_precheck && self.current_length + min_first + min_last >= self.best.length {
            self.stats.pruned_by_edges += 1;
            return false;
        }

        let remainder = spanning_tree_weight(self.points, &self.path[depth..]);
        if self.current_length + remainder + min_first + min_last < self.best.length {
            true
        } else {
            self.stats.pruned_by_tree += 1;
            false
        }
    }
}
