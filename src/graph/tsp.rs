use serde::Serialize;
use tracing::{debug, trace};

use crate::{kbn_summation, point::Point};

/// A closed tour. The last point connects back to the first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tour {
    pub length: f64,
    pub order: Vec<usize>,
}

impl Tour {
    /// Whether the tour visits each of `0..n` exactly once.
    pub fn is_permutation_of(&self, n: usize) -> bool {
        if self.order.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        self.order
            .iter()
            .all(|&i| i < n && !std::mem::replace(&mut seen[i], true))
    }
}

/// Length of the cycle visiting `order`, including the edge from the last point back to the first.
pub fn closed_tour_length(points: &[Point], order: &[usize]) -> f64 {
    kbn_summation! {
        for (from, to) in order.iter().zip(order.iter().cycle().skip(1)) => {
            length += points[*from].distance(&points[*to]);
        }
    }
    length
}

/// Approximate a closed loop TSP solution by cheapest insertion in O(V^2) time.
///
/// Points are taken in input order and each is spliced into whichever edge of the tour grows
/// the least, preferring the earliest edge on ties. The tour starts out as point 0 and a
/// zero-length edge back to itself.
///
/// <https://en.wikipedia.org/wiki/Travelling_salesman_problem#Constructive_heuristics>
pub fn cheapest_insertion(points: &[Point]) -> Tour {
    if points.is_empty() {
        return Tour {
            length: 0.,
            order: vec![],
        };
    }

    let mut route = Vec::with_capacity(points.len() + 1);
    route.extend([0, 0]);
    let mut length = 0.;

    for (i, point) in points.iter().enumerate().skip(1) {
        let (edge, cost) = route
            .windows(2)
            .map(|edge| {
                let [from, to] = [&points[edge[0]], &points[edge[1]]];
                from.distance(point) + point.distance(to) - from.distance(to)
            })
            .enumerate()
            .fold((0, f64::INFINITY), |best, (edge, cost)| {
                if cost < best.1 {
                    (edge, cost)
                } else {
                    best
                }
            });
        trace!("Inserting {} after position {} for {}", i, edge, cost);
        length += cost;
        route.insert(edge + 1, i);
    }
    // Drop the closing copy of point 0
    route.pop();

    debug!("Cheapest insertion tour of {} points: {}", points.len(), length);
    Tour {
        length,
        order: route,
    }
}
