use super::node::NodeIdx;

/// Stand-in for a leg whose distance is not in the table. Large enough that
/// any route using such a leg loses against a route with known legs, but
/// finite so the route is still simulated and compared.
pub const UNREACHABLE_DISTANCE: f64 = 1e6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distance {
    Known(f64),
    Unknown,
}

impl Distance {
    /// Distance used for cost accrual, `UNREACHABLE_DISTANCE` when unknown.
    #[inline]
    pub fn resolve(self) -> f64 {
        match self {
            Distance::Known(distance) => distance,
            Distance::Unknown => UNREACHABLE_DISTANCE,
        }
    }
}

/// Partial, possibly asymmetric, distance table between nodes.
///
/// Stored flat: the entry of `from -> to` lives at `from * num_nodes + to`.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    distances: Vec<Option<f64>>,
    num_nodes: usize,
}

impl DistanceMatrix {
    pub fn new(num_nodes: usize) -> Self {
        DistanceMatrix {
            distances: vec![None; num_nodes * num_nodes],
            num_nodes,
        }
    }

    #[inline(always)]
    fn index(&self, from: NodeIdx, to: NodeIdx) -> usize {
        from.get() * self.num_nodes + to.get()
    }

    /// Returns the previous value of the entry, if any.
    pub fn set(&mut self, from: NodeIdx, to: NodeIdx, distance: f64) -> Option<f64> {
        let index = self.index(from, to);
        self.distances[index].replace(distance)
    }

    #[inline]
    pub fn get(&self, from: NodeIdx, to: NodeIdx) -> Distance {
        if from.get() >= self.num_nodes || to.get() >= self.num_nodes {
            return Distance::Unknown;
        }

        match self.distances[self.index(from, to)] {
            Some(distance) => Distance::Known(distance),
            None => Distance::Unknown,
        }
    }

    /// Known entries as `(from, to, distance)`, row by row.
    pub fn entries(&self) -> impl Iterator<Item = (NodeIdx, NodeIdx, f64)> + '_ {
        self.distances
            .iter()
            .enumerate()
            .filter_map(move |(index, distance)| {
                distance.map(|distance| {
                    (
                        NodeIdx::new(index / self.num_nodes),
                        NodeIdx::new(index % self.num_nodes),
                        distance,
                    )
                })
            })
    }
}
