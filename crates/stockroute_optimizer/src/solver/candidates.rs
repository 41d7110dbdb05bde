use crate::problem::{network::Network, node::NodeIdx};

/// Every candidate route of a network: each source as the start, followed by
/// every permutation of the remaining sources, followed by the sink.
///
/// Starts are taken in network order and permutations in lexicographic order,
/// so the sequence is deterministic. A network with `n` sources yields `n!`
/// routes; the enumeration is exhaustive and does no pruning, which is only
/// viable because the source count is capped by
/// [`MAX_SOURCE_NODES`](crate::problem::network::MAX_SOURCE_NODES).
pub struct CandidateRoutes<'a> {
    sources: &'a [NodeIdx],
    sink: NodeIdx,
    start: usize,
    rest: Vec<usize>,
}

impl<'a> CandidateRoutes<'a> {
    pub fn new(network: &'a Network) -> Self {
        Self::from_parts(network.sources(), network.sink())
    }

    pub fn from_parts(sources: &'a [NodeIdx], sink: NodeIdx) -> Self {
        CandidateRoutes {
            sources,
            sink,
            start: 0,
            rest: remaining_positions(sources.len(), 0),
        }
    }
}

impl Iterator for CandidateRoutes<'_> {
    type Item = Vec<NodeIdx>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start >= self.sources.len() {
            return None;
        }

        let mut route = Vec::with_capacity(self.sources.len() + 1);
        route.push(self.sources[self.start]);
        route.extend(self.rest.iter().map(|&position| self.sources[position]));
        route.push(self.sink);

        if !next_permutation(&mut self.rest) {
            self.start += 1;
            self.rest = remaining_positions(self.sources.len(), self.start);
        }

        Some(route)
    }
}

/// Number of candidate routes for `num_sources` source nodes.
pub fn candidate_count(num_sources: usize) -> usize {
    (1..=num_sources).product()
}

fn remaining_positions(len: usize, start: usize) -> Vec<usize> {
    (0..len).filter(|&position| position != start).collect()
}

/// Rearranges into the next lexicographic permutation. Returns false, leaving
/// the slice untouched, when it already is the last one.
fn next_permutation(values: &mut [usize]) -> bool {
    if values.len() < 2 {
        return false;
    }

    let Some(pivot) = (0..values.len() - 1).rev().find(|&i| values[i] < values[i + 1]) else {
        return false;
    };

    let successor = (pivot + 1..values.len())
        .rev()
        .find(|&i| values[i] > values[pivot])
        .unwrap_or(pivot + 1);

    values.swap(pivot, successor);
    values[pivot + 1..].reverse();
    true
}
