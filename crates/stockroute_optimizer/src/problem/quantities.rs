use smallvec::SmallVec;

type Vector = SmallVec<[f64; 4]>;

/// Quantity per order line, collected along one candidate route.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantities(Vector);

impl Quantities {
    pub fn zeros(len: usize) -> Self {
        let mut vec = SmallVec::with_capacity(len);
        vec.resize(len, 0.0);
        Quantities(vec)
    }

    #[inline]
    pub fn get(&self, index: usize) -> f64 {
        self.0.get(index).copied().unwrap_or(0.0)
    }

    /// Collected quantities only ever grow during a simulation.
    #[inline]
    pub fn add(&mut self, index: usize, quantity: f64) {
        debug_assert!(quantity >= 0.0);
        if index >= self.0.len() {
            self.0.resize(index + 1, 0.0);
        }
        self.0[index] += quantity;
    }

    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }
}
