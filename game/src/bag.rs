use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_pcg::Pcg32;

use crate::shapes::Shape;

/// 7-bag randomizer: every refill is a fresh permutation of all seven shapes.
#[derive(Debug, Clone)]
pub struct Bag {
    rng: Pcg32,
    remaining: Vec<Shape>,
}

impl Bag {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            remaining: Vec::with_capacity(Shape::ALL.len()),
        }
    }

    /// Discards whatever is left and starts a new permutation.
    pub fn refill(&mut self) {
        self.remaining.clear();
        self.remaining.extend_from_slice(&Shape::ALL);
        self.remaining.shuffle(&mut self.rng);
    }

    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    pub fn next_shape(&mut self) -> Shape {
        if self.remaining.is_empty() {
            self.refill();
        }
        match self.remaining.pop() {
            Some(shape) => shape,
            None => Shape::I,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Bag::new(42);
        let mut b = Bag::new(42);
        let xs: Vec<_> = (0..21).map(|_| a.next_shape()).collect();
        let ys: Vec<_> = (0..21).map(|_| b.next_shape()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn refill_restarts_the_permutation() {
        let mut bag = Bag::new(7);
        bag.next_shape();
        bag.next_shape();
        assert_eq!(bag.remaining(), 5);
        bag.refill();
        assert_eq!(bag.remaining(), 7);

        let mut drawn: Vec<_> = (0..7).map(|_| bag.next_shape()).collect();
        drawn.sort();
        assert_eq!(drawn, Shape::ALL.to_vec());
    }
}
