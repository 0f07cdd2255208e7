//! Piece bag: shuffled-permutation piece supply ("7-bag" randomizer).
//!
//! The bag is an ordered queue of upcoming kinds. Whenever it holds one or
//! zero entries it is topped up with a freshly shuffled permutation of all
//! seven kinds before the next pop, so the preview is always defined and
//! no kind repeats more than once per seven draws.

use std::collections::VecDeque;

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG.
/// Uses constants from Numerical Recipes.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max).
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// The 7-bag piece supply.
#[derive(Debug, Clone)]
pub struct PieceBag {
    queue: VecDeque<PieceKind>,
    rng: SimpleRng,
}

impl PieceBag {
    pub fn new(seed: u32) -> Self {
        Self {
            queue: VecDeque::with_capacity(16),
            rng: SimpleRng::new(seed),
        }
    }

    fn refill(&mut self) {
        let mut permutation = PieceKind::ALL;
        self.rng.shuffle(&mut permutation);
        self.queue.extend(permutation);
    }

    /// Pop the next kind, returning (current, preview).
    ///
    /// Refills with a fresh permutation first whenever at most one entry
    /// remains, so the preview is always defined.
    pub fn next(&mut self) -> (PieceKind, PieceKind) {
        if self.queue.len() <= 1 {
            self.refill();
        }
        let current = self
            .queue
            .pop_front()
            .expect("bag holds at least seven kinds after refill");
        let preview = *self
            .queue
            .front()
            .expect("bag holds at least one kind after pop");
        (current, preview)
    }

    /// Number of queued kinds (for tests).
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
