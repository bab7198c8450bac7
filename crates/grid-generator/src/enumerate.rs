//! Mixed-radix enumeration of dimension index combinations.

/// Lazy enumerator over the Cartesian product of a list of cardinalities.
///
/// Yields every index combination exactly once, starting at all-zeros, with
/// the last dimension varying fastest: each step increments the last index
/// and carries right-to-left on overflow, like an odometer. The sequence is
/// finite and non-restartable; any cardinality of zero yields an empty
/// sequence.
pub struct CartesianEnumerator {
    cardinalities: Vec<u64>,
    current: Vec<u64>,
    exhausted: bool,
    /// Combinations left to yield; `None` when the product overflows u64.
    remaining: Option<u64>,
}

impl CartesianEnumerator {
    /// Create an enumerator over the given cardinalities.
    pub fn new(cardinalities: Vec<u64>) -> Self {
        let exhausted = cardinalities.iter().any(|&c| c == 0);
        let remaining = cardinalities
            .iter()
            .try_fold(1u64, |acc, &c| acc.checked_mul(c));
        Self {
            current: vec![0; cardinalities.len()],
            cardinalities,
            exhausted,
            remaining,
        }
    }
}

impl Iterator for CartesianEnumerator {
    type Item = Vec<u64>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let combination = self.current.clone();

        // Advance the odometer: increment the last dimension, carrying left
        let mut i = self.cardinalities.len();
        loop {
            if i == 0 {
                self.exhausted = true;
                break;
            }
            i -= 1;
            self.current[i] += 1;
            if self.current[i] < self.cardinalities[i] {
                break;
            }
            self.current[i] = 0;
        }

        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= 1;
        }

        Some(combination)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(remaining) => match usize::try_from(remaining) {
                Ok(n) => (n, Some(n)),
                Err(_) => (usize::MAX, None),
            },
            None => (usize::MAX, None),
        }
    }
}
