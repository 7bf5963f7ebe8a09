//! The closed moment index set of the mRNA/protein distribution.

use std::collections::HashMap;

/// Ordered set of moment exponents (x, y) for moments ⟨m^x p^y⟩.
///
/// The moment equations couple (x, y) only to exponents of total order
/// ≤ x + y (translation raises the mRNA power while lowering the protein
/// power), so the set {(x, y) : x + y ≤ order} is closed and the dynamics
/// restricted to it are exact, not a moment-closure approximation.
///
/// Ordering follows increasing protein power, then increasing mRNA power:
/// m0p0, m1p0, ..., m0p1, m1p1, ..., m0p2, ...
#[derive(Debug, Clone)]
pub struct MomentSet {
    exponents: Vec<(u32, u32)>,
    index: HashMap<(u32, u32), usize>,
}

impl MomentSet {
    /// Build the closed set of all moments with total order ≤ `order`.
    ///
    /// Order 3 is enough for mean, variance and skewness of both mRNA
    /// and protein.
    pub fn up_to(order: u32) -> Self {
        let mut exponents = Vec::new();
        for y in 0..=order {
            for x in 0..=(order - y) {
                exponents.push((x, y));
            }
        }
        let index = exponents
            .iter()
            .enumerate()
            .map(|(i, &e)| (e, i))
            .collect();
        Self { exponents, index }
    }

    /// Number of moments in the set.
    pub fn len(&self) -> usize {
        self.exponents.len()
    }

    /// Whether the set is empty (it never is for a valid order).
    pub fn is_empty(&self) -> bool {
        self.exponents.is_empty()
    }

    /// Iterate over the exponent pairs in stacking order.
    pub fn iter(&self) -> impl Iterator<Item = &(u32, u32)> {
        self.exponents.iter()
    }

    /// Exponents at a given position.
    pub fn exponents(&self, i: usize) -> (u32, u32) {
        self.exponents[i]
    }

    /// Position of the moment ⟨m^x p^y⟩ in the stacking order.
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is not a member; the dynamics builders rely on the
    /// set being closed.
    pub fn position(&self, x: u32, y: u32) -> usize {
        *self
            .index
            .get(&(x, y))
            .unwrap_or_else(|| panic!("moment m{x}p{y} is not in the moment set"))
    }

    /// Column label of the moment at position `i`, e.g. `m2p1`.
    pub fn label(&self, i: usize) -> String {
        let (x, y) = self.exponents[i];
        format!("m{x}p{y}")
    }
}

/// Binomial coefficient C(n, k) as a float.
///
/// Exact for the small exponents used in the moment expansions.
pub(crate) fn binomial(n: u32, k: u32) -> f64 {
    if k > n {
        return 0.0;
    }
    let mut result = 1.0;
    for i in 0..k.min(n - k) {
        result = result * (n - i) as f64 / (i + 1) as f64;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_three_set() {
        let set = MomentSet::up_to(3);
        assert_eq!(set.len(), 10);
        assert_eq!(set.exponents(0), (0, 0));
        assert_eq!(set.position(3, 0), 3);
        assert_eq!(set.label(set.position(1, 2)), "m1p2");
    }

    #[test]
    fn test_set_is_closed_under_moment_dependencies() {
        let set = MomentSet::up_to(3);
        for &(x, y) in set.iter() {
            // transcription/decay: (k, y) and (k + 1, y) for k < x
            for k in 0..x {
                set.position(k, y);
                set.position(k + 1, y);
            }
            // translation: (x + 1, j) for j < y; decay: (x, j + 1)
            for j in 0..y {
                set.position(x + 1, j);
                set.position(x, j + 1);
            }
        }
    }

    #[test]
    fn test_binomial_values() {
        assert_eq!(binomial(3, 0), 1.0);
        assert_eq!(binomial(3, 1), 3.0);
        assert_eq!(binomial(3, 2), 3.0);
        assert_eq!(binomial(6, 3), 20.0);
        assert_eq!(binomial(2, 5), 0.0);
    }

    #[test]
    #[should_panic(expected = "is not in the moment set")]
    fn test_missing_moment_panics() {
        MomentSet::up_to(2).position(3, 1);
    }
}
