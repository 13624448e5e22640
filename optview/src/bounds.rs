/// Closed-or-unbounded interval limiting how often an option may occur, how
/// many values it may claim, or how many tokens an operand slot may consume.
///
/// The two numeric limits are order-insensitive: the effective upper limit is
/// the larger of the two. When the interval is unbounded the upper limit is
/// infinite and the effective lower limit is the larger *numeric* field, not
/// the smaller one, so `Bounds::at_least(1)` requires at least one occurrence
/// while permitting any number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounds {
    limits: [usize; 2],
    unbounded: bool,
}

impl Bounds {
    /// A closed interval; the order of the two limits does not matter.
    pub const fn new(a: usize, b: usize) -> Self {
        Bounds {
            limits: [a, b],
            unbounded: false,
        }
    }

    /// Exactly `n` occurrences.
    pub const fn exactly(n: usize) -> Self {
        Bounds::new(n, n)
    }

    /// Zero to `n` occurrences.
    pub const fn at_most(n: usize) -> Self {
        Bounds::new(0, n)
    }

    /// Any number of occurrences, including none.
    pub const fn any() -> Self {
        Bounds {
            limits: [0, 0],
            unbounded: true,
        }
    }

    /// At least `n` occurrences, with no upper limit.
    pub const fn at_least(n: usize) -> Self {
        Bounds {
            limits: [n, 0],
            unbounded: true,
        }
    }

    /// The effective upper limit. Meaningless when [`Bounds::is_unbounded`].
    pub const fn upper(&self) -> usize {
        if self.limits[0] > self.limits[1] {
            self.limits[0]
        } else {
            self.limits[1]
        }
    }

    /// The effective lower limit. For an unbounded interval this equals the
    /// larger numeric field rather than the smaller.
    pub const fn lower(&self) -> usize {
        if self.unbounded {
            self.upper()
        } else if self.limits[0] < self.limits[1] {
            self.limits[0]
        } else {
            self.limits[1]
        }
    }

    pub const fn is_unbounded(&self) -> bool {
        self.unbounded
    }

    /// Whether `occ` lies within the interval.
    pub const fn contains(&self, occ: usize) -> bool {
        occ >= self.lower() && (occ <= self.upper() || self.unbounded)
    }

    /// Whether `occ` respects the upper limit; the lower limit is checked
    /// separately once parsing completes.
    pub const fn admits(&self, occ: usize) -> bool {
        occ <= self.upper() || self.unbounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_interval_is_order_insensitive() {
        assert_eq!(Bounds::new(1, 4).lower(), 1);
        assert_eq!(Bounds::new(1, 4).upper(), 4);
        assert_eq!(Bounds::new(4, 1).lower(), 1);
        assert_eq!(Bounds::new(4, 1).upper(), 4);
    }

    #[test]
    fn unbounded_lower_is_the_larger_numeric_field() {
        let b = Bounds::at_least(1);
        assert_eq!(b.lower(), 1);
        assert!(b.is_unbounded());

        // The asymmetry is intentional: an unbounded interval takes its lower
        // limit from its own upper numeric field.
        let b = Bounds {
            limits: [0, 1],
            unbounded: true,
        };
        assert_eq!(b.lower(), 1);
        assert_eq!(b.upper(), 1);
    }

    #[test]
    fn contains_honors_both_ends() {
        let b = Bounds::new(1, 4);
        assert!(!b.contains(0));
        assert!(b.contains(1));
        assert!(b.contains(4));
        assert!(!b.contains(5));

        assert!(Bounds::any().contains(0));
        assert!(Bounds::any().contains(1000));
        assert!(!Bounds::at_least(2).contains(1));
    }

    #[test]
    fn admits_ignores_the_lower_limit() {
        assert!(Bounds::exactly(3).admits(1));
        assert!(!Bounds::exactly(3).admits(4));
        assert!(Bounds::at_least(2).admits(1));
    }
}
