//! Stepped integer ranges with negative step support.
//!
//! `core::ops::Range::step_by` only walks upwards; pool code also needs
//! descending ranges such as `range(5, 0, -1)`.

/// Iterator over `start..stop` in increments of `step`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRange {
    next: i64,
    stop: i64,
    step: i64,
}

impl Iterator for StepRange {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let in_range = match self.step {
            s if s > 0 => self.next < self.stop,
            s if s < 0 => self.next > self.stop,
            _ => false,
        };
        if !in_range {
            return None;
        }

        let current = self.next;
        // Overflow past i64 means the stop bound was already exceeded.
        self.next = current.checked_add(self.step).unwrap_or(self.stop);
        Some(current)
    }
}

/// Integers from `start` (inclusive) to `stop` (exclusive) by `step`.
///
/// Empty when `step` points away from `stop`, or is zero.
pub fn range(start: i64, stop: i64, step: i64) -> StepRange {
    StepRange {
        next: start,
        stop,
        step,
    }
}

/// Integers `0..stop`.
pub fn range_to(stop: i64) -> StepRange {
    range(0, stop, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_start_and_step() {
        assert_eq!(range_to(4).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(range_to(0).count(), 0);
        assert_eq!(range_to(-3).count(), 0);
    }

    #[test]
    fn test_empty_ranges() {
        assert_eq!(range(5, 5, 1).count(), 0);
        assert_eq!(range(5, 0, 1).count(), 0);
        assert_eq!(range(0, 5, -1).count(), 0);
        assert_eq!(range(0, 5, 0).count(), 0);
    }

    #[test]
    fn test_descending() {
        assert_eq!(range(5, 0, -1).collect::<Vec<_>>(), vec![5, 4, 3, 2, 1]);
        assert_eq!(range(10, -1, -4).collect::<Vec<_>>(), vec![10, 6, 2]);
    }

    #[test]
    fn test_step_past_stop() {
        assert_eq!(range(0, 10, 3).collect::<Vec<_>>(), vec![0, 3, 6, 9]);
        assert_eq!(range(0, 10, 20).collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_restartable() {
        let r = range(1, 4, 1);
        assert_eq!(r.clone().sum::<i64>(), 6);
        assert_eq!(r.collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_no_overflow_at_bounds() {
        let tail: Vec<_> = range(i64::MAX - 1, i64::MAX, 5).collect();
        assert_eq!(tail, vec![i64::MAX - 1]);
        let head: Vec<_> = range(i64::MIN + 1, i64::MIN, -5).collect();
        assert_eq!(head, vec![i64::MIN + 1]);
    }
}
