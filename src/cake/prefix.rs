use super::*;
use crate::*;

/// Running totals over the doubled buffer. Entry `i` holds the sum of
/// the first `i` values, so any arc total is two lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix(Vec<Value>);

impl Prefix {
    /// total of the arc; out-of-range arcs are a caller bug and panic
    pub fn sum(&self, segment: &Segment) -> Value {
        self.0[segment.start + segment.length] - self.0[segment.start]
    }
    /// value of the whole cake, once around
    pub fn total(&self) -> Value {
        self.0[(self.0.len() - 1) / 2]
    }
}

impl From<&Circle> for Prefix {
    fn from(circle: &Circle) -> Self {
        Self(
            std::iter::once(0)
                .chain(circle.buffer().iter().scan(0, |acc, x| {
                    *acc += x;
                    Some(*acc)
                }))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefix(slices: &[Value]) -> Prefix {
        Prefix::from(&Circle::try_from(slices).unwrap())
    }

    #[test]
    fn entries_accumulate() {
        let prefix = prefix(&[3, -1, 4, 1]);
        assert_eq!(prefix.0, vec![0, 3, 2, 6, 7, 10, 9, 13, 14]);
    }

    #[test]
    fn sums_plain_and_wrapping_arcs() {
        let prefix = prefix(&[3, -1, 4, 1]);
        assert_eq!(prefix.sum(&Segment::new(0, 1)), 3);
        assert_eq!(prefix.sum(&Segment::new(1, 2)), 3);
        assert_eq!(prefix.sum(&Segment::new(3, 2)), 4);
        assert_eq!(prefix.sum(&Segment::new(2, 4)), 7);
    }

    #[test]
    fn total_is_one_lap() {
        assert_eq!(prefix(&[3, -1, 4, 1]).total(), 7);
        assert_eq!(prefix(&[]).total(), 0);
    }

    #[test]
    fn every_arc_matches_direct_sum() {
        let circle = Circle::random();
        let prefix = Prefix::from(&circle);
        for start in 0..circle.period() {
            for length in 1..=circle.period() {
                let direct = circle.buffer()[start..start + length].iter().sum::<Value>();
                assert_eq!(prefix.sum(&Segment::new(start, length)), direct);
            }
        }
    }
}
