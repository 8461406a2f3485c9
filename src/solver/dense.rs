use super::*;
use crate::*;

/// Rectangular `period x (half + 1)` table, allocated up front.
///
/// Zero and very negative values are legitimate results, so presence is
/// tracked in a parallel `solved` mask rather than with a sentinel.
#[derive(Debug, Clone, Default)]
pub struct Dense {
    stride: usize,
    values: Vec<Value>,
    solved: Vec<bool>,
}

impl Dense {
    fn index(&self, segment: &Segment) -> usize {
        assert!(
            segment.length < self.stride,
            "arc {} exceeds half-circle of {} slices",
            segment,
            self.stride - 1
        );
        segment.start * self.stride + segment.length
    }
}

impl Memo for Dense {
    fn new(period: usize) -> Self {
        let stride = period / 2 + 1;
        Self {
            stride,
            values: vec![0; period * stride],
            solved: vec![false; period * stride],
        }
    }

    fn get(&self, segment: &Segment) -> Option<Value> {
        let index = self.index(segment);
        self.solved[index].then(|| self.values[index])
    }

    fn set(&mut self, segment: &Segment, value: Value) {
        let index = self.index(segment);
        self.values[index] = value;
        self.solved[index] = true;
    }

    fn len(&self) -> usize {
        self.solved.iter().filter(|solved| **solved).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsolved_until_set() {
        let mut memo = Dense::new(6);
        let segment = Segment::new(2, 3);
        assert_eq!(memo.get(&segment), None);
        memo.set(&segment, -4);
        assert_eq!(memo.get(&segment), Some(-4));
        assert_eq!(memo.len(), 1);
    }

    #[test]
    fn zero_is_a_solved_value() {
        let mut memo = Dense::new(4);
        memo.set(&Segment::new(0, 1), 0);
        assert_eq!(memo.get(&Segment::new(0, 1)), Some(0));
        assert_eq!(memo.get(&Segment::new(1, 1)), None);
    }

    #[test]
    fn covers_every_canonical_key() {
        let mut memo = Dense::new(8);
        for start in 0..8 {
            for length in 1..=4 {
                memo.set(&Segment::new(start, length), (start * 10 + length) as Value);
            }
        }
        assert_eq!(memo.len(), 32);
        assert_eq!(memo.get(&Segment::new(7, 4)), Some(74));
        assert_eq!(memo.get(&Segment::new(3, 1)), Some(31));
    }

    #[test]
    #[should_panic]
    fn rejects_arcs_longer_than_half() {
        Dense::new(4).get(&Segment::new(0, 3));
    }

    #[test]
    #[should_panic]
    fn rejects_uncanonical_start() {
        Dense::new(4).get(&Segment::new(4, 2));
    }
}
