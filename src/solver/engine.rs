use super::*;
use crate::*;

/// Minimax over arcs of the doubled buffer.
///
/// `value(arc)` is the most the player to move can guarantee to eat from
/// `arc` when the opponent plays just as greedily for themself. Every
/// slice is eventually eaten by someone, so maximizing your own share is
/// the same as minimizing the other player's, and no turn flag is needed:
///
/// ```text
/// value(s, 1) = slice[s]
/// value(s, L) = max over k in [1, L) of sum(s, L) - min(value(s, k), value(s + L - k, k))
/// ```
///
/// The mover eats `L - k` slices from one end and hands the `k` slices at
/// the other end to the opponent. Arcs are solved bottom-up by length, so
/// there is no recursion and every lookup hits an already solved key.
pub struct Engine<M: Memo> {
    circle: Circle,
    prefix: Prefix,
    memo: M,
}

impl<M: Memo> Engine<M> {
    pub fn new(circle: Circle) -> Self {
        let prefix = Prefix::from(&circle);
        let memo = M::new(circle.period());
        Self {
            circle,
            prefix,
            memo,
        }
    }

    pub fn circle(&self) -> &Circle {
        &self.circle
    }
    pub fn memo(&self) -> &M {
        &self.memo
    }
    pub fn sum(&self, segment: &Segment) -> Value {
        self.prefix.sum(segment)
    }
    pub fn total(&self) -> Value {
        self.prefix.total()
    }

    /// solve every arc of up to `length` slices, shortest first
    pub fn fill(&mut self, length: usize) {
        for length in 1..=length {
            for start in 0..self.circle.period() {
                let segment = Segment::new(start, length);
                let value = self.resolve(&segment);
                self.memo.set(&segment, value);
            }
        }
    }

    /// solved value of any arc; reading an unsolved arc is a bug
    pub fn value(&self, segment: &Segment) -> Value {
        let key = segment.canonical(self.circle.period());
        match self.memo.get(&key) {
            Some(value) => value,
            None => panic!("arc {} read before it was solved", key),
        }
    }

    fn resolve(&self, segment: &Segment) -> Value {
        match segment.length {
            1 => self.circle.at(segment.start),
            length => {
                let total = self.sum(segment);
                (1..length)
                    .map(|k| {
                        let head = self.value(&segment.head(k));
                        let tail = self.value(&segment.tail(k));
                        total - head.min(tail)
                    })
                    .fold(-UNBOUNDED, Value::max)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(slices: &[Value]) -> Engine<Dense> {
        let circle = Circle::try_from(slices).unwrap();
        let half = circle.half();
        let mut engine = Engine::new(circle);
        engine.fill(half);
        engine
    }

    #[test]
    fn single_slice_goes_to_mover() {
        let engine = engine(&[4, -7, 2, 9]);
        assert_eq!(engine.value(&Segment::new(0, 1)), 4);
        assert_eq!(engine.value(&Segment::new(1, 1)), -7);
        assert_eq!(engine.value(&Segment::new(5, 1)), -7);
    }

    #[test]
    fn pair_mover_hands_over_the_smaller() {
        // mover eats one slice, opponent eats the other
        let engine = engine(&[4, -7, 2, 9]);
        assert_eq!(engine.value(&Segment::new(0, 2)), 4);
        assert_eq!(engine.value(&Segment::new(2, 2)), 9);
        assert_eq!(engine.value(&Segment::new(3, 2)), 9);
    }

    #[test]
    fn triple_mover_keeps_best_split() {
        // [1, 5, 2]: eat [5, 2], hand over [1]
        let engine = engine(&[1, 5, 2, 0, 0, 0]);
        assert_eq!(engine.value(&Segment::new(0, 3)), 7);
    }

    #[test]
    fn wrapping_arc_matches_canonical() {
        let engine = engine(&[3, 1, 4, 1, 5, 9]);
        for start in 0..6 {
            for length in 1..=3 {
                assert_eq!(
                    engine.value(&Segment::new(start, length)),
                    engine.value(&Segment::new(start + 6, length))
                );
            }
        }
    }

    #[test]
    fn fills_every_state_once() {
        let engine = engine(&[3, 1, 4, 1, 5, 9, 2, 6]);
        assert_eq!(engine.memo().len(), 8 * 4);
    }

    #[test]
    #[should_panic]
    fn unsolved_read_is_fatal() {
        let slices: &[Value] = &[1, 2, 3, 4];
        let circle = Circle::try_from(slices).unwrap();
        let engine = Engine::<Hashed>::new(circle);
        engine.value(&Segment::new(0, 1));
    }
}
