use crate::*;

/// Whose turn it is in the explicit-turn formulation.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Turn {
    Professor,
    Sister,
}

impl Turn {
    pub fn next(&self) -> Self {
        match self {
            Self::Professor => Self::Sister,
            Self::Sister => Self::Professor,
        }
    }
}

/// Full game-tree search with an explicit turn and no memo.
///
/// The Professor eats a prefix or suffix and adds it to his score; his
/// sister eats a prefix or suffix to leave him the worst remainder. On a
/// single slice whoever moves eats it. Exponential in n, so this is only
/// a yardstick for the memoized engines on small cakes.
pub fn exhaustive(slices: &[Value]) -> Result<Value, InvalidInput> {
    let ref circle = Circle::try_from(slices)?;
    if circle.is_empty() {
        return Ok(0);
    }
    let ref prefix = Prefix::from(circle);
    let half = circle.half();
    Ok((0..circle.period())
        .map(|start| {
            let eaten = prefix.sum(&Segment::new(start, half));
            let rest = Segment::new(start + half, half);
            eaten + search(circle, prefix, rest, Turn::Sister)
        })
        .fold(-UNBOUNDED, Value::max))
}

fn search(circle: &Circle, prefix: &Prefix, segment: Segment, turn: Turn) -> Value {
    let length = segment.length;
    match (length, turn) {
        (1, Turn::Professor) => circle.at(segment.start),
        (1, Turn::Sister) => 0,
        (_, Turn::Professor) => (1..length)
            .flat_map(|k| {
                [
                    (segment.head(k), segment.tail(length - k)),
                    (segment.tail(k), segment.head(length - k)),
                ]
            })
            .map(|(eaten, rest)| prefix.sum(&eaten) + search(circle, prefix, rest, turn.next()))
            .fold(-UNBOUNDED, Value::max),
        (_, Turn::Sister) => (1..length)
            .flat_map(|k| [segment.tail(length - k), segment.head(length - k)])
            .map(|rest| search(circle, prefix, rest, turn.next()))
            .fold(UNBOUNDED, Value::min),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turns_alternate() {
        assert_eq!(Turn::Professor.next(), Turn::Sister);
        assert_eq!(Turn::Sister.next(), Turn::Professor);
    }

    #[test]
    fn sister_leaves_the_worst_slice() {
        let slices: &[Value] = &[10, -10, 10, -10];
        assert_eq!(exhaustive(slices), Ok(-10));
    }

    #[test]
    fn uniform_cake() {
        // eat two, sister eats one, the last one is his
        assert_eq!(exhaustive(&[1, 1, 1, 1]), Ok(3));
    }

    #[test]
    fn known_values() {
        assert_eq!(exhaustive(&[3, 1, 4, 1, 5, 9]), Ok(18));
        assert_eq!(exhaustive(&[2, 7, 1, 8, 2, 8, 1, 8]), Ok(21));
        assert_eq!(exhaustive(&[-3, -1, -4, -1]), Ok(-8));
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(exhaustive(&[]), Ok(0));
        assert_eq!(exhaustive(&[1, 2, 3]), Err(InvalidInput::OddSliceCount(3)));
    }
}
