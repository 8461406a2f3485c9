use super::*;
use crate::*;

/// The Professor's first cut: eat the half-circle starting at `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opening {
    pub start: usize,
    pub value: Value,
}

/// Try all 2n half-circles as the opening and keep the best.
///
/// After eating `[i, i + n)` the Professor hands `[i + n, i + 2n)` to his
/// sister, who then guarantees herself `value(i + n, n)` of it. Everything
/// else on the cake ends up with the Professor.
pub fn scan<M: Memo>(slices: &[Value]) -> Result<Option<Opening>, InvalidInput> {
    let circle = Circle::try_from(slices)?;
    if circle.is_empty() {
        return Ok(None);
    }
    let half = circle.half();
    let period = circle.period();
    let mut engine = Engine::<M>::new(circle);
    engine.fill(half);
    let total = engine.total();
    let best = (0..period)
        .map(|start| Opening {
            start,
            value: total - engine.value(&Segment::new(start + half, half)),
        })
        .fold(None, |best: Option<Opening>, opening| match best {
            Some(best) if best.value >= opening.value => Some(best),
            _ => Some(opening),
        });
    log::debug!(
        "solved {} slices with {} memo entries",
        period,
        engine.memo().len()
    );
    Ok(best)
}

/// Best guaranteed total for the Professor. An empty cake is worth 0.
pub fn solve<M: Memo>(slices: &[Value]) -> Result<Value, InvalidInput> {
    Ok(scan::<M>(slices)?.map(|opening| opening.value).unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_first_best_opening() {
        let opening = scan::<Dense>(&[1, 9, 9, 1]).unwrap().unwrap();
        assert_eq!(opening, Opening { start: 1, value: 19 });
    }

    #[test]
    fn empty_cake_has_no_opening() {
        assert_eq!(scan::<Hashed>(&[]), Ok(None));
        assert_eq!(solve::<Hashed>(&[]), Ok(0));
    }

    #[test]
    fn odd_cake_is_rejected() {
        assert_eq!(
            scan::<Dense>(&[1, 2, 3]),
            Err(InvalidInput::OddSliceCount(3))
        );
    }
}
