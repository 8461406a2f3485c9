use crate::*;

/// Storage for solved subgames, keyed by canonical [`Segment`].
///
/// Implementations differ only in layout; the [`Engine`] drives both the
/// same way and never writes a key twice. Keys handed in are already
/// canonical: `start < period` and `1 <= length <= period / 2`.
pub trait Memo {
    /// empty store for a cake of `period` slices
    fn new(period: usize) -> Self;
    /// solved value of this arc, if any
    fn get(&self, segment: &Segment) -> Option<Value>;
    /// record the solved value of this arc
    fn set(&mut self, segment: &Segment, value: Value);
    /// how many arcs have been solved
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
