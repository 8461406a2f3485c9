use super::*;
use crate::*;
use std::collections::HashMap;

/// Sparse store keyed by the packed `(start, length)` pair, grown on demand.
#[derive(Debug, Clone, Default)]
pub struct Hashed(HashMap<u64, Value>);

impl Memo for Hashed {
    fn new(_: usize) -> Self {
        Self(HashMap::new())
    }

    fn get(&self, segment: &Segment) -> Option<Value> {
        self.0.get(&segment.pack()).copied()
    }

    fn set(&mut self, segment: &Segment, value: Value) {
        self.0.insert(segment.pack(), value);
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}
