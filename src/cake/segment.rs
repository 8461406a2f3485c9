/// A contiguous arc of the doubled buffer.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Segment {
    pub start: usize,
    pub length: usize,
}

impl Segment {
    pub fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }
    /// the first `k` slices of this arc
    pub fn head(&self, k: usize) -> Self {
        Self::new(self.start, k)
    }
    /// the last `k` slices of this arc
    pub fn tail(&self, k: usize) -> Self {
        Self::new(self.start + self.length - k, k)
    }
    /// same physical arc with its start folded into `[0, period)`
    pub fn canonical(&self, period: usize) -> Self {
        Self::new(self.start % period, self.length)
    }
    /// start in the high half, length in the low half
    pub fn pack(&self) -> u64 {
        (self.start as u64) << 32 | self.length as u64
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}..{})", self.start, self.start + self.length)
    }
}
