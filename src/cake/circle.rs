use crate::*;
use rand::Rng;

/// The slice sequence laid out twice, so index `i` and `i + 2n`
/// denote the same physical slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Circle(Vec<Value>);

impl Circle {
    /// number of physical slices (2n)
    pub fn period(&self) -> usize {
        self.0.len() / 2
    }
    /// slices in one opening half-circle (n)
    pub fn half(&self) -> usize {
        self.0.len() / 4
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// the input slices, once around
    pub fn slices(&self) -> &[Value] {
        &self.0[..self.period()]
    }
    /// the doubled buffer of 4n values
    pub fn buffer(&self) -> &[Value] {
        &self.0
    }
    pub fn at(&self, index: usize) -> Value {
        self.0[index]
    }
    /// the same cake turned by `steps` slices
    pub fn rotate(&self, steps: usize) -> Self {
        let mut slices = self.slices().to_vec();
        if !slices.is_empty() {
            let steps = steps % slices.len();
            slices.rotate_left(steps);
        }
        Self(slices.iter().chain(slices.iter()).copied().collect())
    }
}

impl TryFrom<&[Value]> for Circle {
    type Error = InvalidInput;
    fn try_from(slices: &[Value]) -> Result<Self, Self::Error> {
        match slices.len() % 2 {
            0 => Ok(Self(slices.iter().chain(slices.iter()).copied().collect())),
            _ => Err(InvalidInput::OddSliceCount(slices.len())),
        }
    }
}

impl Arbitrary for Circle {
    fn random() -> Self {
        let ref mut rng = rand::rng();
        let half = rng.random_range(1..=6);
        let slices = (0..2 * half)
            .map(|_| rng.random_range(SLICE_MIN..=SLICE_MAX))
            .collect::<Vec<Value>>();
        Self(slices.iter().chain(slices.iter()).copied().collect())
    }
}
