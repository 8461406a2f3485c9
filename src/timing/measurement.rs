use crate::*;

/// Average solve time of both memo backends on one cake of 2n slices.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Measurement {
    pub n: usize,
    pub dense: Seconds,
    pub hash: Seconds,
    /// hash / dense, NaN when the dense time rounds to zero
    pub ratio: f64,
    /// dense / n³
    pub dense_cubic: f64,
    /// hash / n³
    pub hash_cubic: f64,
    /// the Professor's guaranteed total, agreed on by both backends
    pub value: Value,
}

impl Measurement {
    pub fn new(n: usize, dense: Seconds, hash: Seconds, value: Value) -> Self {
        let cube = (n as f64).powi(3);
        Self {
            n,
            dense,
            hash,
            ratio: if dense > 0. { hash / dense } else { f64::NAN },
            dense_cubic: dense / cube,
            hash_cubic: hash / cube,
            value,
        }
    }
}
