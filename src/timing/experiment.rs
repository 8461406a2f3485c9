use super::*;
use crate::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::time::Instant;

/// Parameters of a timing run. Sizes are half-sizes n; each cake has 2n slices.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Experiment {
    pub sizes: Vec<usize>,
    pub repetitions: usize,
    pub seed: u64,
    pub low: Value,
    pub high: Value,
}

impl Default for Experiment {
    fn default() -> Self {
        Self {
            sizes: TIMING_SIZES.to_vec(),
            repetitions: TIMING_REPETITIONS,
            seed: TIMING_SEED,
            low: SLICE_MIN,
            high: SLICE_MAX,
        }
    }
}

impl Experiment {
    /// one cake per size, all drawn from a single seeded stream
    pub fn instances(&self) -> Vec<(usize, Vec<Value>)> {
        let ref mut rng = SmallRng::seed_from_u64(self.seed);
        self.sizes
            .iter()
            .map(|&n| {
                let slices = (0..2 * n)
                    .map(|_| rng.random_range(self.low..=self.high))
                    .collect();
                (n, slices)
            })
            .collect()
    }

    pub fn run(&self) -> anyhow::Result<Report> {
        self.validate()?;
        let mut measurements = Vec::with_capacity(self.sizes.len());
        for (n, slices) in self.instances() {
            log::info!("n = {} ({} slices)", n, 2 * n);
            let (dense, a) = clock(Variant::Dense, &slices, self.repetitions)?;
            let (hash, b) = clock(Variant::Hash, &slices, self.repetitions)?;
            if a != b {
                anyhow::bail!("backends disagree at n = {}: dense {} vs hash {}", n, a, b);
            }
            log::info!("  dense: {:.6} s", dense);
            log::info!("  hash : {:.6} s", hash);
            measurements.push(Measurement::new(n, dense, hash, a));
        }
        Ok(Report {
            experiment: self.clone(),
            measurements,
        })
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.repetitions == 0 {
            anyhow::bail!("repetitions must be at least 1");
        }
        if self.low > self.high {
            anyhow::bail!("empty slice range [{}, {}]", self.low, self.high);
        }
        if let Some(n) = self.sizes.iter().find(|n| **n == 0) {
            anyhow::bail!("sizes must be at least 1, got {}", n);
        }
        Ok(())
    }
}

/// average seconds per solve, and the value solved
fn clock(
    variant: Variant,
    slices: &[Value],
    repetitions: usize,
) -> Result<(Seconds, Value), InvalidInput> {
    let start = Instant::now();
    let mut value = variant.solve(slices)?;
    for _ in 1..repetitions {
        value = variant.solve(slices)?;
    }
    Ok((start.elapsed().as_secs_f64() / repetitions as f64, value))
}
