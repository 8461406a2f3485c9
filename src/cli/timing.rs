use crate::*;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Time the dense and hash memo backends", long_about = None)]
pub struct Timing {
    /// half-sizes n to measure, comma separated
    #[arg(long, value_delimiter = ',', default_values_t = TIMING_SIZES)]
    pub sizes: Vec<usize>,
    /// solves per backend per size
    #[arg(long, default_value_t = TIMING_REPETITIONS)]
    pub repetitions: usize,
    /// seed for instance generation
    #[arg(long, default_value_t = TIMING_SEED)]
    pub seed: u64,
    /// smallest slice value
    #[arg(long, default_value_t = SLICE_MIN, allow_negative_numbers = true)]
    pub low: Value,
    /// largest slice value
    #[arg(long, default_value_t = SLICE_MAX, allow_negative_numbers = true)]
    pub high: Value,
    /// write the JSON report here instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl Timing {
    pub fn experiment(&self) -> Experiment {
        Experiment {
            sizes: self.sizes.clone(),
            repetitions: self.repetitions,
            seed: self.seed,
            low: self.low,
            high: self.high,
        }
    }

    pub fn run(&self) -> anyhow::Result<()> {
        let report = self.experiment().run()?;
        log::info!("timing summary\n{}", report);
        match self.output {
            Some(ref path) => {
                report.write(std::io::BufWriter::new(std::fs::File::create(path)?))?;
                log::info!("report written to {}", path.display());
            }
            None => println!("{}", report.to_json()?),
        }
        Ok(())
    }
}
