use super::*;
use crate::*;
use clap::Parser;
use colored::Colorize;

#[derive(Parser, Debug)]
#[command(author, version, about = "Solve a cake for the Professor's guaranteed total", long_about = None)]
pub struct Solve {
    /// slice values (2n of them); prompts interactively when omitted
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<Value>,
    /// backends to run; dense and hash when omitted
    #[arg(long, short, value_enum)]
    pub variant: Vec<Variant>,
}

impl Solve {
    pub fn variants(&self) -> Vec<Variant> {
        match self.variant.is_empty() {
            true => Variant::MEMOIZED.to_vec(),
            false => self.variant.clone(),
        }
    }

    pub fn run(&self) -> anyhow::Result<()> {
        let slices = match self.values.is_empty() {
            true => prompt()?,
            false => self.values.clone(),
        };
        let results = self.results(&slices)?;
        println!("--- RESULTS ---");
        for (variant, value) in &results {
            println!("{:<10} : {}", variant.to_string(), value.to_string().green().bold());
        }
        Ok(())
    }

    /// solve with every selected variant; they must all agree
    pub fn results(&self, slices: &[Value]) -> anyhow::Result<Vec<(Variant, Value)>> {
        let variants = self.variants();
        if variants.contains(&Variant::Exhaustive) && slices.len() > 2 * EXHAUSTIVE_HALF_MAX {
            log::warn!("exhaustive search on {} slices may take a long time", slices.len());
        }
        let results = variants
            .into_iter()
            .map(|variant| {
                log::info!("solving {} slices with {}", slices.len(), variant);
                variant.solve(slices).map(|value| (variant, value))
            })
            .collect::<Result<Vec<_>, InvalidInput>>()?;
        if let Some((first, value)) = results.first() {
            if let Some((other, differ)) = results.iter().find(|(_, v)| v != value) {
                anyhow::bail!("{} found {} but {} found {}", first, value, other, differ);
            }
        }
        Ok(results)
    }
}
