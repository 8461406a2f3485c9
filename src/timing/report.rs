use super::*;

/// Outcome of an [`Experiment`]: its settings and one row per size.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Report {
    pub experiment: Experiment,
    pub measurements: Vec<Measurement>,
}

impl Report {
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
    pub fn write<W: std::io::Write>(&self, writer: W) -> anyhow::Result<()> {
        Ok(serde_json::to_writer_pretty(writer, self)?)
    }
}

#[rustfmt::skip]
impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Seed: {}  Repetitions: {}", self.experiment.seed, self.experiment.repetitions)?;
        writeln!(f, "┌──────┬────────────┬────────────┬──────────┬────────────┬────────────┬────────┐")?;
        writeln!(f, "│    n │  Dense (s) │   Hash (s) │    Ratio │   Dense/n³ │    Hash/n³ │  Value │")?;
        writeln!(f, "├──────┼────────────┼────────────┼──────────┼────────────┼────────────┼────────┤")?;
        for m in &self.measurements {
            writeln!(
                f,
                "│ {:>4} │ {:>10.6} │ {:>10.6} │ {:>8.2} │ {:>10.3e} │ {:>10.3e} │ {:>+6} │",
                m.n, m.dense, m.hash, m.ratio, m.dense_cubic, m.hash_cubic, m.value,
            )?;
        }
        writeln!(f, "└──────┴────────────┴────────────┴──────────┴────────────┴────────────┴────────┘")?;
        Ok(())
    }
}
