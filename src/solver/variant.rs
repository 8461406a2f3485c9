use super::*;
use crate::*;

/// Selects how a cake is solved.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// memoized engine over a pre-sized table
    Dense,
    /// memoized engine over a hash map
    Hash,
    /// unmemoized game-tree search, small cakes only
    Exhaustive,
}

impl Variant {
    /// the interchangeable memoized backends
    pub const MEMOIZED: [Self; 2] = [Self::Dense, Self::Hash];

    pub fn solve(&self, slices: &[Value]) -> Result<Value, InvalidInput> {
        match self {
            Self::Dense => solve_with_dense_table(slices),
            Self::Hash => solve_with_hash_map(slices),
            Self::Exhaustive => exhaustive(slices),
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dense => write!(f, "dense"),
            Self::Hash => write!(f, "hash"),
            Self::Exhaustive => write!(f, "exhaustive"),
        }
    }
}

impl TryFrom<&str> for Variant {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "dense" | "array" => Ok(Self::Dense),
            "hash" | "map" => Ok(Self::Hash),
            "exhaustive" | "reference" => Ok(Self::Exhaustive),
            other => Err(anyhow::anyhow!("unknown variant {:?}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for variant in [Variant::Dense, Variant::Hash, Variant::Exhaustive] {
            assert_eq!(Variant::try_from(variant.to_string().as_str()).unwrap(), variant);
        }
    }

    #[test]
    fn accepts_aliases() {
        assert_eq!(Variant::try_from(" Array ").unwrap(), Variant::Dense);
        assert_eq!(Variant::try_from("map").unwrap(), Variant::Hash);
        assert!(Variant::try_from("quantum").is_err());
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Variant::Hash).unwrap(), "\"hash\"");
    }

    #[test]
    fn every_variant_agrees() {
        let slices: &[Value] = &[4, -2, 0, 7, -5, 3, 1, -1, 6, 2];
        for variant in [Variant::Dense, Variant::Hash, Variant::Exhaustive] {
            assert_eq!(variant.solve(slices), Ok(10), "{}", variant);
        }
    }
}
