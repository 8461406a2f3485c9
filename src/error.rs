/// A slice sequence that cannot be played as a cake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidInput {
    /// The cake must be cut into an even number (2n) of slices.
    OddSliceCount(usize),
}

impl std::fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OddSliceCount(n) => write!(f, "slice count must be even (2n), got {}", n),
        }
    }
}

impl std::error::Error for InvalidInput {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_the_offending_count() {
        let message = InvalidInput::OddSliceCount(7).to_string();
        assert!(message.contains("even"));
        assert!(message.contains('7'));
    }

    #[test]
    fn converts_into_anyhow() {
        let error = anyhow::Error::from(InvalidInput::OddSliceCount(3));
        assert_eq!(
            error.downcast_ref::<InvalidInput>(),
            Some(&InvalidInput::OddSliceCount(3))
        );
    }
}
