//! Seed input types.
//!
//! A generator seed is either a single 32-bit word or an ordered sequence of
//! words. The sequence form lets callers feed arbitrary amounts of entropy;
//! the words are folded into the core state through a splitmix64 expansion
//! and are retained verbatim in the state buffer's seed section so they can
//! be read back via `Normal::seed`.

use crate::error::NormalError;

/// Seed for a [`Normal`](crate::Normal) generator.
///
/// Constructed via the `From` conversions rather than the variants directly:
///
/// ```
/// use variate_normal::Seed;
///
/// let scalar: Seed = 42_u32.into();
/// let wide: Seed = 0x0123_4567_89ab_cdef_u64.into();
/// let words: Seed = vec![1_u32, 2, 3].into();
/// # let _ = (scalar, wide, words);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Seed {
    /// A single 32-bit seed word.
    Scalar(u32),
    /// An ordered sequence of 32-bit seed words.
    Words(Vec<u32>),
}

impl Seed {
    /// Converts the seed into its word sequence.
    ///
    /// # Errors
    ///
    /// Returns [`NormalError::InvalidSeed`] when the sequence form is empty;
    /// an empty seed section cannot be represented in the state buffer.
    pub fn into_words(self) -> Result<Vec<u32>, NormalError> {
        match self {
            Seed::Scalar(word) => Ok(vec![word]),
            Seed::Words(words) if words.is_empty() => Err(NormalError::InvalidSeed {
                message: "seed sequence is empty".to_string(),
            }),
            Seed::Words(words) => Ok(words),
        }
    }
}

impl From<u32> for Seed {
    fn from(word: u32) -> Self {
        Seed::Scalar(word)
    }
}

impl From<u64> for Seed {
    /// Splits a 64-bit seed into two words, low word first.
    fn from(seed: u64) -> Self {
        Seed::Words(vec![seed as u32, (seed >> 32) as u32])
    }
}

impl From<Vec<u32>> for Seed {
    fn from(words: Vec<u32>) -> Self {
        Seed::Words(words)
    }
}

impl From<&[u32]> for Seed {
    fn from(words: &[u32]) -> Self {
        Seed::Words(words.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_into_words() {
        let seed: Seed = 7_u32.into();
        assert_eq!(seed.into_words().unwrap(), vec![7]);
    }

    #[test]
    fn test_u64_splits_low_word_first() {
        let seed: Seed = 0x0000_0002_0000_0001_u64.into();
        assert_eq!(seed.into_words().unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_word_sequence_preserved() {
        let seed: Seed = vec![9_u32, 8, 7].into();
        assert_eq!(seed.into_words().unwrap(), vec![9, 8, 7]);
    }

    #[test]
    fn test_empty_sequence_rejected() {
        let seed: Seed = Vec::<u32>::new().into();
        assert!(matches!(
            seed.into_words(),
            Err(NormalError::InvalidSeed { .. })
        ));
    }
}
