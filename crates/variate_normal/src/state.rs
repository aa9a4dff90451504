//! State-snapshot layout and the shared state buffer.
//!
//! # Snapshot Layout
//!
//! A state snapshot is an ordered sequence of 32-bit unsigned integers:
//!
//! ```text
//! [ s0 s1 s2 s3 | seed_len | seed_0 .. seed_{seed_len-1} ]
//! ```
//!
//! - words 0..4: the xoshiro128++ core state (must not be all zero);
//! - word 4: the length of the seed section (at least 1);
//! - remaining words: the seed the generator was initialised with.
//!
//! Because the seed section is variable-length, two structurally valid
//! snapshots may have different total lengths. Replacing a generator's state
//! with an equal-length snapshot overwrites the existing buffer in place, so
//! every holder of the buffer observes the new state; replacing it with a
//! snapshot of a different length rebinds the generator to a fresh private
//! buffer and leaves other holders on the old one.
//!
//! # Ownership
//!
//! [`StateHandle`] is a reference-counted buffer handle. Cloning a handle
//! shares the underlying buffer; [`StateHandle::deep_copy`] produces an
//! exclusively owned duplicate. Handles are single-threaded by construction
//! (no internal locking is provided); sharing a buffer across threads is not
//! expressible.

use std::cell::{RefCell, RefMut};
use std::rc::Rc;

use crate::error::NormalError;

/// Number of 32-bit words in the xoshiro128++ core section.
pub const CORE_WORDS: usize = 4;

/// Index of the seed-section length word.
pub const SEED_LEN_INDEX: usize = CORE_WORDS;

/// Minimum total snapshot length: core, length word, one seed word.
pub const MIN_STATE_WORDS: usize = CORE_WORDS + 2;

/// Validates the structure of a state snapshot.
///
/// # Errors
///
/// Returns [`NormalError::InvalidState`] when the snapshot is shorter than
/// [`MIN_STATE_WORDS`], declares an empty seed section, declares a seed
/// length inconsistent with the buffer length, or carries an all-zero core
/// section (the xoshiro128++ fixed point).
pub fn validate_snapshot(words: &[u32]) -> Result<(), NormalError> {
    if words.len() < MIN_STATE_WORDS {
        return Err(NormalError::InvalidState {
            message: format!(
                "state buffer must hold at least {} words, got {}",
                MIN_STATE_WORDS,
                words.len()
            ),
        });
    }
    let seed_len = words[SEED_LEN_INDEX] as usize;
    if seed_len == 0 {
        return Err(NormalError::InvalidState {
            message: "seed section is empty".to_string(),
        });
    }
    if CORE_WORDS + 1 + seed_len != words.len() {
        return Err(NormalError::InvalidState {
            message: format!(
                "declared seed length {} inconsistent with buffer length {}",
                seed_len,
                words.len()
            ),
        });
    }
    if words[..CORE_WORDS].iter().all(|&w| w == 0) {
        return Err(NormalError::InvalidState {
            message: "core section is all zero".to_string(),
        });
    }
    Ok(())
}

/// Reference-counted handle to a live generator state buffer.
///
/// A generator draws by reading and writing the core words *through* its
/// handle, so two generators holding clones of the same handle advance a
/// single shared sequence. An exclusively owned generator simply holds the
/// only clone.
///
/// # Examples
///
/// ```
/// use variate_normal::{Normal, StateHandle};
///
/// let snapshot = Normal::from_seed(42_u32).unwrap().state();
/// let handle = StateHandle::new(snapshot).unwrap();
///
/// let shared = handle.clone();      // same buffer
/// let private = handle.deep_copy(); // independent buffer
/// assert!(handle.shares_buffer(&shared));
/// assert!(!handle.shares_buffer(&private));
/// ```
#[derive(Clone, Debug)]
pub struct StateHandle {
    buf: Rc<RefCell<Vec<u32>>>,
}

impl StateHandle {
    /// Creates a handle over the given snapshot, validating it first.
    ///
    /// # Errors
    ///
    /// Returns [`NormalError::InvalidState`] when the snapshot is not a
    /// well-formed state buffer (see [`validate_snapshot`]).
    pub fn new(words: Vec<u32>) -> Result<Self, NormalError> {
        validate_snapshot(&words)?;
        Ok(Self {
            buf: Rc::new(RefCell::new(words)),
        })
    }

    /// Assembles a handle from a core state and the seed it came from.
    ///
    /// Both sections are trusted; callers guarantee a non-zero core and a
    /// non-empty seed.
    pub(crate) fn from_sections(core: [u32; CORE_WORDS], seed: &[u32]) -> Self {
        debug_assert!(!seed.is_empty());
        debug_assert!(core.iter().any(|&w| w != 0));
        let mut words = Vec::with_capacity(CORE_WORDS + 1 + seed.len());
        words.extend_from_slice(&core);
        words.push(seed.len() as u32);
        words.extend_from_slice(seed);
        Self {
            buf: Rc::new(RefCell::new(words)),
        }
    }

    /// Returns a copy of the full snapshot.
    #[inline]
    pub fn to_vec(&self) -> Vec<u32> {
        self.buf.borrow().clone()
    }

    /// Returns the total snapshot length in 32-bit words.
    #[inline]
    pub fn word_len(&self) -> usize {
        self.buf.borrow().len()
    }

    /// Returns the total snapshot length in bytes.
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.word_len() * std::mem::size_of::<u32>()
    }

    /// Returns a copy of the seed section.
    pub fn seed_words(&self) -> Vec<u32> {
        let buf = self.buf.borrow();
        buf[SEED_LEN_INDEX + 1..].to_vec()
    }

    /// Returns the seed-section length in words.
    #[inline]
    pub fn seed_len(&self) -> usize {
        self.buf.borrow()[SEED_LEN_INDEX] as usize
    }

    /// Returns an independent handle over a copy of this buffer.
    pub fn deep_copy(&self) -> Self {
        Self {
            buf: Rc::new(RefCell::new(self.to_vec())),
        }
    }

    /// Returns `true` when both handles address the same live buffer.
    #[inline]
    pub fn shares_buffer(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.buf, &other.buf)
    }

    /// Overwrites the buffer contents with an equal-length snapshot.
    ///
    /// Every holder of the buffer observes the replacement.
    pub(crate) fn overwrite(&self, words: &[u32]) {
        let mut buf = self.buf.borrow_mut();
        debug_assert_eq!(buf.len(), words.len());
        buf.copy_from_slice(words);
    }

    pub(crate) fn borrow_mut(&self) -> RefMut<'_, Vec<u32>> {
        self.buf.borrow_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_snapshot() -> Vec<u32> {
        // core [1,2,3,4], seed section [1 word: 99]
        vec![1, 2, 3, 4, 1, 99]
    }

    // ==========================================================
    // validate_snapshot tests
    // ==========================================================

    #[test]
    fn test_validate_accepts_well_formed() {
        assert!(validate_snapshot(&valid_snapshot()).is_ok());
    }

    #[test]
    fn test_validate_rejects_short_buffer() {
        let err = validate_snapshot(&[1, 2, 3]).unwrap_err();
        assert!(err.to_string().contains("at least"));
    }

    #[test]
    fn test_validate_rejects_empty_seed_section() {
        // seed_len word is 0
        let err = validate_snapshot(&[1, 2, 3, 4, 0, 99]).unwrap_err();
        assert!(err.to_string().contains("seed section is empty"));
    }

    #[test]
    fn test_validate_rejects_inconsistent_length() {
        // declares 3 seed words but carries 1
        let err = validate_snapshot(&[1, 2, 3, 4, 3, 99]).unwrap_err();
        assert!(err.to_string().contains("inconsistent"));
    }

    #[test]
    fn test_validate_rejects_all_zero_core() {
        let err = validate_snapshot(&[0, 0, 0, 0, 1, 99]).unwrap_err();
        assert!(err.to_string().contains("all zero"));
    }

    // ==========================================================
    // StateHandle tests
    // ==========================================================

    #[test]
    fn test_handle_round_trip() {
        let handle = StateHandle::new(valid_snapshot()).unwrap();
        assert_eq!(handle.to_vec(), valid_snapshot());
        assert_eq!(handle.word_len(), 6);
        assert_eq!(handle.byte_len(), 24);
        assert_eq!(handle.seed_len(), 1);
        assert_eq!(handle.seed_words(), vec![99]);
    }

    #[test]
    fn test_handle_new_validates() {
        assert!(StateHandle::new(vec![0; 6]).is_err());
    }

    #[test]
    fn test_clone_shares_deep_copy_does_not() {
        let handle = StateHandle::new(valid_snapshot()).unwrap();
        let shared = handle.clone();
        let private = handle.deep_copy();
        assert!(handle.shares_buffer(&shared));
        assert!(!handle.shares_buffer(&private));
    }

    #[test]
    fn test_overwrite_visible_through_clones() {
        let handle = StateHandle::new(valid_snapshot()).unwrap();
        let shared = handle.clone();
        handle.overwrite(&[5, 6, 7, 8, 1, 42]);
        assert_eq!(shared.to_vec(), vec![5, 6, 7, 8, 1, 42]);
    }

    #[test]
    fn test_from_sections_layout() {
        let handle = StateHandle::from_sections([1, 2, 3, 4], &[7, 9]);
        assert_eq!(handle.to_vec(), vec![1, 2, 3, 4, 2, 7, 9]);
        assert!(validate_snapshot(&handle.to_vec()).is_ok());
    }
}
