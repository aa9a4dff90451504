//! # variate_normal: Standard-Normal Source with Introspectable State
//!
//! ## Foundation Layer Role
//!
//! variate_normal is the bottom layer of the variate workspace, providing:
//! - A seedable xoshiro128++ uniform core (`xoshiro`)
//! - Standard-normal draws via the ziggurat algorithm (`normal`)
//! - A sharable, word-addressable state buffer (`state`)
//! - Seed input types (`seed`)
//! - Error types: `NormalError` (`error`)
//!
//! Distribution crates built on top of this one (for example a Cauchy
//! generator) mirror the same accessor surface — `seed`, `state`,
//! `set_state`, `state_length`, `byte_length` — so generators can be
//! composed and layered without knowing each other's internals.
//!
//! ## State Model
//!
//! The complete generator state is an ordered sequence of 32-bit unsigned
//! integers. The live state is held in a [`StateHandle`]; a generator either
//! owns its handle exclusively or shares it with other holders, in which case
//! every draw advances the state *in* the shared buffer. See [`state`] for
//! the snapshot layout and the equal-length/different-length replacement
//! rule.
//!
//! ## Usage Example
//!
//! ```rust
//! use variate_normal::Normal;
//!
//! // Seeded construction: same seed, same sequence.
//! let mut a = Normal::from_seed(12345_u32).unwrap();
//! let mut b = Normal::from_seed(12345_u32).unwrap();
//! assert_eq!(a.next(), b.next());
//!
//! // Capture and restore state.
//! let snapshot = a.state();
//! let x = a.next();
//! a.set_state(&snapshot).unwrap();
//! assert_eq!(a.next(), x);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod seed;
pub mod state;

mod normal;
mod xoshiro;

pub use error::NormalError;
pub use normal::Normal;
pub use seed::Seed;
pub use state::StateHandle;
