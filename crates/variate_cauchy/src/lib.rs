//! # variate_cauchy: Cauchy Variate Generator Factory
//!
//! ## Distribution Layer Role
//!
//! variate_cauchy sits on top of `variate_normal` and provides:
//! - Parameter domain validation (`params`)
//! - The exact ratio-of-normals transform (`transform`)
//! - A configurable generator factory (`CauchyBuilder`)
//! - The generator itself with bound and per-call forms (`CauchyRng`)
//! - State capture/restore/serialisation mirrored from the normal source
//! - A pre-constructed default instance (`sample`)
//!
//! ## Sampling Method
//!
//! Each draw takes two independent standard-normal deviates `n1`, `n2` and
//! returns `x0 + gamma * (n1 / n2)`. The ratio of two independent standard
//! normals is Cauchy(0, 1); shifting and scaling stays in the family, so no
//! approximation is involved. Every draw advances the underlying generator
//! two steps.
//!
//! ## Usage Example
//!
//! ```rust
//! use variate_cauchy::CauchyRng;
//!
//! // Bound generator: parameters fixed at construction.
//! let mut rng = CauchyRng::builder()
//!     .params(2.0, 3.0)
//!     .seed(12345_u32)
//!     .build()
//!     .unwrap();
//! let v = rng.next();
//! assert!(!v.is_nan());
//!
//! // Reproducibility: capture the state, replay the stream.
//! let snapshot = rng.state().unwrap();
//! let a = rng.next();
//! rng.set_state(&snapshot).unwrap();
//! assert_eq!(a.to_bits(), rng.next().to_bits());
//! ```
//!
//! ## Shared State
//!
//! Generators constructed over the same state buffer with `copy(false)`
//! advance a single stream; see
//! [`CauchyBuilder::copy`] and the `variate_normal::state` module for the
//! equal-length/different-length replacement rule.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod params;
pub mod serialize;

mod builder;
mod default;
mod generator;
mod source;
mod transform;

pub use builder::CauchyBuilder;
pub use default::sample;
pub use error::CauchyError;
pub use generator::CauchyRng;
pub use params::CauchyParams;
pub use serialize::{SerializedGenerator, GENERATOR_TYPE};

// Re-exported so factory callers can build seeds and share state buffers
// without depending on the foundation crate directly.
pub use variate_normal::{Seed, StateHandle};
