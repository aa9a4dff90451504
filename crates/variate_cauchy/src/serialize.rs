//! Serialised generator form.

use serde::{Deserialize, Serialize};

/// Value of the `type` field in every serialised generator.
pub const GENERATOR_TYPE: &str = "PRNG";

/// JSON-compatible serialised form of a generator.
///
/// Produced by [`CauchyRng::serialize`](crate::CauchyRng::serialize) and
/// accepted by [`CauchyRng::from_serialized`](crate::CauchyRng::from_serialized).
/// `params` is empty for an unbound generator and `[x0, gamma]` for a bound
/// one.
///
/// # Examples
///
/// ```
/// use variate_cauchy::CauchyRng;
///
/// let rng = CauchyRng::builder()
///     .params(2.0, 3.0)
///     .seed(42_u32)
///     .build()
///     .unwrap();
/// let form = rng.serialize().unwrap();
/// assert_eq!(form.kind, "PRNG");
/// assert_eq!(form.name, "cauchy");
/// assert_eq!(form.params, vec![2.0, 3.0]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SerializedGenerator {
    /// Always [`GENERATOR_TYPE`].
    #[serde(rename = "type")]
    pub kind: String,

    /// Generator name; `"cauchy"` for this crate.
    pub name: String,

    /// State snapshot as ordered 32-bit unsigned integers.
    pub state: Vec<u32>,

    /// Bound parameters, or empty when unbound.
    pub params: Vec<f64>,
}
