//! Pre-constructed default generator.

use std::cell::RefCell;

use crate::generator::CauchyRng;

thread_local! {
    static DEFAULT: RefCell<CauchyRng> = RefCell::new(CauchyRng::new());
}

/// Draws one Cauchy variate from a thread-local, entropy-seeded generator.
///
/// Convenience entry point for callers that do not need seeding or state
/// control; follows the per-call NaN sentinel policy of
/// [`CauchyRng::sample`].
///
/// # Examples
///
/// ```rust
/// let v = variate_cauchy::sample(2.0, 3.0);
/// assert!(!v.is_nan());
/// assert!(variate_cauchy::sample(2.0, -3.0).is_nan());
/// ```
pub fn sample(x0: f64, gamma: f64) -> f64 {
    DEFAULT.with(|rng| rng.borrow_mut().sample(x0, gamma))
}
