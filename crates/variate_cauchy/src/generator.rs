//! Cauchy variate generator.

use variate_normal::{Normal, Seed, StateHandle};

use crate::builder::CauchyBuilder;
use crate::error::CauchyError;
use crate::params::CauchyParams;
use crate::serialize::{SerializedGenerator, GENERATOR_TYPE};
use crate::source::NormalSource;
use crate::transform::ratio_transform;

/// Cauchy-distributed pseudorandom generator.
///
/// Each draw consumes two standard-normal deviates from the underlying
/// source and applies the exact ratio-of-normals transform
/// `x0 + gamma * (n1 / n2)`. Parameters are either bound at construction
/// (immutable for the generator's lifetime, drawn via [`CauchyRng::next`])
/// or supplied per call ([`CauchyRng::sample`]).
///
/// # State
///
/// When the normal source is internally owned, the generator exposes the
/// source's seed and state as ordered sequences of 32-bit unsigned integers:
/// capture with [`CauchyRng::state`], restore with [`CauchyRng::set_state`],
/// and persist with [`CauchyRng::serialize`]. Replaying a captured snapshot
/// reproduces subsequent output bit for bit under the same parameters.
///
/// When an external uniform source was supplied
/// ([`CauchyBuilder::prng`](crate::CauchyBuilder::prng)), the generator runs
/// in degraded mode: all state accessors return `None`, `set_state` is a
/// no-op, and `serialize` returns `None`.
///
/// # Examples
///
/// ```rust
/// use variate_cauchy::CauchyRng;
///
/// let mut rng = CauchyRng::with_params(2.0, 3.0).unwrap();
/// let _v = rng.next();
///
/// // Capture, draw, restore, redraw: identical output.
/// let snapshot = rng.state().unwrap();
/// let a = rng.next();
/// rng.set_state(&snapshot).unwrap();
/// let b = rng.next();
/// assert_eq!(a.to_bits(), b.to_bits());
/// ```
pub struct CauchyRng {
    source: NormalSource,
    params: Option<CauchyParams>,
}

impl CauchyRng {
    /// Generator name.
    pub const NAME: &'static str = "cauchy";

    /// Creates an unbound generator with default entropy seeding.
    ///
    /// Parameters are supplied on every call via [`CauchyRng::sample`].
    pub fn new() -> Self {
        Self {
            source: NormalSource::Owned(Normal::new()),
            params: None,
        }
    }

    /// Creates a bound generator with default entropy seeding.
    ///
    /// # Errors
    ///
    /// - [`CauchyError::InvalidLocation`] when `x0` is NaN or non-finite;
    /// - [`CauchyError::InvalidScale`] when `gamma` is NaN, zero, or
    ///   negative.
    pub fn with_params(x0: f64, gamma: f64) -> Result<Self, CauchyError> {
        Ok(Self {
            source: NormalSource::Owned(Normal::new()),
            params: Some(CauchyParams::new(x0, gamma)?),
        })
    }

    /// Creates an unbound generator from the given seed.
    ///
    /// # Errors
    ///
    /// Returns [`CauchyError::InvalidOptions`] when the seed is an empty
    /// word sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use variate_cauchy::CauchyRng;
    ///
    /// let mut a = CauchyRng::from_seed(12345_u32).unwrap();
    /// let mut b = CauchyRng::from_seed(12345_u32).unwrap();
    /// assert_eq!(a.sample(0.0, 1.0), b.sample(0.0, 1.0));
    /// ```
    pub fn from_seed<S: Into<Seed>>(seed: S) -> Result<Self, CauchyError> {
        Ok(Self {
            source: NormalSource::Owned(Normal::from_seed(seed)?),
            params: None,
        })
    }

    /// Returns a configuration builder.
    pub fn builder() -> CauchyBuilder {
        CauchyBuilder::new()
    }

    pub(crate) fn from_parts(source: NormalSource, params: Option<CauchyParams>) -> Self {
        Self { source, params }
    }

    /// Returns the bound parameters, or `None` for an unbound generator.
    #[inline]
    pub fn params(&self) -> Option<CauchyParams> {
        self.params
    }

    /// Draws one variate using the bound parameters.
    ///
    /// Consumes two standard-normal deviates. On an unbound generator the
    /// parameters are absent and the result is NaN, with no deviates
    /// consumed (mirroring the per-call sentinel policy of
    /// [`CauchyRng::sample`]).
    #[inline]
    pub fn next(&mut self) -> f64 {
        match self.params {
            Some(params) => {
                let n1 = self.source.next();
                let n2 = self.source.next();
                ratio_transform(n1, n2, params.x0(), params.gamma())
            }
            None => f64::NAN,
        }
    }

    /// Draws one variate with per-call parameters.
    ///
    /// If `x0` or `gamma` is NaN, or `gamma <= 0`, returns NaN without
    /// consuming any deviates. This is a deliberate sentinel contract for
    /// the per-call hot path, distinct from the hard validation failure at
    /// construction time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use variate_cauchy::CauchyRng;
    ///
    /// let mut rng = CauchyRng::from_seed(7_u32).unwrap();
    /// assert!(rng.sample(0.0, -1.0).is_nan());
    /// let v = rng.sample(0.0, 1.0);
    /// assert!(!v.is_nan());
    /// ```
    #[inline]
    pub fn sample(&mut self, x0: f64, gamma: f64) -> f64 {
        if x0.is_nan() || gamma.is_nan() || gamma <= 0.0 {
            return f64::NAN;
        }
        let n1 = self.source.next();
        let n2 = self.source.next();
        ratio_transform(n1, n2, x0, gamma)
    }

    /// Fills the buffer with variates drawn via [`CauchyRng::next`].
    ///
    /// Zero-allocation; the buffer is pre-allocated by the caller.
    #[inline]
    pub fn fill(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.next();
        }
    }

    /// Draws one standard-normal deviate directly from the underlying
    /// source, advancing the generator state by one step.
    #[inline]
    pub fn next_normal(&mut self) -> f64 {
        self.source.next()
    }

    // ------------------------------------------------------------------
    // State adapter
    // ------------------------------------------------------------------

    /// Returns a copy of the underlying source's seed, or `None` in
    /// degraded mode.
    pub fn seed(&self) -> Option<Vec<u32>> {
        self.source.owned().map(Normal::seed)
    }

    /// Returns the seed length in 32-bit words, or `None` in degraded mode.
    pub fn seed_length(&self) -> Option<usize> {
        self.source.owned().map(Normal::seed_length)
    }

    /// Returns a copy of the current state snapshot, or `None` in degraded
    /// mode.
    ///
    /// The copy is detached from the live buffer; mutating it has no effect
    /// until applied with [`CauchyRng::set_state`].
    pub fn state(&self) -> Option<Vec<u32>> {
        self.source.owned().map(Normal::state)
    }

    /// Returns the state length in 32-bit words, or `None` in degraded mode.
    pub fn state_length(&self) -> Option<usize> {
        self.source.owned().map(Normal::state_length)
    }

    /// Returns the state length in bytes, or `None` in degraded mode.
    pub fn byte_length(&self) -> Option<usize> {
        self.source.owned().map(Normal::byte_length)
    }

    /// Replaces the generator state with the given snapshot.
    ///
    /// An equal-length snapshot overwrites the live buffer in place, so
    /// generators sharing the buffer observe the replacement; a snapshot of
    /// a different length rebinds this generator to a fresh private buffer,
    /// detaching it from any co-owners. In degraded mode this is a
    /// documented no-op.
    ///
    /// # Errors
    ///
    /// Returns [`CauchyError::InvalidState`] when the snapshot is not a
    /// well-formed state buffer.
    pub fn set_state(&mut self, snapshot: &[u32]) -> Result<(), CauchyError> {
        match self.source.owned_mut() {
            Some(normal) => normal.set_state(snapshot).map_err(CauchyError::from),
            None => Ok(()),
        }
    }

    /// Returns a handle to the live state buffer, or `None` in degraded
    /// mode.
    ///
    /// Pass the handle to [`CauchyBuilder::state`](crate::CauchyBuilder::state)
    /// with `copy(false)` to construct a generator sharing this buffer.
    pub fn state_handle(&self) -> Option<StateHandle> {
        self.source.owned().map(Normal::state_handle)
    }

    /// Returns the serialised generator form, or `None` in degraded mode.
    ///
    /// The form captures the current state snapshot and the bound
    /// parameters (empty when unbound).
    pub fn serialize(&self) -> Option<SerializedGenerator> {
        let normal = self.source.owned()?;
        Some(SerializedGenerator {
            kind: GENERATOR_TYPE.to_string(),
            name: Self::NAME.to_string(),
            state: normal.state(),
            params: self
                .params
                .map_or_else(Vec::new, |p| vec![p.x0(), p.gamma()]),
        })
    }

    /// Rebuilds a generator from a serialised form.
    ///
    /// The revived generator owns a private copy of the recorded state and
    /// continues the recorded stream under the recorded parameters.
    ///
    /// # Errors
    ///
    /// - [`CauchyError::InvalidOptions`] when the `type`/`name` fields do
    ///   not identify a Cauchy generator, or `params` has a length other
    ///   than 0 or 2;
    /// - [`CauchyError::InvalidLocation`] / [`CauchyError::InvalidScale`]
    ///   when recorded parameters fail validation;
    /// - [`CauchyError::InvalidState`] when the recorded state is not a
    ///   well-formed snapshot.
    pub fn from_serialized(form: &SerializedGenerator) -> Result<Self, CauchyError> {
        if form.kind != GENERATOR_TYPE || form.name != Self::NAME {
            return Err(CauchyError::InvalidOptions {
                message: format!(
                    "serialized form identifies `{}/{}`, expected `{}/{}`",
                    form.kind,
                    form.name,
                    GENERATOR_TYPE,
                    Self::NAME
                ),
            });
        }
        let params = match form.params.as_slice() {
            [] => None,
            [x0, gamma] => Some(CauchyParams::new(*x0, *gamma)?),
            other => {
                return Err(CauchyError::InvalidOptions {
                    message: format!("params must hold 0 or 2 values, got {}", other.len()),
                })
            }
        };
        let handle = StateHandle::new(form.state.clone())?;
        Ok(Self {
            source: NormalSource::Owned(Normal::from_state(&handle, true)),
            params,
        })
    }
}

impl Default for CauchyRng {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CauchyRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CauchyRng")
            .field("name", &Self::NAME)
            .field("params", &self.params)
            .field("owned_state", &self.source.owned().is_some())
            .finish()
    }
}
