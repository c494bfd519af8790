//! Gradient value type and sampler.
//!
//! A [`Gradient`] is an ordered set of weighted color stops on `[0, 1]` plus
//! an [`InterpolationMode`] and a [`SpreadMode`]. Evaluation never fails:
//! every real query position maps to a color.
//!
//! `Gradient` is a copy-on-write value. Clones share storage until one of
//! them is mutated; the mutator then works on a private copy, so shared
//! storage is never written in place and clones may be read from any thread.

mod engine;
pub mod error;
pub mod mode;
pub mod spread;
pub mod stop;

use std::sync::Arc;

use crate::paint::{Color, Colorspace};

pub use error::GradientError;
pub use mode::{InterpolationFunction, InterpolationMode};
pub use spread::SpreadMode;
pub use stop::{NormalizeMode, Stop, StopStore, DEFAULT_WEIGHT};

#[derive(Debug, Clone, PartialEq)]
struct GradientData {
    stops: StopStore,
    mode: InterpolationMode,
    spread: SpreadMode,
}

/// Weighted multi-stop color ramp.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    data: Arc<GradientData>,
}

impl Default for Gradient {
    /// Black to white, linear RGB, padded.
    fn default() -> Self {
        Self::new(
            [Stop::new(0.0, Color::black()), Stop::new(1.0, Color::white())],
            InterpolationMode::default(),
            SpreadMode::default(),
            NormalizeMode::default(),
        )
    }
}

impl Gradient {
    pub fn new<I>(stops: I, mode: InterpolationMode, spread: SpreadMode, normalize: NormalizeMode) -> Self
    where
        I: IntoIterator<Item = Stop>,
    {
        Self {
            data: Arc::new(GradientData {
                stops: StopStore::from_stops(stops, normalize),
                mode,
                spread,
            }),
        }
    }

    /// A gradient without stops; evaluates to transparent everywhere.
    pub fn empty() -> Self {
        Self::new(std::iter::empty(), InterpolationMode::default(), SpreadMode::default(), NormalizeMode::default())
    }

    #[inline]
    pub fn builder() -> GradientBuilder {
        GradientBuilder::default()
    }

    // ── stops ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn stops(&self) -> &StopStore {
        &self.data.stops
    }

    /// Replaces the entire stop set. See [`StopStore::from_stops`].
    pub fn set_stops<I>(&mut self, stops: I, normalize: NormalizeMode)
    where
        I: IntoIterator<Item = Stop>,
    {
        let stops = StopStore::from_stops(stops, normalize);
        self.data_mut().stops = stops;
    }

    /// Inserts or replaces a stop strictly inside `(0, 1)`.
    ///
    /// Returns the replaced stop, if any. Rejected positions leave the
    /// gradient (and any storage it shares) untouched.
    pub fn insert_stop(&mut self, stop: Stop) -> Result<Option<Stop>, GradientError> {
        if !(0.0 < stop.position && stop.position < 1.0) {
            return Err(GradientError::StopOutOfRange { position: stop.position });
        }
        self.data_mut().stops.insert(stop)
    }

    /// Removes the stop at exactly `position`; `None` if there was none.
    pub fn remove_stop(&mut self, position: f64) -> Option<Stop> {
        self.stops().get(position)?;
        self.data_mut().stops.remove(position)
    }

    // ── mode / spread ─────────────────────────────────────────────────────

    #[inline]
    pub fn interpolation_mode(&self) -> InterpolationMode {
        self.data.mode
    }

    pub fn set_interpolation_mode(&mut self, mode: impl Into<InterpolationMode>) {
        let mode = mode.into();
        if self.data.mode != mode {
            self.data_mut().mode = mode;
        }
    }

    #[inline]
    pub fn spread(&self) -> SpreadMode {
        self.data.spread
    }

    pub fn set_spread(&mut self, spread: SpreadMode) {
        if self.data.spread != spread {
            self.data_mut().spread = spread;
        }
    }

    /// Whether `self` and `other` currently share stop storage.
    #[inline]
    pub fn shares_storage_with(&self, other: &Gradient) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    // ── sampling ──────────────────────────────────────────────────────────

    /// Color at `pos`. Defined for every `f64`, including non-finite input.
    pub fn at(&self, pos: f64) -> Color {
        let data = &*self.data;
        engine::evaluate(&data.stops, data.mode, data.spread.resolve(pos))
    }

    /// `count` evenly spaced samples over `[0, 1]`, both ends included.
    ///
    /// `count == 1` samples `0.0`; `count == 0` yields nothing.
    #[inline]
    pub fn samples(&self, count: usize) -> Samples<'_> {
        Samples { gradient: self, index: 0, count }
    }

    /// Collects [`samples`](Self::samples) into a vector.
    pub fn render(&self, count: usize) -> Vec<Color> {
        self.samples(count).collect()
    }

    fn data_mut(&mut self) -> &mut GradientData {
        if Arc::strong_count(&self.data) > 1 {
            log::trace!("gradient storage is shared; copying before write");
        }
        Arc::make_mut(&mut self.data)
    }
}

/// Iterator returned by [`Gradient::samples`].
#[derive(Debug, Clone)]
pub struct Samples<'a> {
    gradient: &'a Gradient,
    index: usize,
    count: usize,
}

impl Samples<'_> {
    #[inline]
    fn offset(&self, index: usize) -> f64 {
        if self.count > 1 {
            index as f64 / (self.count - 1) as f64
        } else {
            0.0
        }
    }
}

impl Iterator for Samples<'_> {
    type Item = Color;

    fn next(&mut self) -> Option<Color> {
        if self.index >= self.count {
            return None;
        }
        let color = self.gradient.at(self.offset(self.index));
        self.index += 1;
        Some(color)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.count - self.index;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Samples<'_> {}

// ── builder ───────────────────────────────────────────────────────────────

/// Incremental construction of a [`Gradient`].
///
/// Stops are collected as given and mapped into `[0, 1]` by the configured
/// [`NormalizeMode`] when [`build`](Self::build) is called.
#[derive(Debug, Clone, Default)]
pub struct GradientBuilder {
    stops: Vec<Stop>,
    mode: InterpolationMode,
    spread: SpreadMode,
    normalize: NormalizeMode,
}

impl GradientBuilder {
    pub fn stop(mut self, position: f64, color: Color) -> Self {
        self.stops.push(Stop::new(position, color));
        self
    }

    pub fn weighted_stop(mut self, position: f64, color: Color, weight: f64) -> Self {
        self.stops.push(Stop::weighted(position, color, weight));
        self
    }

    pub fn stops(mut self, stops: impl IntoIterator<Item = Stop>) -> Self {
        self.stops.extend(stops);
        self
    }

    pub fn mode(mut self, mode: InterpolationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn function(mut self, function: InterpolationFunction) -> Self {
        self.mode.function = function;
        self
    }

    pub fn colorspace(mut self, colorspace: Colorspace) -> Self {
        self.mode.colorspace = colorspace;
        self
    }

    pub fn spread(mut self, spread: SpreadMode) -> Self {
        self.spread = spread;
        self
    }

    pub fn normalize(mut self, normalize: NormalizeMode) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn build(self) -> Gradient {
        Gradient::new(self.stops, self.mode, self.spread, self.normalize)
    }
}
