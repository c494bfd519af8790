use core::cmp::Ordering;
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::paint::{Color, ParseError};

use super::error::GradientError;

/// Default stop weight: the blend midpoint sits halfway to the next stop.
pub const DEFAULT_WEIGHT: f64 = 0.5;

/// A single gradient stop.
///
/// `weight` biases where, within the interval to the *next* stop, the
/// perceptual midpoint of the blend falls. Stores clamp it into `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stop {
    pub position: f64,
    pub color: Color,
    pub weight: f64,
}

impl Stop {
    #[inline]
    pub const fn new(position: f64, color: Color) -> Self {
        Self { position, color, weight: DEFAULT_WEIGHT }
    }

    #[inline]
    pub fn weighted(position: f64, color: Color, weight: f64) -> Self {
        Self { position, color, weight }.sanitized()
    }

    #[inline]
    pub fn with_position(self, position: f64) -> Self {
        Self { position, ..self }
    }

    /// Returns the stop with `weight` clamped into `[0, 1]` (NaN -> default).
    #[inline]
    pub fn sanitized(self) -> Self {
        let weight = if self.weight.is_nan() {
            DEFAULT_WEIGHT
        } else {
            self.weight.clamp(0.0, 1.0)
        };
        Self { weight, ..self }
    }
}

impl FromStr for Stop {
    type Err = ParseError;

    /// Parses `position:#color` or `position:#color:weight`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut column = 1;
        let mut fields = s.split(':');

        let position_src = fields.next().unwrap_or_default();
        let position: f64 = position_src
            .trim()
            .parse()
            .map_err(|_| ParseError::new(format!("invalid stop position '{position_src}'"), column))?;
        column += position_src.len() + 1;

        let color_src = fields
            .next()
            .ok_or_else(|| ParseError::new("stop literal must be position:#color[:weight]", column))?;
        let color: Color = color_src.parse().map_err(|e: ParseError| ParseError {
            column: column + e.column - 1,
            ..e
        })?;
        column += color_src.len() + 1;

        let weight = match fields.next() {
            Some(w) => w
                .trim()
                .parse()
                .map_err(|_| ParseError::new(format!("invalid stop weight '{w}'"), column))?,
            None => DEFAULT_WEIGHT,
        };
        if fields.next().is_some() {
            return Err(ParseError::new("unexpected trailing field in stop literal", column));
        }

        Ok(Stop::weighted(position, color, weight))
    }
}

// ── ordered key ───────────────────────────────────────────────────────────

/// Totally ordered stop position usable as a map key.
///
/// `-0.0` is folded into `0.0` so both spellings address the same stop.
#[derive(Debug, Copy, Clone)]
struct StopKey(f64);

impl StopKey {
    #[inline]
    fn new(position: f64) -> Self {
        Self(if position == 0.0 { 0.0 } else { position })
    }
}

impl Ord for StopKey {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for StopKey {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for StopKey {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for StopKey {}

// ── store ─────────────────────────────────────────────────────────────────

/// How [`StopStore::from_stops`] maps arbitrary input positions into `[0, 1]`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum NormalizeMode {
    /// Rescale so the lowest input lands on 0.0 and the highest on 1.0.
    #[default]
    Normalize,
    /// Discard stops outside `[0, 1]`, then pad the ends by duplicating the
    /// nearest surviving stop.
    Truncate,
}

/// Ordered set of stops keyed by position.
///
/// Invariants:
/// - every key lies in `[0, 1]` and equals the stored stop's `position`
/// - every stored weight lies in `[0, 1]`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StopStore {
    map: BTreeMap<StopKey, Stop>,
}

impl StopStore {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from an arbitrary stop list.
    ///
    /// - empty input -> empty store
    /// - one stop -> that stop at 0.0
    /// - otherwise positions are mapped per `mode`; later duplicates win
    ///
    /// Stops with non-finite positions are dropped.
    pub fn from_stops<I>(stops: I, mode: NormalizeMode) -> Self
    where
        I: IntoIterator<Item = Stop>,
    {
        let input: Vec<Stop> = stops
            .into_iter()
            .filter(|s| {
                let keep = s.position.is_finite();
                if !keep {
                    log::warn!("discarding stop with non-finite position {}", s.position);
                }
                keep
            })
            .collect();

        let mut store = Self::new();
        match input.as_slice() {
            [] => return store,
            [only] => {
                store.put(only.with_position(0.0));
                return store;
            }
            _ => {}
        }

        match mode {
            NormalizeMode::Normalize => {
                let lo = input.iter().map(|s| s.position).fold(f64::INFINITY, f64::min);
                let hi = input.iter().map(|s| s.position).fold(f64::NEG_INFINITY, f64::max);
                // Bring huge magnitudes down first so `hi - lo` cannot overflow.
                let scale = if (hi - lo).is_finite() { 1.0 } else { hi.abs().max(lo.abs()) };
                let lo = lo / scale;
                let span = hi / scale - lo;

                if !(span > 0.0) {
                    log::warn!(
                        "all {} stops share position {}; keeping the last one as a single stop",
                        input.len(),
                        input[0].position
                    );
                    if let Some(last) = input.last() {
                        store.put(last.with_position(0.0));
                    }
                    return store;
                }

                for stop in &input {
                    let position = (stop.position / scale - lo) / span;
                    if !(0.0..=1.0).contains(&position) {
                        log::warn!("discarding stop at {} (normalized to {position})", stop.position);
                        continue;
                    }
                    store.put(stop.with_position(position));
                }
            }
            NormalizeMode::Truncate => {
                for stop in input.iter().filter(|s| (0.0..=1.0).contains(&s.position)) {
                    store.put(*stop);
                }
                if let Some(first) = store.first().copied() {
                    if first.position > 0.0 {
                        store.put(first.with_position(0.0));
                    }
                }
                if let Some(last) = store.last().copied() {
                    if last.position < 1.0 {
                        store.put(last.with_position(1.0));
                    }
                }
            }
        }

        log::debug!("stop set replaced: {} stops ({mode:?})", store.len());
        store
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Stop at exactly `position`, if any.
    #[inline]
    pub fn get(&self, position: f64) -> Option<&Stop> {
        self.map.get(&StopKey::new(position))
    }

    /// Stops in ascending position order.
    #[inline]
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Stop> + ExactSizeIterator {
        self.map.values()
    }

    #[inline]
    pub fn positions(&self) -> impl DoubleEndedIterator<Item = f64> + ExactSizeIterator + '_ {
        self.map.keys().map(|k| k.0)
    }

    #[inline]
    pub fn first(&self) -> Option<&Stop> {
        self.map.values().next()
    }

    #[inline]
    pub fn last(&self) -> Option<&Stop> {
        self.map.values().next_back()
    }

    pub fn to_vec(&self) -> Vec<Stop> {
        self.map.values().copied().collect()
    }

    /// Inserts or replaces an interior stop.
    ///
    /// Positions outside the open interval `(0, 1)` are rejected without
    /// touching the store; boundary stops only come from [`from_stops`](Self::from_stops).
    pub fn insert(&mut self, stop: Stop) -> Result<Option<Stop>, GradientError> {
        if !(0.0 < stop.position && stop.position < 1.0) {
            return Err(GradientError::StopOutOfRange { position: stop.position });
        }
        Ok(self.put(stop))
    }

    /// Removes the stop at exactly `position` (no tolerance).
    #[inline]
    pub fn remove(&mut self, position: f64) -> Option<Stop> {
        self.map.remove(&StopKey::new(position))
    }

    /// Smallest stop whose position is `>= position`.
    #[inline]
    pub(crate) fn upper_bound(&self, position: f64) -> Option<&Stop> {
        self.map.range(StopKey::new(position)..).next().map(|(_, s)| s)
    }

    /// Immediate predecessor of the stop keyed at `position`.
    #[inline]
    pub(crate) fn before(&self, position: f64) -> Option<&Stop> {
        self.map.range(..StopKey::new(position)).next_back().map(|(_, s)| s)
    }

    /// Immediate successor of the stop keyed at `position`.
    #[inline]
    pub(crate) fn after(&self, position: f64) -> Option<&Stop> {
        use std::ops::Bound::{Excluded, Unbounded};
        self.map
            .range((Excluded(StopKey::new(position)), Unbounded))
            .next()
            .map(|(_, s)| s)
    }

    fn put(&mut self, stop: Stop) -> Option<Stop> {
        let key = StopKey::new(stop.position);
        let stop = Stop { position: key.0, ..stop.sanitized() };
        self.map.insert(key, stop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(v: f32) -> Color { Color::new(v, v, v, 1.0) }
    fn stop(p: f64, v: f32) -> Stop { Stop::new(p, gray(v)) }
    fn positions(store: &StopStore) -> Vec<f64> { store.positions().collect() }

    // ── from_stops: degenerate inputs ─────────────────────────────────────

    #[test]
    fn empty_input_gives_empty_store() {
        let s = StopStore::from_stops(Vec::new(), NormalizeMode::Normalize);
        assert!(s.is_empty());
    }

    #[test]
    fn single_stop_is_forced_to_zero() {
        for mode in [NormalizeMode::Normalize, NormalizeMode::Truncate] {
            let s = StopStore::from_stops([stop(0.7, 0.3)], mode);
            assert_eq!(s.len(), 1);
            let only = s.first().unwrap();
            assert_eq!(only.position, 0.0);
            assert_eq!(only.color, gray(0.3));
        }
    }

    #[test]
    fn normalize_equal_positions_collapses_to_last() {
        let s = StopStore::from_stops([stop(0.4, 0.1), stop(0.4, 0.9)], NormalizeMode::Normalize);
        assert_eq!(s.len(), 1);
        assert_eq!(s.first().unwrap().position, 0.0);
        assert_eq!(s.first().unwrap().color, gray(0.9));
    }

    #[test]
    fn non_finite_positions_are_dropped() {
        let s = StopStore::from_stops(
            [stop(f64::NAN, 0.0), stop(2.0, 0.2), stop(f64::INFINITY, 0.0), stop(4.0, 0.4)],
            NormalizeMode::Normalize,
        );
        assert_eq!(positions(&s), vec![0.0, 1.0]);
    }

    // ── from_stops: normalize ─────────────────────────────────────────────

    #[test]
    fn normalize_rescales_to_unit_range() {
        let s = StopStore::from_stops(
            [stop(10.0, 0.0), stop(15.0, 0.5), stop(30.0, 1.0)],
            NormalizeMode::Normalize,
        );
        assert_eq!(positions(&s), vec![0.0, 0.25, 1.0]);
        assert!(s.iter().all(|st| s.get(st.position) == Some(st)));
    }

    #[test]
    fn normalize_is_a_fixed_point() {
        let s = StopStore::from_stops(
            [stop(-3.0, 0.0), stop(0.1, 0.5), stop(7.7, 1.0)],
            NormalizeMode::Normalize,
        );
        let again = StopStore::from_stops(s.to_vec(), NormalizeMode::Normalize);
        assert_eq!(positions(&again), positions(&s));
    }

    #[test]
    fn normalize_survives_span_overflow() {
        let s = StopStore::from_stops(
            [stop(-1e308, 0.0), stop(0.0, 1.0), stop(1e308, 0.0)],
            NormalizeMode::Normalize,
        );
        assert_eq!(positions(&s), vec![0.0, 0.5, 1.0]);
        assert_eq!(s.get(0.5).unwrap().color, gray(1.0));

        let s = StopStore::from_stops(
            [stop(f64::MIN, 0.0), stop(f64::MAX, 1.0)],
            NormalizeMode::Normalize,
        );
        assert_eq!(positions(&s), vec![0.0, 1.0]);
    }

    #[test]
    fn duplicate_positions_last_write_wins() {
        let s = StopStore::from_stops(
            [stop(0.0, 0.0), stop(0.5, 0.1), stop(0.5, 0.2), stop(1.0, 1.0)],
            NormalizeMode::Normalize,
        );
        assert_eq!(s.len(), 3);
        assert_eq!(s.get(0.5).unwrap().color, gray(0.2));
    }

    // ── from_stops: truncate ──────────────────────────────────────────────

    #[test]
    fn truncate_discards_outside_and_pads_ends() {
        let s = StopStore::from_stops(
            [stop(-0.5, 0.0), stop(0.25, 0.3), stop(0.75, 0.6), stop(1.5, 1.0)],
            NormalizeMode::Truncate,
        );
        assert_eq!(positions(&s), vec![0.0, 0.25, 0.75, 1.0]);
        assert_eq!(s.get(0.0).unwrap().color, gray(0.3));
        assert_eq!(s.get(1.0).unwrap().color, gray(0.6));
    }

    #[test]
    fn truncate_keeps_existing_boundaries() {
        let s = StopStore::from_stops([stop(0.0, 0.1), stop(1.0, 0.9)], NormalizeMode::Truncate);
        assert_eq!(positions(&s), vec![0.0, 1.0]);
        assert_eq!(s.get(0.0).unwrap().color, gray(0.1));
    }

    #[test]
    fn truncate_everything_outside_gives_empty_store() {
        let s = StopStore::from_stops([stop(-1.0, 0.0), stop(2.0, 1.0)], NormalizeMode::Truncate);
        assert!(s.is_empty());
    }

    #[test]
    fn truncate_negative_zero_is_zero() {
        let s = StopStore::from_stops([stop(-0.0, 0.0), stop(1.0, 1.0)], NormalizeMode::Truncate);
        assert!(s.get(0.0).is_some());
        assert!(s.first().unwrap().position.is_sign_positive());
    }

    // ── insert / remove ───────────────────────────────────────────────────

    #[test]
    fn insert_rejects_boundaries_and_outside() {
        let mut s = StopStore::from_stops([stop(0.0, 0.0), stop(1.0, 1.0)], NormalizeMode::Normalize);
        for p in [0.0, 1.0, -0.1, 1.1, f64::NAN] {
            assert!(matches!(
                s.insert(stop(p, 0.5)),
                Err(GradientError::StopOutOfRange { .. })
            ));
        }
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn insert_interior_and_replace() {
        let mut s = StopStore::new();
        assert_eq!(s.insert(stop(0.5, 0.2)), Ok(None));
        assert_eq!(s.insert(stop(0.5, 0.4)), Ok(Some(stop(0.5, 0.2))));
        assert_eq!(s.get(0.5).unwrap().color, gray(0.4));
    }

    #[test]
    fn remove_uses_exact_position() {
        let mut s = StopStore::from_stops([stop(0.0, 0.0), stop(1.0, 1.0)], NormalizeMode::Normalize);
        s.insert(stop(0.3, 0.5)).unwrap();
        assert!(s.remove(0.3 + 1e-15).is_none());
        assert_eq!(s.remove(0.3), Some(stop(0.3, 0.5)));
        assert!(s.remove(0.3).is_none());
    }

    #[test]
    fn stored_weights_are_clamped() {
        let mut s = StopStore::new();
        s.insert(Stop { position: 0.5, color: gray(0.0), weight: 3.0 }).unwrap();
        s.insert(Stop { position: 0.6, color: gray(0.0), weight: f64::NAN }).unwrap();
        assert_eq!(s.get(0.5).unwrap().weight, 1.0);
        assert_eq!(s.get(0.6).unwrap().weight, DEFAULT_WEIGHT);
    }

    // ── neighbours ────────────────────────────────────────────────────────

    #[test]
    fn bracket_lookup() {
        let s = StopStore::from_stops(
            [stop(0.0, 0.0), stop(0.5, 0.5), stop(1.0, 1.0)],
            NormalizeMode::Normalize,
        );
        assert_eq!(s.upper_bound(0.2).unwrap().position, 0.5);
        assert_eq!(s.upper_bound(0.5).unwrap().position, 0.5);
        assert!(s.upper_bound(1.5).is_none());
        assert_eq!(s.before(0.5).unwrap().position, 0.0);
        assert!(s.before(0.0).is_none());
        assert_eq!(s.after(0.5).unwrap().position, 1.0);
        assert!(s.after(1.0).is_none());
    }

    // ── parsing ───────────────────────────────────────────────────────────

    #[test]
    fn parse_stop_literal() {
        let s: Stop = "0.25:#ff0000".parse().unwrap();
        assert_eq!(s.position, 0.25);
        assert_eq!(s.color, Color::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(s.weight, DEFAULT_WEIGHT);

        let w: Stop = "1:#00000080:0.3".parse().unwrap();
        assert_eq!(w.weight, 0.3);
    }

    #[test]
    fn parse_stop_errors() {
        assert!("abc:#000000".parse::<Stop>().is_err());
        assert!("0.5".parse::<Stop>().is_err());
        assert!("0.5:#000000:x".parse::<Stop>().is_err());
        assert!("0.5:#000000:0.1:9".parse::<Stop>().is_err());
        assert_eq!("0.5:#00z000".parse::<Stop>().unwrap_err().column, 8);
    }
}
