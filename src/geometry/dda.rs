//! Generalized DDA: samples the segment between two attribute records at every
//! integer value of a driving coordinate, interpolating all other attributes.
//!
//! The same routine walks triangle edges (driving axis Y) and horizontal spans
//! (driving axis X), so colors along an edge and along a span follow one rule.

use super::vertex::{Axis, Interpolant};
use std::iter::FusedIterator;

/// Incremental sampler over the half-open interval `[v1[d], v2[d])`.
///
/// The running point is advanced by a constant step each sample instead of
/// being recomputed from the endpoints. The driving coordinate of both the
/// start point and the step is pinned to exact grid values (`ceil(v1[d])` and
/// `1.0`), so every emitted sample lies exactly on an integer line and the
/// number of samples is always `ceil(v2[d]) - ceil(v1[d])`.
#[derive(Debug, Clone)]
pub struct Dda<T> {
    current: T,
    step: T,
    end: f64,
    axis: Axis,
}

/// Largest magnitude at which `f64` still represents every integer.
const MAX_EXACT_GRID: f64 = 9_007_199_254_740_992.0;

impl<T: Interpolant> Dda<T> {
    pub fn new(v1: T, v2: T, axis: Axis) -> Self {
        Self::clamped(v1, v2, axis, f64::NEG_INFINITY, f64::INFINITY)
    }

    /// Like [`Dda::new`], but only emits samples whose driving coordinate lies
    /// in `[lo, hi)`.
    ///
    /// The first sample is placed analytically at `max(ceil(from), ceil(lo))`
    /// and the running sum continues from there, so the emitted samples are
    /// exactly the in-range subset of the unclamped walk. Two walks clamped to
    /// the same range stay positionally aligned.
    pub fn clamped(v1: T, v2: T, axis: Axis, lo: f64, hi: f64) -> Self {
        let (start, end) = if v1.coord(axis) <= v2.coord(axis) {
            (v1, v2)
        } else {
            (v2, v1)
        };

        let from = start.coord(axis);
        let to = end.coord(axis);

        // Zero-length (or non-finite) segment along the driving axis: no samples.
        if from == to || !from.is_finite() || !to.is_finite() {
            return Self::empty(start, axis);
        }

        // Beyond 2^53 adding 1.0 no longer advances the driving coordinate.
        let first = from.ceil().max(lo.ceil()).max(-MAX_EXACT_GRID);
        let last = to.min(hi).min(MAX_EXACT_GRID);
        if first >= last {
            return Self::empty(start, axis);
        }

        let step = ((end - start) * (1.0 / (to - from))).with_coord(axis, 1.0);
        let current = (start + step * (first - from)).with_coord(axis, first);

        Self {
            current,
            step,
            end: last,
            axis,
        }
    }

    fn empty(start: T, axis: Axis) -> Self {
        Self {
            current: start,
            step: start * 0.0,
            end: f64::NEG_INFINITY,
            axis,
        }
    }
}

impl<T: Interpolant> Iterator for Dda<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.current.coord(self.axis) < self.end {
            let sample = self.current;
            self.current = self.current + self.step;
            Some(sample)
        } else {
            None
        }
    }
}

impl<T: Interpolant> FusedIterator for Dda<T> {}

/// Collects every DDA sample between `v1` and `v2` along `axis`.
pub fn dda<T: Interpolant>(v1: T, v2: T, axis: Axis) -> Vec<T> {
    Dda::new(v1, v2, axis).collect()
}

/// Number of integer grid lines in `[min(a, b), max(a, b))`.
#[inline]
pub fn sample_count(a: f64, b: f64) -> usize {
    sample_count_within(a, b, f64::NEG_INFINITY, f64::INFINITY)
}

/// Number of integer grid lines in `[min(a, b), max(a, b)) ∩ [lo, hi)`.
#[inline]
pub fn sample_count_within(a: f64, b: f64, lo: f64, hi: f64) -> usize {
    let (from, to) = if a <= b { (a, b) } else { (b, a) };
    let first = from.ceil().max(lo.ceil());
    let last = to.min(hi).ceil();
    (last - first).max(0.0) as usize
}
