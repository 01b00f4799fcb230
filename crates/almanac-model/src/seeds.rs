// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::error::ModelError;
use almanac_core::math::interval::Interval;
use num_traits::PrimInt;

/// The initial domain fed into a pipeline.
///
/// A seed set is either a flat list of individual identifiers or a list of
/// identifier ranges; the two readings of the same almanac `seeds:` line.
/// The variants are mutually exclusive by construction, and the uniform
/// [`SeedSet::to_ranges`] view lets the solver run a single range-based
/// code path for both.
///
/// # Examples
///
/// ```rust
/// # use almanac_core::math::interval::Interval;
/// # use almanac_model::seeds::SeedSet;
///
/// let points = SeedSet::points(vec![79i64, 14, 55, 13]).unwrap();
/// assert_eq!(points.to_ranges()[0], Interval::new(79, 80));
///
/// let ranges = SeedSet::ranges(vec![Interval::new(79, 93)]);
/// assert_eq!(ranges.to_ranges(), vec![Interval::new(79, 93)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSet<T>
where
    T: PrimInt,
{
    /// Individual seed identifiers.
    Points(Vec<T>),
    /// Half-open ranges of seed identifiers.
    Ranges(Vec<Interval<T>>),
}

impl<T> SeedSet<T>
where
    T: PrimInt,
{
    /// Creates a seed set of individual points.
    ///
    /// A point at the integer type's maximum value is
    /// [`ModelError::PointOverflow`]: its range view `[p, p + 1)` would not
    /// be representable, so it is rejected here rather than overflowing in
    /// [`SeedSet::to_ranges`].
    pub fn points(points: Vec<T>) -> Result<Self, ModelError<T>> {
        if let Some(&point) = points.iter().find(|p| p.checked_add(&T::one()).is_none()) {
            return Err(ModelError::PointOverflow { point });
        }
        Ok(Self::Points(points))
    }

    /// Creates a seed set of identifier ranges.
    #[inline]
    pub fn ranges(ranges: Vec<Interval<T>>) -> Self {
        Self::Ranges(ranges)
    }

    /// Returns the uniform range view of the seed set.
    ///
    /// Each point becomes the length-1 interval `[p, p + 1)`, which is
    /// representable because construction rejects points at the type's
    /// maximum. Ranges are returned as given; empty ranges are kept here and
    /// filtered by the pipeline, so the view stays a faithful copy of the
    /// input.
    pub fn to_ranges(&self) -> Vec<Interval<T>> {
        match self {
            Self::Points(points) => points
                .iter()
                .map(|&p| Interval::new_unchecked(p, p + T::one()))
                .collect(),
            Self::Ranges(ranges) => ranges.clone(),
        }
    }

    /// Returns `true` if the seed set covers no identifier at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Points(points) => points.is_empty(),
            Self::Ranges(ranges) => ranges.iter().all(|r| r.is_empty()),
        }
    }

    /// Returns the total number of identifiers covered, or `None` if the
    /// count does not fit in the integer type.
    pub fn total_len(&self) -> Option<T> {
        match self {
            Self::Points(points) => T::from(points.len()),
            Self::Ranges(ranges) => ranges
                .iter()
                .try_fold(T::zero(), |acc, r| acc.checked_add(&r.len())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_to_ranges() {
        let seeds = SeedSet::points(vec![79i64, 14, 55, 13]).unwrap();
        assert_eq!(
            seeds.to_ranges(),
            vec![
                Interval::new(79, 80),
                Interval::new(14, 15),
                Interval::new(55, 56),
                Interval::new(13, 14),
            ]
        );
        assert_eq!(seeds.total_len(), Some(4));
    }

    #[test]
    fn test_ranges_passthrough() {
        let input = vec![Interval::new(79i64, 93), Interval::new(55, 68)];
        let seeds = SeedSet::ranges(input.clone());
        assert_eq!(seeds.to_ranges(), input);
        assert_eq!(seeds.total_len(), Some(14 + 13));
    }

    #[test]
    fn test_is_empty() {
        assert!(SeedSet::<i64>::points(Vec::new()).unwrap().is_empty());
        assert!(SeedSet::<i64>::ranges(Vec::new()).is_empty());
        assert!(SeedSet::ranges(vec![Interval::new(5i64, 5)]).is_empty());
        assert!(!SeedSet::points(vec![0i64]).unwrap().is_empty());
        assert!(!SeedSet::ranges(vec![Interval::new(0i64, 1)]).is_empty());
    }

    #[test]
    fn test_point_at_type_maximum_rejected() {
        assert_eq!(
            SeedSet::points(vec![0i64, i64::MAX]),
            Err(ModelError::PointOverflow { point: i64::MAX })
        );
        let near_max = SeedSet::points(vec![i64::MAX - 1]).unwrap();
        assert_eq!(near_max.to_ranges(), vec![Interval::new(i64::MAX - 1, i64::MAX)]);
    }

    #[test]
    fn test_total_len_overflow_is_none() {
        let seeds = SeedSet::ranges(vec![Interval::new(0i64, i64::MAX), Interval::new(0, 10)]);
        assert_eq!(seeds.total_len(), None);
    }
}
