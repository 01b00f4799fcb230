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

use num_traits::PrimInt;
use smallvec::SmallVec;
use std::{
    cmp::{max, min},
    iter::FusedIterator,
};

/// The error returned when an interval is constructed with `start > end`.
///
/// Malformed bounds are rejected at the boundary (parsing, user input) so
/// that interval operations inside the core never have to re-validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidIntervalError;

impl std::fmt::Display for InvalidIntervalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid interval: start must be less than or equal to end")
    }
}

impl std::error::Error for InvalidIntervalError {}

/// A half-open interval `[start, end)` over the integers.
///
/// The start bound is inclusive, the end bound exclusive, so the interval
/// contains every `x` with `start <= x < end` and `start == end` denotes the
/// empty interval. Intervals are immutable values; every operation returns a
/// new interval instead of mutating in place.
///
/// # Invariants
///
/// `start <= end` always holds for a constructed interval.
///
/// # Examples
///
/// ```rust
/// # use almanac_core::math::interval::Interval;
///
/// let iv = Interval::new(79, 93);
/// assert_eq!(iv.len(), 14);
/// assert!(iv.contains_point(79));
/// assert!(!iv.contains_point(93));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval<T>
where
    T: PrimInt,
{
    start_inclusive: T,
    end_exclusive: T,
}

impl<T> Interval<T>
where
    T: PrimInt,
{
    /// Creates a new interval `[start, end)`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`. Use [`Interval::try_new`] at boundaries
    /// where the bounds come from untrusted input.
    #[inline]
    pub fn new(start_inclusive: T, end_exclusive: T) -> Self {
        assert!(
            start_inclusive <= end_exclusive,
            "invalid interval: start must be less than or equal to end"
        );
        Self {
            start_inclusive,
            end_exclusive,
        }
    }

    /// Creates a new interval, rejecting `start > end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use almanac_core::math::interval::Interval;
    ///
    /// assert!(Interval::try_new(0, 10).is_ok());
    /// assert!(Interval::try_new(10, 0).is_err());
    /// ```
    #[inline]
    pub fn try_new(start_inclusive: T, end_exclusive: T) -> Result<Self, InvalidIntervalError> {
        if start_inclusive <= end_exclusive {
            Ok(Self {
                start_inclusive,
                end_exclusive,
            })
        } else {
            Err(InvalidIntervalError)
        }
    }

    /// Creates a new interval without validating in release builds.
    ///
    /// # Safety
    ///
    /// The caller must ensure `start <= end`. A `debug_assert!` catches
    /// violations during development.
    #[inline]
    pub fn new_unchecked(start_inclusive: T, end_exclusive: T) -> Self {
        debug_assert!(
            start_inclusive <= end_exclusive,
            "invalid interval: start must be less than or equal to end"
        );
        Self {
            start_inclusive,
            end_exclusive,
        }
    }

    /// Creates the empty interval `[p, p)` at the given position.
    #[inline]
    pub fn empty_at(position: T) -> Self {
        Self {
            start_inclusive: position,
            end_exclusive: position,
        }
    }

    /// Returns the inclusive start bound.
    #[inline]
    pub const fn start(&self) -> T {
        self.start_inclusive
    }

    /// Returns the exclusive end bound.
    #[inline]
    pub const fn end(&self) -> T {
        self.end_exclusive
    }

    /// Returns the number of integers contained in the interval.
    #[inline]
    pub fn len(&self) -> T {
        self.end_exclusive - self.start_inclusive
    }

    /// Returns `true` if the interval contains no integers (`start == end`).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start_inclusive == self.end_exclusive
    }

    /// Returns `true` if `value` lies in `[start, end)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use almanac_core::math::interval::Interval;
    ///
    /// let iv = Interval::new(50, 98);
    /// assert!(iv.contains_point(50));
    /// assert!(iv.contains_point(97));
    /// assert!(!iv.contains_point(98));
    /// ```
    #[inline]
    pub fn contains_point(&self, value: T) -> bool {
        self.start_inclusive <= value && value < self.end_exclusive
    }

    /// Returns `true` if the two intervals share at least one integer.
    ///
    /// Adjacent intervals (`[0, 5)` and `[5, 10)`) do not intersect.
    #[inline]
    pub fn intersects(&self, other: Self) -> bool {
        self.start_inclusive < other.end_exclusive && other.start_inclusive < self.end_exclusive
    }

    /// Calculates the intersection of two intervals.
    ///
    /// Returns `None` if the intervals share no integers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use almanac_core::math::interval::Interval;
    ///
    /// let a = Interval::new(79, 93);
    /// let b = Interval::new(50, 98);
    /// assert_eq!(a.intersection(b), Some(Interval::new(79, 93)));
    /// assert_eq!(a.intersection(Interval::new(93, 100)), None);
    /// ```
    #[inline]
    pub fn intersection(&self, other: Self) -> Option<Self> {
        let new_start = max(self.start_inclusive, other.start_inclusive);
        let new_end = min(self.end_exclusive, other.end_exclusive);

        if new_start < new_end {
            Some(Self::new_unchecked(new_start, new_end))
        } else {
            None
        }
    }

    /// Calculates the union of two overlapping or adjacent intervals.
    ///
    /// Returns `None` if the intervals are separated by a gap, since the
    /// union would not be a single contiguous interval.
    #[inline]
    pub fn union(&self, other: Self) -> Option<Self> {
        if self.start_inclusive <= other.end_exclusive && other.start_inclusive <= self.end_exclusive
        {
            Some(Self {
                start_inclusive: min(self.start_inclusive, other.start_inclusive),
                end_exclusive: max(self.end_exclusive, other.end_exclusive),
            })
        } else {
            None
        }
    }

    /// Calculates the set difference `self - other`.
    ///
    /// # Returns
    ///
    /// Zero, one, or two fragments:
    /// * 0: `other` fully covers `self`.
    /// * 1: `other` clips one side of `self`, or the two are disjoint.
    /// * 2: `other` punches a hole in the middle of `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use almanac_core::math::interval::Interval;
    ///
    /// let a = Interval::new(0, 10);
    /// let hole = Interval::new(4, 6);
    ///
    /// let fragments = a.difference(hole);
    /// assert_eq!(&fragments[..], &[Interval::new(0, 4), Interval::new(6, 10)]);
    /// ```
    pub fn difference(&self, other: Self) -> SmallVec<[Self; 2]> {
        if !self.intersects(other) {
            return smallvec::smallvec![*self];
        }

        let mut fragments = SmallVec::new();
        if self.start_inclusive < other.start_inclusive {
            fragments.push(Self::new_unchecked(
                self.start_inclusive,
                other.start_inclusive,
            ));
        }
        if other.end_exclusive < self.end_exclusive {
            fragments.push(Self::new_unchecked(other.end_exclusive, self.end_exclusive));
        }
        fragments
    }

    /// Translates both bounds by `delta`, preserving the length.
    ///
    /// This is the operation applied after a rule match: the matched part of
    /// an input range moves as a block, so the minimum of the shifted
    /// interval stays at its own start bound.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use almanac_core::math::interval::Interval;
    ///
    /// let iv = Interval::new(79, 93);
    /// assert_eq!(iv.shift(2), Interval::new(81, 95));
    /// assert_eq!(Interval::new(98, 100).shift(-48), Interval::new(50, 52));
    /// ```
    #[inline]
    pub fn shift(&self, delta: T) -> Self {
        Self {
            start_inclusive: self.start_inclusive + delta,
            end_exclusive: self.end_exclusive + delta,
        }
    }

    /// Creates an iterator over the integer points of the interval.
    ///
    /// Intended for brute-force reference computations over small intervals
    /// in tests; production range folding never enumerates points.
    #[inline]
    pub fn iter(&self) -> IntervalPoints<T> {
        IntervalPoints {
            current: self.start_inclusive,
            end_exclusive: self.end_exclusive,
        }
    }
}

/// An iterator over the integer points contained in an [`Interval`].
///
/// # Examples
///
/// ```rust
/// # use almanac_core::math::interval::Interval;
///
/// let points: Vec<_> = Interval::new(1, 4).iter().collect();
/// assert_eq!(points, vec![1, 2, 3]);
/// ```
pub struct IntervalPoints<T>
where
    T: PrimInt,
{
    current: T,
    end_exclusive: T,
}

impl<T> Iterator for IntervalPoints<T>
where
    T: PrimInt,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current < self.end_exclusive {
            let point = self.current;
            self.current = self.current + T::one();
            Some(point)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.current >= self.end_exclusive {
            return (0, Some(0));
        }
        let remaining = (self.end_exclusive - self.current).to_usize();
        (remaining.unwrap_or(usize::MAX), remaining)
    }
}

impl<T> FusedIterator for IntervalPoints<T> where T: PrimInt {}

impl<T> IntoIterator for Interval<T>
where
    T: PrimInt,
{
    type Item = T;
    type IntoIter = IntervalPoints<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for Interval<T>
where
    T: PrimInt,
{
    #[inline]
    fn default() -> Self {
        Self::empty_at(T::zero())
    }
}

impl<T> std::fmt::Debug for Interval<T>
where
    T: PrimInt + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interval")
            .field("start_inclusive", &self.start_inclusive)
            .field("end_exclusive", &self.end_exclusive)
            .finish()
    }
}

impl<T> std::fmt::Display for Interval<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start_inclusive, self.end_exclusive)
    }
}

impl<T> From<std::ops::Range<T>> for Interval<T>
where
    T: PrimInt,
{
    #[inline]
    fn from(range: std::ops::Range<T>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl<T> From<Interval<T>> for std::ops::Range<T>
where
    T: PrimInt,
{
    #[inline]
    fn from(iv: Interval<T>) -> Self {
        iv.start_inclusive..iv.end_exclusive
    }
}
