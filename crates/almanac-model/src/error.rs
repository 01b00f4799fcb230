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

//! # Model Errors
//!
//! The error taxonomy for model construction. All variants indicate
//! malformed input data, none are transient, and all are detected eagerly
//! at construction time so a bad almanac fails before any range folding
//! runs. Each variant carries enough context to point at the offending
//! table, intervals, or counts.

use almanac_core::math::interval::{Interval, InvalidIntervalError};
use num_traits::PrimInt;

/// The error type for constructing model entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError<T>
where
    T: PrimInt,
{
    /// An interval was constructed with `start > end`.
    InvalidInterval(InvalidIntervalError),
    /// Two rules within one translation table have overlapping source
    /// intervals, so a point in the overlap would have two translations.
    OverlappingRules {
        /// The name of the table containing the conflict.
        table: String,
        /// The source interval of the earlier rule (by start).
        first: Interval<T>,
        /// The source interval of the later rule it overlaps.
        second: Interval<T>,
    },
    /// A pipeline was constructed with zero stages.
    EmptyPipeline,
    /// The seed list cannot be read as `(start, length)` pairs because it
    /// has an odd number of entries.
    OddSeedCount {
        /// The number of seed values present.
        count: usize,
    },
    /// A seed range's `start + length` overflowed the integer type.
    SeedRangeOverflow {
        /// The range start as given.
        start: T,
        /// The range length as given.
        length: T,
    },
    /// A seed point sits at the integer type's maximum value, so its
    /// half-open range view `[p, p + 1)` is not representable.
    PointOverflow {
        /// The offending seed value.
        point: T,
    },
}

impl<T> std::fmt::Display for ModelError<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInterval(e) => write!(f, "{e}"),
            Self::OverlappingRules {
                table,
                first,
                second,
            } => write!(
                f,
                "table '{table}' has overlapping rule sources {first} and {second}"
            ),
            Self::EmptyPipeline => write!(f, "pipeline must contain at least one stage"),
            Self::OddSeedCount { count } => write!(
                f,
                "seed list of {count} values cannot be read as (start, length) pairs"
            ),
            Self::SeedRangeOverflow { start, length } => write!(
                f,
                "seed range start {start} with length {length} overflows the integer type"
            ),
            Self::PointOverflow { point } => write!(
                f,
                "seed point {point} overflows the integer type when widened to a range"
            ),
        }
    }
}

impl<T> std::error::Error for ModelError<T> where T: PrimInt + std::fmt::Display + std::fmt::Debug {}

impl<T> From<InvalidIntervalError> for ModelError<T>
where
    T: PrimInt,
{
    fn from(e: InvalidIntervalError) -> Self {
        Self::InvalidInterval(e)
    }
}
