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

use crate::{error::ModelError, pipeline::Pipeline, seeds::SeedSet};
use almanac_core::math::interval::Interval;
use num_traits::{PrimInt, Signed};

/// A fully parsed almanac: the raw seed numbers plus the stage pipeline.
///
/// The `seeds:` header line of the almanac admits two readings, and which
/// one applies is the caller's choice, not a property of the text:
///
/// * [`Almanac::seed_points`] reads each number as one seed identifier.
/// * [`Almanac::seed_ranges`] reads consecutive pairs as `(start, length)`
///   ranges covering potentially billions of identifiers.
///
/// The almanac itself is immutable; both readings produce a fresh
/// [`SeedSet`] and leave the raw numbers untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Almanac<T>
where
    T: PrimInt,
{
    seeds: Vec<T>,
    pipeline: Pipeline<T>,
}

impl<T> Almanac<T>
where
    T: PrimInt + Signed,
{
    /// Creates an almanac from raw seed numbers and a pipeline.
    #[inline]
    pub fn new(seeds: Vec<T>, pipeline: Pipeline<T>) -> Self {
        Self { seeds, pipeline }
    }

    /// Returns the raw seed numbers as they appeared in the input.
    #[inline]
    pub fn seeds(&self) -> &[T] {
        &self.seeds
    }

    /// Returns the stage pipeline.
    #[inline]
    pub fn pipeline(&self) -> &Pipeline<T> {
        &self.pipeline
    }

    /// Reads the seed numbers as individual identifiers.
    ///
    /// A seed at the integer type's maximum value is
    /// [`ModelError::PointOverflow`], since its range view would not be
    /// representable.
    pub fn seed_points(&self) -> Result<SeedSet<T>, ModelError<T>> {
        SeedSet::points(self.seeds.clone())
    }

    /// Reads the seed numbers as `(start, length)` pairs.
    ///
    /// An odd number of seed values is [`ModelError::OddSeedCount`]; a pair
    /// whose `start + length` exceeds the integer type is
    /// [`ModelError::SeedRangeOverflow`]. Both are detected here, before
    /// any computation runs.
    pub fn seed_ranges(&self) -> Result<SeedSet<T>, ModelError<T>> {
        if self.seeds.len() % 2 != 0 {
            return Err(ModelError::OddSeedCount {
                count: self.seeds.len(),
            });
        }

        let mut ranges = Vec::with_capacity(self.seeds.len() / 2);
        for pair in self.seeds.chunks_exact(2) {
            let (start, length) = (pair[0], pair[1]);
            let end = start
                .checked_add(&length)
                .ok_or(ModelError::SeedRangeOverflow { start, length })?;
            ranges.push(Interval::try_new(start, end)?);
        }
        Ok(SeedSet::ranges(ranges))
    }
}
