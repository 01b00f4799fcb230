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

use crate::{error::ModelError, table::TranslationTable};
use almanac_core::math::interval::Interval;
use num_traits::{PrimInt, Signed};

/// An ordered, immutable sequence of translation tables.
///
/// The stage order is semantic (seed to soil to fertilizer, and so on
/// through to location) and fixed at construction; no stage may be skipped
/// or reordered. Applying the pipeline is a pure function: the same input
/// always produces the same output.
///
/// # Examples
///
/// ```rust
/// # use almanac_core::math::interval::Interval;
/// # use almanac_model::{pipeline::Pipeline, rule::Rule, table::TranslationTable};
///
/// let pipeline = Pipeline::new(vec![
///     TranslationTable::new(
///         "seed-to-soil",
///         vec![
///             Rule::new(Interval::new(98, 100), -48),
///             Rule::new(Interval::new(50, 98), 2),
///         ],
///     )
///     .unwrap(),
///     TranslationTable::identity("soil-to-fertilizer"),
/// ])
/// .unwrap();
///
/// assert_eq!(pipeline.apply_point(79), 81);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline<T>
where
    T: PrimInt,
{
    stages: Vec<TranslationTable<T>>,
}

impl<T> Pipeline<T>
where
    T: PrimInt + Signed,
{
    /// Creates a pipeline from stages in application order.
    ///
    /// A pipeline with zero stages is rejected with
    /// [`ModelError::EmptyPipeline`].
    pub fn new(stages: Vec<TranslationTable<T>>) -> Result<Self, ModelError<T>> {
        if stages.is_empty() {
            return Err(ModelError::EmptyPipeline);
        }
        Ok(Self { stages })
    }

    /// Returns the stages in application order.
    #[inline]
    pub fn stages(&self) -> &[TranslationTable<T>] {
        &self.stages
    }

    /// Returns the number of stages.
    #[inline]
    pub fn num_stages(&self) -> usize {
        self.stages.len()
    }

    /// Translates a single point through every stage in order.
    pub fn apply_point(&self, seed: T) -> T {
        self.stages
            .iter()
            .fold(seed, |value, stage| stage.resolve_point(value))
    }

    /// Translates a set of ranges through every stage in order.
    ///
    /// Stage `i`'s output fragments are stage `i + 1`'s input. The result
    /// typically contains more fragments than the input, since each stage
    /// may split ranges at its rule boundaries, but the total covered
    /// length never changes.
    pub fn apply_ranges(&self, seeds: &[Interval<T>]) -> Vec<Interval<T>> {
        let mut frontier: Vec<Interval<T>> =
            seeds.iter().copied().filter(|r| !r.is_empty()).collect();
        for stage in &self.stages {
            frontier = stage.resolve_ranges(&frontier);
        }
        frontier
    }
}

impl<T> std::fmt::Display for Pipeline<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Pipeline ({} stages)", self.stages.len())?;
        for stage in &self.stages {
            write!(f, "{stage}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rule;

    fn two_stage_pipeline() -> Pipeline<i64> {
        Pipeline::new(vec![
            TranslationTable::new(
                "seed-to-soil",
                vec![
                    Rule::new(Interval::new(98, 100), -48),
                    Rule::new(Interval::new(50, 98), 2),
                ],
            )
            .unwrap(),
            TranslationTable::identity("soil-to-fertilizer"),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_pipeline_rejected() {
        let result = Pipeline::<i64>::new(Vec::new());
        assert_eq!(result, Err(ModelError::EmptyPipeline));
    }

    #[test]
    fn test_apply_point_folds_stages() {
        let pipeline = two_stage_pipeline();
        assert_eq!(pipeline.num_stages(), 2);
        assert_eq!(pipeline.apply_point(79), 81);
        assert_eq!(pipeline.apply_point(13), 13);
        assert_eq!(pipeline.apply_point(99), 51);
    }

    #[test]
    fn test_apply_ranges_feeds_stage_output_forward() {
        let first = TranslationTable::new(
            "a-to-b",
            vec![Rule::new(Interval::new(0, 10), 100)],
        )
        .unwrap();
        let second = TranslationTable::new(
            "b-to-c",
            vec![Rule::new(Interval::new(100, 105), -100)],
        )
        .unwrap();
        let pipeline = Pipeline::new(vec![first, second]).unwrap();

        // Stage one shifts [0,10) to [100,110); stage two maps the first
        // half back down and leaves the rest.
        let out = pipeline.apply_ranges(&[Interval::new(0, 10)]);
        assert_eq!(out, vec![Interval::new(0, 5), Interval::new(105, 110)]);
    }

    #[test]
    fn test_apply_ranges_worked_example() {
        let pipeline = two_stage_pipeline();
        let out = pipeline.apply_ranges(&[Interval::new(79, 93)]);
        assert_eq!(out, vec![Interval::new(81, 95)]);
        assert_eq!(out.iter().map(|r| r.start()).min(), Some(81));
    }

    #[test]
    fn test_apply_ranges_drops_empty_inputs() {
        let pipeline = two_stage_pipeline();
        assert!(pipeline.apply_ranges(&[Interval::new(7, 7)]).is_empty());
    }

    #[test]
    fn test_determinism() {
        let pipeline = two_stage_pipeline();
        let input = [Interval::new(40, 110)];
        assert_eq!(pipeline.apply_ranges(&input), pipeline.apply_ranges(&input));
    }
}
