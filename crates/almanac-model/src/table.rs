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

//! # Translation Tables
//!
//! One named stage of the almanac (e.g. "seed-to-soil") as an immutable,
//! sorted collection of disjoint translation rules.
//!
//! ## Resolution semantics
//!
//! A point covered by no rule passes through unchanged; unmapped ranges are
//! implicit identity mappings. Range resolution is the algorithmic core of
//! the crate: an input interval is split analytically at rule boundaries
//! into shifted fragments (where a rule applies) and unshifted gap
//! fragments (where none does), so the total covered length is conserved
//! and no point is ever enumerated.
//!
//! ## Construction
//!
//! `TranslationTable::new` sorts the rules by source start (input order is
//! not trusted), drops rules with empty sources, and rejects overlapping
//! sources with [`ModelError::OverlappingRules`] instead of silently
//! picking the first match.

use crate::{error::ModelError, rule::Rule};
use almanac_core::math::interval::Interval;
use num_traits::{PrimInt, Signed};

/// An immutable, validated translation table for one almanac stage.
///
/// # Examples
///
/// ```rust
/// # use almanac_core::math::interval::Interval;
/// # use almanac_model::{rule::Rule, table::TranslationTable};
///
/// let table = TranslationTable::new(
///     "seed-to-soil",
///     vec![
///         Rule::new(Interval::new(98, 100), -48),
///         Rule::new(Interval::new(50, 98), 2),
///     ],
/// )
/// .unwrap();
///
/// assert_eq!(table.resolve_point(79), 81);
/// assert_eq!(table.resolve_point(13), 13); // identity passthrough
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationTable<T>
where
    T: PrimInt,
{
    name: String,
    /// Sorted by `source.start()`, pairwise disjoint.
    rules: Vec<Rule<T>>,
}

impl<T> TranslationTable<T>
where
    T: PrimInt + Signed,
{
    /// Builds a table from rules in any order.
    ///
    /// Rules are sorted by source start. Rules with empty source intervals
    /// translate nothing and are dropped. Two rules whose sources share a
    /// point are rejected with [`ModelError::OverlappingRules`].
    pub fn new<N: Into<String>>(name: N, rules: Vec<Rule<T>>) -> Result<Self, ModelError<T>> {
        let name = name.into();

        let mut rules: Vec<Rule<T>> = rules
            .into_iter()
            .filter(|r| !r.source().is_empty())
            .collect();
        rules.sort_by_key(|r| r.source().start());

        for pair in rules.windows(2) {
            if pair[0].source().intersects(pair[1].source()) {
                return Err(ModelError::OverlappingRules {
                    table: name,
                    first: pair[0].source(),
                    second: pair[1].source(),
                });
            }
        }

        Ok(Self { name, rules })
    }

    /// Builds a table with no rules; it resolves everything to itself.
    #[inline]
    pub fn identity<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    /// Returns the stage name, e.g. `"seed-to-soil"`.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the rules, sorted by source start.
    #[inline]
    pub fn rules(&self) -> &[Rule<T>] {
        &self.rules
    }

    /// Returns the number of rules in the table.
    #[inline]
    pub fn num_rules(&self) -> usize {
        self.rules.len()
    }

    /// Translates a single point through this table.
    ///
    /// Binary search over the sorted rule sources; a point covered by no
    /// rule is returned unchanged.
    pub fn resolve_point(&self, point: T) -> T {
        // First rule whose source starts after the point; its predecessor
        // is the only candidate that can contain the point.
        let idx = self
            .rules
            .partition_point(|r| r.source().start() <= point);
        if idx > 0 && self.rules[idx - 1].matches(point) {
            return self.rules[idx - 1].translate(point);
        }
        point
    }

    /// Translates a set of ranges through this table.
    ///
    /// Each input interval is split at rule boundaries: the parts covered
    /// by a rule are shifted by that rule's delta, the gaps pass through
    /// unshifted. The output may contain more intervals than the input, but
    /// the total covered length is conserved. Empty inputs produce nothing.
    pub fn resolve_ranges(&self, ranges: &[Interval<T>]) -> Vec<Interval<T>> {
        let mut out = Vec::with_capacity(ranges.len());
        for range in ranges {
            self.resolve_range_into(*range, &mut out);
        }
        out
    }

    /// Splits one input range against the rules, appending the fragments.
    pub fn resolve_range_into(&self, range: Interval<T>, out: &mut Vec<Interval<T>>) {
        if range.is_empty() {
            return;
        }

        // Skip every rule that ends at or before the range.
        let first = self
            .rules
            .partition_point(|r| r.source().end() <= range.start());

        let mut cursor = range.start();
        for rule in &self.rules[first..] {
            if rule.source().start() >= range.end() {
                break;
            }

            // Gap before this rule passes through unshifted.
            if cursor < rule.source().start() {
                out.push(Interval::new_unchecked(cursor, rule.source().start()));
            }

            // Non-empty by the loop bounds: the rule ends after the range
            // starts and starts before the range ends.
            let matched = range
                .intersection(rule.source())
                .expect("overlapping rule produced an empty intersection");
            out.push(matched.shift(rule.delta()));
            cursor = matched.end();
        }

        // Tail past the last overlapping rule.
        if cursor < range.end() {
            out.push(Interval::new_unchecked(cursor, range.end()));
        }
    }
}

impl<T> std::fmt::Display for TranslationTable<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}:", self.name)?;
        for rule in &self.rules {
            writeln!(f, "  {rule}")?;
        }
        Ok(())
    }
}
