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

use almanac_core::math::interval::Interval;
use num_traits::{PrimInt, Signed};

/// A single translation rule: every point `p` in `source` maps to
/// `p + delta`.
///
/// In the textual almanac a rule is written as `dest_start source_start
/// length`; the loader converts that to the source interval
/// `[source_start, source_start + length)` and `delta = dest_start -
/// source_start`.
///
/// # Examples
///
/// ```rust
/// # use almanac_core::math::interval::Interval;
/// # use almanac_model::rule::Rule;
///
/// // "52 50 48": sources 50..98 map to destinations 52..100.
/// let rule = Rule::new(Interval::new(50, 98), 2);
/// assert_eq!(rule.translate(79), 81);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule<T>
where
    T: PrimInt,
{
    source: Interval<T>,
    delta: T,
}

impl<T> Rule<T>
where
    T: PrimInt + Signed,
{
    /// Creates a new rule mapping `source` by `delta`.
    #[inline]
    pub fn new(source: Interval<T>, delta: T) -> Self {
        Self { source, delta }
    }

    /// Returns the source interval this rule applies to.
    #[inline]
    pub const fn source(&self) -> Interval<T> {
        self.source
    }

    /// Returns the translation offset.
    #[inline]
    pub const fn delta(&self) -> T {
        self.delta
    }

    /// Returns `true` if this rule applies to `point`.
    #[inline]
    pub fn matches(&self, point: T) -> bool {
        self.source.contains_point(point)
    }

    /// Translates a point this rule applies to.
    ///
    /// The caller must have established containment; this is checked only
    /// in debug builds.
    #[inline]
    pub fn translate(&self, point: T) -> T {
        debug_assert!(
            self.source.contains_point(point),
            "called `Rule::translate` with a point outside the source interval"
        );
        point + self.delta
    }
}

impl<T> std::fmt::Display for Rule<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.delta < T::zero() {
            write!(f, "{} -> {}", self.source, self.delta)
        } else {
            write!(f, "{} -> +{}", self.source, self.delta)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let rule = Rule::new(Interval::new(98, 100), -48);
        assert_eq!(rule.source(), Interval::new(98, 100));
        assert_eq!(rule.delta(), -48);
    }

    #[test]
    fn test_matches_and_translate() {
        let rule = Rule::new(Interval::new(50, 98), 2);
        assert!(rule.matches(50));
        assert!(rule.matches(97));
        assert!(!rule.matches(98));
        assert!(!rule.matches(49));

        assert_eq!(rule.translate(79), 81);
        assert_eq!(rule.translate(50), 52);
    }

    #[test]
    fn test_negative_delta() {
        let rule = Rule::new(Interval::new(98, 100), -48);
        assert_eq!(rule.translate(98), 50);
        assert_eq!(rule.translate(99), 51);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            format!("{}", Rule::new(Interval::new(50, 98), 2)),
            "[50, 98) -> +2"
        );
        assert_eq!(
            format!("{}", Rule::new(Interval::new(98, 100), -48)),
            "[98, 100) -> -48"
        );
    }
}
