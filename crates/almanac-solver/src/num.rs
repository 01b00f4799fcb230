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

//! # Pipeline Numeric Trait
//!
//! Unified numeric bounds for the solver. Translation deltas can point in
//! either direction, so the identifier type must be signed; parallel
//! fan-out over scoped threads additionally requires `Send + Sync`. The
//! alias collects these into a single bound so solver signatures stay
//! readable and consistent.

use num_traits::{PrimInt, Signed};

/// A trait alias for integer types the solver can drive through a
/// pipeline. Satisfied by the signed primitive integers (`i8` through
/// `i64` and `isize`); almanac identifiers typically need `i64`.
pub trait PipelineNumeric:
    PrimInt + Signed + Send + Sync + std::fmt::Debug + std::fmt::Display
{
}

impl<T> PipelineNumeric for T where
    T: PrimInt + Signed + Send + Sync + std::fmt::Debug + std::fmt::Display
{
}
