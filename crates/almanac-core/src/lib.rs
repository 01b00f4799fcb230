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

//! # Almanac Core
//!
//! Foundational math primitives for the almanac range-mapping pipeline.
//! Higher-level crates build translation tables and solvers on top of the
//! closed-open interval type defined here.
//!
//! ## Modules
//!
//! - `math`: Closed-open interval `[start, end)` primitives with fallible
//!   construction, set operations (intersection/union/difference), the
//!   `shift` translation used after a rule match, and point iteration for
//!   brute-force reference checks.
//!
//! ## Purpose
//!
//! Translating ranges of millions of identifiers through piecewise-linear
//! tables is only tractable if ranges are split analytically at rule
//! boundaries instead of enumerated point by point. Everything needed for
//! that splitting lives in this crate, kept free of any domain knowledge
//! about seeds, stages, or almanacs.

pub mod math;
