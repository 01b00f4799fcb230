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

//! # Almanac Model
//!
//! **The core domain model for the almanac range-mapping pipeline.**
//!
//! This crate defines the data structures that translate large integer
//! identifiers (seed numbers) through an ordered chain of piecewise-linear
//! translation tables, both point-wise and range-wise. It sits between the
//! textual almanac input and the solving layer (`almanac-solver`).
//!
//! ## Architecture
//!
//! The crate separates **construction** from **translation**:
//!
//! * **`rule`**: A single `(source interval, delta)` mapping.
//! * **`table`**: `TranslationTable`, an immutable, sorted, validated set of
//!   disjoint rules for one named stage, resolving points and splitting
//!   ranges at rule boundaries.
//! * **`pipeline`**: An ordered, immutable sequence of stages folded over
//!   points or ranges.
//! * **`seeds`**: `SeedSet`, the initial domain as a point list or a range
//!   list, with a uniform range view.
//! * **`almanac`**: The parsed aggregate of seed numbers plus pipeline,
//!   offering both seed readings.
//! * **`loading`**: The one-shot text loader that turns the raw almanac
//!   format into fully-formed, immutable tables.
//! * **`error`**: The model error taxonomy.
//!
//! ## Design Philosophy
//!
//! 1. **Immutability**: Tables, pipelines, and seed sets are built once and
//!    never mutated; translation is a pure function.
//! 2. **Fail-Fast**: Overlapping rules, empty pipelines, and malformed
//!    bounds are rejected at construction time, before any range folding.
//! 3. **Analytic splitting**: Range translation fragments intervals at rule
//!    boundaries instead of enumerating points, so inputs spanning billions
//!    of identifiers stay cheap.

pub mod almanac;
pub mod error;
pub mod loading;
pub mod pipeline;
pub mod rule;
pub mod seeds;
pub mod table;
