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

//! # Almanac Solver
//!
//! Orchestration for the almanac range-mapping pipeline: drives a
//! [`SeedSet`](almanac_model::seeds::SeedSet) through a
//! [`Pipeline`](almanac_model::pipeline::Pipeline) and reduces the output
//! fragments to the minimum reachable value, without ever enumerating the
//! individual identifiers.
//!
//! ## Modules
//!
//! - `num`: The numeric trait alias collecting the solver-side integer
//!   bounds.
//! - `solver`: `Solver`/`SolverBuilder`, the `SolveOutcome` with the
//!   minimum and run statistics, and the `NoValidSeeds` error.
//! - `stats`: Solve statistics with a builder and aligned display output.
//!
//! ## Parallelism
//!
//! Translation is a pure computation over immutable values, so independent
//! top-level seed ranges can be folded on separate scoped threads with no
//! coordination beyond a final `min` reduction. The builder's thread count
//! opts into this; the default is the sequential path.

pub mod num;
pub mod solver;
pub mod stats;
