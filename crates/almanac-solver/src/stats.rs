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

/// Statistics collected during a solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveStatistics {
    /// Number of non-empty input ranges fed into the pipeline.
    pub input_ranges: usize,
    /// Number of output fragments after the final stage.
    pub output_fragments: usize,
    /// Number of pipeline stages applied.
    pub stages: usize,
    /// Number of worker threads used.
    pub used_threads: usize,
    /// Total duration of the solve.
    pub solve_duration: std::time::Duration,
}

impl std::fmt::Display for SolveStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solve Statistics:")?;
        writeln!(f, "  Input Ranges: {}", self.input_ranges)?;
        writeln!(f, "  Output Fragments: {}", self.output_fragments)?;
        writeln!(f, "  Stages: {}", self.stages)?;
        writeln!(f, "  Used Threads: {}", self.used_threads)?;
        writeln!(
            f,
            "  Solve Duration (secs): {:.3}",
            self.solve_duration.as_secs_f64()
        )
    }
}

/// Builder for `SolveStatistics`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveStatisticsBuilder {
    input_ranges: usize,
    output_fragments: usize,
    stages: usize,
    used_threads: usize,
    solve_duration: std::time::Duration,
}

impl Default for SolveStatisticsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SolveStatisticsBuilder {
    /// Creates a new `SolveStatisticsBuilder` with default values.
    #[inline]
    pub fn new() -> Self {
        Self {
            input_ranges: 0,
            output_fragments: 0,
            stages: 0,
            used_threads: 1,
            solve_duration: std::time::Duration::ZERO,
        }
    }

    /// Sets the number of input ranges.
    #[inline]
    pub fn input_ranges(mut self, input_ranges: usize) -> Self {
        self.input_ranges = input_ranges;
        self
    }

    /// Sets the number of output fragments.
    #[inline]
    pub fn output_fragments(mut self, output_fragments: usize) -> Self {
        self.output_fragments = output_fragments;
        self
    }

    /// Sets the number of pipeline stages.
    #[inline]
    pub fn stages(mut self, stages: usize) -> Self {
        self.stages = stages;
        self
    }

    /// Sets the number of threads used.
    #[inline]
    pub fn used_threads(mut self, used_threads: usize) -> Self {
        self.used_threads = used_threads;
        self
    }

    /// Sets the total solve duration.
    #[inline]
    pub fn solve_duration(mut self, solve_duration: std::time::Duration) -> Self {
        self.solve_duration = solve_duration;
        self
    }

    /// Builds the `SolveStatistics`.
    #[inline]
    pub fn build(self) -> SolveStatistics {
        SolveStatistics {
            input_ranges: self.input_ranges,
            output_fragments: self.output_fragments,
            stages: self.stages,
            used_threads: self.used_threads,
            solve_duration: self.solve_duration,
        }
    }
}
