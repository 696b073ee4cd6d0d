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

//! # Cairn Solver
//!
//! High-level orchestration for local search. This crate wraps a base
//! strategy in a random-restart loop: fresh problem instances are generated
//! until one run reaches the known optimum or the restart budget runs out,
//! and the best solution seen across restarts is always retained.
//!
//! ## Modules
//!
//! - `restart`: the restart controller with a builder, per-run cost
//!   accumulation, and unified outcome construction.
//!
//! ## Motivation
//!
//! Hill climbing is cheap but gets stuck in local optima; which basin a run
//! lands in depends only on its starting point. Restarting from fresh
//! random initial states converts a strategy with a modest per-run success
//! rate into one that succeeds with high probability, at a cost that is the
//! plain sum of the per-run costs.
//!
//! See `restart` for detailed APIs.

pub mod restart;

pub use restart::{
    RandomRestart, RandomRestartBuilder, RestartOutcome, RestartStatistics, RestartTermination,
};
