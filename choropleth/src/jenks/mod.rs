// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Fisher/Jenks natural breaks.
//!
//! Natural breaks partition a sorted sample into contiguous classes so that
//! the total within-class sum of squared deviations is minimal. The optimum
//! is found exactly with dynamic programming in `O(n²·k)` time and `O(n·k)`
//! space, which is comfortable for in-memory datasets of a few thousand
//! observations.
//!
//! # Usage
//!
//! ```rust
//! use choropleth::jenks::compute_breaks;
//!
//! let sample = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0];
//! let breaks = compute_breaks(&sample, 2);
//! assert_eq!(breaks, vec![1.0, 9.0, 100.0]);
//! ```
//!
//! # Breaks layout
//!
//! For an effective class count `k` the result holds `k + 1` values: the
//! sample minimum, the `k - 1` internal cutoffs, and the sample maximum.
//! Class `i` covers `(breaks[i], breaks[i + 1]]`, with class 0 also covering
//! the minimum. Each internal cutoff is the largest observation of the class
//! below it.
//!
//! Non-finite observations are dropped and the class count is clamped into
//! `[1, n]`, so no input can make the solver fail. An empty (or entirely
//! non-finite) sample yields empty breaks.

mod fit;
mod solver;
mod table;

pub use self::fit::goodness_of_variance_fit;
pub use self::solver::compute_breaks;
pub(crate) use self::solver::sorted_finite;

/// Class count used for the registered-voter map.
pub const DEFAULT_CLASS_COUNT: usize = 10;
