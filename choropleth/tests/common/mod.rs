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

//! Shared sample generators for integration tests.

#![allow(dead_code)]

/// Xorshift generator so that generated samples are reproducible.
#[derive(Debug, Clone, Copy)]
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    pub fn seeded(seed: u64) -> Self {
        let state = if seed == 0 { 0x9e3779b97f4a7c15 } else { seed };
        Self { state }
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Returns a value in `[0, bound)`.
    pub fn below(&mut self, bound: u64) -> u64 {
        self.next_u64() % bound
    }
}

/// Integer-valued sample with plenty of duplicates.
pub fn small_integer_sample(rng: &mut XorShift64, len: usize, max: u64) -> Vec<f64> {
    (0..len).map(|_| rng.below(max + 1) as f64).collect()
}

/// Registered-voter counts for `count` constituencies.
///
/// Counts are distinct and right-skewed, like real constituency sizes.
pub fn registered_voters(seed: u64, count: usize) -> Vec<f64> {
    let mut rng = XorShift64::seeded(seed);
    let mut counts: Vec<f64> = (0..count)
        .map(|i| {
            let i = i as f64;
            15_000.0 + 1.5 * i * i + rng.below(1000) as f64 / 1000.0
        })
        .collect();
    // Fisher-Yates so the solver never sees presorted input.
    for i in (1..counts.len()).rev() {
        let j = rng.below(i as u64 + 1) as usize;
        counts.swap(i, j);
    }
    counts
}

/// Sum of squared deviations from the mean.
pub fn squared_deviations(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    values.iter().map(|v| (v - mean) * (v - mean)).sum()
}
