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

//! Caller-owned memoization of natural breaks.
//!
//! Computing breaks costs `O(n²·k)`, so they should be computed once per
//! dataset rather than once per render. The solver keeps no state of its
//! own; a [`BreaksCache`] is an explicit value that the caller creates for a
//! dataset session and drops or clears with it.
//!
//! # Usage
//!
//! ```rust
//! use choropleth::cache::BreaksCache;
//!
//! let mut cache = BreaksCache::new();
//! let first = cache.get_or_compute(&[5.0, 1.0, 9.0, 2.0], 2).to_vec();
//! let again = cache.get_or_compute(&[9.0, 2.0, 5.0, 1.0], 2).to_vec();
//! assert_eq!(first, again);
//! assert_eq!(cache.misses(), 1);
//! assert_eq!(cache.hits(), 1);
//! ```

use std::collections::HashMap;

use crate::hash::SampleFingerprint;
use crate::hash::fingerprint;
use crate::jenks::compute_breaks;

/// Breaks keyed by sample content and desired class count.
///
/// Samples holding the same finite observations in any order share an
/// entry. There is no eviction.
#[derive(Debug, Clone, Default)]
pub struct BreaksCache {
    entries: HashMap<(SampleFingerprint, usize), Vec<f64>>,
    hits: u64,
    misses: u64,
}

impl BreaksCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the breaks of `sample` for `desired_class_count`, computing
    /// them with [`compute_breaks`] on the first request.
    pub fn get_or_compute(&mut self, sample: &[f64], desired_class_count: usize) -> &[f64] {
        let key = (fingerprint(sample), desired_class_count);
        if self.entries.contains_key(&key) {
            self.hits += 1;
            log::trace!("breaks cache hit for {:?}", key.0);
        } else {
            self.misses += 1;
            log::debug!("breaks cache miss for {:?}", key.0);
        }
        self.entries
            .entry(key)
            .or_insert_with(|| compute_breaks(sample, desired_class_count))
    }

    /// Returns the number of cached breaks arrays.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns how many requests were served from the cache.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Returns how many requests computed fresh breaks.
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Drops every entry, e.g. when a new dataset is loaded.
    ///
    /// Hit and miss counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
