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

use super::solver::sorted_finite;
use crate::classify::class_index;

/// Returns the goodness of variance fit of `breaks` over `sample`.
///
/// The fit is `(SDAM - SDCM) / SDAM`, where SDAM is the sum of squared
/// deviations of the sample from its mean and SDCM is the sum of squared
/// deviations of each class from its own mean. It ranges from 0 (classes
/// explain nothing) to 1 (classes explain all variance).
///
/// Returns `None` when the sample has no finite observation or `breaks` is
/// empty, and `Some(1.0)` when every observation is identical.
///
/// # Examples
///
/// ```
/// use choropleth::jenks::compute_breaks;
/// use choropleth::jenks::goodness_of_variance_fit;
///
/// let sample = [1.0, 2.0, 3.0, 10.0, 11.0, 12.0];
/// let gvf = goodness_of_variance_fit(&sample, &compute_breaks(&sample, 2)).unwrap();
/// assert!(gvf > 0.95);
/// ```
pub fn goodness_of_variance_fit(sample: &[f64], breaks: &[f64]) -> Option<f64> {
    let sorted = sorted_finite(sample);
    if sorted.is_empty() || breaks.len() < 2 {
        return None;
    }

    let sdam = squared_deviations(&sorted);
    if sdam == 0.0 {
        return Some(1.0);
    }

    let mut classes = vec![Vec::new(); breaks.len() - 1];
    for &value in &sorted {
        if let Some(index) = class_index(value, breaks) {
            classes[index].push(value);
        }
    }
    let sdcm: f64 = classes.iter().map(|class| squared_deviations(class)).sum();

    Some((sdam - sdcm) / sdam)
}

fn squared_deviations(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    values.iter().map(|v| (v - mean) * (v - mean)).sum()
}
