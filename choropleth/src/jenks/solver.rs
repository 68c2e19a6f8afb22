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

use super::table::Table;

/// Computes the natural breaks of `sample` for `desired_class_count` classes.
///
/// Non-finite observations are ignored and the class count is clamped into
/// `[1, n]` where `n` is the number of finite observations (duplicates
/// included). The result holds `k + 1` non-decreasing values starting at the
/// sample minimum and ending at the sample maximum, or nothing when the
/// sample has no finite observation.
///
/// Ties between equally good partitions resolve towards the longest last
/// class, so results are reproducible on samples with repeated values.
///
/// # Examples
///
/// ```
/// use choropleth::jenks::compute_breaks;
///
/// assert!(compute_breaks(&[], 5).is_empty());
/// assert_eq!(compute_breaks(&[42.0], 5), vec![42.0, 42.0]);
/// assert_eq!(
///     compute_breaks(&[1.0, 2.0, 10.0, 11.0, f64::NAN], 2),
///     vec![1.0, 2.0, 11.0]
/// );
/// ```
pub fn compute_breaks(sample: &[f64], desired_class_count: usize) -> Vec<f64> {
    let sorted = sorted_finite(sample);
    if sorted.is_empty() {
        return Vec::new();
    }

    let n = sorted.len();
    let k = desired_class_count.clamp(1, n);
    log::debug!("computing natural breaks for {n} observations into {k} classes");

    if k == 1 {
        return vec![sorted[0], sorted[n - 1]];
    }

    let lower_class_limits = optimal_lower_class_limits(&sorted, k);
    backtrack(&sorted, k, &lower_class_limits)
}

pub(crate) fn sorted_finite(sample: &[f64]) -> Vec<f64> {
    let mut sorted: Vec<f64> = sample.iter().copied().filter(|v| v.is_finite()).collect();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Fills the DP tables and returns the lower class limits.
///
/// `lower[l][j]` is the 1-based index at which the last class starts in the
/// best partition of the first `l` sorted values into `j` classes, and
/// `variance[l][j]` is the cost of that partition.
fn optimal_lower_class_limits(sorted: &[f64], k: usize) -> Table<usize> {
    let n = sorted.len();
    let mut lower = Table::new(n + 1, k + 1, 0usize);
    let mut variance = Table::new(n + 1, k + 1, 0.0f64);

    for j in 1..=k {
        lower.set(0, j, 1);
        variance.set(0, j, 0.0);
        for l in 1..=n {
            variance.set(l, j, f64::INFINITY);
        }
    }

    for l in 1..=n {
        let mut sum = 0.0;
        let mut sum_squares = 0.0;

        for m in 1..=l {
            let value = sorted[l - m];
            sum += value;
            sum_squares += value * value;
            if m == l {
                break;
            }

            let window_variance = sum_squares - (sum * sum) / m as f64;
            let remaining = l - m;
            // Column 1 is overwritten below.
            for j in 2..=k {
                let candidate = window_variance + variance.get(remaining, j - 1);
                if variance.get(l, j) >= candidate {
                    lower.set(l, j, remaining + 1);
                    variance.set(l, j, candidate);
                }
            }
        }

        lower.set(l, 1, 1);
        variance.set(l, 1, sum_squares - (sum * sum) / l as f64);
    }

    lower
}

fn backtrack(sorted: &[f64], k: usize, lower: &Table<usize>) -> Vec<f64> {
    let n = sorted.len();
    let mut breaks = vec![0.0; k + 1];
    breaks[0] = sorted[0];
    breaks[k] = sorted[n - 1];

    let mut l = n;
    for j in (2..=k).rev() {
        // Class j leaves at least j - 1 observations to the classes below.
        // Cells left unset by overflowing window sums collapse onto that bound.
        let start = lower.get(l, j).clamp(j, l);
        breaks[j - 1] = sorted[start - 2];
        l = start - 1;
    }

    breaks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_finite_drops_non_finite() {
        let sorted = sorted_finite(&[3.0, f64::NAN, -1.0, f64::INFINITY, 2.0, f64::NEG_INFINITY]);
        assert_eq!(sorted, vec![-1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_lower_class_limits_for_two_clusters() {
        let sorted = [1.0, 2.0, 3.0, 10.0, 11.0, 12.0];
        let lower = optimal_lower_class_limits(&sorted, 2);
        // The last class of the full partition starts at the 4th value.
        assert_eq!(lower.get(6, 2), 4);
        for l in 1..=sorted.len() {
            assert_eq!(lower.get(l, 1), 1);
        }
    }

    #[test]
    fn test_ties_prefer_the_longest_last_class() {
        // {1}{2, 3} and {1, 2}{3} both cost 0.5.
        let lower = optimal_lower_class_limits(&[1.0, 2.0, 3.0], 2);
        assert_eq!(lower.get(3, 2), 2);
    }
}
