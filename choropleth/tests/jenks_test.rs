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

mod common;

use choropleth::classify::class_index;
use choropleth::jenks::DEFAULT_CLASS_COUNT;
use choropleth::jenks::compute_breaks;
use choropleth::jenks::goodness_of_variance_fit;
use common::XorShift64;
use common::registered_voters;
use common::small_integer_sample;
use common::squared_deviations;
use googletest::assert_that;
use googletest::prelude::eq;
use googletest::prelude::ge;
use googletest::prelude::le;
use googletest::prelude::near;

fn assert_breaks_shape(sample: &[f64], k: usize, breaks: &[f64]) {
    let finite: Vec<f64> = sample.iter().copied().filter(|v| v.is_finite()).collect();
    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    assert_eq!(breaks.len(), k.clamp(1, finite.len()) + 1, "sample {sample:?}, k {k}");
    assert_eq!(breaks[0], min);
    assert_eq!(breaks[breaks.len() - 1], max);
    for pair in breaks.windows(2) {
        assert!(pair[0] <= pair[1], "breaks must not decrease: {breaks:?}");
    }
}

/// Minimal within-class cost of splitting sorted `values` into `k`
/// contiguous non-empty classes, by exhaustive search.
fn brute_force_cost(values: &[f64], k: usize) -> f64 {
    if k == 1 {
        return squared_deviations(values);
    }
    (1..=values.len() - (k - 1))
        .map(|end| squared_deviations(&values[..end]) + brute_force_cost(&values[end..], k - 1))
        .fold(f64::INFINITY, f64::min)
}

fn classified_cost(values: &[f64], breaks: &[f64]) -> f64 {
    let mut classes = vec![Vec::new(); breaks.len() - 1];
    for &value in values {
        classes[class_index(value, breaks).unwrap()].push(value);
    }
    classes.iter().map(|class| squared_deviations(class)).sum()
}

#[test]
fn test_empty_sample() {
    assert!(compute_breaks(&[], 5).is_empty());
    assert!(compute_breaks(&[f64::NAN, f64::INFINITY, f64::NEG_INFINITY], 5).is_empty());
}

#[test]
fn test_single_value() {
    assert_eq!(compute_breaks(&[42.0], 5), vec![42.0, 42.0]);
    assert_eq!(compute_breaks(&[42.0, f64::NAN], 1), vec![42.0, 42.0]);
}

#[test]
fn test_single_class_spans_min_to_max() {
    assert_eq!(compute_breaks(&[7.0, -3.0, 12.5, 0.0], 1), vec![-3.0, 12.5]);
}

#[test]
fn test_zero_class_count_is_clamped_to_one() {
    assert_eq!(compute_breaks(&[3.0, 1.0, 2.0], 0), vec![1.0, 3.0]);
}

#[test]
fn test_class_count_is_clamped_to_sample_size() {
    assert_eq!(compute_breaks(&[3.0, 1.0, 2.0], 10), vec![1.0, 1.0, 2.0, 3.0]);
}

#[test]
fn test_outlier_gets_its_own_class() {
    let sample = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0];
    let breaks = compute_breaks(&sample, 2);
    assert_eq!(breaks, vec![1.0, 9.0, 100.0]);
    for value in 1..=9 {
        assert_eq!(class_index(value as f64, &breaks), Some(0));
    }
    assert_eq!(class_index(100.0, &breaks), Some(1));
}

#[test]
fn test_three_clusters() {
    let sample = [20.0, 1.0, 11.0, 3.0, 22.0, 10.0, 2.0, 21.0, 12.0];
    assert_eq!(compute_breaks(&sample, 3), vec![1.0, 3.0, 12.0, 22.0]);
}

#[test]
fn test_ties_resolve_towards_the_longest_last_class() {
    // {1}{2, 3} and {1, 2}{3} have the same cost.
    assert_eq!(compute_breaks(&[1.0, 2.0, 3.0], 2), vec![1.0, 1.0, 3.0]);
    assert_eq!(compute_breaks(&[3.0, 2.0, 1.0], 2), vec![1.0, 1.0, 3.0]);
}

#[test]
fn test_identical_values() {
    assert_eq!(compute_breaks(&[5.0; 4], 3), vec![5.0; 4]);
    assert_eq!(compute_breaks(&[5.0; 4], 2), vec![5.0; 3]);
}

#[test]
fn test_non_finite_values_are_ignored() {
    let clean = [4.0, 8.0, 15.0, 16.0, 23.0, 42.0];
    let dirty = [4.0, f64::NAN, 8.0, 15.0, f64::INFINITY, 16.0, 23.0, f64::NEG_INFINITY, 42.0];
    assert_eq!(compute_breaks(&dirty, 3), compute_breaks(&clean, 3));
}

#[test]
fn test_order_does_not_matter() {
    let mut rng = XorShift64::seeded(7);
    let sample = small_integer_sample(&mut rng, 40, 25);
    let mut reversed = sample.clone();
    reversed.reverse();
    assert_eq!(compute_breaks(&sample, 4), compute_breaks(&reversed, 4));
}

#[test]
fn test_is_idempotent() {
    let sample = registered_voters(11, 120);
    assert_eq!(compute_breaks(&sample, 6), compute_breaks(&sample, 6));
}

#[test]
fn test_breaks_shape_on_random_samples() {
    let mut rng = XorShift64::seeded(20240611);
    for _ in 0..200 {
        let len = rng.below(30) as usize + 1;
        let sample = small_integer_sample(&mut rng, len, 12);
        let k = rng.below(12) as usize + 1;
        let breaks = compute_breaks(&sample, k);
        assert_breaks_shape(&sample, k, &breaks);
        for &value in &sample {
            let class = class_index(value, &breaks).unwrap();
            assert_that!(class, le(breaks.len() - 2));
        }
    }
}

#[test]
fn test_matches_exhaustive_search() {
    let mut rng = XorShift64::seeded(99);
    for _ in 0..50 {
        let len = rng.below(7) as usize + 2;
        // distinct values so classes are recovered exactly from the breaks
        let mut values: Vec<f64> = (0..len).map(|i| (i * 10) as f64 + rng.below(10) as f64).collect();
        values.sort_by(f64::total_cmp);
        for k in 1..=len.min(4) {
            let breaks = compute_breaks(&values, k);
            let expected = brute_force_cost(&values, k);
            assert_that!(classified_cost(&values, &breaks), near(expected, 1e-9));
        }
    }
}

#[test]
fn test_registered_voters_for_290_constituencies() {
    let voters = registered_voters(290, 290);
    let breaks = compute_breaks(&voters, DEFAULT_CLASS_COUNT);
    assert_breaks_shape(&voters, DEFAULT_CLASS_COUNT, &breaks);
    assert_eq!(breaks.len(), 11);

    let mut counts = [0usize; 10];
    for &value in &voters {
        let class = class_index(value, &breaks).expect("every constituency is classified");
        counts[class] += 1;
    }
    assert_eq!(counts.iter().sum::<usize>(), 290);
    for count in counts {
        assert_that!(count, ge(1));
    }
}

#[test]
fn test_goodness_of_variance_fit() {
    let sample = [1.0, 2.0, 3.0, 10.0, 11.0, 12.0, 20.0, 21.0, 22.0];
    assert_eq!(goodness_of_variance_fit(&sample, &[]), None);
    assert_eq!(goodness_of_variance_fit(&[], &[0.0, 1.0]), None);
    assert_eq!(goodness_of_variance_fit(&[3.0, 3.0], &[3.0, 3.0]), Some(1.0));

    let one = goodness_of_variance_fit(&sample, &compute_breaks(&sample, 1)).unwrap();
    let three = goodness_of_variance_fit(&sample, &compute_breaks(&sample, 3)).unwrap();
    let nine = goodness_of_variance_fit(&sample, &compute_breaks(&sample, 9)).unwrap();
    assert_that!(one, near(0.0, 1e-12));
    assert_that!(three, ge(0.98));
    assert_that!(nine, near(1.0, 1e-12));
    assert_that!(three, eq(goodness_of_variance_fit(&sample, &[1.0, 3.0, 12.0, 22.0]).unwrap()));
}
