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

//! Example demonstrating a registered-voter choropleth classification

use choropleth::classify::Classification;
use choropleth::jenks::goodness_of_variance_fit;

/// Synthetic registered-voter counts for 290 constituencies, skewed like
/// the real ones: most are mid-sized, a few urban seats are very large.
fn constituency_voters() -> Vec<f64> {
    (0..290)
        .map(|i| {
            let x = i as f64 / 289.0;
            let wobble = ((i * 7919) % 97) as f64 * 120.0;
            18_000.0 + 95_000.0 * x.powi(3) + 30_000.0 * x + wobble
        })
        .collect()
}

fn main() {
    println!("=== Registered Voter Classification ===\n");

    let voters = constituency_voters();
    let classification = Classification::builder().build(&voters);

    println!("1. Natural breaks ({} classes):", classification.class_count());
    for value in classification.breaks() {
        println!("   {value:.0}");
    }
    println!();

    println!("2. Legend:");
    let mut counts = vec![0usize; classification.class_count()];
    for &value in &voters {
        if let Some(class) = classification.class_of(value) {
            counts[class] += 1;
        }
    }
    for (entry, count) in classification.legend().iter().zip(&counts) {
        println!(
            "   {} {:<28} {count:>3} constituencies",
            entry.color(),
            entry.label("voters")
        );
    }
    println!();

    println!("3. Late-arriving and missing values:");
    for value in [250_000.0, 5_000.0, f64::NAN] {
        println!("   {value:>9} -> {}", classification.color_for(value));
    }
    println!();

    if let Some(gvf) = goodness_of_variance_fit(&voters, classification.breaks()) {
        println!("Goodness of variance fit: {gvf:.4}");
    }
}
