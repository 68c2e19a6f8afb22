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

//! Example demonstrating breaks reuse across renders with an explicit cache

use choropleth::cache::BreaksCache;
use choropleth::classify::Classification;
use choropleth::palette::Palette;

fn main() {
    println!("=== Breaks Cache Example ===\n");

    let mut cache = BreaksCache::new();
    let turnout = [41.2, 55.8, 62.0, 47.5, 71.3, 68.9, 39.4, 58.1, 80.2, 66.6];
    let palette =
        match Palette::from_hex(&["#fee5d9", "#fcae91", "#fb6a4a", "#de2d26", "#a50f15"]) {
            Ok(palette) => palette,
            Err(err) => {
                eprintln!("invalid palette: {err}");
                return;
            }
        };

    // Every frame asks for the classification; only the first computes it.
    for frame in 0..3 {
        let classification = Classification::builder()
            .class_count(4)
            .palette(palette.clone())
            .build_cached(&turnout, &mut cache);
        println!("frame {frame}: breaks {:?}", classification.breaks());
    }
    println!("   Hits: {}", cache.hits());
    println!("   Misses: {}", cache.misses());
    println!();

    // A reloaded dataset starts a new session.
    cache.clear();
    let mut updated = turnout.to_vec();
    updated.push(92.4);
    let classification = Classification::builder()
        .class_count(4)
        .palette(palette)
        .build_cached(&updated, &mut cache);
    println!("after reload: breaks {:?}", classification.breaks());
    for value in [40.0, 60.0, 95.0] {
        println!("   {value:>5} -> {}", classification.color_for(value));
    }
}
