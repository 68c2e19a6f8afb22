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

//! Assigning values to natural-breaks classes and colors.
//!
//! Class `i` of a breaks array covers `(breaks[i], breaks[i + 1]]`; class 0
//! also takes the minimum and anything below it, and the last class takes
//! anything above the maximum. Values are never rejected for being out of
//! the original sample's range, so late-arriving observations still get a
//! color. Non-finite values, and empty breaks, have no class and are painted
//! with the no-data color.
//!
//! # Usage
//!
//! ```rust
//! use choropleth::classify::class_index;
//! use choropleth::classify::color_for;
//! use choropleth::color::Color;
//! use choropleth::palette::Palette;
//!
//! let breaks = [1.0, 9.0, 100.0];
//! assert_eq!(class_index(9.0, &breaks), Some(0));
//! assert_eq!(class_index(9.5, &breaks), Some(1));
//! assert_eq!(class_index(1_000.0, &breaks), Some(1));
//!
//! let palette = Palette::registered_voters();
//! assert_eq!(color_for(100.0, &breaks, &palette), *palette.colors().last().unwrap());
//! assert_eq!(color_for(f64::NAN, &breaks, &palette), Color::NO_DATA);
//! ```

mod classification;

pub use self::classification::Classification;
pub use self::classification::ClassificationBuilder;

use crate::color::Color;
use crate::palette::Palette;

/// Returns the class of `value` under `breaks`.
///
/// The class is the first `i` with `value <= breaks[i + 1]`, or the last
/// class when no such `i` exists. Returns `None` if `value` is not finite or
/// `breaks` describes no class.
pub fn class_index(value: f64, breaks: &[f64]) -> Option<usize> {
    if !value.is_finite() || breaks.len() < 2 {
        return None;
    }
    let class_count = breaks.len() - 1;
    let index = breaks[1..]
        .iter()
        .position(|&upper| value <= upper)
        .unwrap_or(class_count - 1);
    Some(index)
}

/// Returns the color of `value` under `breaks`, painted from `palette`.
///
/// The palette is fitted to the class count as [`Palette::resolve`] does.
/// Unclassifiable values get [`Color::NO_DATA`].
pub fn color_for(value: f64, breaks: &[f64], palette: &Palette) -> Color {
    match class_index(value, breaks) {
        Some(class) => palette.class_color(class, breaks.len() - 1),
        None => Color::NO_DATA,
    }
}
