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

//! Legend rows for a classified map.

use crate::color::Color;

/// One legend row: a class range and its color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendEntry {
    lower: f64,
    upper: f64,
    color: Color,
}

impl LegendEntry {
    /// Lower bound of the class, `breaks[i]`.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper bound of the class, `breaks[i + 1]`.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Color the class is painted with.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Renders the range rounded to the nearest thousand, e.g.
    /// `"12,000 – 25,000 voters"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use choropleth::classify::Classification;
    ///
    /// let classification = Classification::builder()
    ///     .class_count(2)
    ///     .build(&[11_800.0, 12_300.0, 61_900.0, 64_400.0]);
    /// let labels: Vec<_> = classification
    ///     .legend()
    ///     .iter()
    ///     .map(|entry| entry.label("voters"))
    ///     .collect();
    /// assert_eq!(labels, ["12,000 – 12,000 voters", "12,000 – 64,000 voters"]);
    /// ```
    pub fn label(&self, unit: &str) -> String {
        let range = format!(
            "{} – {}",
            format_thousand_rounded(self.lower),
            format_thousand_rounded(self.upper)
        );
        if unit.is_empty() {
            range
        } else {
            format!("{range} {unit}")
        }
    }
}

/// Builds one entry per class from breaks and the class colors.
///
/// Classes past the end of `colors` take its last color; no entries are
/// built without colors.
pub(crate) fn legend_entries(breaks: &[f64], colors: &[Color]) -> Vec<LegendEntry> {
    let Some(&last) = colors.last() else {
        return Vec::new();
    };
    breaks
        .windows(2)
        .enumerate()
        .map(|(index, bounds)| LegendEntry {
            lower: bounds[0],
            upper: bounds[1],
            color: colors.get(index).copied().unwrap_or(last),
        })
        .collect()
}

fn format_thousand_rounded(value: f64) -> String {
    if !value.is_finite() {
        return "N/A".to_string();
    }
    let rounded = (value / 1000.0).round() * 1000.0;
    group_thousands(rounded as i64)
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
