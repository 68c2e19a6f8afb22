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

use super::class_index;
use crate::cache::BreaksCache;
use crate::color::Color;
use crate::jenks::DEFAULT_CLASS_COUNT;
use crate::jenks::compute_breaks;
use crate::legend::LegendEntry;
use crate::legend::legend_entries;
use crate::palette::Palette;

/// Natural breaks of a dataset together with the colors of their classes.
///
/// A classification is derived state: build it once per dataset load and
/// rebuild it from scratch when the dataset changes.
///
/// When the sample held no finite observation the classification is
/// unavailable: it has no breaks, no colors, an empty legend, and paints
/// every value with the no-data color.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    breaks: Vec<f64>,
    colors: Vec<Color>,
    no_data: Color,
}

impl Classification {
    /// Returns a builder with the registered-voter defaults: ten classes,
    /// [`Palette::registered_voters`] and [`Color::NO_DATA`].
    ///
    /// # Examples
    ///
    /// ```
    /// use choropleth::classify::Classification;
    /// use choropleth::color::Color;
    /// use choropleth::palette::Palette;
    ///
    /// let palette = Palette::from_hex(&["#fee5d9", "#fcae91", "#fb6a4a", "#cb181d"]).unwrap();
    /// let classification = Classification::builder()
    ///     .class_count(3)
    ///     .palette(palette)
    ///     .no_data_color(Color::rgb(0, 0, 0))
    ///     .build(&[1.0, 2.0, 3.0, 10.0, 11.0, 12.0, 20.0, 21.0, 22.0]);
    ///
    /// assert_eq!(classification.breaks(), &[1.0, 3.0, 12.0, 22.0]);
    /// assert_eq!(classification.color_for(11.0).to_string(), "#fb6a4a");
    /// assert_eq!(classification.color_for(f64::NAN), Color::rgb(0, 0, 0));
    /// ```
    pub fn builder() -> ClassificationBuilder {
        ClassificationBuilder::default()
    }

    /// Returns the breaks; empty when the classification is unavailable.
    pub fn breaks(&self) -> &[f64] {
        &self.breaks
    }

    /// Returns the palette fitted to the class count.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Returns the color painted on unclassifiable values.
    pub fn no_data_color(&self) -> Color {
        self.no_data
    }

    /// Returns the number of classes, 0 when unavailable.
    pub fn class_count(&self) -> usize {
        self.breaks.len().saturating_sub(1)
    }

    /// Returns true if the sample could be classified.
    pub fn is_available(&self) -> bool {
        !self.breaks.is_empty()
    }

    /// Returns the class of `value`; see [`class_index`].
    pub fn class_of(&self, value: f64) -> Option<usize> {
        class_index(value, &self.breaks)
    }

    /// Returns the color of `value`.
    ///
    /// Classes beyond an under-provisioned palette take its last color.
    pub fn color_for(&self, value: f64) -> Color {
        let Some(class) = self.class_of(value) else {
            return self.no_data;
        };
        match self.colors.get(class).or(self.colors.last()) {
            Some(color) => *color,
            None => self.no_data,
        }
    }

    /// Returns one legend row per class.
    pub fn legend(&self) -> Vec<LegendEntry> {
        legend_entries(&self.breaks, &self.colors)
    }
}

/// Configuration for building a [`Classification`].
#[derive(Debug, Clone)]
pub struct ClassificationBuilder {
    class_count: usize,
    palette: Palette,
    no_data: Color,
}

impl Default for ClassificationBuilder {
    fn default() -> Self {
        Self {
            class_count: DEFAULT_CLASS_COUNT,
            palette: Palette::registered_voters(),
            no_data: Color::NO_DATA,
        }
    }
}

impl ClassificationBuilder {
    /// Sets the desired class count.
    ///
    /// The effective count is clamped into `[1, n]` for a sample of `n`
    /// finite observations.
    pub fn class_count(mut self, class_count: usize) -> Self {
        self.class_count = class_count;
        self
    }

    /// Sets the palette, authored lightest first.
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Sets the color painted on unclassifiable values.
    pub fn no_data_color(mut self, color: Color) -> Self {
        self.no_data = color;
        self
    }

    /// Classifies `sample`.
    pub fn build(self, sample: &[f64]) -> Classification {
        let breaks = compute_breaks(sample, self.class_count);
        self.with_breaks(breaks)
    }

    /// Classifies `sample`, reusing breaks already in `cache`.
    pub fn build_cached(self, sample: &[f64], cache: &mut BreaksCache) -> Classification {
        let breaks = cache.get_or_compute(sample, self.class_count).to_vec();
        self.with_breaks(breaks)
    }

    fn with_breaks(self, breaks: Vec<f64>) -> Classification {
        let colors = if breaks.is_empty() {
            Vec::new()
        } else {
            self.palette.resolve(breaks.len() - 1).colors().to_vec()
        };
        Classification {
            breaks,
            colors,
            no_data: self.no_data,
        }
    }
}
