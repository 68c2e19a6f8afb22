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

//! Ordered color palettes and their fitting to a class count.

use crate::color::Color;
use crate::error::Error;
use crate::error::ErrorKind;

/// Sequential blues, lightest first, used for registered-voter counts.
const REGISTERED_VOTER_COLORS: [Color; 10] = [
    Color::rgb(0xf7, 0xfb, 0xff),
    Color::rgb(0xde, 0xeb, 0xf7),
    Color::rgb(0xc6, 0xdb, 0xef),
    Color::rgb(0x9e, 0xca, 0xe1),
    Color::rgb(0x6b, 0xae, 0xd6),
    Color::rgb(0x42, 0x92, 0xc6),
    Color::rgb(0x21, 0x71, 0xb5),
    Color::rgb(0x08, 0x51, 0x9c),
    Color::rgb(0x08, 0x30, 0x6b),
    Color::rgb(0x04, 0x19, 0x37),
];

/// A non-empty ordered sequence of colors, one per class.
///
/// Palettes are authored lightest first, darkest last. When fewer classes
/// than colors are needed, the darkest end is kept so the top class always
/// gets the darkest color.
///
/// # Examples
///
/// ```
/// use choropleth::palette::Palette;
///
/// let palette = Palette::from_hex(&["#eeeeee", "#999999", "#333333", "#000000"]).unwrap();
/// let fitted = palette.resolve(2);
/// assert_eq!(fitted.len(), 2);
/// assert_eq!(fitted.colors()[0].to_string(), "#333333");
/// assert_eq!(fitted.colors()[1].to_string(), "#000000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::registered_voters()
    }
}

impl Palette {
    /// Creates a palette from colors.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::ConfigInvalid`] if `colors` is empty.
    pub fn new(colors: Vec<Color>) -> Result<Self, Error> {
        if colors.is_empty() {
            return Err(Error::new(
                ErrorKind::ConfigInvalid,
                "palette must hold at least one color",
            ));
        }
        Ok(Self { colors })
    }

    /// Creates a palette from hex tokens such as `#08519c`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidColor`] if a token does not parse, or
    /// [`ErrorKind::ConfigInvalid`] if `tokens` is empty.
    pub fn from_hex(tokens: &[&str]) -> Result<Self, Error> {
        let colors = tokens
            .iter()
            .enumerate()
            .map(|(index, token)| {
                token
                    .parse::<Color>()
                    .map_err(|err| err.with_context("index", index))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(colors)
    }

    /// Ten sequential blues for registered-voter counts.
    pub fn registered_voters() -> Self {
        Self {
            colors: REGISTERED_VOTER_COLORS.to_vec(),
        }
    }

    /// Returns the colors in order.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Returns the number of colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; a palette holds at least one color.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Returns the color at `index`, or the last color past the end.
    pub fn color(&self, index: usize) -> Color {
        match self.colors.get(index) {
            Some(color) => *color,
            None => self.last(),
        }
    }

    /// Returns the color of class `class` out of `class_count` classes.
    ///
    /// This is `self.resolve(class_count).color(class)` without building the
    /// resolved palette.
    pub fn class_color(&self, class: usize, class_count: usize) -> Color {
        let offset = self.colors.len().saturating_sub(class_count);
        self.color(offset + class)
    }

    /// Fits the palette to `class_count` classes.
    ///
    /// - As many colors as classes: the palette is unchanged.
    /// - More colors than classes: the last `class_count` colors are kept.
    /// - Fewer colors than classes: the palette is unchanged and the classes
    ///   past its end share the last color.
    pub fn resolve(&self, class_count: usize) -> Palette {
        let len = self.colors.len();
        if class_count > len {
            log::warn!(
                "palette of {len} colors is under-provisioned for {class_count} classes; \
                 upper classes reuse the last color"
            );
        }
        if class_count == 0 || class_count >= len {
            return self.clone();
        }
        Palette {
            colors: self.colors[len - class_count..].to_vec(),
        }
    }

    fn last(&self) -> Color {
        // non-empty by construction
        self.colors[self.colors.len() - 1]
    }
}
