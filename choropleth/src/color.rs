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

//! Color tokens painted onto map classes.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A 24-bit sRGB color.
///
/// Colors parse from and print as CSS hex tokens.
///
/// # Examples
///
/// ```
/// use choropleth::color::Color;
///
/// let color: Color = "#08519C".parse().unwrap();
/// assert_eq!(color, Color::rgb(0x08, 0x51, 0x9c));
/// assert_eq!(color.to_string(), "#08519c");
/// assert_eq!("#fff".parse::<Color>().unwrap(), Color::rgb(255, 255, 255));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    /// Neutral gray for values that cannot be classified.
    ///
    /// It is never part of a palette.
    pub const NO_DATA: Color = Color::rgb(0xd1, 0xd5, 0xdb);

    /// Creates a color from its red, green and blue channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the red channel.
    pub fn r(&self) -> u8 {
        self.r
    }

    /// Returns the green channel.
    pub fn g(&self) -> u8 {
        self.g
    }

    /// Returns the blue channel.
    pub fn b(&self) -> u8 {
        self.b
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Parses `#rrggbb` or the `#rgb` shorthand, case-insensitively.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let digits = token
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| Error::invalid_color(token, "color must start with '#'"))?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::invalid_color(token, "color must only hold hex digits"));
        }

        let channel = |hex: &str| {
            u8::from_str_radix(hex, 16).map_err(|err| {
                Error::invalid_color(token, "invalid hex digit in color").set_source(err)
            })
        };

        match digits.len() {
            6 => Ok(Color::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                // #abc expands to #aabbcc
                let r = channel(&digits[0..1])?;
                let g = channel(&digits[1..2])?;
                let b = channel(&digits[2..3])?;
                Ok(Color::rgb(r * 17, g * 17, b * 17))
            }
            len => Err(Error::invalid_color(
                token,
                format!("color must have 3 or 6 hex digits, got {len}"),
            )),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
