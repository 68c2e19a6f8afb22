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

//! Natural breaks classification for choropleth maps.
//!
//! This crate computes class boundaries for a numeric attribute with Fisher's
//! exact optimal partitioning (popularly "Jenks natural breaks"), then maps
//! arbitrary values onto those classes and onto a color palette.
//!
//! - [`jenks`] finds the breaks for a sample and a desired class count.
//! - [`classify`] assigns values to classes and colors.
//! - [`cache`] lets callers memoize breaks per dataset explicitly.
//!
//! # Usage
//!
//! ```rust
//! use choropleth::classify::Classification;
//! use choropleth::color::Color;
//!
//! let voters = [12_000.0, 15_500.0, 18_000.0, 95_000.0, 101_000.0];
//! let classification = Classification::builder().class_count(2).build(&voters);
//!
//! assert_eq!(classification.breaks(), &[12_000.0, 18_000.0, 101_000.0]);
//! assert_eq!(classification.class_of(17_000.0), Some(0));
//! assert_eq!(classification.class_of(250_000.0), Some(1));
//! assert_eq!(classification.color_for(f64::NAN), Color::NO_DATA);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod cache;
pub mod classify;
pub mod color;
pub mod error;
pub mod jenks;
pub mod legend;
pub mod palette;

mod hash;
