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

use byteorder::ByteOrder;
use byteorder::LittleEndian;

use crate::jenks::sorted_finite;

pub(crate) const DEFAULT_FINGERPRINT_SEED: u32 = 9001;

/// Content identity of a sample, independent of observation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct SampleFingerprint {
    count: usize,
    h1: u64,
    h2: u64,
}

/// Fingerprints the finite observations of `sample` as a multiset.
///
/// Observations are sorted and written as little-endian IEEE 754 doubles
/// before hashing with 128-bit MurmurHash3, so permutations of a sample
/// share a fingerprint. `-0.0` and `0.0` hash alike.
pub(crate) fn fingerprint(sample: &[f64]) -> SampleFingerprint {
    let sorted = sorted_finite(sample);
    let mut bytes = vec![0u8; sorted.len() * 8];
    for (chunk, &value) in bytes.chunks_exact_mut(8).zip(&sorted) {
        let value = if value == 0.0 { 0.0 } else { value };
        LittleEndian::write_f64(chunk, value);
    }
    let (h1, h2) = mur3::murmurhash3_x64_128(&bytes, DEFAULT_FINGERPRINT_SEED);
    SampleFingerprint {
        count: sorted.len(),
        h1,
        h2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_ignores_order_and_non_finite() {
        let a = fingerprint(&[3.0, 1.0, 2.0, 2.0]);
        let b = fingerprint(&[2.0, f64::NAN, 2.0, 1.0, 3.0, f64::INFINITY]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_fingerprint_distinguishes_multiplicity() {
        assert_ne!(fingerprint(&[1.0, 2.0]), fingerprint(&[1.0, 2.0, 2.0]));
        assert_ne!(fingerprint(&[1.0, 2.0]), fingerprint(&[1.0, 2.5]));
    }

    #[test]
    fn test_signed_zero_hashes_alike() {
        assert_eq!(fingerprint(&[-0.0, 1.0]), fingerprint(&[0.0, 1.0]));
    }

    #[test]
    fn test_empty_samples_share_a_fingerprint() {
        assert_eq!(fingerprint(&[]), fingerprint(&[f64::NAN]));
        assert_eq!(fingerprint(&[]).count, 0);
    }
}
