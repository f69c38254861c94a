// Copyright (c) 2021-2024 RBB S.r.l
// opensource@mintlayer.org
// SPDX-License-Identifier: MIT
// Licensed under the MIT License;
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// https://github.com/mintlayer/mintlayer-core/blob/master/LICENSE
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

pub use randomness::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

#[derive(Debug, Clone, Copy)]
pub struct Seed(pub u64);

impl Seed {
    pub fn from_entropy() -> Self {
        Seed(randomness::make_true_rng().gen::<u64>())
    }

    pub fn from_u64(v: u64) -> Self {
        Seed(v)
    }
}

#[must_use]
pub fn make_seedable_rng(seed: Seed) -> impl Rng {
    ChaChaRng::seed_from_u64(seed.0)
}

/// Makes PRNG that should be used in unit tests to get deterministic values from non-deterministic seed.
///
/// # Example
///
/// ```
/// use test_utils::{make_seedable_rng, random::*};
/// let mut rng = make_seedable_rng!(Seed::from_entropy());
/// ```
/// The seed is printed to std out, so a failing case can be replayed with `Seed::from_u64`.
#[macro_export]
macro_rules! make_seedable_rng {
    ($seed:expr) => {{
        let seed = $seed;
        println!(
            "{}:{} Using seed '{}' for the PRNG",
            file!(),
            line!(),
            seed.0
        );
        make_seedable_rng(seed)
    }};
}

/// Random byte vector with length picked from `len_range`.
pub fn random_bytes(rng: &mut impl Rng, len_range: std::ops::Range<usize>) -> Vec<u8> {
    let len = rng.gen_range(len_range);
    (0..len).map(|_| rng.gen::<u8>()).collect()
}

pub fn random_array<const N: usize>(rng: &mut impl Rng) -> [u8; N] {
    let mut result = [0u8; N];
    rng.fill(&mut result[..]);
    result
}
