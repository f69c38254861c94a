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

mod internal;

use generic_array::{typenum, ArrayLength, GenericArray};

use internal::InternalStreamHasher;

/// A hasher that absorbs data incrementally and produces a fixed-size digest.
pub trait StreamHasher {
    type OutputSize: ArrayLength<u8>;

    fn new() -> Self;
    fn write<T: AsRef<[u8]>>(&mut self, in_bytes: T) -> &mut Self;
    fn reset(&mut self);
    fn finalize(&mut self) -> GenericArray<u8, Self::OutputSize>;
}

pub type Sha256 = sha2::Sha256;

pub fn hash<D: sha2::Digest + sha2::digest::FixedOutputReset, T: AsRef<[u8]>>(
    in_bytes: T,
) -> sha2::digest::Output<D> {
    internal::hash::<D, _>(in_bytes)
}

/// SHA-256 applied twice, the transaction and block hash of bitcoin-derived chains.
pub fn double_sha256<T: AsRef<[u8]>>(in_bytes: T) -> [u8; 32] {
    let first = hash::<Sha256, _>(in_bytes);
    hash::<Sha256, _>(first).into()
}

#[derive(Clone)]
pub struct Sha256Stream {
    hasher: InternalStreamHasher<Sha256>,
}

impl StreamHasher for Sha256Stream {
    type OutputSize = typenum::U32;

    fn new() -> Self {
        Self {
            hasher: InternalStreamHasher::<Sha256>::new(),
        }
    }

    fn write<T: AsRef<[u8]>>(&mut self, in_bytes: T) -> &mut Self {
        self.hasher.write(in_bytes);
        self
    }

    fn reset(&mut self) {
        self.hasher.reset()
    }

    fn finalize(&mut self) -> GenericArray<u8, Self::OutputSize> {
        self.hasher.finalize()
    }
}

/// Streaming form of [`double_sha256`]. The data is absorbed by the first round only,
/// the second round runs over the first digest on `finalize`.
#[derive(Clone)]
pub struct DoubleSha256Stream {
    first_round: Sha256Stream,
}

impl StreamHasher for DoubleSha256Stream {
    type OutputSize = typenum::U32;

    fn new() -> Self {
        Self {
            first_round: Sha256Stream::new(),
        }
    }

    fn write<T: AsRef<[u8]>>(&mut self, in_bytes: T) -> &mut Self {
        self.first_round.write(in_bytes);
        self
    }

    fn reset(&mut self) {
        self.first_round.reset()
    }

    fn finalize(&mut self) -> GenericArray<u8, Self::OutputSize> {
        let first = self.first_round.finalize();
        hash::<Sha256, _>(first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use test_utils::random::{make_seedable_rng, Rng, Seed};

    #[test]
    fn sha256_known_vectors() {
        assert_eq!(
            hex::encode(hash::<Sha256, _>(b"")),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            hex::encode(hash::<Sha256, _>(b"abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn double_sha256_known_vectors() {
        assert_eq!(
            hex::encode(double_sha256(b"")),
            "5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456"
        );
        assert_eq!(
            hex::encode(double_sha256(b"hello")),
            "9595c9df90075148eb06860365df33584b75bff782a510c6cd4883a419833d50"
        );
    }

    #[rstest]
    #[trace]
    #[case(Seed::from_entropy())]
    fn stream_and_msg_identical(#[case] seed: Seed) {
        let mut rng = make_seedable_rng(seed);
        let len = rng.gen_range(0..2000);
        let data: Vec<u8> = (0..len).map(|_| rng.gen::<u8>()).collect();
        let split = rng.gen_range(0..=data.len());

        let mut stream = DoubleSha256Stream::new();
        stream.write(&data[..split]).write(&data[split..]);
        let streamed: [u8; 32] = stream.finalize().into();

        assert_eq!(streamed, double_sha256(&data));
    }

    #[test]
    fn finalize_resets_stream() {
        let mut stream = DoubleSha256Stream::new();
        stream.write(b"hello");
        let first: [u8; 32] = stream.finalize().into();
        assert_eq!(first, double_sha256(b"hello"));

        let empty: [u8; 32] = stream.finalize().into();
        assert_eq!(empty, double_sha256(b""));
    }
}
