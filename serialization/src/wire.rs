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

use crate::{Error, Input, Output, Result};

/// Types with a canonical wire representation.
pub trait WireEncode {
    fn wire_encode_to<O: Output + ?Sized>(&self, dest: &mut O);

    /// Lower bound on the encoded length, used to size buffers up front.
    fn wire_size_hint(&self) -> usize {
        0
    }

    fn wire_encode(&self) -> Vec<u8> {
        let mut dest = Vec::with_capacity(self.wire_size_hint());
        self.wire_encode_to(&mut dest);
        dest
    }

    /// Exact encoded length, computed without allocating the encoding.
    fn wire_encoded_len(&self) -> usize {
        let mut counter = ByteCounter::default();
        self.wire_encode_to(&mut counter);
        counter.count()
    }
}

pub trait WireDecode: Sized {
    fn wire_decode<I: Input>(input: &mut I) -> Result<Self>;
}

/// Decoding of a complete buffer; leftover bytes are an error.
pub trait WireDecodeAll: WireDecode {
    fn wire_decode_all(bytes: &[u8]) -> Result<Self> {
        let mut input = bytes;
        let result = Self::wire_decode(&mut input)?;
        if !input.is_empty() {
            return Err(Error::TrailingBytes(input.len()));
        }
        Ok(result)
    }
}

impl<T: WireDecode> WireDecodeAll for T {}

impl<T: WireEncode + ?Sized> WireEncode for &T {
    fn wire_encode_to<O: Output + ?Sized>(&self, dest: &mut O) {
        (**self).wire_encode_to(dest)
    }

    fn wire_size_hint(&self) -> usize {
        (**self).wire_size_hint()
    }
}

/// Output sink that only counts the bytes written to it.
#[derive(Debug, Default, Clone, Copy)]
pub struct ByteCounter {
    count: usize,
}

impl ByteCounter {
    pub fn count(&self) -> usize {
        self.count
    }
}

impl std::io::Write for ByteCounter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.count += buf.len();
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
