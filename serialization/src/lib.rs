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

//! Binary layout used by bitcoin-derived chains for hashing and transmission.
//!
//! Values are written into any [`Output`] sink and read from any [`Input`] source; both traits,
//! and their implementations for `Vec<u8>` and `&[u8]`, come from `parity-scale-codec`.

pub mod compact_size;
mod error;
pub mod hex;
mod impls;
mod wire;

pub use error::{Error, Result};
pub use impls::{
    decode_var_bytes, decode_vec, decode_vec_with, encode_var_bytes, read_array, read_exact,
};
pub use parity_scale_codec::{Input, Output};
pub use wire::{ByteCounter, WireDecode, WireDecodeAll, WireEncode};
