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

/// Decoding failures. Every variant describes malformed input; encoding cannot fail.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Malformed input: {what} needs {needed} bytes but {available} are available")]
    Truncated {
        what: &'static str,
        needed: usize,
        available: usize,
    },
    #[error("Malformed input: compact size {value} is not canonically encoded (marker {marker:#04x})")]
    NonCanonicalCompactSize { marker: u8, value: u64 },
    #[error("Malformed input: {what} length {len} exceeds the limit of {limit}")]
    LengthLimitExceeded {
        what: &'static str,
        len: u64,
        limit: u64,
    },
    #[error("Malformed input: {0} trailing bytes after the encoded value")]
    TrailingBytes(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
