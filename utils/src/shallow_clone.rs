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

//! Marker trait for shallow clones

use std::sync::Arc;

/// Shallow cloning
///
/// Implemented for types whose clones share their state with the original instead of
/// duplicating it: references, reference-counted pointers, and aggregates built out of those.
pub trait ShallowClone: Clone {
    fn shallow_clone(&self) -> Self;
}

impl<T> ShallowClone for &T {
    fn shallow_clone(&self) -> Self {
        self
    }
}

impl<T> ShallowClone for &[T] {
    fn shallow_clone(&self) -> Self {
        self
    }
}

impl<T: ?Sized> ShallowClone for std::rc::Rc<T> {
    fn shallow_clone(&self) -> Self {
        self.clone()
    }
}

impl<T: ?Sized> ShallowClone for Arc<T> {
    fn shallow_clone(&self) -> Self {
        self.clone()
    }
}
