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

use super::Transaction;

const TOP_LEVEL_FIELDS: [&str; 7] = [
    "version",
    "timeLock",
    "inputs",
    "outputs",
    "joinSplits",
    "jsPubKey",
    "jsSig",
];

impl Transaction {
    /// List the paths below `prefix`, descending at most `depth` levels.
    ///
    /// The `inputs` and `outputs` prefixes list the same paths as the corresponding part of the
    /// whole-transaction listing one level deeper.
    pub fn tree(&self, prefix: &str, depth: i32) -> Vec<String> {
        if depth <= 0 {
            return Vec::new();
        }

        let mut out = Vec::new();
        match prefix {
            "inputs" => self.tree_inputs(&mut out, depth.saturating_add(1)),
            "outputs" => self.tree_outputs(&mut out, depth.saturating_add(1)),
            "" => {
                out.extend(TOP_LEVEL_FIELDS.iter().map(|f| f.to_string()));
                self.tree_inputs(&mut out, depth);
                self.tree_outputs(&mut out, depth);
            }
            _ => {}
        }
        out
    }

    fn tree_inputs(&self, out: &mut Vec<String>, depth: i32) {
        if depth < 2 {
            return;
        }
        for index in 0..self.inputs().len() {
            out.push(format!("inputs/{index}"));
            if depth > 2 {
                out.extend(["prevTx", "seqNo", "script"].map(|f| format!("inputs/{index}/{f}")));
            }
        }
    }

    fn tree_outputs(&self, out: &mut Vec<String>, depth: i32) {
        if depth < 2 {
            return;
        }
        for index in 0..self.outputs().len() {
            out.push(format!("outputs/{index}"));
            if depth > 2 {
                out.extend(["script", "value"].map(|f| format!("outputs/{index}/{f}")));
            }
        }
    }
}
