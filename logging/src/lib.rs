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

mod log_style;

pub use log;
pub use log_style::{get_log_style_from_env, LogStyle, LogStyleParseError};

/// Env var holding the filter directives, e.g. `common=trace`. `RUST_LOG` is used if it is unset.
pub const LOG_FILTER_ENV_VAR: &str = "IPLD_ZCASH_LOG";
/// Env var selecting the coloring of the output, see [`LogStyle::parse`].
pub const LOG_STYLE_ENV_VAR: &str = "IPLD_ZCASH_LOG_STYLE";

static INITIALIZE_LOGGER_ONCE_FLAG: std::sync::Once = std::sync::Once::new();

/// Install the terminal logger. Only the first call has an effect.
pub fn init_logging() {
    INITIALIZE_LOGGER_ONCE_FLAG.call_once(|| {
        let filter_env_var = if std::env::var_os(LOG_FILTER_ENV_VAR).is_some() {
            LOG_FILTER_ENV_VAR
        } else {
            env_logger::DEFAULT_FILTER_ENV
        };

        let style = match get_log_style_from_env(LOG_STYLE_ENV_VAR) {
            Ok(style) => style.unwrap_or_default(),
            Err(err) => {
                eprintln!("Ignoring {LOG_STYLE_ENV_VAR}: {err}");
                LogStyle::default()
            }
        };

        let env = env_logger::Env::default().filter_or(filter_env_var, "info");
        let init_result = env_logger::Builder::from_env(env)
            .write_style(style.to_write_style())
            .try_init();

        if let Err(err) = init_result {
            eprintln!("Logger already set by another component: {err}");
        }
    });
}
