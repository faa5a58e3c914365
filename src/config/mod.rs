// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for git-commit.
//!
//! The lint rule lives in `.git-commit.yml` in the working directory. Every
//! key is optional and an absent file means the defaults.

pub mod default;
mod loader;
mod schema;

pub use default::example_config;
pub use loader::{find_config_file, find_config_file_in, load_config_from, parse_config, CONFIG_FILE};
pub use schema::*;
