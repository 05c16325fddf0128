// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod filter;
mod storage;

pub use config::ConfigError;
pub use filter::{ParseError, ValidationError};
pub use storage::StoreError;
