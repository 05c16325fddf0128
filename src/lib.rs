// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod analysis;   // string property computation
pub mod config;     // service config loading
pub mod errors;     // error handling
pub mod observability;
pub mod query;      // filters + natural-language interpreter
pub mod server;     // HTTP surface
pub mod storage;    // persistence backends
pub mod traits;     // store abstraction
