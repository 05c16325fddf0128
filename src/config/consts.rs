// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Default bind host
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default bind port
pub const DEFAULT_PORT: u16 = 8000;
/// Default CORS origin (any)
pub const DEFAULT_CORS_ORIGIN: &str = "*";
/// Default snapshot location for the file backend
pub const DEFAULT_SNAPSHOT_PATH: &str = "data/strings.json";
/// Default log filter when neither RUST_LOG nor config sets one
pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const ENV_HOST: &str = "STRING_ANALYZER_HOST";
pub const ENV_PORT: &str = "STRING_ANALYZER_PORT";
pub const ENV_STORAGE_PATH: &str = "STRING_ANALYZER_STORAGE_PATH";
pub const ENV_LOG_LEVEL: &str = "STRING_ANALYZER_LOG_LEVEL";
