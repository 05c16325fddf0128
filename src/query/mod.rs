// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Structured filters and the natural-language query interpreter.
//!
//! * [`FilterCriteria`] is the structured filter shared by the list endpoint
//!   and the natural-language endpoint.
//! * [`validate`] checks a criteria value and reports the first violated rule.
//! * [`interpret`] reduces a free-text query to a validated criteria value
//!   using a fixed set of keyword heuristics.

mod criteria;
mod interpreter;
mod validation;

pub use criteria::FilterCriteria;
pub use interpreter::interpret;
pub use validation::validate;
