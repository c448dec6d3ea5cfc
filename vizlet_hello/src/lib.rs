// Copyright 2025 the Vizlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The smallest possible Vizlet visual.
//!
//! [`Hello`] renders the current viewport dimensions as two centered text marks whose
//! font scales with the viewport. It exercises the whole host contract (construction,
//! serial updates, diff reconciliation) without any data binding, which makes it a handy
//! smoke test for new hosts and backends.

mod visual;

pub use visual::Hello;
