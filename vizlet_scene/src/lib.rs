// Copyright 2025 the Vizlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal retained scene for hosted visuals.
//!
//! A visual rebuilds its full desired mark set on every host update. This crate keeps the
//! previously rendered set and computes the keyed difference:
//! - **Enter** for marks whose id was not retained,
//! - **Update** for retained marks whose payload or z-index changed,
//! - **Exit** for retained marks absent from the new set.
//!
//! Marks carry stable ids ([`MarkId`]) so that a re-rendered datum mutates its existing mark
//! rather than destroying and recreating it. Payloads are plain values compared with
//! `PartialEq`; an unchanged mark produces no diff at all.
//!
//! Text shaping and layout are out of scope; text marks store unshaped strings.

#![no_std]

extern crate alloc;

mod mark;
mod scene;

pub use mark::{Mark, MarkId, MarkPayload, PathPayload, RectPayload, TextPayload};
pub use mark::{TextAnchor, TextBaseline};
pub use scene::{MarkDiff, Scene};
