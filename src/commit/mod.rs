// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message loading and normalization.

mod message;
pub mod normalize;

pub use message::CommitMessage;
