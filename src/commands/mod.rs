//! Command implementations
//!
//! - `plumbing`: Low-level inspection of objects, trees and the index
//! - `porcelain`: The user-facing `status` report
//!
//! Every command only reads repository state.

pub mod plumbing;
pub mod porcelain;
