//! Working tree status reconciliation
//!
//! ## Components
//!
//! - `snapshot`: Path to content hash mapping built from each repository area
//! - `file_change`: Change categories and report sections
//! - `status_info`: Three-way reconciliation and report rendering

pub mod file_change;
pub mod snapshot;
pub mod status_info;
