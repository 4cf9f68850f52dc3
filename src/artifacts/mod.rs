//! Git data structures and algorithms
//!
//! - `index`: Index file header and entry records
//! - `objects`: Git object types (blob, tree, commit)
//! - `status`: Snapshot reconciliation and report rendering

pub mod index;
pub mod objects;
pub mod status;
