//! Read-only working tree status for git repositories
//!
//! The crate rebuilds three snapshots of a repository (the HEAD tree, the index and the
//! working directory) and reconciles them into the familiar `status` report.
//!
//! - `areas`: On-disk areas of a repository (object database, index, refs, workspace)
//! - `artifacts`: Object formats, index records and the status reconciler
//! - `commands`: Porcelain and plumbing command implementations
//! - `errors`: Error kinds raised while decoding repository state

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
