//! Core repository components
//!
//! - `database`: Loose object reader behind the `ObjectStore` capability
//! - `index`: Staging area reader
//! - `refs`: HEAD and branch resolution
//! - `repository`: Ties the areas of one repository together
//! - `workspace`: Working directory listing and hashing

pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
