//! Plumbing commands (low-level Git operations)
//!
//! ## Commands
//!
//! - `cat-file`: Pretty-print a stored object
//! - `hash-object`: Compute the blob ID of a file without storing it
//! - `ls-files`: List the entries of the index
//! - `ls-tree`: List the entries of a commit's tree

pub mod cat_file;
pub mod hash_object;
pub mod ls_files;
pub mod ls_tree;
