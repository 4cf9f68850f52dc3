//! Porcelain commands (user-facing Git operations)
//!
//! - `status`: Show working tree status

pub mod status;
