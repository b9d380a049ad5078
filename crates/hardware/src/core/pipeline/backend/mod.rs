//! Execution backends.
//!
//! `o3` is the Tomasulo scheduler. `inorder` is the reference interpreter
//! whose final register state the scheduler must reproduce.

pub mod inorder;
pub mod o3;
