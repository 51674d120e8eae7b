//! Rollcall: Roster Membership Checks
//!
//! Builds a fixed-leaf hash tree over a roster of identifiers and answers
//! whether an identifier is present and what the roster's aggregate digest
//! is. The digest is FNV-1a and the membership check scans leaf digests;
//! neither offers tamper evidence.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod roster;
pub mod tree;
pub mod verify;
