//! Command line interface for Javelin.
//!
//! The CLI is a thin collaborator around the expansion library: it loads
//! documents from files, runs one expansion round, and prints the result. The
//! surrounding feedback loop (issuing searches, collecting relevance
//! judgments) lives outside this crate.

pub mod args;
pub mod commands;
