//! File system helpers.
//!
//! Manifest rewrites go through [`FileSwap`], which stages the new content in
//! a sibling temp file and only replaces the target on commit.

pub mod swap;

pub use swap::FileSwap;
