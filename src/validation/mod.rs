//! Validation of caller input before any state is touched.
//!
//! Checks are expressed with Stillwater's `Validation` type so that a single
//! call reports every bad field instead of stopping at the first one. The
//! operations in `catalog` and `roster` run all checks for a call through
//! [`rules::enforce`] and only mutate once it returns `Ok`.

pub mod rules;

pub use rules::Check;
