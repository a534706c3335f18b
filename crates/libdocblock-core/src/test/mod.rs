//! Shared fixtures for the unit tests of this crate.
