//! Common test utilities and fixtures for degrees-engine integration tests
//!
//! This module provides:
//! - `TestDataset` builder for writing the three CSV tables to a temp dir
//! - Helpers for running the `degrees` binary with scripted stdin
//! - Path assertions shared by the search tests

#![allow(unused_imports)]
#![allow(dead_code)]

pub mod assertions;

pub use assertions::*;
pub use test_dataset::TestDataset;
