//! Test Module
//!
//! Cross-module test suite for the TaskMind engine.
//!
//! ## Test Categories
//! - `classify_tests`: remote-vs-fallback behavior against a mock HTTP service
//! - `store_tests`: CRUD operations for the SQLite task store
//! - `integration_tests`: classify-then-persist-then-aggregate workflows

pub mod store_tests;
