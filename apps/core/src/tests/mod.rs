//! Test Module
//!
//! Integration-style test suite for the SmartBot core.
//!
//! ## Test Categories
//! - `brain_tests`: classifier training, rule routing, reply rendering
//! - `transcript_tests`: transcript rendering and plain-text save
//! - `gallery_tests`: category rotation

pub mod gallery_tests;
pub mod transcript_tests;
