//! Integration tests for the commandbox_parser crate.
//!
//! Tests for the interpretation pipeline:
//! - Tokenization and verb normalization
//! - Subject resolution
//! - Validation rules
//! - Full interpretation cycles
//! - Property tests for normalization and resolution

mod interpreter_tests;
mod resolver_tests;
mod tokenizer_tests;
