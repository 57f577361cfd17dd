//! Property-based tests for persistence and mutation laws

mod roundtrip;
