//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based acceptance tests that drive `TuiApp<TestBackend>` through
//! key and mouse events and inspect the resulting state and screen.
