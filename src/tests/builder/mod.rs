//! Builder tests.

mod builder_tests;
