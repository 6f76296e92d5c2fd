//! Unit tests for the project bounded context.

mod aggregation_tests;
