//! Scenario tests for FlakeId generation


mod concurrent_tests;
