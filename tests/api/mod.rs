//! REST API endpoint tests

mod thread_tests;
