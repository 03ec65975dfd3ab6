//! Test support for service-level tests.


pub(crate) use context::TestContext;
