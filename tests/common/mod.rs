//! Shared utilities for integration tests

#![allow(dead_code)]

use std::any::TypeId;

/// Route `log` and `tracing` output to the test harness. Set RUST_LOG to see it.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Whether two types are the same after resolution
pub fn same<A: 'static, B: 'static>() -> bool {
    TypeId::of::<A>() == TypeId::of::<B>()
}
