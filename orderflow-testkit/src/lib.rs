//! Test doubles for Orderflow pipeline tests.
//!
//! Provides recording implementations of the logger and notifier ports,
//! a call-counting repository wrapper and a fixed-verdict validator.

mod helpers;

pub use helpers::{
    fast_seeded_store, CountingRepository, FixedValidator, LogEntry, RecordingLogger,
    RecordingNotifier,
};
