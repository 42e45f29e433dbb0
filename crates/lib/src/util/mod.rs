//! Test doubles for the platform capabilities.

pub mod testutil;
