//! Command implementations for the NHL stats CLI

pub mod fetch;
