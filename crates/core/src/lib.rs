//! Shared domain types for Parasol Market.
//!
//! Carts, orders, products, prices and the identifiers that tie them
//! together live here as plain data with their state transitions, free of
//! I/O, sessions and HTTP. The `storefront` crate drives these types from
//! its handlers; `integration-tests` exercises the same types end-to-end
//! against a running server.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
