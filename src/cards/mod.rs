//! Card deck domain
//!
//! This module provides:
//! - Card record model with randomized default content
//! - Sequence-numbered card factory
//! - Ordered in-memory store with flip and shuffle operations

pub mod factory;
pub mod models;
pub mod store;

pub use factory::CardFactory;
pub use models::*;
pub use store::{CardStore, CardStoreError};
