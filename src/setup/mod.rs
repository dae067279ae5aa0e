//! Payment setup module
//!
//! Decodes the payload the server returns when a payment session is set up.
//!
//! # Overview
//!
//! The setup module provides:
//! - `PaymentSetupDecoder` - bytes to `PaymentSetup`, all or nothing
//! - `PaymentSetup` - the immutable decoded session
//! - `LineItem` / `CompanyDetails` - optional sub-structures
//! - `group_methods` - merging of available payment methods by group type

mod decoder;
mod grouping;
mod types;

pub use decoder::PaymentSetupDecoder;
pub use grouping::{group_methods, partition, GroupKey};
pub use types::{CompanyDetails, LineItem, PaymentSetup};
