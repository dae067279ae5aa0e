//! Payment method module
//!
//! # Overview
//!
//! - `PaymentMethodFactory` - the seam the setup decoder decodes records through
//! - `Groupable` - exposes the group type used for merging
//! - `StandardPaymentMethods` - the bundled factory producing `PaymentMethod`

mod standard;
mod types;

pub use standard::{StandardPaymentMethods, DEFAULT_LOGO_EXTENSION};
pub use types::{Groupable, PaymentMethod, PaymentMethodFactory, PaymentMethodGroup};
