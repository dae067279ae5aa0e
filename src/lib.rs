//! # payment-setup
//!
//! Strict decoder for the payload a payment backend returns when a payment
//! session is set up.
//!
//! Decoding is all-or-nothing: a payload with any required field missing,
//! mistyped or malformed yields no result at all. Optional fields and
//! collections never fail the decode.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use payment_setup::PaymentSetup;
//!
//! let bytes = std::fs::read("setup.json")?;
//! if let Some(setup) = PaymentSetup::from_slice(&bytes) {
//!     println!("{} {}", setup.amount(), setup.currency_code());
//!     for method in setup.available_payment_methods() {
//!         println!("  {} ({})", method.name, method.method_type);
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! bytes ─► decode::parse_root ─► required fields ─► optional fields
//!                                    │                    │
//!                           fields / date / url     collections
//!                                                         │
//!                           PaymentMethodFactory ◄── grouping
//!                                    │
//!                              PaymentSetup
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Decoder configuration
pub mod config;

/// JSON parsing and strict field accessors
pub mod decode;

/// Payment method factory seam and the bundled implementation
pub mod payment_method;

/// Payment setup model and decoder
pub mod setup;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::DecoderConfig;
pub use error::{Error, Result};
pub use payment_method::{Groupable, PaymentMethod, PaymentMethodFactory, StandardPaymentMethods};
pub use setup::{CompanyDetails, LineItem, PaymentSetup, PaymentSetupDecoder};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
