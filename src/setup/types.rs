//! Payment setup types
//!
//! Everything here is immutable once decoded. `PaymentSetup` has no public
//! constructor; the only way to obtain one is `PaymentSetupDecoder`.

use crate::decode::fields::{optional_integer, optional_string};
use crate::payment_method::PaymentMethod;
use crate::types::JsonObject;
use chrono::{DateTime, Utc};
use serde::Serialize;
use url::Url;

// ============================================================================
// Payment Setup
// ============================================================================

/// Everything the server returned when setting up a payment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentSetup<M = PaymentMethod> {
    pub(crate) amount: i64,
    pub(crate) currency_code: String,
    pub(crate) country_code: String,
    pub(crate) merchant_reference: String,
    pub(crate) shopper_reference: Option<String>,
    pub(crate) shopper_locale_identifier: Option<String>,
    pub(crate) preferred_payment_methods: Vec<M>,
    pub(crate) available_payment_methods: Vec<M>,
    pub(crate) logo_base_url: Url,
    pub(crate) initiation_url: Url,
    pub(crate) delete_preferred_payment_method_url: Url,
    pub(crate) generation_date: DateTime<Utc>,
    pub(crate) generation_date_string: String,
    pub(crate) public_key: Option<String>,
    pub(crate) payment_data: String,
    pub(crate) line_items: Option<Vec<LineItem>>,
    pub(crate) company_details: Option<CompanyDetails>,
}

impl<M> PaymentSetup<M> {
    /// The amount of the payment, in minor units
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// The currency code of the payment
    pub fn currency_code(&self) -> &str {
        &self.currency_code
    }

    /// The country code of the payment
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// The reference of the merchant
    pub fn merchant_reference(&self) -> &str {
        &self.merchant_reference
    }

    /// The reference of the shopper
    pub fn shopper_reference(&self) -> Option<&str> {
        self.shopper_reference.as_deref()
    }

    /// The identifier of the shopper's locale
    pub fn shopper_locale_identifier(&self) -> Option<&str> {
        self.shopper_locale_identifier.as_deref()
    }

    /// Stored payment methods offered for one-click payment
    pub fn preferred_payment_methods(&self) -> &[M] {
        &self.preferred_payment_methods
    }

    /// Payment methods available for this payment, grouped
    pub fn available_payment_methods(&self) -> &[M] {
        &self.available_payment_methods
    }

    /// The base URL for payment method logos
    ///
    /// Always absolute and normalized by `Url::parse`. Payloads carrying a
    /// relative reference here (or in the other two URL fields) are rejected.
    pub fn logo_base_url(&self) -> &Url {
        &self.logo_base_url
    }

    /// The URL to initiate a payment with a payment method
    pub fn initiation_url(&self) -> &Url {
        &self.initiation_url
    }

    /// The URL to delete a preferred payment method
    pub fn delete_preferred_payment_method_url(&self) -> &Url {
        &self.delete_preferred_payment_method_url
    }

    /// When the setup was generated
    pub fn generation_date(&self) -> DateTime<Utc> {
        self.generation_date
    }

    /// The generation timestamp exactly as received
    pub fn generation_date_string(&self) -> &str {
        &self.generation_date_string
    }

    /// The public key, if any
    pub fn public_key(&self) -> Option<&str> {
        self.public_key.as_deref()
    }

    /// Opaque payment data, passed back to the server unchanged
    pub fn payment_data(&self) -> &str {
        &self.payment_data
    }

    /// Line items; `None` when the payload had none, which differs from empty
    pub fn line_items(&self) -> Option<&[LineItem]> {
        self.line_items.as_deref()
    }

    /// Company details
    pub fn company_details(&self) -> Option<&CompanyDetails> {
        self.company_details.as_ref()
    }
}

// ============================================================================
// Line Item
// ============================================================================

/// One priced entry in the shopping cart
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LineItem {
    pub item_id: Option<String>,
    pub description: Option<String>,
    pub amount_excluding_tax: Option<i64>,
    pub tax_amount: Option<i64>,
    pub amount_including_tax: Option<i64>,
    pub tax_percentage: Option<i64>,
    pub number_of_items: Option<i64>,
    pub tax_category: Option<String>,
}

impl LineItem {
    /// Decode a line item record; never fails
    pub fn from_record(record: &JsonObject) -> Self {
        Self {
            item_id: optional_string(record, "itemId"),
            description: optional_string(record, "description"),
            amount_excluding_tax: optional_integer(record, "amountExcludingTax"),
            tax_amount: optional_integer(record, "taxAmount"),
            amount_including_tax: optional_integer(record, "amountIncludingTax"),
            tax_percentage: optional_integer(record, "taxPercentage"),
            number_of_items: optional_integer(record, "numberOfItems"),
            tax_category: optional_string(record, "taxCategory"),
        }
    }
}

// ============================================================================
// Company Details
// ============================================================================

/// Details of the shopper's company
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompanyDetails {
    pub name: Option<String>,
    pub registration_number: Option<String>,
    pub tax_id: Option<String>,
    pub registry_location: Option<String>,
    #[serde(rename = "type")]
    pub company_type: Option<String>,
    pub homepage: Option<String>,
}

impl CompanyDetails {
    /// Decode a company object; never fails
    pub fn from_object(company: &JsonObject) -> Self {
        Self {
            name: optional_string(company, "name"),
            registration_number: optional_string(company, "registrationNumber"),
            tax_id: optional_string(company, "taxId"),
            registry_location: optional_string(company, "registryLocation"),
            company_type: optional_string(company, "type"),
            homepage: optional_string(company, "homepage"),
        }
    }
}
