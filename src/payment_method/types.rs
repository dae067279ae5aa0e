//! Payment method types and the factory seam
//!
//! The setup decoder never inspects payment method records itself. It hands
//! each record to a `PaymentMethodFactory` and only asks the result for its
//! group type.

use crate::config::DecoderConfig;
use crate::types::JsonObject;
use serde::Serialize;
use std::collections::BTreeMap;
use url::Url;

/// Anything that can be clustered by group type
pub trait Groupable {
    /// Group discriminator, `None` when the method stands alone
    fn group_type(&self) -> Option<&str>;
}

/// Builds payment methods from wire records
pub trait PaymentMethodFactory: Send + Sync {
    /// The payment method type produced
    type Method: Groupable;

    /// Decode a single record, returning `None` if it is unusable
    fn decode_record(
        &self,
        record: &JsonObject,
        logo_base_url: &str,
        is_one_click: bool,
    ) -> Option<Self::Method>;

    /// Merge members sharing a group type into one method
    ///
    /// Returns `None` when the members cannot be merged, including an empty list.
    fn merge(&self, members: Vec<Self::Method>) -> Option<Self::Method>;

    /// Apply the decoder configuration
    ///
    /// Called whenever the decoder's configuration is replaced. The default
    /// ignores it.
    fn configure(&mut self, _config: &DecoderConfig) {}
}

/// Group a payment method belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentMethodGroup {
    /// Group discriminator
    #[serde(rename = "type")]
    pub group_type: String,
    /// Display name for the merged method
    pub name: Option<String>,
    /// Opaque data used when paying with the merged method
    pub payment_method_data: Option<String>,
}

/// A selectable way to pay, or a merged group of them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentMethod {
    /// Payment method type (e.g. "card", "ideal")
    #[serde(rename = "type")]
    pub method_type: String,
    /// Display name
    pub name: String,
    /// Logo location derived from the logo base URL
    pub logo_url: Option<Url>,
    /// Whether this is a stored method for one-click reuse
    pub is_one_click: bool,
    /// Opaque data used when paying with this method
    pub payment_method_data: Option<String>,
    /// Group this method belongs to
    pub group: Option<PaymentMethodGroup>,
    /// String-valued configuration entries
    pub configuration: BTreeMap<String, String>,
    /// Members of a merged group; empty for a plain method
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<PaymentMethod>,
}

impl PaymentMethod {
    /// Whether this method was synthesized from several group members
    pub fn is_group(&self) -> bool {
        !self.members.is_empty()
    }
}

impl Groupable for PaymentMethod {
    fn group_type(&self) -> Option<&str> {
        self.group.as_ref().map(|g| g.group_type.as_str())
    }
}
