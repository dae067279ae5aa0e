//! Default payment method factory

use super::types::{PaymentMethod, PaymentMethodFactory, PaymentMethodGroup};
use crate::config::DecoderConfig;
use crate::decode::fields::{optional, optional_string, required_string};
use crate::types::JsonObject;
use std::collections::BTreeMap;
use url::Url;

/// Default logo file extension
pub const DEFAULT_LOGO_EXTENSION: &str = "png";

/// Factory for the bundled `PaymentMethod` type
///
/// A record needs string `type` and `name` fields; everything else is
/// optional.
#[derive(Debug, Clone)]
pub struct StandardPaymentMethods {
    logo_extension: String,
}

impl Default for StandardPaymentMethods {
    fn default() -> Self {
        Self {
            logo_extension: DEFAULT_LOGO_EXTENSION.to_string(),
        }
    }
}

impl StandardPaymentMethods {
    /// Create a factory with the default logo extension
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a factory appending `extension` to logo names
    pub fn with_logo_extension(extension: impl Into<String>) -> Self {
        Self {
            logo_extension: extension.into(),
        }
    }

    /// Logo URL for a method type, `None` if the join fails
    fn logo_url(&self, logo_base_url: &str, method_type: &str) -> Option<Url> {
        // The factory seam hands over the base as a string, so it is parsed here
        let base = Url::parse(logo_base_url).ok()?;
        base.join(&format!("{method_type}.{}", self.logo_extension))
            .ok()
    }
}

impl PaymentMethodFactory for StandardPaymentMethods {
    type Method = PaymentMethod;

    fn decode_record(
        &self,
        record: &JsonObject,
        logo_base_url: &str,
        is_one_click: bool,
    ) -> Option<PaymentMethod> {
        let method_type = required_string(record, "", "type").ok()?;
        let name = required_string(record, "", "name").ok()?;

        Some(PaymentMethod {
            logo_url: self.logo_url(logo_base_url, &method_type),
            method_type,
            name,
            is_one_click,
            payment_method_data: optional_string(record, "paymentMethodData"),
            group: optional::<&JsonObject>(record, "group").and_then(parse_group),
            configuration: optional::<&JsonObject>(record, "configuration")
                .map(parse_configuration)
                .unwrap_or_default(),
            members: Vec::new(),
        })
    }

    fn merge(&self, members: Vec<PaymentMethod>) -> Option<PaymentMethod> {
        let first = members.first()?;
        let group = first.group.clone()?;
        // Resolving against a member logo replaces its file name
        let logo_url = first
            .logo_url
            .as_ref()
            .and_then(|url| self.logo_url(url.as_str(), &group.group_type));

        Some(PaymentMethod {
            method_type: group.group_type.clone(),
            name: group.name.clone().unwrap_or_else(|| group.group_type.clone()),
            logo_url,
            is_one_click: false,
            payment_method_data: group.payment_method_data.clone(),
            group: Some(group),
            configuration: BTreeMap::new(),
            members,
        })
    }

    fn configure(&mut self, config: &DecoderConfig) {
        self.logo_extension.clone_from(&config.logo_extension);
    }
}

/// A group object without a string `type` counts as no group
fn parse_group(group: &JsonObject) -> Option<PaymentMethodGroup> {
    Some(PaymentMethodGroup {
        group_type: required_string(group, "group", "type").ok()?,
        name: optional_string(group, "name"),
        payment_method_data: optional_string(group, "paymentMethodData"),
    })
}

fn parse_configuration(configuration: &JsonObject) -> BTreeMap<String, String> {
    configuration
        .iter()
        .filter_map(|(key, value)| Some((key.clone(), value.as_str()?.to_string())))
        .collect()
}
