//! Payment setup decoder
//!
//! Decoding is all-or-nothing: required fields are extracted in a fixed
//! order and the first failure rejects the payload. Optional fields and
//! collections never fail the decode.

use super::grouping::group_methods;
use super::types::{CompanyDetails, LineItem, PaymentSetup};
use crate::config::DecoderConfig;
use crate::decode::fields::{
    optional, optional_records, optional_string, required, required_string, required_url,
};
use crate::decode::{parse_generation_time, parse_root};
use crate::error::Result;
use crate::payment_method::{PaymentMethod, PaymentMethodFactory, StandardPaymentMethods};
use crate::types::JsonObject;
use tracing::{debug, trace};

/// Decodes payment setup payloads
#[derive(Debug, Clone)]
pub struct PaymentSetupDecoder<F = StandardPaymentMethods> {
    factory: F,
    config: DecoderConfig,
}

impl Default for PaymentSetupDecoder {
    fn default() -> Self {
        Self::from_config(DecoderConfig::default())
    }
}

impl PaymentSetupDecoder {
    /// Create a decoder with the bundled payment method factory
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decoder with the bundled factory configured from `config`
    pub fn from_config(config: DecoderConfig) -> Self {
        Self::with_factory(StandardPaymentMethods::new()).with_config(config)
    }
}

impl<F: PaymentMethodFactory> PaymentSetupDecoder<F> {
    /// Create a decoder using a custom payment method factory
    pub fn with_factory(factory: F) -> Self {
        Self {
            factory,
            config: DecoderConfig::default(),
        }
    }

    /// Replace the configuration and pass it on to the factory
    #[must_use]
    pub fn with_config(mut self, config: DecoderConfig) -> Self {
        self.factory.configure(&config);
        self.config = config;
        self
    }

    /// The payment method factory
    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// The active configuration
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode a payload, returning `None` if it is invalid in any way
    pub fn decode(&self, bytes: &[u8]) -> Option<PaymentSetup<F::Method>> {
        match self.try_decode(bytes) {
            Ok(setup) => Some(setup),
            Err(e) => {
                debug!(error = %e, "Rejected payment setup payload");
                None
            }
        }
    }

    /// Decode a payload, reporting the first problem found
    pub fn try_decode(&self, bytes: &[u8]) -> Result<PaymentSetup<F::Method>> {
        let root = parse_root(bytes, self.config.max_payload_bytes)?;

        let payment: &JsonObject = required(&root, "", "payment")?;
        let amount_object: &JsonObject = required(payment, "payment", "amount")?;
        let amount: i64 = required(amount_object, "payment.amount", "value")?;
        let currency_code = required_string(amount_object, "payment.amount", "currency")?;
        let country_code = required_string(payment, "payment", "countryCode")?;
        let merchant_reference = required_string(payment, "payment", "reference")?;
        let logo_base_url = required_url(&root, "", "logoBaseUrl")?;
        let initiation_url = required_url(&root, "", "initiationUrl")?;
        let delete_preferred_payment_method_url =
            required_url(&root, "", "disableRecurringDetailUrl")?;
        let generation_date_string = required_string(&root, "", "generationtime")?;
        let generation_date = parse_generation_time(&generation_date_string)?;
        let payment_data = required_string(&root, "", "paymentData")?;

        let preferred_payment_methods =
            self.decode_methods(&root, "recurringDetails", logo_base_url.as_str(), true);
        let available_payment_methods = group_methods(
            self.decode_methods(&root, "paymentMethods", logo_base_url.as_str(), false),
            |members| self.factory.merge(members),
        );

        let line_items = optional_records(&root, "lineItems")
            .map(|records| records.into_iter().map(LineItem::from_record).collect());
        let company_details =
            optional::<&JsonObject>(&root, "company").map(CompanyDetails::from_object);

        Ok(PaymentSetup {
            amount,
            currency_code,
            country_code,
            merchant_reference,
            shopper_reference: optional_string(payment, "shopperReference"),
            shopper_locale_identifier: optional_string(payment, "shopperLocale"),
            preferred_payment_methods,
            available_payment_methods,
            logo_base_url,
            initiation_url,
            delete_preferred_payment_method_url,
            generation_date,
            generation_date_string,
            public_key: optional_string(&root, "publicKey"),
            payment_data,
            line_items,
            company_details,
        })
    }

    /// Decode every record under `key`, dropping the ones the factory rejects
    fn decode_methods(
        &self,
        root: &JsonObject,
        key: &str,
        logo_base_url: &str,
        is_one_click: bool,
    ) -> Vec<F::Method> {
        let Some(records) = optional_records(root, key) else {
            return Vec::new();
        };

        records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| {
                let method = self.factory.decode_record(record, logo_base_url, is_one_click);
                if method.is_none() {
                    trace!(key, index, "Dropped payment method record");
                }
                method
            })
            .collect()
    }
}

impl PaymentSetup<PaymentMethod> {
    /// Decode a payload with the default decoder
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        PaymentSetupDecoder::new().decode(bytes)
    }
}
