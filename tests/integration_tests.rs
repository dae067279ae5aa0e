//! Integration tests for the public decoding API
//!
//! Tests the full flow: payload bytes → PaymentSetup with the bundled
//! payment method factory.

use chrono::{TimeZone, Utc};
use payment_setup::{
    DecoderConfig, Error, LineItem, PaymentMethodFactory, PaymentSetup, PaymentSetupDecoder,
    StandardPaymentMethods,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn checkout_payload() -> Value {
    json!({
        "payment": {
            "amount": {"value": 17408, "currency": "EUR"},
            "countryCode": "NL",
            "reference": "Your order number",
            "shopperReference": "YOUR_UNIQUE_SHOPPER_ID_IOfW3k9G2PvXFu2j",
            "shopperLocale": "nl_NL"
        },
        "logoBaseUrl": "https://checkoutshopper-test.adyen.com/checkoutshopper/",
        "initiationUrl": "https://checkoutshopper-test.adyen.com/checkoutshopper/services/PaymentInitiation/v1/initiate",
        "disableRecurringDetailUrl": "https://checkoutshopper-test.adyen.com/checkoutshopper/services/PaymentInitiation/v1/disableRecurringDetail",
        "generationtime": "2018-02-14T10:27:40Z",
        "paymentData": "Ab02b4c0!BQABAgCJN1wRZuGJmq8dMncmypvknj9s7l5Tj...",
        "publicKey": "10001|A237060180D24CDEF3E4E27D828BDB6A13E12C6959820770D7F2C1671DD0AEF4729670C20C6C5967C664D18955058B69549FBE8BF3609EF64832D7C033008A818700A9B0458641C5824F5FCBB9FF83D5A83EBDF079E73B81ACA9CA52FDBCAD7CD9D6A337A4511759FA21E34CD166B9BABD512DB7B2293C0FE48B97CAB3DE8F6F1A8E49C08D23A98E986B8A995A8F382220F06338622631435736FA064AEAC5BD223BAF42AF2B66F1FEA34EF3C297F09C10B364B994EA287A5602ACF153D0B4B09A604B987397684D19DBC5E6FE7E4FFE72390D28D6E21CA3391FA3CAADAD80A729FEF4823F6BE9711D4D51BF4DFCB6A3607686B34ACCE18329D415350FD0654D",
        "recurringDetails": [
            {
                "type": "visa",
                "name": "VISA",
                "paymentMethodData": "Ab02b4c0!BQABAgBnIbpGZn4Q5...",
                "group": {"type": "card", "name": "Credit Card"}
            }
        ],
        "paymentMethods": [
            {"type": "ideal", "name": "iDEAL", "paymentMethodData": "Ab02b4c0!ideal"},
            {
                "type": "mc",
                "name": "MasterCard",
                "group": {"type": "card", "name": "Credit Card", "paymentMethodData": "CAESMA"}
            },
            {
                "type": "visa",
                "name": "VISA",
                "group": {"type": "card", "name": "Credit Card", "paymentMethodData": "CAESMA"}
            },
            {"type": "paypal", "name": "PayPal"},
            {"type": "amex", "group": {"type": "card"}},
            {"type": "sepadirectdebit", "name": "SEPA Direct Debit"}
        ],
        "lineItems": [
            {
                "itemId": "1",
                "description": "Test Item 1",
                "amountExcludingTax": 10000,
                "amountIncludingTax": 12100,
                "taxAmount": 2100,
                "taxPercentage": 2100,
                "numberOfItems": 1,
                "taxCategory": "High"
            }
        ],
        "company": {"name": "Acme", "homepage": "https://acme.example"}
    })
}

fn bytes(payload: &Value) -> Vec<u8> {
    serde_json::to_vec(payload).unwrap()
}

// ============================================================================
// Full Payload Tests
// ============================================================================

#[test]
fn test_decode_full_checkout_payload() {
    let setup = PaymentSetup::from_slice(&bytes(&checkout_payload())).unwrap();

    assert_eq!(setup.amount(), 17408);
    assert_eq!(setup.currency_code(), "EUR");
    assert_eq!(setup.country_code(), "NL");
    assert_eq!(setup.merchant_reference(), "Your order number");
    assert_eq!(
        setup.shopper_reference(),
        Some("YOUR_UNIQUE_SHOPPER_ID_IOfW3k9G2PvXFu2j")
    );
    assert_eq!(setup.shopper_locale_identifier(), Some("nl_NL"));
    assert!(setup.public_key().unwrap().starts_with("10001|"));
    assert_eq!(
        setup.generation_date(),
        Utc.with_ymd_and_hms(2018, 2, 14, 10, 27, 40).unwrap()
    );
    assert_eq!(setup.generation_date_string(), "2018-02-14T10:27:40Z");
    assert!(setup.payment_data().starts_with("Ab02b4c0!"));
}

#[test]
fn test_full_payload_payment_methods() {
    let setup = PaymentSetup::from_slice(&bytes(&checkout_payload())).unwrap();

    let preferred = setup.preferred_payment_methods();
    assert_eq!(preferred.len(), 1);
    assert!(preferred[0].is_one_click);
    assert!(!preferred[0].is_group());

    // amex has no name and is rejected; mc and visa merge into the card group
    let available = setup.available_payment_methods();
    let types: Vec<&str> = available.iter().map(|m| m.method_type.as_str()).collect();
    assert_eq!(types, vec!["ideal", "card", "paypal", "sepadirectdebit"]);

    let card = &available[1];
    assert!(card.is_group());
    assert_eq!(card.name, "Credit Card");
    assert_eq!(card.payment_method_data.as_deref(), Some("CAESMA"));
    let members: Vec<&str> = card.members.iter().map(|m| m.method_type.as_str()).collect();
    assert_eq!(members, vec!["mc", "visa"]);
}

#[test]
fn test_full_payload_line_items_and_company() {
    let setup = PaymentSetup::from_slice(&bytes(&checkout_payload())).unwrap();

    assert_eq!(
        setup.line_items(),
        Some(
            &[LineItem {
                item_id: Some("1".to_string()),
                description: Some("Test Item 1".to_string()),
                amount_excluding_tax: Some(10000),
                tax_amount: Some(2100),
                amount_including_tax: Some(12100),
                tax_percentage: Some(2100),
                number_of_items: Some(1),
                tax_category: Some("High".to_string()),
            }][..]
        )
    );

    let company = setup.company_details().unwrap();
    assert_eq!(company.name.as_deref(), Some("Acme"));
    assert_eq!(company.homepage.as_deref(), Some("https://acme.example"));
    assert_eq!(company.tax_id, None);
}

#[test]
fn test_decode_twice_is_equal() {
    let raw = bytes(&checkout_payload());
    let decoder = PaymentSetupDecoder::new();

    let first = decoder.decode(&raw).unwrap();
    let second = decoder.decode(&raw).unwrap();
    assert_eq!(first, second);
}

// ============================================================================
// Failure Contract Tests
// ============================================================================

#[test]
fn test_single_invalid_field_rejects_everything() {
    let mut payload = checkout_payload();
    payload["disableRecurringDetailUrl"] = json!("");

    assert!(PaymentSetup::from_slice(&bytes(&payload)).is_none());

    let err = PaymentSetupDecoder::new()
        .try_decode(&bytes(&payload))
        .unwrap_err();
    assert_eq!(err.field(), Some("disableRecurringDetailUrl"));
}

#[test]
fn test_non_utf8_payload_is_rejected() {
    assert!(PaymentSetup::from_slice(&[0xff, 0xfe, 0x7b]).is_none());
}

#[test]
fn test_configured_decoder() {
    let raw = bytes(&checkout_payload());
    let config = DecoderConfig::from_yaml_str("logo_extension: svg\nmax_payload_bytes: 1048576")
        .unwrap();
    let decoder = PaymentSetupDecoder::from_config(config);

    let setup = decoder.decode(&raw).unwrap();
    let ideal = &setup.available_payment_methods()[0];
    assert_eq!(
        ideal.logo_url.as_ref().map(url::Url::as_str),
        Some("https://checkoutshopper-test.adyen.com/checkoutshopper/ideal.svg")
    );

    let tiny = PaymentSetupDecoder::from_config(DecoderConfig::new().with_max_payload_bytes(64));
    assert!(matches!(
        tiny.try_decode(&raw),
        Err(Error::PayloadTooLarge { limit: 64, .. })
    ));
}

#[test]
fn test_custom_factory_sees_resolved_logo_base() {
    /// Keeps only the logo base URL it was handed
    struct LogoBaseProbe;

    #[derive(Debug, PartialEq)]
    struct Probe(String);

    impl payment_setup::Groupable for Probe {
        fn group_type(&self) -> Option<&str> {
            None
        }
    }

    impl PaymentMethodFactory for LogoBaseProbe {
        type Method = Probe;

        fn decode_record(
            &self,
            _record: &serde_json::Map<String, Value>,
            logo_base_url: &str,
            _is_one_click: bool,
        ) -> Option<Probe> {
            Some(Probe(logo_base_url.to_string()))
        }

        fn merge(&self, _members: Vec<Probe>) -> Option<Probe> {
            None
        }
    }

    let mut payload = checkout_payload();
    payload["logoBaseUrl"] = json!("HTTPS://Example.COM");

    let setup = PaymentSetupDecoder::with_factory(LogoBaseProbe)
        .decode(&bytes(&payload))
        .unwrap();
    assert_eq!(setup.available_payment_methods().len(), 6);
    assert_eq!(setup.available_payment_methods()[0], Probe("https://example.com/".into()));
}

#[test]
fn test_standard_factory_is_usable_directly() {
    let factory = StandardPaymentMethods::new();
    let record = json!({"type": "ideal", "name": "iDEAL"});

    let method = factory
        .decode_record(record.as_object().unwrap(), "https://example.com/logos/", false)
        .unwrap();
    assert_eq!(
        method.logo_url.unwrap().as_str(),
        "https://example.com/logos/ideal.png"
    );
}
