//! Read-only checkout configuration injected by the host application.
//!
//! The host's store keeps these values as camelCase JSON (staff identity, the
//! form-ingestion endpoint, and the `entry.<id>` mapping for each logical
//! field), so `CheckoutConfig` deserializes straight from that shape. Hosts
//! that hold the store state as a `JsValue` can use [`CheckoutConfig::from_js`].

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

/// Static configuration for the checkout dialog.
///
/// Every entry-ID field is optional: a logical field whose identifier is not
/// configured is simply omitted from the outbound submission, never an error.
/// An absent or empty `form_submit_url` puts the dialog in pass-through mode,
/// where confirm succeeds without dispatching anything.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckoutConfig {
    /// Display name of the staff member operating the till.
    pub staff_name: Option<String>,
    /// Destination of the hidden form POST. `None`/empty means pass-through.
    pub form_submit_url: Option<String>,
    pub staff_name_entry_id: Option<String>,
    pub total_amount_entry_id: Option<String>,
    pub item_count_entry_id: Option<String>,
    pub invoice_email_entry_id: Option<String>,
    pub payment_method_entry_id: Option<String>,
    pub remarks_entry_id: Option<String>,
    /// Identifier of the single concatenated item-description field.
    pub items_entry_id: Option<String>,
    /// Carried alongside the rest of the store state; not part of the
    /// submission workflow.
    pub passcode: Option<String>,
}

impl CheckoutConfig {
    /// Deserialize a config held on the JS side (e.g. the host's store state).
    pub fn from_js(value: JsValue) -> Result<Self, serde_wasm_bindgen::Error> {
        serde_wasm_bindgen::from_value(value)
    }

    /// The submit URL, with empty strings treated the same as absent.
    pub fn submit_url(&self) -> Option<&str> {
        self.form_submit_url.as_deref().filter(|u| !u.is_empty())
    }

    /// Staff name as submitted, falling back to `"Unknown"`.
    pub fn staff_name_or_unknown(&self) -> &str {
        self.staff_name.as_deref().filter(|s| !s.is_empty()).unwrap_or("Unknown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_store_state() {
        let cfg: CheckoutConfig = serde_json::from_str(
            r#"{
                "staffName": "Alice",
                "formSubmitUrl": "https://docs.example.com/formResponse",
                "totalAmountEntryId": "1000",
                "itemCountEntryId": "1001",
                "passcode": "0000"
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.staff_name.as_deref(), Some("Alice"));
        assert_eq!(cfg.submit_url(), Some("https://docs.example.com/formResponse"));
        assert_eq!(cfg.total_amount_entry_id.as_deref(), Some("1000"));
        assert_eq!(cfg.invoice_email_entry_id, None);
        assert_eq!(cfg.passcode.as_deref(), Some("0000"));
    }

    #[test]
    fn empty_submit_url_means_pass_through() {
        let cfg = CheckoutConfig { form_submit_url: Some(String::new()), ..Default::default() };
        assert_eq!(cfg.submit_url(), None);
    }

    #[test]
    fn staff_name_falls_back_to_unknown() {
        assert_eq!(CheckoutConfig::default().staff_name_or_unknown(), "Unknown");
        let named =
            CheckoutConfig { staff_name: Some("Bob".into()), ..Default::default() };
        assert_eq!(named.staff_name_or_unknown(), "Bob");
    }
}
