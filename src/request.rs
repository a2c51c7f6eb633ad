//! Submission request construction.
//!
//! A [`SubmissionRequest`] is built fresh on every confirm attempt from the
//! draft order, the caller's cart snapshot, and the static config. Field names
//! follow the form-ingestion service's `entry.<identifier>` convention; a
//! logical field is included only when its identifier is configured.
//!
//! This module is pure (no DOM) so the validation gate and field mapping are
//! testable on the native target.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::CheckoutConfig;

/// One line of the caller's cart snapshot. Read-only from the dialog's side;
/// `id` doubles as the per-item quantity entry identifier.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    /// Unit price.
    pub price: f64,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// The order fields the user edits in the dialog. Lives for as long as the
/// dialog is mounted; only the email (and any error) resets on reopen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DraftOrder {
    pub email: String,
    pub remarks: String,
    pub payment_method: Option<String>,
}

/// A fully assembled form POST: destination plus ordered `(name, value)`
/// pairs, ready for a transport to dispatch.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmissionRequest {
    pub action_url: String,
    pub fields: Vec<(String, String)>,
}

impl SubmissionRequest {
    /// Value of the first field with the given name, if present.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }
}

/// Everything that can go wrong between the confirm click and the dispatch.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum CheckoutError {
    #[error("Please add items to cart before submitting.")]
    EmptyCart,
    #[error("Please select payment method.")]
    MissingPaymentMethod,
    #[error("{0}")]
    Submission(String),
}

/// Fallback shown when a submission failure carries no message of its own.
pub const GENERIC_SUBMIT_ERROR: &str =
    "An error occurred while confirming checkout. Please try again.";

fn entry(id: &str) -> String {
    format!("entry.{id}")
}

fn push_field(fields: &mut Vec<(String, String)>, id: &Option<String>, value: String) {
    if let Some(id) = id {
        fields.push((entry(id), value));
    }
}

/// Human-readable one-line summary of the cart, e.g. `"Coffee x2 - $7.00"`,
/// concatenated across all line items.
pub fn item_summary(items: &[CartItem]) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(&format!("{} x{} - ${:.2}", item.name, item.quantity, item.line_total()));
    }
    out
}

/// Validate the attempt and assemble the outbound request.
///
/// Returns `Ok(None)` when no submit URL is configured: the attempt is valid
/// but nothing is dispatched and success is declared directly (pass-through).
pub fn build_request(
    config: &CheckoutConfig,
    draft: &DraftOrder,
    items: &[CartItem],
    total: f64,
    item_count: u32,
) -> Result<Option<SubmissionRequest>, CheckoutError> {
    if item_count == 0 {
        return Err(CheckoutError::EmptyCart);
    }
    let payment_method =
        draft.payment_method.as_deref().ok_or(CheckoutError::MissingPaymentMethod)?;

    let Some(url) = config.submit_url() else {
        return Ok(None);
    };

    let mut fields = Vec::new();
    push_field(&mut fields, &config.staff_name_entry_id, config.staff_name_or_unknown().to_string());
    push_field(&mut fields, &config.total_amount_entry_id, format!("{total:.2}"));
    push_field(&mut fields, &config.item_count_entry_id, item_count.to_string());
    push_field(&mut fields, &config.invoice_email_entry_id, draft.email.clone());
    push_field(&mut fields, &config.payment_method_entry_id, payment_method.to_string());
    push_field(&mut fields, &config.remarks_entry_id, draft.remarks.clone());
    for item in items {
        fields.push((entry(&item.id), item.quantity.to_string()));
    }
    push_field(&mut fields, &config.items_entry_id, item_summary(items));

    Ok(Some(SubmissionRequest { action_url: url.to_string(), fields }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coffee_cart() -> Vec<CartItem> {
        vec![CartItem { id: "a".into(), name: "Coffee".into(), price: 3.5, quantity: 2 }]
    }

    fn full_config() -> CheckoutConfig {
        CheckoutConfig {
            staff_name: Some("Alice".into()),
            form_submit_url: Some("https://docs.example.com/formResponse".into()),
            staff_name_entry_id: Some("10".into()),
            total_amount_entry_id: Some("11".into()),
            item_count_entry_id: Some("12".into()),
            invoice_email_entry_id: Some("13".into()),
            payment_method_entry_id: Some("14".into()),
            remarks_entry_id: Some("15".into()),
            items_entry_id: Some("16".into()),
            passcode: None,
        }
    }

    fn cash_draft() -> DraftOrder {
        DraftOrder {
            email: "billing@example.com".into(),
            remarks: "no sugar".into(),
            payment_method: Some("cash".into()),
        }
    }

    #[test]
    fn empty_cart_never_builds_a_request() {
        let err = build_request(&full_config(), &cash_draft(), &[], 0.0, 0).unwrap_err();
        assert_eq!(err, CheckoutError::EmptyCart);
    }

    #[test]
    fn missing_payment_method_never_builds_a_request() {
        let draft = DraftOrder { payment_method: None, ..cash_draft() };
        let err = build_request(&full_config(), &draft, &coffee_cart(), 7.0, 2).unwrap_err();
        assert_eq!(err, CheckoutError::MissingPaymentMethod);
    }

    #[test]
    fn validation_runs_before_the_pass_through_check() {
        let cfg = CheckoutConfig::default();
        let draft = DraftOrder::default();
        let err = build_request(&cfg, &draft, &coffee_cart(), 7.0, 2).unwrap_err();
        assert_eq!(err, CheckoutError::MissingPaymentMethod);
    }

    #[test]
    fn no_submit_url_is_pass_through() {
        let cfg = CheckoutConfig { form_submit_url: None, ..full_config() };
        let built = build_request(&cfg, &cash_draft(), &coffee_cart(), 7.0, 2).unwrap();
        assert_eq!(built, None);
    }

    #[test]
    fn coffee_scenario_maps_every_configured_field() {
        let req = build_request(&full_config(), &cash_draft(), &coffee_cart(), 7.0, 2)
            .unwrap()
            .unwrap();
        assert_eq!(req.action_url, "https://docs.example.com/formResponse");
        assert_eq!(req.field("entry.10"), Some("Alice"));
        assert_eq!(req.field("entry.11"), Some("7.00"));
        assert_eq!(req.field("entry.12"), Some("2"));
        assert_eq!(req.field("entry.13"), Some("billing@example.com"));
        assert_eq!(req.field("entry.14"), Some("cash"));
        assert_eq!(req.field("entry.15"), Some("no sugar"));
        assert_eq!(req.field("entry.a"), Some("2"));
        assert_eq!(req.field("entry.16"), Some("Coffee x2 - $7.00"));
    }

    #[test]
    fn unconfigured_identifiers_are_omitted_not_errors() {
        let cfg = CheckoutConfig {
            staff_name_entry_id: None,
            remarks_entry_id: None,
            items_entry_id: None,
            ..full_config()
        };
        let req = build_request(&cfg, &cash_draft(), &coffee_cart(), 7.0, 2).unwrap().unwrap();
        assert_eq!(req.field("entry.10"), None);
        assert_eq!(req.field("entry.15"), None);
        assert_eq!(req.field("entry.16"), None);
        assert_eq!(req.field("entry.11"), Some("7.00"));
    }

    #[test]
    fn absent_staff_name_submits_unknown() {
        let cfg = CheckoutConfig { staff_name: None, ..full_config() };
        let req = build_request(&cfg, &cash_draft(), &coffee_cart(), 7.0, 2).unwrap().unwrap();
        assert_eq!(req.field("entry.10"), Some("Unknown"));
    }

    #[test]
    fn summary_concatenates_line_items() {
        let mut items = coffee_cart();
        items.push(CartItem { id: "b".into(), name: "Tea".into(), price: 2.0, quantity: 1 });
        assert_eq!(item_summary(&items), "Coffee x2 - $7.00Tea x1 - $2.00");
        assert_eq!(item_summary(&[]), "");
    }

    #[test]
    fn every_item_contributes_a_quantity_field() {
        let mut items = coffee_cart();
        items.push(CartItem { id: "b".into(), name: "Tea".into(), price: 2.0, quantity: 3 });
        let req = build_request(&full_config(), &cash_draft(), &items, 13.0, 5).unwrap().unwrap();
        assert_eq!(req.field("entry.a"), Some("2"));
        assert_eq!(req.field("entry.b"), Some("3"));
    }
}
