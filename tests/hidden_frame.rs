//! Browser tests for the hidden-form submission artifacts.
//!
//! Run with `wasm-pack test --headless --chrome` (or `--firefox`).

#![cfg(target_arch = "wasm32")]

use gloo_utils::{body, document};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlInputElement;
use yew_checkout_popup::{build_form, remove_stale_form, SubmissionRequest};

wasm_bindgen_test_configure!(run_in_browser);

fn request() -> SubmissionRequest {
    SubmissionRequest {
        action_url: "https://example.com/formResponse".into(),
        fields: vec![
            ("entry.11".into(), "7.00".into()),
            ("entry.14".into(), "cash".into()),
        ],
    }
}

#[wasm_bindgen_test]
fn hidden_form_carries_every_field() {
    let form = build_form(&document(), &request(), "t-form-fields", "t-frame").unwrap();

    assert_eq!(form.id(), "t-form-fields");
    assert_eq!(form.method().to_uppercase(), "POST");
    assert_eq!(form.action(), "https://example.com/formResponse");
    assert_eq!(form.target(), "t-frame");
    assert_eq!(form.style().get_property_value("display").unwrap(), "none");

    let first: HtmlInputElement =
        form.first_element_child().unwrap().dyn_into().unwrap();
    assert_eq!(first.type_(), "hidden");
    assert_eq!(first.name(), "entry.11");
    assert_eq!(first.value(), "7.00");

    let second: HtmlInputElement =
        first.next_element_sibling().unwrap().dyn_into().unwrap();
    assert_eq!(second.name(), "entry.14");
    assert_eq!(second.value(), "cash");
    assert!(second.next_element_sibling().is_none());
}

#[wasm_bindgen_test]
fn at_most_one_submission_artifact_exists() {
    let doc = document();
    let id = "t-form-artifact";

    let first = build_form(&doc, &request(), id, "t-frame").unwrap();
    body().append_child(&first).unwrap();
    assert!(doc.get_element_by_id(id).is_some());

    // A second attempt drops the stale artifact before building its own.
    remove_stale_form(&doc, id);
    assert!(doc.get_element_by_id(id).is_none());

    let second = build_form(&doc, &request(), id, "t-frame").unwrap();
    body().append_child(&second).unwrap();
    assert!(doc.get_element_by_id(id).is_some());

    remove_stale_form(&doc, id);
}

#[wasm_bindgen_test]
fn removing_a_missing_form_is_a_no_op() {
    remove_stale_form(&document(), "t-form-never-created");
}
