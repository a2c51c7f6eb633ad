//! Submission transports.
//!
//! The dialog hands a finished [`SubmissionRequest`] to a [`SubmitTransport`]
//! and awaits the outcome; the state machine never touches the DOM. The
//! default transport, [`HiddenFrameTransport`], performs the classic hidden
//! form-into-named-iframe POST: drop any stale form from an earlier attempt,
//! blank the result frame, build a hidden `<form>` with one hidden input per
//! field, submit it targeting the frame, and resolve on the frame's one-shot
//! `load` event.
//!
//! Tests (and hosts with their own delivery mechanism) inject a different
//! transport through [`TransportHandle`].

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use gloo_utils::{body, document};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::js_sys::{Function, Promise};
use web_sys::{
    AddEventListenerOptions, Document, EventTarget, HtmlFormElement, HtmlIFrameElement,
    HtmlInputElement,
};

use crate::request::{CheckoutError, SubmissionRequest, GENERIC_SUBMIT_ERROR};

/// DOM id of the hidden form; at most one exists at any time.
pub const POST_FORM_ID: &str = "checkout-post-form";
/// Id and name of the result iframe the dialog renders.
pub const RESULT_FRAME_ID: &str = "checkout-result-frame";

pub type SubmitFuture = Pin<Box<dyn Future<Output = Result<(), CheckoutError>>>>;

/// A way to deliver one submission request and observe its completion.
pub trait SubmitTransport {
    /// Dispatch `request` and resolve once the destination signals completion.
    /// Resolves exactly once per call.
    fn submit(&self, request: SubmissionRequest) -> SubmitFuture;
}

/// Cheap, prop-friendly handle to a shared transport. Equality is identity,
/// which is what a Yew prop diff needs.
#[derive(Clone)]
pub struct TransportHandle(Rc<dyn SubmitTransport>);

impl TransportHandle {
    pub fn new(transport: impl SubmitTransport + 'static) -> Self {
        Self(Rc::new(transport))
    }

    /// The default DOM transport.
    pub fn hidden_frame() -> Self {
        Self::new(HiddenFrameTransport::default())
    }

    pub fn submit(&self, request: SubmissionRequest) -> SubmitFuture {
        self.0.submit(request)
    }
}

impl PartialEq for TransportHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for TransportHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TransportHandle")
    }
}

/// POSTs the request as a hidden form into the named result iframe.
#[derive(Clone, Debug)]
pub struct HiddenFrameTransport {
    pub form_id: String,
    pub frame_id: String,
}

impl Default for HiddenFrameTransport {
    fn default() -> Self {
        Self { form_id: POST_FORM_ID.into(), frame_id: RESULT_FRAME_ID.into() }
    }
}

impl SubmitTransport for HiddenFrameTransport {
    fn submit(&self, request: SubmissionRequest) -> SubmitFuture {
        let form_id = self.form_id.clone();
        let frame_id = self.frame_id.clone();
        Box::pin(async move {
            let document = document();
            remove_stale_form(&document, &form_id);

            let frame: HtmlIFrameElement = document
                .get_element_by_id(&frame_id)
                .ok_or_else(|| JsValue::from_str("result frame is not mounted"))
                .and_then(|el| el.dyn_into().map_err(JsValue::from))
                .map_err(js_to_checkout_error)?;
            // Blank the frame so a previous attempt's response never shows
            // through while the new one is pending.
            frame.set_src("about:blank");

            let form = build_form(&document, &request, &form_id, &frame_id)
                .map_err(js_to_checkout_error)?;
            body().append_child(&form).map_err(js_to_checkout_error)?;

            // Arm the one-shot load listener before submitting.
            let loaded = frame_load_signal(&frame);
            form.submit().map_err(js_to_checkout_error)?;
            log::debug!("checkout form submitted to {}", request.action_url);

            JsFuture::from(loaded).await.map_err(js_to_checkout_error)?;
            log::info!("result frame content loaded");
            Ok(())
        })
    }
}

/// Remove the hidden form left by an earlier attempt, if any.
pub fn remove_stale_form(document: &Document, form_id: &str) {
    if let Some(prev) = document.get_element_by_id(form_id) {
        prev.remove();
    }
}

/// Build the hidden POST form for `request`, targeting the named frame.
/// Not yet attached to the document.
pub fn build_form(
    document: &Document,
    request: &SubmissionRequest,
    form_id: &str,
    target: &str,
) -> Result<HtmlFormElement, JsValue> {
    let form: HtmlFormElement =
        document.create_element("form")?.dyn_into().map_err(JsValue::from)?;
    form.set_id(form_id);
    form.set_method("POST");
    form.set_action(&request.action_url);
    form.set_target(target);
    form.style().set_property("display", "none")?;

    for (name, value) in &request.fields {
        let input: HtmlInputElement =
            document.create_element("input")?.dyn_into().map_err(JsValue::from)?;
        input.set_type("hidden");
        input.set_name(name);
        input.set_value(value);
        form.append_child(&input)?;
    }
    Ok(form)
}

/// A promise resolved exactly once, on the frame's next `load` event.
fn frame_load_signal(frame: &HtmlIFrameElement) -> Promise {
    let target: &EventTarget = frame.as_ref();
    Promise::new(&mut |resolve: Function, _reject: Function| {
        let listener = Closure::once_into_js(move || {
            let _ = resolve.call0(&JsValue::NULL);
        });
        let options = AddEventListenerOptions::new();
        options.set_once(true);
        let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
            "load",
            listener.unchecked_ref(),
            &options,
        );
    })
}

/// Fold a JS exception or rejection into a `CheckoutError`, surfacing its
/// message verbatim when one exists.
fn js_to_checkout_error(value: JsValue) -> CheckoutError {
    let message = value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<web_sys::js_sys::Error>()
                .map(|err| String::from(err.message()))
        })
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| GENERIC_SUBMIT_ERROR.to_string());
    CheckoutError::Submission(message)
}
