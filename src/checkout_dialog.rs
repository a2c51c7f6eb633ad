//! A drop-in checkout confirmation dialog for point-of-sale style Yew apps.
//!
//! The dialog shows the cart summary, collects a payment method, an optional
//! invoice email and remarks, then submits the order through a
//! [`SubmitTransport`](crate::transport::SubmitTransport) (by default a
//! hidden form POST into a hidden iframe)
//! and shows a success/failure panel.

use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::PaymentMethodSelect;
use crate::config::CheckoutConfig;
use crate::request::{build_request, CartItem};
use crate::state::{CheckoutAction, CheckoutState};
use crate::transport::{TransportHandle, RESULT_FRAME_ID};

/// Properties for the [`CheckoutDialog`] component.
///
/// The caller owns the cart: `total` and `item_count` arrive pre-computed and
/// are trusted as-is, and `cart_items` are never mutated here. The dialog owns
/// everything else (draft fields, loading/error/result state).
#[derive(Properties, PartialEq, Clone)]
pub struct CheckoutDialogProps {
    /// Render the dialog at all. `false` unmounts both panels.
    pub open: bool,
    /// Static configuration: staff name, submit URL, field-ID mapping.
    pub config: CheckoutConfig,
    pub total: f64,
    pub item_count: u32,
    #[prop_or_default]
    pub cart_items: Vec<CartItem>,
    /// Initial invoice email; re-applied whenever the dialog reopens.
    #[prop_or_default]
    pub invoice_email: String,
    /// Cancel button pressed (no submission attempted).
    #[prop_or_default]
    pub on_close: Callback<()>,
    /// "Clear and Continue" pressed after a result.
    #[prop_or_default]
    pub on_clear_contents: Callback<()>,
    /// Fired on every keystroke in the invoice email field.
    #[prop_or_default]
    pub on_invoice_email_change: Callback<String>,
    /// Override the submission transport (tests, alternative delivery).
    #[prop_or_default]
    pub transport: Option<TransportHandle>,
    /// Choices offered by the payment selector.
    #[prop_or_else(crate::components::default_payment_methods)]
    pub payment_methods: Vec<String>,
}

#[function_component(CheckoutDialog)]
pub fn checkout_dialog(props: &CheckoutDialogProps) -> Html {
    let state = use_reducer({
        let email = props.invoice_email.clone();
        move || CheckoutState::new(email)
    });

    // Keep the local email in sync if the dialog is reopened with a
    // different caller-side value; also clears any prior error.
    {
        let state = state.clone();
        use_effect_with((props.open, props.invoice_email.clone()), move |(_, email)| {
            state.dispatch(CheckoutAction::Reopen { email: email.clone() });
            || ()
        });
    }

    if !props.open {
        return Html::default();
    }

    let on_confirm = {
        let state = state.clone();
        let config = props.config.clone();
        let items = props.cart_items.clone();
        let total = props.total;
        let item_count = props.item_count;
        let transport = props.transport.clone();
        Callback::from(move |_: MouseEvent| {
            if state.loading {
                return;
            }
            state.dispatch(CheckoutAction::ConfirmStarted);
            match build_request(&config, &state.draft, &items, total, item_count) {
                Err(err) => state.dispatch(CheckoutAction::Failed(err.to_string())),
                Ok(None) => {
                    log::debug!("no submit url configured, declaring pass-through success");
                    state.dispatch(CheckoutAction::PassThrough);
                }
                Ok(Some(request)) => {
                    state.dispatch(CheckoutAction::Dispatched);
                    let transport =
                        transport.clone().unwrap_or_else(TransportHandle::hidden_frame);
                    let state = state.clone();
                    spawn_local(async move {
                        match transport.submit(request).await {
                            Ok(()) => state.dispatch(CheckoutAction::Completed),
                            Err(err) => state.dispatch(CheckoutAction::Failed(err.to_string())),
                        }
                    });
                }
            }
        })
    };

    let on_email_input = {
        let state = state.clone();
        let notify = props.on_invoice_email_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            state.dispatch(CheckoutAction::EditEmail(value.clone()));
            notify.emit(value);
        })
    };

    let on_remarks_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            state.dispatch(CheckoutAction::EditRemarks(area.value()));
        })
    };

    let on_payment_change = {
        let state = state.clone();
        Callback::from(move |method: String| {
            state.dispatch(CheckoutAction::ChoosePayment(method));
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_clear = {
        let on_clear_contents = props.on_clear_contents.clone();
        Callback::from(move |_: MouseEvent| on_clear_contents.emit(()))
    };

    let on_retry = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(CheckoutAction::BackAndRetry))
    };

    let staff_name = props.config.staff_name_or_unknown().to_string();
    let result_panel_class =
        classes!("bg-primary", "shadow-lg", "p-6", "w-80", "max-w-full", "max-h-full",
            "overflow-y-auto", (!state.show_result).then_some("hidden"));
    let edit_panel_class =
        classes!("bg-primary", "shadow-lg", "p-6", "w-80", "max-w-full", "max-h-full",
            "overflow-y-auto", state.show_result.then_some("hidden"));

    html! {
        <div class="fixed inset-0 z-40 flex items-center justify-center bg-black bg-opacity-30">
            <div class={result_panel_class}>
                <h2 class="text-xl font-bold mb-4 text-green-400 text-center">
                    { if state.awaiting_result() { "Submitting your order, please wait..." } else { "" } }
                </h2>
                <h2 class="text-xl font-bold mb-4 text-red-400 text-center">
                    { state.error.clone().unwrap_or_default() }
                </h2>
                <div class="w-full h-[200px] overflow-hidden">
                    <iframe
                        id={RESULT_FRAME_ID}
                        name={RESULT_FRAME_ID}
                        class="scale-50 origin-top-left w-[200%] h-[400px] border-0"
                    />
                </div>
                <div class="flex flex-col gap-2 mt-4">
                    <button class="btn-primary" onclick={on_clear} disabled={state.awaiting_result()}>
                        { "Clear and Continue to next order" }
                    </button>
                    <button class="btn-primary-outline" onclick={on_retry} disabled={state.awaiting_result()}>
                        { "Back and Retry" }
                    </button>
                </div>
            </div>

            <div class={edit_panel_class}>
                <h2 class="text-xl font-bold mb-4 text-white">{ "Confirm Checkout" }</h2>
                <div class="mb-2 text-gray-400 flex flex-row text-xs justify-between">
                    <div>
                        <span class="font-semibold">{ "Total:" }</span>
                        { format!(" ${:.2} ({})", props.total, props.item_count) }
                    </div>
                    <div>
                        <span class="font-semibold">{ format!("Staff: {staff_name}") }</span>
                    </div>
                </div>
                <div class="mb-4">
                    <ul class="overflow-y-auto">
                        {
                            if props.cart_items.is_empty() {
                                html! { <li class="text-gray-300 text-sm">{ "No items in cart." }</li> }
                            } else {
                                props.cart_items.iter().map(|item| html! {
                                    <li
                                        key={item.id.clone()}
                                        class="flex justify-between text-white text-xs py-1 border-b border-primary-light last:border-b-0"
                                    >
                                        <div class="flex flex-row">
                                            <span class="min-w-[20px]">{ format!("{}x", item.quantity) }</span>
                                            <span>{ item.name.clone() }</span>
                                        </div>
                                        <span>{ format!("${:.2}", item.line_total()) }</span>
                                    </li>
                                }).collect::<Html>()
                            }
                        }
                    </ul>
                </div>

                <PaymentMethodSelect
                    value={state.draft.payment_method.clone()}
                    onchange={on_payment_change}
                    disabled={state.loading}
                    options={props.payment_methods.clone()}
                />

                <div>
                    <label class="block text-white font-semibold mb-1" for="checkout-invoice-email">
                        { "Invoice Email" }
                    </label>
                    <input
                        id="checkout-invoice-email"
                        type="email"
                        class="w-full px-3 py-2 text-primary mb-6"
                        placeholder="Enter invoice email (optional)"
                        value={state.draft.email.clone()}
                        oninput={on_email_input}
                        autocomplete="off"
                        disabled={state.loading}
                    />
                </div>

                <div>
                    <label class="block text-white font-semibold mb-1" for="checkout-remarks">
                        { "Remarks" }
                    </label>
                    <textarea
                        id="checkout-remarks"
                        class="w-full px-3 py-2 text-primary mb-6 resize-none"
                        placeholder="Enter remarks (optional)"
                        value={state.draft.remarks.clone()}
                        oninput={on_remarks_input}
                        rows="2"
                        disabled={state.loading}
                    />
                </div>

                {
                    if let Some(msg) = &state.error {
                        html! { <div class="mb-3 text-red-300 text-sm font-semibold">{ msg.clone() }</div> }
                    } else {
                        Html::default()
                    }
                }

                <div class="flex justify-end gap-2">
                    <button
                        class="btn-primary-outline"
                        type="button"
                        onclick={on_cancel}
                        disabled={state.loading}
                    >
                        { "Cancel" }
                    </button>
                    <button
                        class="btn-secondary"
                        type="button"
                        onclick={on_confirm}
                        disabled={state.loading}
                    >
                        {
                            if state.loading {
                                html! {
                                    <span>
                                        <span class="animate-spin inline-block mr-2">{ "⏳" }</span>
                                        { "Confirming..." }
                                    </span>
                                }
                            } else {
                                html! { "Confirm" }
                            }
                        }
                    </button>
                </div>
            </div>
        </div>
    }
}
