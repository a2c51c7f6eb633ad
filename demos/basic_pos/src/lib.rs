// A tiny till screen: a fixed cart and the checkout confirmation dialog.

use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_checkout_popup::{CartItem, CheckoutConfig, CheckoutDialog};

#[wasm_bindgen(start)]
pub fn start() {
    yew::Renderer::<App>::new().render();
}

#[function_component(App)]
fn app() -> Html {
    let open = use_state(|| false);
    let invoice_email = use_state(String::new);

    let cart = vec![
        CartItem { id: "1000000001".into(), name: "Coffee".into(), price: 3.5, quantity: 2 },
        CartItem { id: "1000000002".into(), name: "Croissant".into(), price: 2.75, quantity: 1 },
    ];
    let total: f64 = cart.iter().map(CartItem::line_total).sum();
    let item_count: u32 = cart.iter().map(|i| i.quantity).sum();

    let config = CheckoutConfig {
        staff_name: Some("Demo Staff".into()),
        // Left unset so the demo runs in pass-through mode. Point this at a
        // Google Forms formResponse URL (and fill in the entry IDs) to watch
        // real submissions land in the result frame.
        form_submit_url: None,
        ..Default::default()
    };

    let on_open = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(true))
    };
    let on_close = {
        let open = open.clone();
        Callback::from(move |_| open.set(false))
    };
    let on_clear = {
        let open = open.clone();
        Callback::from(move |_| open.set(false))
    };
    let on_email_change = {
        let invoice_email = invoice_email.clone();
        Callback::from(move |value| invoice_email.set(value))
    };

    html! {
        <div class="p-8">
            <h1 class="text-2xl font-bold mb-4">{ "Demo POS" }</h1>
            <p class="mb-4">{ format!("Cart total: ${total:.2} ({item_count} items)") }</p>
            <button class="btn-secondary" onclick={on_open}>{ "Checkout" }</button>
            <CheckoutDialog
                open={*open}
                {config}
                {total}
                {item_count}
                cart_items={cart}
                invoice_email={(*invoice_email).clone()}
                on_close={on_close}
                on_clear_contents={on_clear}
                on_invoice_email_change={on_email_change}
            />
        </div>
    }
}
