use yew::prelude::*;

/// Methods offered when the host app does not supply its own list.
pub fn default_payment_methods() -> Vec<String> {
    vec!["cash".into(), "card".into()]
}

/// Properties for [`PaymentMethodSelect`].
#[derive(Properties, PartialEq)]
pub struct PaymentMethodSelectProps {
    /// Currently selected method, if any.
    #[prop_or_default]
    pub value: Option<String>,
    /// Invoked with the newly chosen method on user interaction.
    pub onchange: Callback<String>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_else(default_payment_methods)]
    pub options: Vec<String>,
}

/// A row of toggle buttons, one per payment method. Stateless: the current
/// selection comes in through `value` and choices go out through `onchange`.
#[function_component(PaymentMethodSelect)]
pub fn payment_method_select(props: &PaymentMethodSelectProps) -> Html {
    html! {
        <div class="mb-4">
            <label class="block text-white font-semibold mb-1">{ "Payment Method" }</label>
            <div class="flex flex-row gap-2">
                {
                    props.options.iter().map(|method| {
                        let selected = props.value.as_deref() == Some(method.as_str());
                        let onclick = {
                            let onchange = props.onchange.clone();
                            let method = method.clone();
                            Callback::from(move |_: MouseEvent| onchange.emit(method.clone()))
                        };
                        html! {
                            <button
                                key={method.clone()}
                                type="button"
                                class={classes!(
                                    if selected { "btn-secondary" } else { "btn-primary-outline" },
                                    "capitalize",
                                )}
                                {onclick}
                                disabled={props.disabled}
                            >
                                { method.clone() }
                            </button>
                        }
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}
