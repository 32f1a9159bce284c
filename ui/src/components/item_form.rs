use payloads::ItemStatus;
use yew::prelude::*;

use crate::state::{FormField, ItemForm};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub form: ItemForm,
    #[prop_or_default]
    pub error_message: Option<AttrValue>,
    pub on_field_change: Callback<(FormField, String)>,
    pub on_status_change: Callback<ItemStatus>,
    pub on_submit: Callback<()>,
    pub on_clear: Callback<()>,
}

/// Create/update form. The same fields serve both modes; only the heading
/// and the primary button change.
#[function_component]
pub fn ItemFormPanel(props: &Props) -> Html {
    let editing = props.form.is_editing();

    let on_input = |field: FormField| {
        let on_field_change = props.on_field_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_field_change.emit((field, input.value()));
        })
    };

    let on_status_change = {
        let on_status_change = props.on_status_change.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<ItemStatus>() {
                Ok(status) => on_status_change.emit(status),
                Err(e) => tracing::warn!("{e}"),
            }
        })
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_clear = {
        let on_clear = props.on_clear.clone();
        Callback::from(move |_: MouseEvent| on_clear.emit(()))
    };

    let input_class = "w-full px-3 py-2 text-sm border border-neutral-300 \
                       dark:border-neutral-600 rounded-md bg-white \
                       dark:bg-neutral-700 text-neutral-900 \
                       dark:text-neutral-100 focus:outline-none \
                       focus:ring-2 focus:ring-neutral-500";

    html! {
        <section class="bg-white dark:bg-neutral-800 border border-neutral-200 dark:border-neutral-700 rounded-lg p-6 mb-6">
            <h2 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100 mb-4">
                {if editing { "Update Item" } else { "Create Item" }}
            </h2>

            <form onsubmit={on_submit} class="grid gap-3 sm:grid-cols-2">
                <input
                    type="text"
                    placeholder="itemName"
                    value={props.form.item_name.clone()}
                    oninput={on_input(FormField::Name)}
                    class={input_class}
                />
                <input
                    type="text"
                    placeholder="itemCategory"
                    value={props.form.item_category.clone()}
                    oninput={on_input(FormField::Category)}
                    class={input_class}
                />
                <input
                    type="text"
                    inputmode="decimal"
                    placeholder="itemPrice (number)"
                    value={props.form.item_price.clone()}
                    oninput={on_input(FormField::Price)}
                    class={input_class}
                />
                <select onchange={on_status_change} class={input_class}>
                    { for ItemStatus::ALL.iter().map(|status| html! {
                        <option
                            value={status.to_string()}
                            selected={*status == props.form.status}
                        >
                            {status.to_string()}
                        </option>
                    }) }
                </select>

                <div class="flex gap-3 sm:col-span-2">
                    <button
                        type="submit"
                        class="px-4 py-2 text-sm font-medium text-white bg-neutral-900
                               dark:bg-neutral-100 dark:text-neutral-900 rounded-md
                               hover:bg-neutral-700 dark:hover:bg-neutral-300 transition-colors"
                    >
                        {if editing { "Update" } else { "Insert" }}
                    </button>
                    <button
                        type="button"
                        onclick={on_clear}
                        class="px-4 py-2 text-sm font-medium text-neutral-700 dark:text-neutral-300
                               bg-white dark:bg-neutral-700 border border-neutral-300 dark:border-neutral-600
                               rounded-md hover:bg-neutral-50 dark:hover:bg-neutral-600 transition-colors"
                    >
                        {"Clear"}
                    </button>
                </div>
            </form>

            if let Some(error) = &props.error_message {
                <p class="mt-3 text-sm text-red-600 dark:text-red-400">{error}</p>
            }
        </section>
    }
}
