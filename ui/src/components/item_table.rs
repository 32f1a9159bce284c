use payloads::{Item, ItemId};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub items: Vec<Item>,
    pub is_loading: bool,
    pub on_edit: Callback<Item>,
    pub on_delete: Callback<ItemId>,
}

#[function_component]
pub fn ItemTable(props: &Props) -> Html {
    let cell = "px-4 py-2 text-sm text-neutral-900 dark:text-neutral-100";
    let header = "px-4 py-2 text-left text-xs font-medium uppercase \
                  tracking-wider text-neutral-500 dark:text-neutral-400";

    let body = if props.is_loading {
        message_row("Loading...")
    } else if props.items.is_empty() {
        message_row("No items")
    } else {
        props
            .items
            .iter()
            .map(|item| {
                let on_edit = {
                    let on_edit = props.on_edit.clone();
                    let item = item.clone();
                    Callback::from(move |_: MouseEvent| on_edit.emit(item.clone()))
                };
                let on_delete = {
                    let on_delete = props.on_delete.clone();
                    let item_id = item.id.clone();
                    Callback::from(move |_: MouseEvent| {
                        on_delete.emit(item_id.clone())
                    })
                };

                html! {
                    <tr key={item.id.to_string()}
                        class="border-t border-neutral-200 dark:border-neutral-700">
                        <td class={cell}>{&item.item_name}</td>
                        <td class={cell}>{&item.item_category}</td>
                        <td class={cell}>{item.item_price.to_string()}</td>
                        <td class={cell}>{item.status.to_string()}</td>
                        <td class={classes!(cell, "space-x-3")}>
                            <button
                                onclick={on_edit}
                                class="text-neutral-700 dark:text-neutral-300 hover:underline"
                            >
                                {"Edit"}
                            </button>
                            <button
                                onclick={on_delete}
                                class="text-red-600 dark:text-red-400 hover:underline"
                            >
                                {"Delete"}
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect::<Html>()
    };

    html! {
        <table class="w-full border border-neutral-200 dark:border-neutral-700 rounded-lg">
            <thead class="bg-neutral-50 dark:bg-neutral-800">
                <tr>
                    <th class={header}>{"Name"}</th>
                    <th class={header}>{"Category"}</th>
                    <th class={header}>{"Price"}</th>
                    <th class={header}>{"Status"}</th>
                    <th class={header}>{"Actions"}</th>
                </tr>
            </thead>
            <tbody>{body}</tbody>
        </table>
    }
}

fn message_row(text: &'static str) -> Html {
    html! {
        <tr>
            <td colspan="5"
                class="px-4 py-6 text-center text-sm text-neutral-500 dark:text-neutral-400">
                {text}
            </td>
        </tr>
    }
}
