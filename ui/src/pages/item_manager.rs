use payloads::{Item, ItemId, ItemStatus};
use yew::prelude::*;

use crate::backend_address;
use crate::components::{
    ConfirmationModal, ItemFormPanel, ItemTable, PaginationControls,
};
use crate::hooks::use_item_manager;
use crate::state::FormField;

#[function_component]
pub fn ItemManagerPage() -> Html {
    let (manager, actions) = use_item_manager();

    let on_field_change = actions.callback(|m, (field, value): (FormField, String)| {
        m.set_field(field, value);
        None
    });
    let on_status_change = actions.callback(|m, status: ItemStatus| {
        m.set_status(status);
        None
    });
    let on_submit = actions.callback(|m, _: ()| m.submit());
    let on_clear = actions.callback(|m, _: ()| {
        m.reset_form();
        None
    });

    let on_prev = actions.callback(|m, _: ()| m.prev_page());
    let on_next = actions.callback(|m, _: ()| m.next_page());
    let on_limit_change = actions.callback(|m, limit: u32| m.set_limit(limit));
    let on_refresh = actions.callback(|m, _: ()| Some(m.refresh()));

    let on_edit = actions.callback(|m, item: Item| {
        m.start_edit(&item);
        None
    });
    let on_delete = actions.callback(|m, item_id: ItemId| {
        m.request_delete(item_id);
        None
    });
    let on_confirm_delete = actions.callback(|m, _: ()| m.confirm_delete());
    let on_cancel_delete = actions.callback(|m, _: ()| {
        m.cancel_delete();
        None
    });

    html! {
        <main class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <h1 class="text-3xl font-bold text-neutral-900 dark:text-white mb-6">
                {"Item Manager"}
            </h1>

            <ItemFormPanel
                form={manager.form.clone()}
                error_message={manager.error_message.clone().map(AttrValue::from)}
                {on_field_change}
                {on_status_change}
                {on_submit}
                {on_clear}
            />

            <PaginationControls
                page={manager.page}
                total_pages={manager.total_pages}
                limit={manager.limit}
                {on_prev}
                {on_next}
                {on_limit_change}
                {on_refresh}
            />

            <ItemTable
                items={manager.items.clone()}
                is_loading={manager.is_loading}
                {on_edit}
                {on_delete}
            />

            <p class="mt-6 text-xs text-neutral-500 dark:text-neutral-400">
                {format!("Backend: {}", backend_address())}
            </p>

            if manager.pending_delete.is_some() {
                <ConfirmationModal
                    message="Delete this item?"
                    confirm_text="Delete"
                    on_confirm={on_confirm_delete}
                    on_close={on_cancel_delete}
                />
            }
        </main>
    }
}
