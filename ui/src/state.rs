//! Item manager state and the transitions that drive it.
//!
//! Every user action is a method on [`ItemManager`] that updates local state
//! and, when the backend has to be involved, returns the [`Effect`] to run.
//! The effect's result comes back as an [`Outcome`] through
//! [`ItemManager::apply`], which may hand back one follow-up effect (the
//! reload after a successful change). Nothing in here touches the network.

use payloads::{
    ClientError, Item, ItemId, ItemStatus, price,
    requests::{DEFAULT_PAGE_SIZE, ItemDetails, ListItems, PAGE_SIZES},
    responses::ItemPage,
};
use yewdux::prelude::*;

pub const LOAD_FAILED: &str =
    "Failed to load items (check backend is running).";
pub const CREATE_INVALID: &str =
    "Please fill itemName, itemCategory, and itemPrice (number).";
pub const UPDATE_INVALID: &str = "Please fill all fields.";
pub const MISSING_ITEM_ID: &str = "Missing item id";
pub const CREATE_FAILED: &str = "Create failed";
pub const CANNOT_CONNECT: &str = "Cannot connect to backend";

/// Whether the form is drafting a new item or editing an existing one.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FormMode {
    #[default]
    Creating,
    Editing(ItemId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Category,
    Price,
}

/// The draft shown in the create/update form. Price stays as typed until
/// submit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemForm {
    pub mode: FormMode,
    pub item_name: String,
    pub item_category: String,
    pub item_price: String,
    pub status: ItemStatus,
}

impl ItemForm {
    pub fn editing(item: &Item) -> Self {
        Self {
            mode: FormMode::Editing(item.id.clone()),
            item_name: item.item_name.clone(),
            item_category: item.item_category.clone(),
            item_price: item.item_price.to_string(),
            status: item.status,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Editing(_))
    }

    /// The request body for this draft, if every field is usable.
    ///
    /// Name and category only have to be non-empty. The price is trimmed and
    /// must parse as a decimal number.
    pub fn details(&self) -> Option<ItemDetails> {
        if self.item_name.is_empty() || self.item_category.is_empty() {
            return None;
        }
        let item_price = price::parse(self.item_price.trim())?;
        Some(ItemDetails {
            item_name: self.item_name.clone(),
            item_category: self.item_category.clone(),
            item_price,
            status: self.status,
        })
    }
}

/// A backend call requested by the item manager.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Load { ticket: u64, query: ListItems },
    Create(ItemDetails),
    Update(ItemId, ItemDetails),
    Delete(ItemId),
}

/// The result of running an [`Effect`].
#[derive(Debug)]
pub enum Outcome {
    Loaded {
        ticket: u64,
        result: Result<ItemPage, ClientError>,
    },
    Created(Result<(), ClientError>),
    Updated(Result<(), ClientError>),
    Deleted(Result<(), ClientError>),
}

#[derive(Debug, Clone, PartialEq, Store)]
pub struct ItemManager {
    /// Items on the current page, in the order the backend returned them.
    pub items: Vec<Item>,
    /// 1-based
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub form: ItemForm,
    /// Item waiting on the user to confirm its deletion.
    pub pending_delete: Option<ItemId>,
    /// Ticket of the most recent load; older responses are dropped.
    load_ticket: u64,
}

impl Default for ItemManager {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            total_pages: 1,
            is_loading: false,
            error_message: None,
            form: ItemForm::default(),
            pending_delete: None,
            load_ticket: 0,
        }
    }
}

/// Loading and pagination
impl ItemManager {
    /// Start loading the current page.
    pub fn load(&mut self) -> Effect {
        self.is_loading = true;
        self.error_message = None;
        self.load_ticket += 1;
        Effect::Load {
            ticket: self.load_ticket,
            query: ListItems {
                page: self.page,
                limit: self.limit,
            },
        }
    }

    pub fn refresh(&mut self) -> Effect {
        self.load()
    }

    pub fn can_go_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Move to `page`, reloading if it actually changed. Pages outside
    /// `1..=total_pages` are refused.
    pub fn set_page(&mut self, page: u32) -> Option<Effect> {
        if page == self.page || page < 1 || page > self.total_pages {
            return None;
        }
        self.page = page;
        Some(self.load())
    }

    pub fn next_page(&mut self) -> Option<Effect> {
        self.set_page(self.page.saturating_add(1))
    }

    /// Step back one page. From a page past the last one (the list shrank
    /// under us), land on the last page instead.
    pub fn prev_page(&mut self) -> Option<Effect> {
        self.set_page(self.page.saturating_sub(1).min(self.total_pages))
    }

    /// Switch page size and go back to the first page.
    pub fn set_limit(&mut self, limit: u32) -> Option<Effect> {
        if !PAGE_SIZES.contains(&limit) {
            tracing::warn!(limit, "ignoring unsupported page size");
            return None;
        }
        if limit == self.limit {
            return None;
        }
        self.limit = limit;
        self.page = 1;
        Some(self.load())
    }
}

/// Form editing
impl ItemManager {
    pub fn set_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.form.item_name = value,
            FormField::Category => self.form.item_category = value,
            FormField::Price => self.form.item_price = value,
        }
    }

    pub fn set_status(&mut self, status: ItemStatus) {
        self.form.status = status;
    }

    pub fn start_edit(&mut self, item: &Item) {
        self.form = ItemForm::editing(item);
    }

    pub fn reset_form(&mut self) {
        self.form = ItemForm::default();
    }

    pub fn is_editing(&self) -> bool {
        self.form.is_editing()
    }

    /// Create or update, depending on the form's mode.
    pub fn submit(&mut self) -> Option<Effect> {
        match self.form.mode {
            FormMode::Creating => self.create_item(),
            FormMode::Editing(_) => self.update_item(),
        }
    }

    pub fn create_item(&mut self) -> Option<Effect> {
        self.error_message = None;
        let Some(details) = self.form.details() else {
            self.error_message = Some(CREATE_INVALID.to_string());
            return None;
        };
        Some(Effect::Create(details))
    }

    pub fn update_item(&mut self) -> Option<Effect> {
        self.error_message = None;
        let item_id = match &self.form.mode {
            FormMode::Editing(id) if !id.is_empty() => id.clone(),
            _ => {
                self.error_message = Some(MISSING_ITEM_ID.to_string());
                return None;
            }
        };
        let Some(details) = self.form.details() else {
            self.error_message = Some(UPDATE_INVALID.to_string());
            return None;
        };
        Some(Effect::Update(item_id, details))
    }
}

/// Deletion, guarded by an explicit confirmation step
impl ItemManager {
    pub fn request_delete(&mut self, item_id: ItemId) {
        self.pending_delete = Some(item_id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn confirm_delete(&mut self) -> Option<Effect> {
        let item_id = self.pending_delete.take()?;
        self.error_message = None;
        Some(Effect::Delete(item_id))
    }
}

/// Applying results
impl ItemManager {
    /// Fold a finished effect back into state, returning the reload that
    /// should follow, if any.
    pub fn apply(&mut self, outcome: Outcome) -> Option<Effect> {
        match outcome {
            Outcome::Loaded { ticket, result } => {
                self.apply_load(ticket, result);
                None
            }
            Outcome::Created(result) => self.apply_change(result, |err| {
                err.server_message()
                    .unwrap_or_else(|| CREATE_FAILED.to_string())
            }),
            Outcome::Updated(result) => self.apply_change(result, |err| {
                err.server_message().unwrap_or_else(|| {
                    format!("Update failed (HTTP {})", status_code(err))
                })
            }),
            Outcome::Deleted(result) => self.apply_delete(result),
        }
    }

    fn apply_load(&mut self, ticket: u64, result: Result<ItemPage, ClientError>) {
        if ticket != self.load_ticket {
            tracing::debug!(ticket, latest = self.load_ticket, "dropping stale load");
            return;
        }
        self.is_loading = false;
        match result {
            Ok(page) => {
                self.total_pages = page.total_pages();
                self.items = page.into_items();
            }
            Err(e) => {
                tracing::warn!("load error: {e}");
                self.error_message = Some(LOAD_FAILED.to_string());
            }
        }
    }

    fn apply_change(
        &mut self,
        result: Result<(), ClientError>,
        describe: impl FnOnce(&ClientError) -> String,
    ) -> Option<Effect> {
        match result {
            Ok(()) => {
                self.reset_form();
                Some(self.load())
            }
            Err(e) => {
                self.error_message = Some(describe_failure(&e, describe));
                None
            }
        }
    }

    fn apply_delete(&mut self, result: Result<(), ClientError>) -> Option<Effect> {
        if let Err(e) = result {
            self.error_message = Some(describe_failure(&e, |err| {
                err.server_message().unwrap_or_else(|| {
                    format!("Delete failed (HTTP {})", status_code(err))
                })
            }));
            return None;
        }

        // Don't strand the view on a page that no longer has anything on it.
        if self.items.len() == 1 && self.page > 1 {
            self.page -= 1;
        }
        Some(self.load())
    }
}

fn describe_failure(
    e: &ClientError,
    describe: impl FnOnce(&ClientError) -> String,
) -> String {
    match e {
        ClientError::APIError(..) => describe(e),
        ClientError::Network(inner) => {
            tracing::warn!("request error: {inner}");
            CANNOT_CONNECT.to_string()
        }
    }
}

fn status_code(e: &ClientError) -> u16 {
    e.status().map(|status| status.as_u16()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    fn item(id: &str) -> Item {
        Item {
            id: ItemId(id.into()),
            item_name: format!("name {id}"),
            item_category: "cat".into(),
            item_price: dec!(19.99),
            status: ItemStatus::Active,
        }
    }

    fn page_of(items: Vec<Item>, total_pages: u32) -> ItemPage {
        ItemPage {
            items: Some(items),
            total_pages: Some(total_pages),
        }
    }

    fn api_error(status: u16, body: &str) -> ClientError {
        ClientError::APIError(
            reqwest::StatusCode::from_u16(status).unwrap(),
            body.to_string(),
        )
    }

    /// Run a load to completion with the given page.
    fn loaded(manager: &mut ItemManager, page: ItemPage) {
        let Effect::Load { ticket, .. } = manager.load() else {
            unreachable!()
        };
        manager.apply(Outcome::Loaded {
            ticket,
            result: Ok(page),
        });
    }

    fn filled_form(manager: &mut ItemManager) {
        manager.set_field(FormField::Name, "Lamp".into());
        manager.set_field(FormField::Category, "Home".into());
        manager.set_field(FormField::Price, "19.99".into());
    }

    #[test]
    fn load_requests_current_page_and_clears_error() {
        let mut manager = ItemManager {
            error_message: Some("old".into()),
            ..Default::default()
        };

        let effect = manager.load();

        assert!(manager.is_loading);
        assert_eq!(manager.error_message, None);
        assert!(matches!(
            effect,
            Effect::Load { query: ListItems { page: 1, limit: 5 }, .. }
        ));
    }

    #[test]
    fn empty_first_page_disables_both_directions() {
        let mut manager = ItemManager::default();
        loaded(&mut manager, page_of(vec![], 1));

        assert!(manager.items.is_empty());
        assert!(!manager.is_loading);
        assert!(!manager.can_go_prev());
        assert!(!manager.can_go_next());
        assert_eq!(manager.next_page(), None);
        assert_eq!(manager.prev_page(), None);
    }

    #[test]
    fn failed_load_keeps_previous_items() {
        let mut manager = ItemManager::default();
        loaded(&mut manager, page_of(vec![item("a")], 1));

        let Effect::Load { ticket, .. } = manager.refresh() else {
            unreachable!()
        };
        manager.apply(Outcome::Loaded {
            ticket,
            result: Err(api_error(500, "")),
        });

        assert_eq!(manager.items, vec![item("a")]);
        assert_eq!(manager.error_message.as_deref(), Some(LOAD_FAILED));
        assert!(!manager.is_loading);
    }

    #[test]
    fn stale_load_is_dropped() {
        let mut manager = ItemManager::default();
        let Effect::Load { ticket: first, .. } = manager.load() else {
            unreachable!()
        };
        let Effect::Load { ticket: second, .. } = manager.load() else {
            unreachable!()
        };

        manager.apply(Outcome::Loaded {
            ticket: second,
            result: Ok(page_of(vec![item("new")], 1)),
        });
        manager.apply(Outcome::Loaded {
            ticket: first,
            result: Ok(page_of(vec![item("old")], 1)),
        });

        assert_eq!(manager.items, vec![item("new")]);
        assert!(!manager.is_loading);
    }

    #[test]
    fn changing_page_or_limit_reloads_once_with_new_values() {
        let mut manager = ItemManager::default();
        loaded(&mut manager, page_of(vec![item("a")], 3));

        let effect = manager.next_page();
        assert!(matches!(
            effect,
            Some(Effect::Load { query: ListItems { page: 2, limit: 5 }, .. })
        ));

        let effect = manager.set_limit(20);
        assert!(matches!(
            effect,
            Some(Effect::Load { query: ListItems { page: 1, limit: 20 }, .. })
        ));

        // no change, no reload
        assert_eq!(manager.set_limit(20), None);
        assert_eq!(manager.set_limit(7), None);
        assert_eq!(manager.set_page(1), None);
    }

    #[test]
    fn pages_past_the_last_are_refused() {
        let mut manager = ItemManager::default();
        loaded(&mut manager, page_of(vec![item("a")], 2));

        assert_eq!(manager.set_page(3), None);
        assert_eq!(manager.set_page(0), None);
        assert!(manager.set_page(2).is_some());
        assert_eq!(manager.next_page(), None);
    }

    #[test]
    fn prev_recovers_when_list_shrinks_below_current_page() {
        let mut manager = ItemManager::default();
        loaded(&mut manager, page_of(vec![item("a")], 5));
        manager.set_page(5);
        loaded(&mut manager, page_of(vec![], 2));
        assert_eq!(manager.page, 5);
        assert!(manager.can_go_prev());
        assert!(!manager.can_go_next());

        let effect = manager.prev_page();

        assert_eq!(manager.page, 2);
        assert!(matches!(
            effect,
            Some(Effect::Load { query: ListItems { page: 2, limit: 5 }, .. })
        ));
    }

    #[test]
    fn create_with_empty_name_sends_nothing() {
        let mut manager = ItemManager::default();
        filled_form(&mut manager);
        manager.set_field(FormField::Name, String::new());

        assert_eq!(manager.submit(), None);
        assert_eq!(manager.error_message.as_deref(), Some(CREATE_INVALID));
    }

    #[test]
    fn create_rejects_non_numeric_price() {
        let mut manager = ItemManager::default();
        filled_form(&mut manager);

        for bad in ["", "   ", "abc", "12abc"] {
            manager.set_field(FormField::Price, bad.into());
            assert_eq!(manager.create_item(), None, "price {bad:?}");
            assert_eq!(manager.error_message.as_deref(), Some(CREATE_INVALID));
        }
    }

    #[test]
    fn partial_price_text_is_kept_until_submit() {
        let mut manager = ItemManager::default();
        filled_form(&mut manager);

        manager.set_field(FormField::Price, "1e".into());
        assert_eq!(manager.form.item_price, "1e");
        assert_eq!(manager.create_item(), None);
        assert_eq!(manager.error_message.as_deref(), Some(CREATE_INVALID));

        manager.set_field(FormField::Price, "1_000".into());
        assert_eq!(manager.create_item(), None);

        manager.set_field(FormField::Price, "1e2".into());
        let Some(Effect::Create(details)) = manager.create_item() else {
            panic!("expected a create");
        };
        assert_eq!(details.item_price, dec!(100));
    }

    #[test]
    fn successful_create_resets_form_and_reloads() {
        let mut manager = ItemManager::default();
        filled_form(&mut manager);
        manager.set_status(ItemStatus::OutOfStock);

        let Some(Effect::Create(details)) = manager.submit() else {
            panic!("expected a create");
        };
        assert_eq!(details.item_price, dec!(19.99));
        assert_eq!(details.status, ItemStatus::OutOfStock);

        let next = manager.apply(Outcome::Created(Ok(())));

        assert_eq!(manager.form, ItemForm::default());
        assert!(matches!(
            next,
            Some(Effect::Load { query: ListItems { page: 1, limit: 5 }, .. })
        ));
    }

    #[test]
    fn failed_create_keeps_form_and_shows_reason() {
        let mut manager = ItemManager::default();
        filled_form(&mut manager);
        let before = manager.form.clone();

        assert_eq!(manager.apply(Outcome::Created(Err(api_error(400, "")))), None);
        assert_eq!(manager.error_message.as_deref(), Some(CREATE_FAILED));
        assert_eq!(manager.form, before);

        manager.apply(Outcome::Created(Err(api_error(
            409,
            r#"{"message":"duplicate item"}"#,
        ))));
        assert_eq!(manager.error_message.as_deref(), Some("duplicate item"));
    }

    #[test]
    fn update_without_id_sends_nothing() {
        let mut manager = ItemManager::default();
        filled_form(&mut manager);

        assert_eq!(manager.update_item(), None);
        assert_eq!(manager.error_message.as_deref(), Some(MISSING_ITEM_ID));

        manager.form.mode = FormMode::Editing(ItemId(String::new()));
        assert_eq!(manager.submit(), None);
        assert_eq!(manager.error_message.as_deref(), Some(MISSING_ITEM_ID));
    }

    #[test]
    fn update_requires_all_fields() {
        let mut manager = ItemManager::default();
        manager.start_edit(&item("a"));
        manager.set_field(FormField::Category, String::new());

        assert_eq!(manager.submit(), None);
        assert_eq!(manager.error_message.as_deref(), Some(UPDATE_INVALID));
    }

    #[test]
    fn edit_round_trips_price_text() {
        let mut manager = ItemManager::default();
        manager.start_edit(&item("a"));

        assert!(manager.is_editing());
        assert_eq!(manager.form.item_price, "19.99");

        let Some(Effect::Update(id, details)) = manager.submit() else {
            panic!("expected an update");
        };
        assert_eq!(id, ItemId("a".into()));
        assert_eq!(details, item("a").details());
    }

    #[test]
    fn update_not_found_shows_server_message() {
        let mut manager = ItemManager::default();
        manager.start_edit(&item("a"));

        let next = manager.apply(Outcome::Updated(Err(api_error(
            404,
            r#"{"message":"not found"}"#,
        ))));

        assert_eq!(next, None);
        assert_eq!(manager.error_message.as_deref(), Some("not found"));
        assert!(manager.is_editing());
    }

    #[test]
    fn update_failure_without_message_names_status() {
        let mut manager = ItemManager::default();
        manager.start_edit(&item("a"));

        manager.apply(Outcome::Updated(Err(api_error(500, ""))));

        assert_eq!(
            manager.error_message.as_deref(),
            Some("Update failed (HTTP 500)")
        );
    }

    #[test]
    fn successful_update_returns_to_create_mode() {
        let mut manager = ItemManager::default();
        manager.start_edit(&item("a"));

        let next = manager.apply(Outcome::Updated(Ok(())));

        assert!(!manager.is_editing());
        assert_eq!(manager.form.status, ItemStatus::Active);
        assert!(matches!(next, Some(Effect::Load { .. })));
    }

    #[test]
    fn clear_returns_to_create_mode() {
        let mut manager = ItemManager::default();
        manager.start_edit(&item("a"));
        manager.set_status(ItemStatus::Inactive);

        manager.reset_form();

        assert_eq!(manager.form, ItemForm::default());
    }

    #[test]
    fn declined_delete_changes_nothing() {
        let mut manager = ItemManager::default();
        loaded(&mut manager, page_of(vec![item("a")], 1));
        let before = manager.clone();

        manager.request_delete(ItemId("a".into()));
        manager.cancel_delete();

        assert_eq!(manager, before);
        assert_eq!(manager.confirm_delete(), None);
    }

    #[test]
    fn confirmed_delete_sends_request() {
        let mut manager = ItemManager::default();
        manager.request_delete(ItemId("a".into()));

        assert_eq!(
            manager.confirm_delete(),
            Some(Effect::Delete(ItemId("a".into())))
        );
        assert_eq!(manager.pending_delete, None);
    }

    #[test]
    fn deleting_last_item_on_later_page_steps_back() {
        let mut manager = ItemManager::default();
        loaded(&mut manager, page_of(vec![item("a")], 3));
        manager.set_page(3);
        loaded(&mut manager, page_of(vec![item("z")], 3));

        manager.request_delete(ItemId("z".into()));
        manager.confirm_delete();
        let next = manager.apply(Outcome::Deleted(Ok(())));

        assert_eq!(manager.page, 2);
        assert!(matches!(
            next,
            Some(Effect::Load { query: ListItems { page: 2, .. }, .. })
        ));
    }

    #[test]
    fn deleting_on_first_page_reloads_in_place() {
        let mut manager = ItemManager::default();
        loaded(&mut manager, page_of(vec![item("a")], 1));

        let next = manager.apply(Outcome::Deleted(Ok(())));

        assert_eq!(manager.page, 1);
        assert!(matches!(
            next,
            Some(Effect::Load { query: ListItems { page: 1, .. }, .. })
        ));
    }

    #[test]
    fn delete_failure_without_body_names_status() {
        let mut manager = ItemManager::default();

        let next = manager.apply(Outcome::Deleted(Err(api_error(500, ""))));

        assert_eq!(next, None);
        assert_eq!(
            manager.error_message.as_deref(),
            Some("Delete failed (HTTP 500)")
        );
    }
}
