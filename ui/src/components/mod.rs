pub mod confirmation_modal;
pub mod item_form;
pub mod item_table;
pub mod pagination_controls;

pub use confirmation_modal::ConfirmationModal;
pub use item_form::ItemFormPanel;
pub use item_table::ItemTable;
pub use pagination_controls::PaginationControls;
