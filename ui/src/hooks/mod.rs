pub mod use_item_manager;

pub use use_item_manager::{ItemActions, use_item_manager};
