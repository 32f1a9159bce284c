pub mod item_manager;
pub mod not_found;

pub use item_manager::ItemManagerPage;
pub use not_found::NotFoundPage;
