use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{ItemStatus, price};

/// The page sizes the list view offers.
pub const PAGE_SIZES: [u32; 4] = [5, 10, 20, 50];
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// Query for one page of items. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItems {
    pub page: u32,
    pub limit: u32,
}

impl Default for ListItems {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Body for creating or updating an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDetails {
    pub item_name: String,
    pub item_category: String,
    #[serde(with = "price")]
    pub item_price: Decimal,
    pub status: ItemStatus,
}
