use serde::{Deserialize, Serialize};

use crate::Item;

/// One page of items.
///
/// Both fields are optional on the wire: a missing or null `items` means an
/// empty page, and a missing, null or zero `totalPages` means one page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPage {
    #[serde(default)]
    pub items: Option<Vec<Item>>,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

impl ItemPage {
    pub fn total_pages(&self) -> u32 {
        self.total_pages.filter(|n| *n > 0).unwrap_or(1)
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items.unwrap_or_default()
    }
}

/// Error body a backend may attach to a non-success response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    #[serde(default)]
    pub message: Option<String>,
}
