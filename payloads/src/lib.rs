pub mod api_client;
pub mod price;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError};

use derive_more::Display;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Backend-assigned item identifier.
///
/// Treated as opaque text. Backends that hand out numeric ids are accepted
/// too; the number is kept in its decimal text form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => ItemId(s),
            RawId::Signed(n) => ItemId(n.to_string()),
            RawId::Unsigned(n) => ItemId(n.to_string()),
        })
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ItemStatus {
    #[default]
    #[display("active")]
    Active,
    #[display("inactive")]
    Inactive,
    #[display("out-of-stock")]
    OutOfStock,
}

impl ItemStatus {
    /// Every status, in the order the form offers them.
    pub const ALL: [ItemStatus; 3] =
        [Self::Active, Self::Inactive, Self::OutOfStock];
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown item status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for ItemStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "out-of-stock" => Ok(Self::OutOfStock),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// An item as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub item_name: String,
    pub item_category: String,
    #[serde(with = "price")]
    pub item_price: Decimal,
    pub status: ItemStatus,
}

impl Item {
    /// The editable fields of this item, without the id.
    pub fn details(&self) -> requests::ItemDetails {
        requests::ItemDetails {
            item_name: self.item_name.clone(),
            item_category: self.item_category.clone(),
            item_price: self.item_price,
            status: self.status,
        }
    }
}
