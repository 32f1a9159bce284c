//! Runs the backend calls the item manager asks for.

use payloads::APIClient;

use crate::state::{Effect, Outcome};

/// Perform one effect against the backend and report how it went.
pub async fn run(client: &APIClient, effect: Effect) -> Outcome {
    match effect {
        Effect::Load { ticket, query } => {
            tracing::debug!(ticket, page = query.page, limit = query.limit, "loading items");
            Outcome::Loaded {
                ticket,
                result: client.list_items(&query).await,
            }
        }
        Effect::Create(details) => {
            tracing::debug!(name = %details.item_name, "creating item");
            Outcome::Created(client.create_item(&details).await)
        }
        Effect::Update(item_id, details) => {
            tracing::debug!(%item_id, "updating item");
            Outcome::Updated(client.update_item(&item_id, &details).await)
        }
        Effect::Delete(item_id) => {
            tracing::debug!(%item_id, "deleting item");
            Outcome::Deleted(client.delete_item(&item_id).await)
        }
    }
}
