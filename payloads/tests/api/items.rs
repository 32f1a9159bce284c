use payloads::{ClientError, ItemId, requests::ListItems};
use reqwest::StatusCode;
use test_helpers::{
    assert_status_code, item_details_a, item_details_b, spawn_app,
    unreachable_client,
};

#[tokio::test]
async fn create_read_update_delete_item() -> anyhow::Result<()> {
    let app = spawn_app().await;

    app.client.create_item(&item_details_a()).await?;
    let items = app.client.list_items(&ListItems::default()).await?.into_items();
    assert_eq!(items.len(), 1);
    let created = &items[0];
    assert_eq!(created.details(), item_details_a());

    app.client.update_item(&created.id, &item_details_b()).await?;
    let updated = app.backend.get(&created.id).expect("item still stored");
    assert_eq!(updated.details(), item_details_b());

    app.client.delete_item(&created.id).await?;
    assert!(app.backend.items().is_empty());

    assert_eq!(
        app.requests(),
        vec![
            "POST /api/items".to_string(),
            "GET /api/items?page=1&limit=5".to_string(),
            format!("PUT /api/items/{}", created.id),
            format!("DELETE /api/items/{}", created.id),
        ]
    );

    Ok(())
}

#[tokio::test]
async fn list_pages_through_items() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let seeded = app.seed_items(12);

    let page = app.client.list_items(&ListItems { page: 3, limit: 5 }).await?;
    assert_eq!(page.total_pages(), 3);
    let names: Vec<_> =
        page.into_items().into_iter().map(|i| i.item_name).collect();
    assert_eq!(names, vec![seeded[10].item_name.clone(), seeded[11].item_name.clone()]);

    Ok(())
}

#[tokio::test]
async fn update_unknown_item_reports_server_message() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result = app
        .client
        .update_item(&ItemId("missing".into()), &item_details_a())
        .await;

    let err = result.unwrap_err();
    assert_eq!(err.server_message().as_deref(), Some("not found"));
    assert_status_code::<()>(Err(err), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn injected_failure_without_body_has_no_message() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let item = app.backend.seed(item_details_a());
    app.fail_next(503, None);

    let err = app.client.delete_item(&item.id).await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::SERVICE_UNAVAILABLE));
    assert_eq!(err.server_message(), None);

    // only the next request fails
    app.client.delete_item(&item.id).await?;
    assert!(app.backend.items().is_empty());

    Ok(())
}

#[tokio::test]
async fn price_survives_a_round_trip() -> anyhow::Result<()> {
    let app = spawn_app().await;

    app.client.create_item(&item_details_a()).await?;
    let items = app.client.list_items(&ListItems::default()).await?.into_items();

    assert_eq!(items[0].item_price.to_string(), "19.99");

    Ok(())
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() -> anyhow::Result<()> {
    let client = unreachable_client()?;

    let result = client.list_items(&ListItems::default()).await;

    assert!(matches!(result, Err(ClientError::Network(_))));
    Ok(())
}
