mod items;

use test_helpers::spawn_app;

#[tokio::test]
async fn empty_backend_lists_one_empty_page() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let page = app
        .client
        .list_items(&payloads::requests::ListItems { page: 1, limit: 5 })
        .await?;

    assert_eq!(page.total_pages(), 1);
    assert!(page.into_items().is_empty());
    assert_eq!(app.requests(), vec!["GET /api/items?page=1&limit=5"]);

    Ok(())
}
