//! In-memory stand-in for the items backend.
//!
//! Serves the four `/api/items` endpoints the front end talks to, keeps
//! items in insertion order, and records every request it sees so tests
//! can assert on what the client actually sent. A single failing response
//! can be queued with [`MockStore::fail_next`].

use actix_web::dev::Server;
use actix_web::http::StatusCode;
use actix_web::{
    App, HttpRequest, HttpResponse, HttpServer, delete, get, post, put, web,
};
use payloads::{Item, ItemId, requests::ItemDetails, responses::ErrorMessage};
use serde::Deserialize;
use std::net::TcpListener;
use std::sync::Mutex;
use uuid::Uuid;

/// Page size used when a list request doesn't name one.
const FALLBACK_LIMIT: u32 = 10;

/// A response queued to replace the next request's normal handling.
#[derive(Debug, Clone)]
struct InjectedFailure {
    status: u16,
    message: Option<String>,
}

#[derive(Debug, Default)]
pub struct MockStore {
    items: Mutex<Vec<Item>>,
    next_failure: Mutex<Option<InjectedFailure>>,
    requests: Mutex<Vec<String>>,
}

impl MockStore {
    /// Insert an item directly, bypassing HTTP and the request log.
    pub fn seed(&self, details: ItemDetails) -> Item {
        let item = new_item(details);
        self.items.lock().unwrap().push(item.clone());
        item
    }

    pub fn items(&self) -> Vec<Item> {
        self.items.lock().unwrap().clone()
    }

    pub fn get(&self, item_id: &ItemId) -> Option<Item> {
        self.items
            .lock()
            .unwrap()
            .iter()
            .find(|item| &item.id == item_id)
            .cloned()
    }

    /// Answer the next request with `status`, carrying `{"message": ...}`
    /// when a message is given and an empty body otherwise.
    pub fn fail_next(&self, status: u16, message: Option<&str>) {
        *self.next_failure.lock().unwrap() = Some(InjectedFailure {
            status,
            message: message.map(str::to_string),
        });
    }

    /// Requests seen so far, as `"METHOD /path?query"`.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }

    fn record(&self, req: &HttpRequest) {
        let target = match req.query_string() {
            "" => req.path().to_string(),
            query => format!("{}?{query}", req.path()),
        };
        tracing::debug!(method = %req.method(), %target, "mock request");
        self.requests
            .lock()
            .unwrap()
            .push(format!("{} {target}", req.method()));
    }

    fn take_failure(&self) -> Option<HttpResponse> {
        let failure = self.next_failure.lock().unwrap().take()?;
        let status = StatusCode::from_u16(failure.status)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Some(match failure.message {
            Some(message) => HttpResponse::build(status).json(ErrorMessage {
                message: Some(message),
            }),
            None => HttpResponse::build(status).finish(),
        })
    }
}

fn new_item(details: ItemDetails) -> Item {
    Item {
        id: ItemId(Uuid::new_v4().to_string()),
        item_name: details.item_name,
        item_category: details.item_category,
        item_price: details.item_price,
        status: details.status,
    }
}

fn message(status: StatusCode, text: &str) -> HttpResponse {
    HttpResponse::build(status).json(ErrorMessage {
        message: Some(text.to_string()),
    })
}

fn missing_field(details: &ItemDetails) -> Option<&'static str> {
    if details.item_name.is_empty() {
        Some("itemName is required")
    } else if details.item_category.is_empty() {
        Some("itemCategory is required")
    } else {
        None
    }
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    page: Option<u32>,
    limit: Option<u32>,
}

#[tracing::instrument(skip_all)]
#[get("/items")]
pub async fn list_items(
    req: HttpRequest,
    query: web::Query<PageQuery>,
    store: web::Data<MockStore>,
) -> HttpResponse {
    store.record(&req);
    if let Some(failure) = store.take_failure() {
        return failure;
    }

    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(FALLBACK_LIMIT).max(1);

    let items = store.items.lock().unwrap();
    let total_pages = (items.len() as u32).div_ceil(limit).max(1);
    let page_items: Vec<Item> = items
        .iter()
        .skip((page - 1).saturating_mul(limit) as usize)
        .take(limit as usize)
        .cloned()
        .collect();

    HttpResponse::Ok().json(serde_json::json!({
        "items": page_items,
        "totalPages": total_pages,
    }))
}

#[tracing::instrument(skip_all)]
#[post("/items")]
pub async fn create_item(
    req: HttpRequest,
    details: web::Json<ItemDetails>,
    store: web::Data<MockStore>,
) -> HttpResponse {
    store.record(&req);
    if let Some(failure) = store.take_failure() {
        return failure;
    }
    if let Some(problem) = missing_field(&details) {
        return message(StatusCode::BAD_REQUEST, problem);
    }

    let item = new_item(details.into_inner());
    store.items.lock().unwrap().push(item.clone());
    HttpResponse::Created().json(item)
}

#[tracing::instrument(skip_all)]
#[put("/items/{item_id}")]
pub async fn update_item(
    req: HttpRequest,
    item_id: web::Path<String>,
    details: web::Json<ItemDetails>,
    store: web::Data<MockStore>,
) -> HttpResponse {
    store.record(&req);
    if let Some(failure) = store.take_failure() {
        return failure;
    }
    if let Some(problem) = missing_field(&details) {
        return message(StatusCode::BAD_REQUEST, problem);
    }

    let item_id = ItemId(item_id.into_inner());
    let mut items = store.items.lock().unwrap();
    let Some(item) = items.iter_mut().find(|item| item.id == item_id) else {
        return message(StatusCode::NOT_FOUND, "not found");
    };

    let details = details.into_inner();
    item.item_name = details.item_name;
    item.item_category = details.item_category;
    item.item_price = details.item_price;
    item.status = details.status;
    HttpResponse::Ok().json(item.clone())
}

#[tracing::instrument(skip_all)]
#[delete("/items/{item_id}")]
pub async fn delete_item(
    req: HttpRequest,
    item_id: web::Path<String>,
    store: web::Data<MockStore>,
) -> HttpResponse {
    store.record(&req);
    if let Some(failure) = store.take_failure() {
        return failure;
    }

    let item_id = ItemId(item_id.into_inner());
    let mut items = store.items.lock().unwrap();
    let before = items.len();
    items.retain(|item| item.id != item_id);
    if items.len() == before {
        return message(StatusCode::NOT_FOUND, "not found");
    }
    message(StatusCode::OK, "deleted")
}

pub struct Config {
    /// "127.0.0.1" for tests
    pub ip: String,
    /// set to 0 to get an os-assigned port
    pub port: u16,
}

/// Build the mock server, but not await it.
///
/// Returns the port that the server has bound to by modifying the config.
pub fn build(
    config: &mut Config,
    store: web::Data<MockStore>,
) -> std::io::Result<Server> {
    // OS assigns the port if binding to 0
    let listener = TcpListener::bind(format!("{}:{}", config.ip, config.port))?;
    config.port = listener.local_addr()?.port();
    let server = HttpServer::new(move || {
        App::new()
            .service(
                web::scope("/api")
                    .service(list_items)
                    .service(create_item)
                    .service(update_item)
                    .service(delete_item),
            )
            .app_data(store.clone())
    })
    .workers(1)
    .listen(listener)?
    .run();
    Ok(server)
}
