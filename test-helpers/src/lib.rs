pub mod mock;
pub mod telemetry;

use actix_web::web;
use mock::{Config, MockStore};
use payloads::{APIClient, ClientError, Item, ItemStatus, requests};
use reqwest::StatusCode;
use rust_decimal::Decimal;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;

pub struct TestApp {
    #[allow(unused)]
    pub port: u16,
    pub client: APIClient,
    pub backend: web::Data<MockStore>,
}

/// Functions to populate and inspect test data
impl TestApp {
    /// Seed `count` numbered items directly into the backend, in order.
    pub fn seed_items(&self, count: usize) -> Vec<Item> {
        (1..=count)
            .map(|n| self.backend.seed(numbered_item_details(n)))
            .collect()
    }

    /// Queue a single failing response for the next request.
    pub fn fail_next(&self, status: u16, message: Option<&str>) {
        self.backend.fail_next(status, message);
    }

    /// Requests the backend has received, as `"METHOD /path?query"`.
    pub fn requests(&self) -> Vec<String> {
        self.backend.requests()
    }

    pub fn clear_requests(&self) {
        self.backend.clear_requests();
    }
}

pub async fn spawn_app_on_port(port: u16) -> TestApp {
    let subscriber = telemetry::get_subscriber("error".into());
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    let mut config = Config {
        ip: "127.0.0.1".into(),
        port,
    };
    let backend = web::Data::new(MockStore::default());

    let server = mock::build(&mut config, backend.clone()).unwrap();
    tokio::spawn(server);

    TestApp {
        port: config.port,
        client: APIClient::new(format!("http://127.0.0.1:{}", config.port)),
        backend,
    }
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app() -> TestApp {
    spawn_app_on_port(0).await
}

/// A client pointed at a port nothing is listening on.
pub fn unreachable_client() -> anyhow::Result<APIClient> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    let port = listener.local_addr()?.port();
    drop(listener);
    Ok(APIClient::new(format!("http://127.0.0.1:{port}")))
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(ClientError::APIError(code, _)) => assert_eq!(code, expected),
        _ => panic!("Expected APIError"),
    };
}

pub fn item_details_a() -> requests::ItemDetails {
    requests::ItemDetails {
        item_name: "Desk Lamp".into(),
        item_category: "Lighting".into(),
        item_price: Decimal::new(1999, 2),
        status: ItemStatus::Active,
    }
}

pub fn item_details_b() -> requests::ItemDetails {
    requests::ItemDetails {
        item_name: "Standing Desk".into(),
        item_category: "Furniture".into(),
        item_price: Decimal::new(34950, 2),
        status: ItemStatus::OutOfStock,
    }
}

pub fn numbered_item_details(n: usize) -> requests::ItemDetails {
    requests::ItemDetails {
        item_name: format!("item {n}"),
        item_category: "numbered".into(),
        item_price: Decimal::from(n as u64),
        status: ItemStatus::Inactive,
    }
}
