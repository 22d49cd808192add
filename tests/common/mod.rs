use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use http_body_util::BodyExt;
use tower::ServiceExt;

use pwa_delivery::config::RouteTable;
use pwa_delivery::pwa::{PwaSettings, PwaStore};

pub struct TestApp {
    pub router: Router,
    pub pwa: PwaStore,
    pub routes: RouteTable,
}

pub fn create_test_app(settings: PwaSettings) -> TestApp {
    let routes = RouteTable::default();
    let pwa = PwaStore::new(settings);
    let router = pwa_delivery::create_app(&routes, pwa.clone()).unwrap();

    TestApp { router, pwa, routes }
}

impl TestApp {
    pub async fn get(&self, path: &str) -> Response {
        self.router
            .clone()
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    pub fn worker_path(&self) -> String {
        self.routes.worker_path()
    }

    pub fn manifest_path(&self) -> String {
        self.routes.manifest_path()
    }
}

pub async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
