use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use serde_json::{Value, json};
use tower::ServiceExt as _;
use uuid::Uuid;

use crate::api::rest::routes::{CatalogServices, register_routes};
use crate::domain::service::{
    BundlesService, CategoriesService, InventoriesService, ProductCategoriesService,
    ProductsService, VendorsService,
};
use crate::domain::test_support::{
    FakeImageStore, InMemoryBundles, InMemoryCategories, InMemoryInventories,
    InMemoryProductCategories, InMemoryProducts, InMemoryVendors,
};

const BOUNDARY: &str = "catalog-boundary";

fn router_with(images: Arc<FakeImageStore>) -> Router {
    let services = CatalogServices {
        vendors: Arc::new(VendorsService::new(Arc::new(InMemoryVendors::default()))),
        categories: Arc::new(CategoriesService::new(Arc::new(
            InMemoryCategories::default(),
        ))),
        products: Arc::new(ProductsService::new(
            Arc::new(InMemoryProducts::default()),
            images,
        )),
        product_categories: Arc::new(ProductCategoriesService::new(Arc::new(
            InMemoryProductCategories::default(),
        ))),
        inventories: Arc::new(InventoriesService::new(Arc::new(
            InMemoryInventories::default(),
        ))),
        bundles: Arc::new(BundlesService::new(Arc::new(InMemoryBundles::default()))),
    };
    register_routes(Router::new(), &services)
}

fn router() -> Router {
    router_with(Arc::new(FakeImageStore::default()))
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn multipart_request(
    method: &str,
    uri: &str,
    payload: &Value,
    image: Option<(&str, &[u8])>,
) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"payload\"\r\n\r\n{payload}\r\n"
        )
        .as_bytes(),
    );
    if let Some((filename, data)) = image {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method(method)
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn read_json(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn product_body() -> Value {
    json!({
        "vendor_id": Uuid::now_v7(),
        "name": "Greek yogurt",
        "sku": "YOG-500",
        "price": 4.25,
        "unit": "tub"
    })
}

#[tokio::test]
async fn product_create_get_and_missing() {
    let app = router();

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/products", &product_body()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json(response).await;
    assert_eq!(body["message"], "Product Created Successfully");
    assert_eq!(body["data"]["sku"], "YOG-500");
    assert!(body["data"]["image_url"].is_null());

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/products/invalid-uuid")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(response).await, json!({"message": "invalid uuid"}));

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/products/{}", Uuid::new_v4()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(read_json(response).await, json!({"message": "not found"}));
}

#[tokio::test]
async fn product_price_must_be_positive() {
    let mut body = product_body();
    body["price"] = json!(0);

    let response = router()
        .oneshot(json_request("POST", "/api/products", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let message = read_json(response).await["message"]
        .as_str()
        .unwrap()
        .to_owned();
    assert!(message.contains("price"), "{message}");
}

#[tokio::test]
async fn multipart_product_stores_image_path() {
    let app = router();

    let response = app
        .clone()
        .oneshot(multipart_request(
            "POST",
            "/api/products",
            &product_body(),
            Some(("yogurt.png", b"\x89PNG\r\n")),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json(response).await;
    let path = body["data"]["image_path"].as_str().unwrap().to_owned();
    assert!(path.starts_with("products/"), "{path}");
    assert_eq!(
        body["data"]["image_url"],
        format!("https://cdn.test/{path}?sig=1")
    );

    let id = body["data"]["id"].as_str().unwrap().to_owned();
    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/products/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(read_json(response).await["data"]["image_path"], path);
}

#[tokio::test]
async fn multipart_with_bad_image_type_is_rejected() {
    let response = router()
        .oneshot(multipart_request(
            "POST",
            "/api/products",
            &product_body(),
            Some(("doc.pdf", b"%PDF-1.7")),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        read_json(response).await,
        json!({"message": "invalid file type"})
    );
}

#[tokio::test]
async fn image_storage_failure_is_internal_error() {
    let app = router_with(Arc::new(FakeImageStore {
        fail_upload: true,
        ..Default::default()
    }));

    let response = app
        .oneshot(multipart_request(
            "POST",
            "/api/products",
            &product_body(),
            Some(("yogurt.jpg", b"\xff\xd8")),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(read_json(response).await, json!({"message": "storage error"}));
}

#[tokio::test]
async fn multipart_update_with_only_image() {
    let app = router();
    let created = read_json(
        app.clone()
            .oneshot(json_request("POST", "/api/products", &product_body()))
            .await
            .unwrap(),
    )
    .await;
    let id = created["data"]["id"].as_str().unwrap().to_owned();

    let response = app
        .oneshot(multipart_request(
            "PATCH",
            &format!("/api/products/{id}"),
            &json!({}),
            Some(("new.png", b"\x89PNG")),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["message"], "Product Updated Successfully");
    assert!(body["data"]["image_path"].as_str().unwrap().ends_with("new.png"));
    assert_eq!(body["data"]["name"], "Greek yogurt");
}

#[tokio::test]
async fn bundle_item_quantity_is_validated() {
    let response = router()
        .oneshot(json_request(
            "POST",
            "/api/bundles",
            &json!({
                "name": "Snack pack",
                "price": 6.5,
                "items": [{"product_id": Uuid::now_v7(), "quantity": 0}]
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn vendor_lifecycle() {
    let app = router();
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/vendors",
            &json!({"name": "Hillside Dairy", "email": "orders@hillside.test"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = read_json(response).await;
    assert_eq!(created["data"]["is_active"], true);
    let id = created["data"]["id"].as_str().unwrap().to_owned();

    let response = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            &format!("/api/vendors/{id}"),
            &json!({"deleted_at": "2026-03-01T12:00:00Z", "email": null}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = read_json(response).await;
    assert_eq!(updated["data"]["deleted_at"], "2026-03-01T12:00:00Z");
    assert!(updated["data"]["email"].is_null());

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/vendors")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let list = read_json(response).await;
    assert_eq!(list["message"], "Vendors Retrieved Successfully");
    assert_eq!(list["data"].as_array().unwrap().len(), 1);

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/vendors/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::ACCEPTED);
    assert_eq!(
        read_json(response).await,
        json!({"data": null, "message": "Vendor Deleted Successfully"})
    );
}

#[tokio::test]
async fn inventory_reports_restock_flag() {
    let response = router()
        .oneshot(json_request(
            "POST",
            "/api/inventories",
            &json!({
                "product_id": Uuid::now_v7(),
                "vendor_id": Uuid::now_v7(),
                "quantity": 2,
                "restock_threshold": 5
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(read_json(response).await["data"]["needs_restock"], true);
}
