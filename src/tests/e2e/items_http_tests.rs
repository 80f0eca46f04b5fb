use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::items::{
    CREATE_ITEM_JSON, body_json, create_item_json, make_offline_state, make_test_state,
};
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use serde_json::{Value, json};
use tower::ServiceExt;

fn origins() -> Vec<String> {
    vec!["http://localhost:5173".to_string(), "http://localhost:3000".to_string()]
}

fn app(state: AppState) -> Router {
    router(state, &origins())
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<String>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

async fn create(app: &Router, body: Value) -> Value {
    let response = send(app, "POST", "/items", Some(body.to_string())).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

fn guids(list: &Value) -> Vec<String> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|item| item["guid"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn it_should_walk_an_item_through_its_whole_lifecycle() {
    let (_, state) = make_test_state();
    let app = app(state);

    let created = create(&app, create_item_json()).await;
    let guid = created["guid"].as_str().unwrap().to_string();
    assert_eq!(created["index"], 1);
    assert_eq!(created["type"], "ADMISSION");
    assert_eq!(created["status"], "ACCEPTED");

    let fetched = body_json(send(&app, "GET", &format!("/items/{guid}"), None).await).await;
    assert_eq!(fetched, created);

    let updated_response = send(
        &app,
        "PUT",
        &format!("/items/{guid}"),
        Some(json!({ "amount": 42.0, "type": "reversal" }).to_string()),
    )
    .await;
    assert_eq!(updated_response.status(), StatusCode::OK);
    let updated = body_json(updated_response).await;
    assert_eq!(updated["amount"], 42.0);
    assert_eq!(updated["type"], "REVERSAL");
    assert_eq!(updated["status"], created["status"]);
    assert_eq!(updated["created"], created["created"]);
    assert_eq!(updated["index"], created["index"]);
    assert_eq!(updated["attributes"], created["attributes"]);

    let deleted = send(&app, "DELETE", &format!("/items/{guid}"), None).await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let gone = send(&app, "GET", &format!("/items/{guid}"), None).await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(gone).await, json!({ "error": "Item not found" }));

    let again = send(&app, "DELETE", &format!("/items/{guid}"), None).await;
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn it_should_assign_increasing_indexes_and_list_in_that_order() {
    let (_, state) = make_test_state();
    let app = app(state);

    let mut created = Vec::new();
    for _ in 0..3 {
        created.push(create(&app, create_item_json()).await);
    }

    let list = body_json(send(&app, "GET", "/items", None).await).await;
    let indexes: Vec<i64> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["index"].as_i64().unwrap())
        .collect();
    assert_eq!(indexes, vec![1, 2, 3]);
    assert_eq!(
        guids(&list),
        created
            .iter()
            .map(|item| item["guid"].as_str().unwrap().to_string())
            .collect::<Vec<_>>()
    );
}

#[tokio::test]
async fn it_should_apply_default_explicit_and_unbounded_limits() {
    let (_, state) = make_test_state();
    let app = app(state);
    for _ in 0..12 {
        create(&app, create_item_json()).await;
    }

    let default_page = body_json(send(&app, "GET", "/items", None).await).await;
    let two = body_json(send(&app, "GET", "/items?limit=2", None).await).await;
    let all = body_json(send(&app, "GET", "/items?limit=0", None).await).await;

    assert_eq!(default_page.as_array().unwrap().len(), 10);
    assert_eq!(two.as_array().unwrap().len(), 2);
    assert_eq!(all.as_array().unwrap().len(), 12);
}

#[tokio::test]
async fn it_should_filter_on_type_and_status_ignoring_case() {
    let (_, state) = make_test_state();
    let app = app(state);

    let mut reversal = create_item_json();
    reversal["type"] = json!("Reversal");
    reversal["status"] = json!("declined");
    let admission = create(&app, create_item_json()).await;
    let reversal = create(&app, reversal).await;

    let by_type = body_json(send(&app, "GET", "/items?query=REVERSAL", None).await).await;
    let by_status = body_json(send(&app, "GET", "/items?query=accep", None).await).await;
    let none = body_json(send(&app, "GET", "/items?query=submission", None).await).await;

    assert_eq!(guids(&by_type), vec![reversal["guid"].as_str().unwrap()]);
    assert_eq!(guids(&by_status), vec![admission["guid"].as_str().unwrap()]);
    assert_eq!(none, json!([]));
}

#[tokio::test]
async fn it_should_report_every_missing_field_on_create() {
    let (_, state) = make_test_state();
    let app = app(state);

    let response = send(&app, "POST", "/items", Some("{}".to_string())).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({
            "errors": {
                "amount": "This field is required",
                "type": "This field is required",
                "status": "This field is required",
                "attributes": "This field is required"
            }
        })
    );
}

#[tokio::test]
async fn it_should_not_store_anything_when_create_fails() {
    let (_, state) = make_test_state();
    let app = app(state);

    let mut body = create_item_json();
    body["attributes"]["beneficiary"]["account"]["account_number"] = json!("1234");
    let response = send(&app, "POST", "/items", Some(body.to_string())).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["errors"]["attributes.beneficiary.account.account_number"],
        "Must be exactly 8 digits"
    );
    let list = body_json(send(&app, "GET", "/items?limit=0", None).await).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn it_should_reject_malformed_limits() {
    let (_, state) = make_test_state();
    let app = app(state);

    let negative = send(&app, "GET", "/items?limit=-1", None).await;
    let text = send(&app, "GET", "/items?limit=abc", None).await;

    assert_eq!(negative.status(), StatusCode::BAD_REQUEST);
    assert_eq!(text.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn it_should_answer_500_when_the_store_is_down() {
    let app = app(make_offline_state());

    let list = send(&app, "GET", "/items", None).await;
    let create = send(&app, "POST", "/items", Some(CREATE_ITEM_JSON.to_string())).await;

    assert_eq!(list.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(create.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(list).await,
        json!({ "error": "internal server error" })
    );
}

#[tokio::test]
async fn it_should_answer_cors_preflight_for_allowed_origins() {
    let (_, state) = make_test_state();
    let app = app(state);

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/items")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    let headers = response.headers();
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:5173"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    assert_eq!(headers[header::ACCESS_CONTROL_MAX_AGE], "43200");
}

#[tokio::test]
async fn it_should_not_echo_unknown_origins() {
    let (_, state) = make_test_state();
    let app = app(state);

    let request = Request::builder()
        .method("GET")
        .uri("/items")
        .header(header::ORIGIN, "http://evil.example")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}
