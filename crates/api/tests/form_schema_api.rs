//! HTTP-level tests for `GET /api/form-schema`.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, build_test_app_with_forms, get, post_json, test_pool};
use formkit_core::form_schema::FormSchemaRegistry;
use serde_json::json;

#[tokio::test]
async fn serves_builtin_schema_verbatim() {
    let app = build_test_app(test_pool().await);
    let response = get(app, "/api/form-schema").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let expected = serde_json::to_value(FormSchemaRegistry::builtin().schema()).unwrap();
    assert_eq!(json, expected);

    assert_eq!(json["title"], "EMPLOYEE FORM");
    assert_eq!(json["description"], "Fill your employee details carefully");
    let fields = json["fields"].as_array().expect("fields should be an array");
    assert_eq!(fields.len(), 7);
    assert_eq!(fields[1]["validations"], json!({ "min": 18, "max": 60 }));
    assert!(fields[1]["validations"]["min"].is_u64());
    assert_eq!(fields[2]["options"], json!(["Male", "Female", "Other"]));
    assert_eq!(fields[5]["type"], "textarea");
    assert_eq!(fields[5]["placeholder"], "Write about yourself");
}

#[tokio::test]
async fn custom_schema_drives_both_serving_and_validation() {
    let forms = FormSchemaRegistry::from_json_str(
        r#"{
            "title": "Feedback",
            "fields": [
                { "name": "rating", "label": "Rating", "type": "number", "required": true,
                  "validations": { "min": 1, "max": 5 } }
            ]
        }"#,
    )
    .unwrap();
    let pool = test_pool().await;

    let app = build_test_app_with_forms(pool.clone(), forms.clone());
    let json = body_json(get(app, "/api/form-schema").await).await;
    assert_eq!(json["title"], "Feedback");
    assert_eq!(json["fields"][0]["name"], "rating");

    let response = post_json(
        build_test_app_with_forms(pool.clone(), forms.clone()),
        "/api/submissions",
        json!({ "rating": 9 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["errors"], json!({ "rating": "Maximum allowed value is 5" }));

    let response = post_json(
        build_test_app_with_forms(pool, forms),
        "/api/submissions",
        json!({ "rating": 4, "fullName": "ignored" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}
