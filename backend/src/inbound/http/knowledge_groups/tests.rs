//! Handler tests for the knowledge group endpoints, run against the full
//! application with an in-memory repository or mocked driving ports.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use super::KnowledgeGroupResponse;
use crate::domain::ports::{MockKnowledgeGroupCommand, MockKnowledgeGroupQuery};
use crate::domain::{Error, KnowledgeGroup};
use crate::inbound::http::state::HttpState;
use crate::test_support::{InMemoryKnowledgeGroupRepository, in_memory_state, test_app};

#[fixture]
fn repo() -> InMemoryKnowledgeGroupRepository {
    InMemoryKnowledgeGroupRepository::new()
}

fn create_request(user_id: Option<&str>, body: Value) -> test::TestRequest {
    let request = test::TestRequest::post().uri("/knowledge-group").set_json(body);
    match user_id {
        Some(id) => request.insert_header(("user-id", id)),
        None => request,
    }
}

fn list_request(user_id: &str) -> test::TestRequest {
    test::TestRequest::get()
        .uri("/knowledge-groups")
        .insert_header(("user-id", user_id))
}

fn header(res: &actix_web::dev::ServiceResponse, name: &str) -> String {
    res.headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .expect("header present")
        .to_owned()
}

#[rstest]
#[case("user-123", json!({ "name": "My Group", "description": null }), None)]
#[case("user-456", json!({ "name": "My Group", "description": "Test desc" }), Some("Test desc"))]
#[case("user-789", json!({ "name": "No description field" }), None)]
#[actix_web::test]
async fn create_returns_stored_group(
    repo: InMemoryKnowledgeGroupRepository,
    #[case] user_id: &str,
    #[case] body: Value,
    #[case] description: Option<&str>,
) {
    let app = test::init_service(test_app(in_memory_state(&repo))).await;

    let res = test::call_service(&app, create_request(Some(user_id), body.clone()).to_request()).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert!(!header(&res, "trace-id").is_empty());
    let group: KnowledgeGroupResponse = test::read_body_json(res).await;
    assert_eq!(group.id.len(), 24);
    assert!(group.id.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(Some(group.name.as_str()), body["name"].as_str());
    assert_eq!(group.description.as_deref(), description);
    assert_eq!(group.created_by, user_id);
    assert_eq!(repo.len(), 1);
}

#[rstest]
#[actix_web::test]
async fn create_echoes_null_description_explicitly(repo: InMemoryKnowledgeGroupRepository) {
    let app = test::init_service(test_app(in_memory_state(&repo))).await;
    let res = test::call_service(
        &app,
        create_request(Some("user-123"), json!({ "name": "My Group", "description": null }))
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["description"], Value::Null);
    assert!(body.as_object().expect("object").contains_key("description"));
}

#[rstest]
#[case(json!({ "description": "x" }), "missing_field")]
#[case(json!({ "name": "" }), "empty_field")]
#[case(json!({ "name": null }), "missing_field")]
#[actix_web::test]
async fn create_rejects_missing_or_empty_name(
    repo: InMemoryKnowledgeGroupRepository,
    #[case] body: Value,
    #[case] code: &str,
) {
    let app = test::init_service(test_app(in_memory_state(&repo))).await;

    let res = test::call_service(&app, create_request(Some("user-123"), body).to_request()).await;

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let trace_id = header(&res, "trace-id");
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"], json!({ "field": "name", "code": code }));
    assert_eq!(body["traceId"], trace_id.as_str());
    assert!(repo.is_empty());
}

#[rstest]
#[case("   ", "user-123")]
#[case("My Group", "")]
#[case(" ", "   ")]
#[actix_web::test]
async fn create_echoes_whitespace_name_and_blank_owner(
    repo: InMemoryKnowledgeGroupRepository,
    #[case] name: &str,
    #[case] user_id: &str,
) {
    let app = test::init_service(test_app(in_memory_state(&repo))).await;

    let res = test::call_service(
        &app,
        create_request(Some(user_id), json!({ "name": name })).to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let group: KnowledgeGroupResponse = test::read_body_json(res).await;
    assert_eq!(group.name, name);
    assert_eq!(group.created_by, user_id);
    assert_eq!(repo.len(), 1);
}

#[rstest]
#[actix_web::test]
async fn list_accepts_empty_owner_header(repo: InMemoryKnowledgeGroupRepository) {
    let app = test::init_service(test_app(in_memory_state(&repo))).await;
    let created = test::call_service(
        &app,
        create_request(Some(""), json!({ "name": "Anonymous" })).to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::OK);

    let res = test::call_service(&app, list_request("").to_request()).await;

    assert_eq!(res.status(), StatusCode::OK);
    let groups: Vec<KnowledgeGroupResponse> = test::read_body_json(res).await;
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].created_by, "");
}

#[rstest]
#[actix_web::test]
async fn create_requires_user_id_header(repo: InMemoryKnowledgeGroupRepository) {
    let app = test::init_service(test_app(in_memory_state(&repo))).await;

    let res = test::call_service(
        &app,
        create_request(None, json!({ "name": "My Group" })).to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(
        body["details"],
        json!({ "field": "user-id", "code": "missing_header" })
    );
    assert!(repo.is_empty());
}

#[rstest]
#[actix_web::test]
async fn create_reports_malformed_json(repo: InMemoryKnowledgeGroupRepository) {
    let app = test::init_service(test_app(in_memory_state(&repo))).await;
    let req = test::TestRequest::post()
        .uri("/knowledge-group")
        .insert_header(("user-id", "user-123"))
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"name\": ")
        .to_request();

    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let trace_id = header(&res, "trace-id");
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["details"]["field"], "body");
    assert_eq!(body["details"]["code"], "invalid_body");
    assert_eq!(body["traceId"], trace_id.as_str());
    assert!(repo.is_empty());
}

#[rstest]
#[case(Error::service_unavailable("server selection timeout"), StatusCode::SERVICE_UNAVAILABLE, "Service temporarily unavailable")]
#[case(Error::internal("write concern failed"), StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")]
#[actix_web::test]
async fn create_store_failures_are_redacted(
    #[case] failure: Error,
    #[case] status: StatusCode,
    #[case] message: &str,
) {
    let mut command = MockKnowledgeGroupCommand::new();
    command
        .expect_create()
        .times(1)
        .return_once(move |_| Err(failure));
    let state = HttpState::new(Arc::new(command), Arc::new(MockKnowledgeGroupQuery::new()));
    let app = test::init_service(test_app(state)).await;

    let res = test::call_service(
        &app,
        create_request(Some("user-123"), json!({ "name": "My Group" }))
            .insert_header(("trace-id", "req-42"))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), status);
    assert_eq!(header(&res, "trace-id"), "req-42");
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], message);
    assert_eq!(body["traceId"], "req-42");
}

#[rstest]
#[actix_web::test]
async fn list_returns_empty_array_for_new_owner(repo: InMemoryKnowledgeGroupRepository) {
    let app = test::init_service(test_app(in_memory_state(&repo))).await;

    let res = test::call_service(&app, list_request("user-123").to_request()).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!([]));
}

#[rstest]
#[actix_web::test]
async fn list_only_returns_callers_groups(repo: InMemoryKnowledgeGroupRepository) {
    let app = test::init_service(test_app(in_memory_state(&repo))).await;
    for (user, name) in [("user-123", "First"), ("user-456", "Other"), ("user-123", "Second")] {
        let res = test::call_service(
            &app,
            create_request(Some(user), json!({ "name": name })).to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    let res = test::call_service(&app, list_request("user-123").to_request()).await;

    let groups: Vec<KnowledgeGroupResponse> = test::read_body_json(res).await;
    let names: Vec<&str> = groups.iter().map(|group| group.name.as_str()).collect();
    assert_eq!(names, ["First", "Second"]);
    assert!(groups.iter().all(|group| group.created_by == "user-123"));
}

#[rstest]
#[actix_web::test]
async fn list_queries_store_once_with_header_owner() {
    let stored = KnowledgeGroup::try_from_parts("g1", "My Group", None, "user-123")
        .expect("valid group");
    let mut query = MockKnowledgeGroupQuery::new();
    query
        .expect_list_for_owner()
        .withf(|owner| owner.as_str() == "user-123")
        .times(1)
        .return_once(move |_| Ok(vec![stored]));
    let state = HttpState::new(Arc::new(MockKnowledgeGroupCommand::new()), Arc::new(query));
    let app = test::init_service(test_app(state)).await;

    let res = test::call_service(&app, list_request("user-123").to_request()).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(
        body,
        json!([{ "id": "g1", "name": "My Group", "description": null, "created_by": "user-123" }])
    );
}

#[rstest]
#[actix_web::test]
async fn list_requires_user_id_header() {
    let state = HttpState::new(
        Arc::new(MockKnowledgeGroupCommand::new()),
        Arc::new(MockKnowledgeGroupQuery::new()),
    );
    let app = test::init_service(test_app(state)).await;

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/knowledge-groups").to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
