use pretty_assertions::assert_eq;
use serde_json::json;
use taskpulse_core::client::{ApiError, AsanaClient};
use wiremock::matchers::header;
use wiremock::matchers::method;
use wiremock::matchers::path;
use wiremock::matchers::query_param;
use wiremock::matchers::query_param_is_missing;
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "1/1200:testtoken";

async fn client_for(server: &MockServer) -> AsanaClient {
    AsanaClient::with_base_url(TOKEN, server.uri())
}

#[tokio::test]
async fn requests_carry_the_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/me"))
        .and(header("authorization", format!("Bearer {TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "gid": "42", "name": "Test User" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let user = client_for(&server).await.current_user().await.unwrap();
    assert_eq!(user.gid, "42");
    assert_eq!(user.name.as_deref(), Some("Test User"));
}

#[tokio::test]
async fn workspace_listing_follows_pagination_offsets() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/workspaces"))
        .and(query_param("limit", "100"))
        .and(query_param_is_missing("offset"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                { "gid": "1", "name": "Engineering" },
                { "gid": "2", "name": "Marketing" }
            ],
            "next_page": { "offset": "tok_page2", "path": "/workspaces?offset=tok_page2" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/workspaces"))
        .and(query_param("limit", "100"))
        .and(query_param("offset", "tok_page2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                { "gid": "3", "name": "Ops" }
            ],
            "next_page": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let workspaces = client_for(&server).await.workspaces().await.unwrap();
    let names: Vec<&str> = workspaces.iter().map(|w| w.name.as_str()).collect();
    assert_eq!(names, vec!["Engineering", "Marketing", "Ops"]);
}

#[tokio::test]
async fn project_listing_scopes_to_workspace_and_requests_status_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects"))
        .and(query_param("workspace", "1"))
        .and(query_param(
            "opt_fields",
            "name,completed,archived,current_status.title,current_status.color",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {
                    "gid": "10",
                    "name": "Website Relaunch",
                    "completed": false,
                    "archived": false,
                    "current_status": { "title": "On track", "color": "green" }
                },
                {
                    "gid": "11",
                    "name": "Old Initiative",
                    "completed": false,
                    "archived": true,
                    "current_status": null
                }
            ],
            "next_page": null
        })))
        .mount(&server)
        .await;

    let projects = client_for(&server).await.projects("1").await.unwrap();
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].name, "Website Relaunch");
    assert_eq!(
        projects[0]
            .current_status
            .as_ref()
            .and_then(|s| s.color.as_deref()),
        Some("green")
    );
    assert!(projects[1].archived);
}

#[tokio::test]
async fn unauthorized_is_reported_as_invalid_credential() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "errors": [{ "message": "Not Authorized" }]
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).await.current_user().await.unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized), "{err:?}");
}

#[tokio::test]
async fn api_errors_surface_the_asana_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "errors": [{ "message": "workspace: Not a recognized ID" }]
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).await.projects("bogus").await.unwrap_err();
    match err {
        ApiError::Status { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "workspace: Not a recognized ID");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/workspaces"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server).await.workspaces().await.unwrap_err();
    assert!(matches!(err, ApiError::Parse(_)), "{err:?}");
}
