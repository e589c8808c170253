//! Login, registration and logout against a mock backend

use serde_json::json;
use taskdeck_http::{AuthApi, ClientError, LoginForm, RegisterForm, Session, TaskdeckClient};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn auth_api(server: &MockServer) -> AuthApi {
    AuthApi::new(TaskdeckClient::new(server.uri()).unwrap())
}

#[tokio::test]
async fn login_returns_token_pair() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({ "email": "a@b.com", "password": "x" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "access-1",
            "refresh_token": "refresh-1",
            "user": { "id": 1, "name": "Ann", "tasks": [] }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let form = LoginForm {
        email: "  a@b.com ".into(),
        password: "x".into(),
    };
    let session = auth_api(&server).login(&form).await.unwrap();

    assert_eq!(session, Session::new("access-1", "refresh-1"));
}

#[tokio::test]
async fn login_surfaces_backend_error_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "error": "Invalid credentials" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let form = LoginForm {
        email: "a@b.com".into(),
        password: "x".into(),
    };
    let error = auth_api(&server).login(&form).await.unwrap_err();

    assert!(matches!(error, ClientError::AuthenticationFailed(_)));
    assert_eq!(error.user_message(), "Invalid credentials");
}

#[tokio::test]
async fn login_falls_back_to_generic_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let form = LoginForm {
        email: "a@b.com".into(),
        password: "x".into(),
    };
    let error = auth_api(&server).login(&form).await.unwrap_err();

    assert_eq!(error.user_message(), "Login failed");
}

#[tokio::test]
async fn incomplete_login_never_reaches_the_network() {
    let server = MockServer::start().await;

    Mock::given(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let api = auth_api(&server);
    for form in [
        LoginForm {
            email: String::new(),
            password: "x".into(),
        },
        LoginForm {
            email: "a@b.com".into(),
            password: String::new(),
        },
    ] {
        let error = api.login(&form).await.unwrap_err();
        assert!(matches!(error, ClientError::Validation(_)));
        assert_eq!(error.user_message(), "Please fill in all fields");
    }
}

#[tokio::test]
async fn mismatched_registration_never_reaches_the_network() {
    let server = MockServer::start().await;

    Mock::given(path("/api/auth/register"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let form = RegisterForm {
        name: "Ann".into(),
        email: "a@b.com".into(),
        password1: "secret123".into(),
        password2: "secret321".into(),
    };
    let error = auth_api(&server).register(&form).await.unwrap_err();

    assert_eq!(error.user_message(), "Passwords do not match");
}

#[tokio::test]
async fn register_sends_both_passwords() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .and(body_json(json!({
            "name": "Ann",
            "email": "a@b.com",
            "password1": "secret123",
            "password2": "secret123"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "access_token": "access-1",
            "refresh_token": "refresh-1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let form = RegisterForm {
        name: " Ann ".into(),
        email: "a@b.com".into(),
        password1: "secret123".into(),
        password2: "secret123".into(),
    };
    let session = auth_api(&server).register(&form).await.unwrap();

    assert_eq!(session.refresh_token, "refresh-1");
}

#[tokio::test]
async fn registration_error_body_is_shown() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "error": "Email already registered" })),
        )
        .mount(&server)
        .await;

    let form = RegisterForm {
        name: "Ann".into(),
        email: "a@b.com".into(),
        password1: "secret123".into(),
        password2: "secret123".into(),
    };
    let error = auth_api(&server).register(&form).await.unwrap_err();

    assert_eq!(error.user_message(), "Email already registered");
}

#[tokio::test]
async fn logout_uses_refresh_token_and_ignores_failures() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .and(header("authorization", "Bearer refresh-1"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    auth_api(&server).logout(Some("refresh-1")).await;
}

#[tokio::test]
async fn logout_without_token_or_server_still_returns() {
    let api = AuthApi::new(TaskdeckClient::new("http://127.0.0.1:1").unwrap());
    api.logout(Some("refresh-1")).await;
    api.logout(None).await;
}
