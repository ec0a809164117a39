//! End-to-end tests for the native transport against a mock backend.
//!
//! The backend mimics the signup page contract: `GET /signup/` sets the
//! `csrftoken` cookie, `POST /signup/` and `POST /verify-email/` reject
//! requests whose `X-CSRFToken` header does not match it.

use axum::{
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use signup_form::cli::actions::form::{connect, settle, Settled};
use signup_form::client::{AppConfig, HttpTransport};
use signup_form::form::{
    RecordingNavigator, SignupFormController, SignupInput, StaticCsrfToken, UiState, CSRF_COOKIE,
};
use tokio::net::TcpListener;

const CSRF: &str = "Zx81kqPw";
const CODE: &str = "482913";
const ENCODED_CSRF: &str = "a%2Fb%3Dc";

async fn signup_page() -> impl IntoResponse {
    (
        [(header::SET_COOKIE, format!("{CSRF_COOKIE}={CSRF}; Path=/"))],
        r#"<div class="signup-card"><form class="signup-form"></form></div>"#,
    )
}

async fn encoded_page() -> impl IntoResponse {
    (
        [(
            header::SET_COOKIE,
            format!("{CSRF_COOKIE}={ENCODED_CSRF}; Path=/"),
        )],
        r#"<div class="signup-card"><form class="signup-form"></form></div>"#,
    )
}

/// Accepts the signup only when the header carries the decoded cookie value.
async fn encoded_signup(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    let token = headers
        .get("x-csrftoken")
        .and_then(|value| value.to_str().ok());
    if token == Some("a/b=c") {
        (StatusCode::OK, Json(json!({"verification_required": true})))
    } else {
        (
            StatusCode::FORBIDDEN,
            Json(json!({"error": "CSRF verification failed"})),
        )
    }
}

fn csrf_ok(headers: &HeaderMap) -> bool {
    headers
        .get("x-csrftoken")
        .and_then(|value| value.to_str().ok())
        == Some(CSRF)
}

async fn signup(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if !csrf_ok(&headers) {
        return (
            StatusCode::FORBIDDEN,
            Json(json!({"error": "CSRF verification failed"})),
        );
    }
    if body["email"] == "taken@example.com" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Email already exists"})),
        );
    }
    if body["email"] == "direct@example.com" {
        return (StatusCode::OK, Json(json!({"redirect_url": "/welcome/"})));
    }
    (StatusCode::OK, Json(json!({"verification_required": true})))
}

async fn verify(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if !csrf_ok(&headers) {
        return (
            StatusCode::FORBIDDEN,
            Json(json!({"msg": "CSRF verification failed"})),
        );
    }
    if body["otp"] == CODE && body["email"] == "ada@example.com" {
        (StatusCode::OK, Json(json!({"success": true})))
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({"msg": "Invalid or expired code"})),
        )
    }
}

async fn broken() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "<h1>Server Error (500)</h1>")
}

/// Starts the mock backend and returns the signup page URL.
async fn spawn_backend() -> String {
    let app = Router::new()
        .route("/signup/", get(signup_page).post(signup))
        .route("/verify-email/", post(verify))
        .route("/broken/", get(signup_page).post(broken))
        .route("/encoded/", get(encoded_page).post(encoded_signup));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}/signup/")
}

async fn controller_for(
    page_url: &str,
) -> SignupFormController<HttpTransport, StaticCsrfToken, RecordingNavigator> {
    let transport = HttpTransport::new().unwrap();
    let token = transport.fetch_cookie(page_url, CSRF_COOKIE).await.unwrap();
    SignupFormController::new(
        AppConfig::new(page_url),
        transport,
        StaticCsrfToken::new(token),
        RecordingNavigator::new(),
    )
}

fn ada() -> SignupInput {
    SignupInput::new("Ada", "Lovelace", "ada@example.com", "analytical")
}

#[tokio::test]
async fn fetch_cookie_reads_the_csrf_token_from_the_page() {
    let page_url = spawn_backend().await;
    let transport = HttpTransport::new().unwrap();

    assert_eq!(
        transport.fetch_cookie(&page_url, CSRF_COOKIE).await.unwrap(),
        Some(CSRF.to_string())
    );
    assert_eq!(
        transport.fetch_cookie(&page_url, "sessionid").await.unwrap(),
        None
    );
}

#[tokio::test]
async fn encoded_csrf_cookie_is_sent_decoded() {
    let page_url = spawn_backend().await;
    let encoded_url = page_url.replace("/signup/", "/encoded/");

    let transport = HttpTransport::new().unwrap();
    assert_eq!(
        transport.fetch_cookie(&encoded_url, CSRF_COOKIE).await.unwrap(),
        Some("a/b=c".to_string())
    );

    let controller = controller_for(&encoded_url).await;
    let ui = controller.on_signup_submit(ada()).await;

    assert_eq!(controller.state().error(), None);
    assert_eq!(ui, UiState::ShowingOtpPanel);
}

#[tokio::test]
async fn signup_then_verify_lands_on_the_dashboard() {
    let page_url = spawn_backend().await;
    let controller = controller_for(&page_url).await;

    let ui = controller.on_signup_submit(ada()).await;
    assert_eq!(ui, UiState::ShowingOtpPanel);
    assert_eq!(controller.state().otp_email(), "ada@example.com");

    let email = controller.state().otp_email().to_string();
    controller.on_verify_otp_click(CODE, &email).await;

    assert_eq!(controller.state().error(), None);
    assert_eq!(
        controller.navigator().current(),
        Some("/dashboard/".to_string())
    );
}

#[tokio::test]
async fn signup_redirect_is_followed() {
    let page_url = spawn_backend().await;
    let controller = controller_for(&page_url).await;

    controller
        .on_signup_submit(SignupInput::new(
            "Ada",
            "Lovelace",
            "direct@example.com",
            "analytical",
        ))
        .await;

    assert_eq!(
        controller.navigator().current(),
        Some("/welcome/".to_string())
    );
}

#[tokio::test]
async fn duplicate_email_is_reported() {
    let page_url = spawn_backend().await;
    let controller = controller_for(&page_url).await;

    let ui = controller
        .on_signup_submit(SignupInput::new(
            "Ada",
            "Lovelace",
            "taken@example.com",
            "analytical",
        ))
        .await;

    assert_eq!(ui, UiState::ShowingSignupForm);
    assert_eq!(controller.state().error(), Some("Email already exists"));
    assert_eq!(controller.navigator().current(), None);
}

#[tokio::test]
async fn missing_csrf_token_is_rejected_by_the_backend() {
    let page_url = spawn_backend().await;
    let controller = SignupFormController::new(
        AppConfig::new(page_url.as_str()),
        HttpTransport::new().unwrap(),
        StaticCsrfToken::default(),
        RecordingNavigator::new(),
    );

    controller.on_signup_submit(ada()).await;

    assert_eq!(controller.state().error(), Some("CSRF verification failed"));
}

#[tokio::test]
async fn wrong_code_keeps_the_otp_panel_open() {
    let page_url = spawn_backend().await;
    let controller = controller_for(&page_url).await;

    controller.on_signup_submit(ada()).await;
    controller
        .on_verify_otp_click("000000", "ada@example.com")
        .await;

    let state = controller.state();
    assert_eq!(state.ui(), UiState::ShowingOtpPanel);
    assert_eq!(state.error(), Some("Invalid or expired code"));
    assert_eq!(controller.navigator().current(), None);
}

#[tokio::test]
async fn html_error_page_shows_the_generic_message() {
    let page_url = spawn_backend().await;
    let broken_url = page_url.replace("/signup/", "/broken/");
    let controller = controller_for(&broken_url).await;

    controller.on_signup_submit(ada()).await;

    assert_eq!(
        controller.state().error(),
        Some("An error occurred. Please try again.")
    );
}

#[tokio::test]
async fn unreachable_backend_shows_the_generic_message() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let controller = SignupFormController::new(
        AppConfig::new(format!("http://{addr}/signup/")),
        HttpTransport::new().unwrap(),
        StaticCsrfToken::new(Some(CSRF.to_string())),
        RecordingNavigator::new(),
    );

    controller.on_signup_submit(ada()).await;
    assert_eq!(
        controller.state().error(),
        Some("An error occurred. Please try again.")
    );

    controller.on_verify_otp_click(CODE, "ada@example.com").await;
    assert_eq!(controller.state().error(), Some("Verification failed"));
}

#[tokio::test]
async fn cli_wiring_settles_on_an_absolute_destination() {
    let page_url = spawn_backend().await;
    let controller = connect(AppConfig::new(page_url.as_str())).await.unwrap();

    controller.on_signup_submit(ada()).await;
    assert_eq!(
        settle(&controller),
        Settled::AwaitingCode("ada@example.com".to_string())
    );

    controller.on_verify_otp_click(CODE, "ada@example.com").await;
    assert_eq!(
        settle(&controller),
        Settled::Navigated(page_url.replace("/signup/", "/dashboard/"))
    );
}
