use std::time::{Duration, Instant};

use hyper::StatusCode;
use latencyapp::latency::latency_model::{Envelope, Outcome};

use crate::helpers::{no_wait_config, TestApp};

async fn get_envelope(app: &TestApp, path_and_query: &str) -> (StatusCode, Envelope) {
    let response = app
        .client
        .get(app.url(path_and_query))
        .send()
        .await
        .expect("failed to execute request");
    let status = response.status();
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "application/json"
    );
    let envelope = response.json::<Envelope>().await.unwrap();
    (status, envelope)
}

#[tokio::test]
async fn explicit_delay_and_code_test() {
    // Arrange
    let app = TestApp::spawn().await;
    let start = Instant::now();

    // Act
    let (status, envelope) = get_envelope(&app, "/slow/endpoint?delay=1&code=201").await;

    // Assert
    assert!(start.elapsed() >= Duration::from_secs(1));
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(envelope.delay, 1);
    assert_eq!(envelope.message, Outcome::Success);
    assert_eq!(envelope.path, "/slow/endpoint");
}

#[tokio::test]
async fn code_classification_test() {
    let app = TestApp::spawn().await;
    let cases = [
        (200, Outcome::Success),
        (301, Outcome::Success),
        (400, Outcome::ClientError),
        (429, Outcome::ClientError),
        (500, Outcome::ServerError),
        (504, Outcome::ServerError),
    ];
    for (code, outcome) in cases {
        let (status, envelope) = get_envelope(&app, &format!("/?delay=0&code={code}")).await;
        assert_eq!(status.as_u16(), code);
        assert_eq!(envelope.message, outcome, "code {code}");
    }
}

#[tokio::test]
async fn malformed_code_falls_back_to_ok_test() {
    let app = TestApp::spawn().await;
    let (status, envelope) = get_envelope(&app, "/?delay=0&code=abc").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(envelope.message, Outcome::Success);
}

#[tokio::test]
async fn random_fallback_delay_test() {
    // A ceiling of zero pins the random fallback to zero seconds
    let app = TestApp::spawn_with(no_wait_config()).await;
    for query in ["", "?delay=", "?delay=-1", "?delay=abc"] {
        let start = Instant::now();
        let (_, envelope) = get_envelope(&app, &format!("/fallback{query}")).await;
        assert_eq!(envelope.delay, 0, "query '{query}'");
        assert!(start.elapsed() < Duration::from_secs(1));
    }
}

#[tokio::test]
async fn random_code_is_consistent_with_message_test() {
    let app = TestApp::spawn_with(no_wait_config()).await;
    for _ in 0..30 {
        let (status, envelope) = get_envelope(&app, "/").await;
        let expected = match status {
            StatusCode::OK => Outcome::Success,
            StatusCode::BAD_REQUEST => Outcome::ClientError,
            StatusCode::INTERNAL_SERVER_ERROR => Outcome::ServerError,
            other => panic!("unexpected status {other}"),
        };
        assert_eq!(envelope.message, expected);
    }
}

#[tokio::test]
async fn method_is_not_validated_test() {
    let app = TestApp::spawn().await;
    let response = app
        .client
        .post(app.url("/submit?delay=0&code=202"))
        .body("ignored")
        .send()
        .await
        .expect("failed to execute request");
    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let envelope = response.json::<Envelope>().await.unwrap();
    assert_eq!(envelope.path, "/submit");
}

#[tokio::test]
async fn concurrent_requests_are_independent_test() {
    // Arrange
    let app = TestApp::spawn().await;
    let slow_client = app.client.clone();
    let slow_url = app.url("/slow?delay=3&code=200");
    let slow = tokio::spawn(async move {
        slow_client
            .get(slow_url)
            .send()
            .await
            .expect("failed to execute request")
            .json::<Envelope>()
            .await
            .unwrap()
    });
    tokio::time::sleep(Duration::from_millis(100)).await;

    // Act
    let start = Instant::now();
    let (status, envelope) = get_envelope(&app, "/fast?delay=0&code=200").await;

    // Assert : the fast request does not wait for the slow one
    assert!(start.elapsed() < Duration::from_secs(2));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(envelope.delay, 0);
    assert!(!slow.is_finished());

    let slow = slow.await.unwrap();
    assert_eq!(slow.delay, 3);
    assert_eq!(slow.path, "/slow");
}

#[tokio::test]
async fn informational_code_falls_back_to_ok_test() {
    let app = TestApp::spawn().await;
    for code in [100, 102, 199] {
        let (status, envelope) = get_envelope(&app, &format!("/?delay=0&code={code}")).await;
        assert_eq!(status, StatusCode::OK, "code {code}");
        assert_eq!(envelope.message, Outcome::Success);
    }
}

#[tokio::test]
async fn sample_with_trailing_slash_test() {
    let app = TestApp::spawn().await;
    let (status, envelope) = get_envelope(&app, "/sample/?delay=0&code=503").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(envelope.message, Outcome::ServerError);
    assert_eq!(envelope.path, "/sample/");
}

#[tokio::test]
async fn repeated_parameter_keeps_first_value_test() {
    let app = TestApp::spawn().await;
    let (status, envelope) = get_envelope(&app, "/?delay=0&code=500&code=200&delay=5").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(envelope.delay, 0);
}
