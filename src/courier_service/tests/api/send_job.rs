use courier_core::{Blacklist, SendError, messages};
use url::Url;
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{any, header, method, path},
};

use crate::helpers::{TestApp, converted_file, report_job};

#[tokio::test]
async fn delivered_job_is_cleaned_up() {
    let app = TestApp::spawn().await;
    let file = converted_file(2 * 1024 * 1024);

    Mock::given(method("POST"))
        .and(path("/email"))
        .and(header("X-Postmark-Server-Token", "server-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let result = app.service.send(report_job(&file)).await.unwrap();

    assert!(result.is_ok());
    assert!(!file.exists());
    assert_eq!(app.progress.statuses(), vec![messages::DONE]);

    let requests = app.email_server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["From"], "kindle@courier.test");
    assert_eq!(body["To"], "a@b.com");
    assert_eq!(body["TextBody"], "Straight to your Kindle! Report: https://x/y");
    assert_eq!(body["Attachments"][0]["Name"], "report.mobi");
}

#[tokio::test]
async fn oversize_job_is_blacklisted_and_never_sent() {
    let app = TestApp::spawn().await;
    let file = converted_file(11_000_000);

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let result = app.service.send(report_job(&file)).await.unwrap();
    std::fs::remove_file(&file).unwrap();

    assert!(matches!(result, Err(SendError::TooBig { .. })));
    assert!(
        app.blacklist
            .contains(&Url::parse("https://x/y").unwrap())
            .await
            .unwrap()
    );
    assert_eq!(app.blacklist.len().await, 1);
    assert_eq!(app.progress.statuses(), vec![messages::TOO_BIG]);
    assert!(app.progress.statuses()[0].contains("too big"));
}

#[tokio::test]
async fn rejected_recipient_keeps_the_file() {
    let app = TestApp::spawn().await;
    let file = converted_file(1024);

    Mock::given(any())
        .respond_with(ResponseTemplate::new(422).set_body_string(
            r#"{"ErrorCode":300,"Message":"Invalid 'To' address: 'a@b.com'."}"#,
        ))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let result = app.service.send(report_job(&file)).await.unwrap();

    assert!(matches!(result, Err(SendError::InvalidRecipient(_))));
    assert!(file.exists());
    assert_eq!(app.blacklist.len().await, 0);
    assert_eq!(app.progress.statuses(), vec![messages::INVALID_EMAIL]);
    std::fs::remove_file(&file).unwrap();
}

#[tokio::test]
async fn unknown_error_code_is_reported_as_failure() {
    let app = TestApp::spawn().await;
    let file = converted_file(1024);

    Mock::given(any())
        .respond_with(ResponseTemplate::new(422).set_body_string(
            r#"{"ErrorCode":406,"Message":"You tried to send to a recipient that has been marked as inactive."}"#,
        ))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let result = app.service.send(report_job(&file)).await.unwrap();

    match result {
        Err(SendError::UnknownErrorCode { code, body }) => {
            assert_eq!(code, 406);
            assert!(body.contains("marked as inactive"));
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert!(file.exists());
    assert_eq!(app.progress.statuses(), vec![messages::SENDING_FAILED]);
    std::fs::remove_file(&file).unwrap();
}

#[tokio::test]
async fn dropped_handle_still_delivers() {
    let app = TestApp::spawn().await;
    let file = converted_file(1024);

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"ErrorCode":0}"#))
        .expect(1)
        .mount(&app.email_server)
        .await;

    drop(app.service.send(report_job(&file)));

    assert_eq!(app.wait_for_status().await, vec![messages::DONE]);
}
