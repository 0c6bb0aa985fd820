use std::net::TcpListener;

use services::{ApiClient, ApiConfig, ApiError, NoteImage, QuizType, StudyBackend};

/// Reserves a local port and releases it, so connecting to it afterwards is
/// refused immediately.
fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    port
}

fn refused_client() -> ApiClient {
    let config = ApiConfig::new(&format!("http://127.0.0.1:{}", closed_port()))
        .expect("valid localhost url");
    ApiClient::new(config)
}

#[tokio::test]
async fn blank_text_fails_validation_before_any_request() {
    // The client points at a closed port: if validation happened after the
    // request was issued, these would come back as Unreachable instead.
    let client = refused_client();
    for text in ["", "   ", "\n\t"] {
        assert!(matches!(
            client.generate_quiz(text, QuizType::All).await,
            Err(ApiError::EmptyText)
        ));
        assert!(matches!(
            client.generate_summary(text).await,
            Err(ApiError::EmptyText)
        ));
        assert!(matches!(
            client.generate_flashcards(text).await,
            Err(ApiError::EmptyText)
        ));
    }
}

#[tokio::test]
async fn connection_refusal_normalizes_to_unreachable() {
    let client = refused_client();
    let base_url = client.config().base_url().to_string();

    let err = client
        .generate_summary("some extracted notes")
        .await
        .expect_err("no backend is listening");
    match &err {
        ApiError::Unreachable { base_url: named, .. } => assert_eq!(named, &base_url),
        other => panic!("expected Unreachable, got {other:?}"),
    }
    let message = err.to_string();
    assert!(message.contains(&base_url), "missing base url in {message}");
    assert!(message.contains("same network"), "missing guidance in {message}");
}

#[tokio::test]
async fn scan_upload_normalizes_to_unreachable_too() {
    let client = refused_client();
    let err = client
        .scan_notes(NoteImage::new(vec![0xff, 0xd8, 0xff], "notes.jpg"))
        .await
        .expect_err("no backend is listening");
    assert!(matches!(err, ApiError::Unreachable { .. }));
}
