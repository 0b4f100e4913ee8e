use super::*;

#[test]
fn endpoint_is_trimmed() {
    let backend = HttpBackend::new("  http://localhost:8000/ask\n");
    assert_eq!(backend.endpoint(), "http://localhost:8000/ask");
}

#[tokio::test]
async fn unreachable_service_is_a_transport_error() {
    // Port 9 (discard) on loopback is not expected to accept HTTP.
    let backend = HttpBackend::new("http://127.0.0.1:9/ask");
    let err = backend.ask(&AskRequest::summary("https://youtu.be/x")).await.unwrap_err();
    assert!(matches!(err, BackendError::Transport(_)), "{err}");
}

#[tokio::test]
async fn malformed_endpoint_is_a_transport_error() {
    let backend = HttpBackend::new("not a url");
    let err = backend.ask(&AskRequest::summary("https://youtu.be/x")).await.unwrap_err();
    assert!(matches!(err, BackendError::Transport(_)));
}
