use contact_form::{
    ContactForm, FormConfig, HttpTransport, MemoryPage, ModalWidget, ResponseEnvelope,
    SubmitOutcome, TURNSTILE_FIELD_NAME,
};
use httpmock::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

struct RecordingModal {
    shown: AtomicUsize,
}

impl ModalWidget for RecordingModal {
    fn show(&self) {
        self.shown.fetch_add(1, Ordering::SeqCst);
    }
}

fn filled_page() -> Arc<MemoryPage> {
    Arc::new(
        MemoryPage::new()
            .with_input("#name", "John Doe")
            .with_input("#email", "user@example.com")
            .with_input("#message", "Hello")
            .with_named_input("#turnstile", TURNSTILE_FIELD_NAME, "turnstile123")
            .with_named_input("#csrf", "csrf-token", "token456")
            .with_hidden_element("#message-alert")
            .with_element("#sendmessage")
            .with_hidden_element("#loading")
            .with_element("#contactCancel")
            .with_element("#success"),
    )
}

#[tokio::test]
async fn test_end_to_end_submission_success() {
    let server = MockServer::start();
    let contact_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/contact")
            .body_contains(r#"name="name""#)
            .body_contains("John Doe")
            .body_contains(r#"name="email""#)
            .body_contains("user@example.com")
            .body_contains(r#"name="message""#)
            .body_contains("Hello")
            .body_contains(r#"name="turnstileToken""#)
            .body_contains("turnstile123")
            .body_contains(r#"name="tokenInputToken""#)
            .body_contains("token456");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"status": "success", "ticket": 7}));
    });

    let page = filled_page();
    let config = FormConfig::new(server.url("/contact")).unwrap();
    let modal = Arc::new(RecordingModal {
        shown: AtomicUsize::new(0),
    });
    let seen = Arc::new(Mutex::new(None::<ResponseEnvelope>));

    let modal_for_form = modal.clone();
    let seen_by_callback = seen.clone();
    let form = ContactForm::new(config, page.clone(), HttpTransport::new())
        .with_token_input_name("csrf-token")
        .with_modal(move |_handle| Box::new(modal_for_form))
        .with_on_success(move |envelope| {
            *seen_by_callback.lock().unwrap() = Some(envelope.clone());
        });

    let outcome = form.handle_submit().await;

    assert_eq!(outcome, SubmitOutcome::Sent);
    contact_mock.assert();

    assert_eq!(page.value_of("#name").unwrap(), "");
    assert_eq!(page.value_of("#email").unwrap(), "");
    assert_eq!(page.value_of("#message").unwrap(), "");
    assert_eq!(page.activation_count("#contactCancel"), 1);
    assert_eq!(modal.shown.load(Ordering::SeqCst), 1);

    let envelope = seen.lock().unwrap().clone().unwrap();
    assert_eq!(envelope.status, "success");
    assert_eq!(envelope.extra["ticket"], serde_json::json!(7));

    assert!(page.is_visible("#sendmessage"));
    assert!(!page.is_visible("#loading"));
}

#[tokio::test]
async fn test_server_rejection_uses_reply_message() {
    let server = MockServer::start();
    let contact_mock = server.mock(|when, then| {
        when.method(POST).path("/contact");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "status": "fail",
                "message": "Something went wrong"
            }));
    });

    let page = filled_page();
    let config = FormConfig::new(server.url("/contact")).unwrap();
    let form = ContactForm::new(config, page.clone(), HttpTransport::new());

    let outcome = form.handle_submit().await;

    assert_eq!(outcome, SubmitOutcome::Rejected);
    contact_mock.assert();
    assert_eq!(
        page.text_of("#message-alert").unwrap(),
        "Something went wrong"
    );
    assert!(page.is_visible("#message-alert"));
    // Inputs keep their values so the user can retry.
    assert_eq!(page.value_of("#message").unwrap(), "Hello");
}

#[tokio::test]
async fn test_http_error_status_is_a_rejection() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/contact");
        then.status(500)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"status": "success"}));
    });

    let page = filled_page();
    let config = FormConfig::new(server.url("/contact")).unwrap();
    let form = ContactForm::new(config, page.clone(), HttpTransport::new());

    let outcome = form.handle_submit().await;

    // A success body cannot override a failing HTTP status.
    assert_eq!(outcome, SubmitOutcome::Rejected);
    assert_eq!(
        page.text_of("#message-alert").unwrap(),
        "An error occurred. Please try again later."
    );
    assert_eq!(page.activation_count("#contactCancel"), 0);
}

#[tokio::test]
async fn test_missing_status_key_is_a_rejection_not_a_decode_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/contact");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"message": "Quota exceeded"}));
    });

    let page = filled_page();
    let config = FormConfig::new(server.url("/contact")).unwrap();
    let form = ContactForm::new(config, page.clone(), HttpTransport::new());

    let outcome = form.handle_submit().await;

    assert_eq!(outcome, SubmitOutcome::Rejected);
    assert_eq!(page.text_of("#message-alert").unwrap(), "Quota exceeded");
}

#[tokio::test]
async fn test_malformed_response_body_shows_generic_text() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/contact");
        then.status(200).body("this is not json");
    });

    let page = filled_page();
    let config = FormConfig::new(server.url("/contact")).unwrap();
    let form = ContactForm::new(config, page.clone(), HttpTransport::new());

    let outcome = form.handle_submit().await;

    assert_eq!(outcome, SubmitOutcome::TransportFailed);
    assert_eq!(
        page.text_of("#message-alert").unwrap(),
        "An unexpected error occurred. Please try again later."
    );
    assert!(page.is_visible("#sendmessage"));
    assert!(!page.is_visible("#loading"));
}

#[tokio::test]
async fn test_unreachable_endpoint_shows_generic_text() {
    // Port 9 (discard) is not routable on the loopback here; the connect
    // fails immediately.
    let page = filled_page();
    let config = FormConfig::new("http://127.0.0.1:9/contact").unwrap();
    let form = ContactForm::new(config, page.clone(), HttpTransport::new());

    let outcome = form.handle_submit().await;

    assert_eq!(outcome, SubmitOutcome::TransportFailed);
    assert_eq!(
        page.text_of("#message-alert").unwrap(),
        "An unexpected error occurred. Please try again later."
    );
    assert!(!form.is_busy());
}

#[tokio::test]
async fn test_optional_fields_are_sent_empty_when_absent() {
    let server = MockServer::start();
    let contact_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/contact")
            .body_contains(r#"name="name""#)
            .body_contains(r#"name="turnstileToken""#)
            .body_contains(r#"name="tokenInputToken""#);
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"status": "success"}));
    });

    // No name input, no turnstile field, no second token configured.
    let page = Arc::new(
        MemoryPage::new()
            .with_input("#email", "user@example.com")
            .with_input("#message", "Hello")
            .with_hidden_element("#message-alert"),
    );
    let config = FormConfig::new(server.url("/contact")).unwrap();
    let form = ContactForm::new(config, page.clone(), HttpTransport::new());

    let outcome = form.handle_submit().await;

    assert_eq!(outcome, SubmitOutcome::Sent);
    contact_mock.assert();
}

#[tokio::test]
async fn test_overridden_selectors_drive_the_whole_flow() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/contact");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"status": "success"}));
    });

    let page = Arc::new(
        MemoryPage::new()
            .with_input("#contact-email", "user@example.com")
            .with_input("#contact-body", "Hi there")
            .with_hidden_element("#flash"),
    );
    let overrides = contact_form::SelectorOverrides {
        email_input: Some("#contact-email".to_string()),
        message_input: Some("#contact-body".to_string()),
        message_alert: Some("#flash".to_string()),
        ..Default::default()
    };
    let config = FormConfig::with_overrides(
        server.url("/contact"),
        contact_form::MessageOverrides::default(),
        overrides,
    )
    .unwrap();
    let form = ContactForm::new(config, page.clone(), HttpTransport::new());

    let outcome = form.handle_submit().await;

    assert_eq!(outcome, SubmitOutcome::Sent);
    assert_eq!(page.value_of("#contact-email").unwrap(), "");
    assert_eq!(page.value_of("#contact-body").unwrap(), "");
}
