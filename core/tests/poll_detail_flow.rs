//! End-to-end flow of the poll detail view against a mock poll service

use pollview_core::view::{Completion, NOT_FOUND_MESSAGE};
use pollview_core::{
    load_outcome, HttpPollClient, LoadOutcome, LoadTicket, PollDetailView, PollId, PollSource,
    RenderedView, ResolvedApiConfig, ViewKind,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn poll_body(title: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "description": format!("{} description", title),
        "questions": [
            {"id": 1, "text": "Question", "choices": [{"id": 1, "choice_text": "Yes"}]}
        ]
    })
}

async fn client_for(server: &MockServer) -> Arc<HttpPollClient> {
    Arc::new(
        HttpPollClient::new(ResolvedApiConfig::new(server.uri()).with_timeout_secs(5)).unwrap(),
    )
}

fn spawn_load(
    source: Arc<HttpPollClient>,
    ticket: LoadTicket,
    tx: mpsc::UnboundedSender<(LoadTicket, LoadOutcome)>,
) {
    tokio::spawn(async move {
        let outcome = load_outcome(source.as_ref(), ticket.poll_id()).await;
        let _ = tx.send((ticket, outcome));
    });
}

#[tokio::test]
async fn test_switching_poll_while_loading_keeps_latest() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/polls/1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(poll_body("one"))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/polls/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(poll_body("two")))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let (tx, mut rx) = mpsc::unbounded_channel();

    let (mut view, first) = PollDetailView::mount(PollId::new("1").unwrap());
    spawn_load(client.clone(), first, tx.clone());

    let second = view.set_poll_id(PollId::new("2").unwrap()).unwrap();
    spawn_load(client.clone(), second, tx.clone());
    drop(tx);

    let mut results = Vec::new();
    while let Some((ticket, outcome)) = rx.recv().await {
        results.push(view.complete(&ticket, outcome));
    }

    assert_eq!(results.len(), 2);
    assert_eq!(
        results.iter().filter(|r| **r == Completion::Applied).count(),
        1
    );
    assert_eq!(view.poll_id().as_str(), "2");
    assert_eq!(
        view.state().poll().map(|p| p.title.as_str()),
        Some("two")
    );
}

#[tokio::test]
async fn test_non_success_status_renders_error_with_poll_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/polls/abc-42"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let view = PollDetailView::load(client.as_ref(), PollId::new("abc-42").unwrap()).await;

    let rendered = view.render();
    assert_eq!(rendered.kind(), ViewKind::Error);
    assert!(rendered.to_plain_text().contains("abc-42"));
}

#[tokio::test]
async fn test_null_body_renders_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/polls/8"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let view = PollDetailView::load(client.as_ref(), PollId::new("8").unwrap()).await;

    assert_eq!(
        view.render(),
        RenderedView::NotFound {
            message: NOT_FOUND_MESSAGE.to_string()
        }
    );
}

#[tokio::test]
async fn test_source_can_be_used_as_trait_object() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/polls/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(poll_body("five")))
        .mount(&server)
        .await;

    let source: Arc<dyn PollSource> = client_for(&server).await;
    let view = PollDetailView::load(source.as_ref(), PollId::new("5").unwrap()).await;
    assert_eq!(view.state().kind(), ViewKind::Loaded);
}

#[tokio::test]
async fn test_partial_records_still_load() {
    let bodies = [
        serde_json::json!({"title": "T", "description": null, "questions": []}),
        serde_json::json!({"title": "T", "description": "D", "questions": [
            {"id": 1, "text": null, "choices": [{"id": 1, "choice_text": "A"}]}
        ]}),
        serde_json::json!({"title": "T", "description": "D", "questions": [
            {"id": "q1", "text": "Q", "choices": [{"id": "c1", "choice_text": "A"}]}
        ]}),
        serde_json::json!({"title": "T", "description": "D",
            "created_at": "2024-04-30 18:12:44", "questions": []}),
    ];

    let server = MockServer::start().await;
    for (index, body) in bodies.iter().enumerate() {
        Mock::given(method("GET"))
            .and(path(format!("/api/polls/{}", index)))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .mount(&server)
            .await;
    }

    let client = client_for(&server).await;
    for index in 0..bodies.len() {
        let view = PollDetailView::load(client.as_ref(), PollId::new(index.to_string()).unwrap())
            .await;
        assert_eq!(view.state().kind(), ViewKind::Loaded, "body {}", index);
        assert!(view.render().to_plain_text().starts_with('T'));
    }
}
