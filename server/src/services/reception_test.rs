use super::*;
use crate::services::store::{ChatStore, Faq, MemoryStore};
use crate::state::test_helpers::test_app_state;
use protocol::ChatRequest;
use protocol::widget::DEFAULT_ACCENT;
use uuid::Uuid;

/// Resolve the tenant named by `request` and answer its message.
async fn reply_to(state: &AppState, request: &ChatRequest) -> Result<String, ReceptionError> {
    let client = resolve_client(state, request.client.as_deref()).await?;
    reply_for(state, &client, &request.message).await
}

async fn add_acme(store: &MemoryStore) -> ClientRecord {
    let acme = ClientRecord {
        id: Uuid::new_v4(),
        slug: "acme".into(),
        name: "Acme".into(),
        logo: None,
        color: DEFAULT_ACCENT.into(),
        admin_email: None,
    };
    store.add_client(acme.clone()).await;
    store
        .add_faq(Faq {
            client_id: acme.id,
            question: "Parking?".into(),
            answer: "Free parking behind the building.".into(),
            keywords: "parking,park".into(),
        })
        .await;
    acme
}

#[tokio::test]
async fn plain_message_gets_greeting() {
    let (state, _) = test_app_state();
    let reply = reply_to(&state, &ChatRequest::new("hello there", None)).await.unwrap();
    assert_eq!(reply, GREETING);
}

#[tokio::test]
async fn empty_message_gets_greeting() {
    let (state, _) = test_app_state();
    let reply = reply_to(&state, &ChatRequest::new("", None)).await.unwrap();
    assert_eq!(reply, GREETING);
}

#[tokio::test]
async fn faq_keyword_answers_for_default_client() {
    let (state, _) = test_app_state();
    let reply = reply_to(&state, &ChatRequest::new("What are your timings?", None)).await.unwrap();
    assert!(reply.starts_with("We are open"), "{reply}");
}

#[tokio::test]
async fn faqs_are_scoped_to_requested_client() {
    let (state, store) = test_app_state();
    add_acme(&store).await;

    let acme = reply_to(&state, &ChatRequest::new("is there parking?", Some("acme"))).await.unwrap();
    assert_eq!(acme, "Free parking behind the building.");

    let demo = reply_to(&state, &ChatRequest::new("is there parking?", None)).await.unwrap();
    assert_eq!(demo, GREETING);
}

#[tokio::test]
async fn unknown_client_falls_back_to_default() {
    let (state, _) = test_app_state();
    let client = resolve_client(&state, Some("nobody")).await.unwrap();
    assert_eq!(client.slug, "demo");
}

#[tokio::test]
async fn missing_default_client_is_an_error() {
    let (mut state, _) = test_app_state();
    state.default_client = "ghost".into();
    let err = resolve_client(&state, None).await.unwrap_err();
    assert!(matches!(err, ReceptionError::NoDefaultClient(slug) if slug == "ghost"));
}

#[tokio::test]
async fn booking_is_stored_for_requested_client_and_confirmed() {
    let (state, store) = test_app_state();
    let acme = add_acme(&store).await;

    let reply = reply_to(
        &state,
        &ChatRequest::new("Book appointment: 2025-12-10 10:30, John Doe, haircut, beard trim", Some("acme")),
    )
    .await
    .unwrap();
    assert_eq!(reply, "Appointment booked for John Doe on 2025-12-10 at 10:30!");

    let stored = store.appointments().await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].client_id, acme.id);
    assert_eq!(stored[0].purpose, "haircut, beard trim");
    assert!(stored[0].raw_message.starts_with("Book appointment:"));
}

#[tokio::test]
async fn malformed_booking_falls_through_without_storing() {
    let (state, store) = test_app_state();
    let reply = reply_to(&state, &ChatRequest::new("book appointment: soon, Alex", None)).await.unwrap();
    assert_eq!(reply, GREETING);
    assert!(store.appointments().await.is_empty());
}

#[tokio::test]
async fn booking_for_default_client_without_slug() {
    let (state, store) = test_app_state();
    let demo = store.find_client("demo").await.unwrap().unwrap();
    reply_to(&state, &ChatRequest::new("book appointment: 2025-12-03 16:00, Alex, meeting", None))
        .await
        .unwrap();
    assert_eq!(store.appointments().await[0].client_id, demo.id);
}
