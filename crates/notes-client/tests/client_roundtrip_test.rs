//! Client against the real router, served over TCP with the in-memory store.

use std::net::SocketAddr;
use std::sync::Arc;

use notes_api::{build_router, ApiConfig, AppState};
use notes_client::{ClientConfig, NoteInput, NotesClient};
use notes_db::MemoryNoteRepository;

async fn spawn_server() -> SocketAddr {
    let config = ApiConfig {
        swagger_ui: false,
        ..ApiConfig::default()
    };
    let app = build_router(
        AppState::new(Arc::new(MemoryNoteRepository::new())),
        &config,
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn test_client_lifecycle_against_router() {
    let addr = spawn_server().await;
    let client = NotesClient::new(ClientConfig {
        base_url: format!("http://{}", addr),
        timeout_seconds: 5,
    })
    .unwrap();

    assert!(client.get_all_notes().await.unwrap().is_empty());

    let created = client.create_note(&NoteInput::new("A", "B")).await.unwrap();
    assert_eq!(created.title, "A");
    assert_eq!(created.created_at, created.updated_at);

    client
        .update_note(created.id, &NoteInput::new("C", "D"))
        .await
        .unwrap();
    let fetched = client.get_note(created.id).await.unwrap();
    assert_eq!(fetched.title, "C");
    assert_eq!(fetched.text, "D");
    assert_eq!(fetched.created_at, created.created_at);
    assert!(fetched.updated_at > created.updated_at);

    let all = client.get_all_notes().await.unwrap();
    assert_eq!(all, vec![fetched]);

    client.delete_note(created.id).await.unwrap();
    assert!(client.get_note(created.id).await.unwrap_err().is_not_found());
    assert!(client.delete_note(created.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_client_surfaces_validation_errors() {
    let addr = spawn_server().await;
    let client = NotesClient::new(ClientConfig {
        base_url: format!("http://{}/", addr),
        timeout_seconds: 5,
    })
    .unwrap();

    let err = client
        .create_note(&NoteInput::new("   ", "B"))
        .await
        .unwrap_err();
    assert!(err.is_bad_request());
    assert!(err.to_string().contains("title is required"), "{}", err);

    let created = client.create_note(&NoteInput::new("A", "B")).await.unwrap();
    let partial = NoteInput {
        title: Some("C".to_string()),
        text: None,
    };
    assert!(client
        .update_note(created.id, &partial)
        .await
        .unwrap_err()
        .is_bad_request());
}
