//! Integration tests for the generic store actor, using a small standalone
//! entity so the framework is exercised without any domain crate.

use store_actor::{StoreActor, StoreEntity, StoreError};

#[derive(Clone, Debug, PartialEq)]
struct Note {
    id: u32,
    text: String,
    pinned: bool,
}

#[derive(Debug)]
struct NoteCreate {
    text: String,
}

#[derive(Debug, Default)]
struct NoteUpdate {
    text: Option<String>,
    pinned: Option<bool>,
}

#[derive(Debug, thiserror::Error, PartialEq)]
enum NoteError {
    #[error("note text must not be empty")]
    EmptyText,
}

impl StoreEntity for Note {
    type Id = u32;
    type Create = NoteCreate;
    type Update = NoteUpdate;
    type Error = NoteError;

    fn from_create(id: u32, params: NoteCreate) -> Result<Self, NoteError> {
        if params.text.trim().is_empty() {
            return Err(NoteError::EmptyText);
        }
        Ok(Self {
            id,
            text: params.text,
            pinned: false,
        })
    }

    fn apply_update(&mut self, update: NoteUpdate) -> Result<(), NoteError> {
        if let Some(text) = update.text {
            if text.trim().is_empty() {
                return Err(NoteError::EmptyText);
            }
            self.text = text;
        }
        if let Some(pinned) = update.pinned {
            self.pinned = pinned;
        }
        Ok(())
    }
}

fn spawn_store() -> store_actor::StoreClient<Note> {
    let (actor, client) = StoreActor::<Note>::new(10);
    tokio::spawn(actor.run());
    client
}

#[tokio::test]
async fn create_assigns_sequential_ids_starting_at_one() {
    let client = spawn_store();

    let first = client
        .create(NoteCreate {
            text: "first".into(),
        })
        .await
        .unwrap();
    let second = client
        .create(NoteCreate {
            text: "second".into(),
        })
        .await
        .unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
}

#[tokio::test]
async fn get_returns_created_entity_and_none_for_unknown_id() {
    let client = spawn_store();

    let created = client
        .create(NoteCreate {
            text: "hello".into(),
        })
        .await
        .unwrap();

    let fetched = client.get(created.id).await.unwrap();
    assert_eq!(fetched, Some(created));

    let missing = client.get(99).await.unwrap();
    assert_eq!(missing, None);
}

#[tokio::test]
async fn list_preserves_insertion_order() {
    let client = spawn_store();

    for text in ["a", "b", "c"] {
        client
            .create(NoteCreate { text: text.into() })
            .await
            .unwrap();
    }

    let notes = client.list().await.unwrap();
    let texts: Vec<&str> = notes.iter().map(|n| n.text.as_str()).collect();
    assert_eq!(texts, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn update_patches_only_provided_fields() {
    let client = spawn_store();

    let created = client
        .create(NoteCreate {
            text: "draft".into(),
        })
        .await
        .unwrap();

    let updated = client
        .update(
            created.id,
            NoteUpdate {
                pinned: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(updated.pinned);
    assert_eq!(updated.text, "draft", "untouched field must be preserved");
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let client = spawn_store();

    let result = client.update(42, NoteUpdate::default()).await;
    assert!(matches!(result, Err(StoreError::NotFound(_))));
}

#[tokio::test]
async fn delete_is_permanent_and_returns_the_removed_entity() {
    let client = spawn_store();

    let created = client
        .create(NoteCreate {
            text: "gone soon".into(),
        })
        .await
        .unwrap();

    let removed = client.delete(created.id).await.unwrap();
    assert_eq!(removed, created);

    assert_eq!(client.get(created.id).await.unwrap(), None);
    assert!(client.list().await.unwrap().is_empty());

    let again = client.delete(created.id).await;
    assert!(matches!(again, Err(StoreError::NotFound(_))));
}

#[tokio::test]
async fn ids_are_never_reused_after_delete() {
    let client = spawn_store();

    let first = client
        .create(NoteCreate {
            text: "first".into(),
        })
        .await
        .unwrap();
    client.delete(first.id).await.unwrap();

    let second = client
        .create(NoteCreate {
            text: "second".into(),
        })
        .await
        .unwrap();
    assert_eq!(second.id, 2, "deleted ids must stay dead");
}

#[tokio::test]
async fn create_validation_failure_surfaces_as_entity_error() {
    let client = spawn_store();

    let result = client.create(NoteCreate { text: "  ".into() }).await;
    assert!(matches!(result, Err(StoreError::EntityError(_))));

    // A failed create must not consume an id or leave state behind.
    let created = client.create(NoteCreate { text: "ok".into() }).await.unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(client.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn client_reports_actor_closed_after_shutdown() {
    let (actor, client) = StoreActor::<Note>::new(10);
    let handle = tokio::spawn(actor.run());

    // Dropping the only other client clone ends the loop once this one goes.
    let probe = client.clone();
    drop(client);
    drop(probe);
    handle.await.unwrap();

    let (actor, client) = StoreActor::<Note>::new(10);
    drop(actor); // receiver gone, channel closed
    let result = client.list().await;
    assert!(matches!(result, Err(StoreError::ActorClosed)));
}
