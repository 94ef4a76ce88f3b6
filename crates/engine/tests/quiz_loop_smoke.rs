use std::sync::Arc;

use engine::{Clock, QuizLoopService, SessionStatus};
use quiz_core::model::{Category, CategoryId};
use quiz_core::time::fixed_now;
use storage::repository::{InMemoryRepository, SavedSessionRepository, StorageError};

const DESTINATIONS: [&str; 10] = [
    "France",
    "Espagne",
    "États-Unis",
    "Chine",
    "Italie",
    "Turquie",
    "Mexique",
    "Thaïlande",
    "Allemagne",
    "Royaume-Uni",
];

fn destinations_category() -> Category {
    Category::new(
        CategoryId::new("destinations"),
        "Destinations de rêve",
        DESTINATIONS.iter().map(|s| (*s).to_string()).collect(),
    )
    .unwrap()
}

#[tokio::test]
async fn abandon_resume_and_finish_through_the_store() {
    let repo = InMemoryRepository::new();
    let service = QuizLoopService::new(Clock::fixed(fixed_now()), Arc::new(repo.clone()));

    let mut session = service.start_session(destinations_category());
    assert!(session.submit_guess("france").correct);
    // accent-free typing still matches
    assert!(session.submit_guess("etats unis").correct);
    assert!(!session.submit_guess("atlantide").correct);
    let score_before = session.score();

    let id = service
        .abandon_session(&mut session)
        .await
        .unwrap()
        .expect("active session snapshots");
    assert_eq!(session.status(), SessionStatus::Abandoned);

    let listed = service.saved_sessions().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, id);
    assert_eq!(listed[0].saved_at, fixed_now());

    // resume consumes the snapshot
    let mut resumed = service
        .resume_session(destinations_category(), id)
        .await
        .unwrap();
    assert!(service.saved_sessions().await.unwrap().is_empty());
    assert_eq!(resumed.status(), SessionStatus::Active);
    assert_eq!(resumed.score(), score_before);
    assert_eq!(resumed.found().len(), 2);
    assert_eq!(resumed.remaining(), 8);

    for name in DESTINATIONS {
        resumed.submit_guess(name);
    }
    assert_eq!(resumed.status(), SessionStatus::Completed);
    assert_eq!(resumed.remaining(), 0);
}

#[tokio::test]
async fn abandoning_an_idle_session_stores_nothing() {
    let repo = InMemoryRepository::new();
    let service = QuizLoopService::new(Clock::fixed(fixed_now()), Arc::new(repo));

    let mut session = engine::QuizSession::default();
    let saved = service.abandon_session(&mut session).await.unwrap();
    assert!(saved.is_none());
    assert!(service.saved_sessions().await.unwrap().is_empty());
}

#[tokio::test]
async fn deleting_a_saved_session_is_explicit() {
    let repo = InMemoryRepository::new();
    let service = QuizLoopService::new(Clock::fixed(fixed_now()), Arc::new(repo.clone()));

    let mut session = service.start_session(destinations_category());
    session.submit_guess("Chine");
    let id = service.abandon_session(&mut session).await.unwrap().unwrap();

    service.delete_saved(id).await.unwrap();
    assert!(repo.list().await.unwrap().is_empty());

    let err = service.delete_saved(id).await.unwrap_err();
    assert!(matches!(
        err,
        engine::SessionError::Storage(StorageError::NotFound)
    ));
}
