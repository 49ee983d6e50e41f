use kinoseek::history::{DEFAULT_PAGE_LIMIT, HistoryStore};
use sqlx::sqlite::SqlitePoolOptions;

// A single connection keeps the in-memory database alive and shared.
async fn memory_store() -> HistoryStore {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    HistoryStore::with_pool(pool).await.expect("schema")
}

#[tokio::test]
async fn record_assigns_increasing_ids() {
    let store = memory_store().await;

    let first = store.record("alice", "inception", "Inception").await.unwrap();
    let second = store.record("alice", "dune", "Dune").await.unwrap();

    assert!(second > first);
}

#[tokio::test]
async fn recent_queries_come_newest_first() {
    let store = memory_store().await;

    store.record("alice", "q1", "Inception").await.unwrap();
    store.record("alice", "q2", "Inception").await.unwrap();

    let entries = store
        .recent_queries("alice", DEFAULT_PAGE_LIMIT)
        .await
        .unwrap();
    let queries: Vec<_> = entries.iter().map(|e| e.query.as_str()).collect();
    assert_eq!(queries, vec!["q2", "q1"]);
    assert_eq!(entries[0].original_title, "Inception");
}

#[tokio::test]
async fn top_titles_group_and_count() {
    let store = memory_store().await;

    store.record("alice", "q1", "Inception").await.unwrap();
    store.record("alice", "q2", "Inception").await.unwrap();
    store.record("alice", "q3", "Dune").await.unwrap();

    let counts = store.top_titles("alice", DEFAULT_PAGE_LIMIT).await.unwrap();
    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0].original_title, "Inception");
    assert_eq!(counts[0].shows, 2);
    assert_eq!(counts[1].original_title, "Dune");
    assert_eq!(counts[1].shows, 1);
}

#[tokio::test]
async fn listings_are_scoped_per_user() {
    let store = memory_store().await;

    store.record("alice", "q1", "Inception").await.unwrap();
    store.record("bob", "q2", "Dune").await.unwrap();

    let alice = store
        .recent_queries("alice", DEFAULT_PAGE_LIMIT)
        .await
        .unwrap();
    assert_eq!(alice.len(), 1);
    assert_eq!(alice[0].query, "q1");

    let bob_counts = store.top_titles("bob", DEFAULT_PAGE_LIMIT).await.unwrap();
    assert_eq!(bob_counts.len(), 1);
    assert_eq!(bob_counts[0].original_title, "Dune");
}

#[tokio::test]
async fn limit_caps_both_listings() {
    let store = memory_store().await;

    for i in 0..5 {
        store
            .record("alice", &format!("query {i}"), &format!("Title {i}"))
            .await
            .unwrap();
    }

    let entries = store.recent_queries("alice", 3).await.unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].query, "query 4");

    let counts = store.top_titles("alice", 2).await.unwrap();
    assert_eq!(counts.len(), 2);
}

#[tokio::test]
async fn schema_creation_is_idempotent() {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    let store = HistoryStore::with_pool(pool.clone()).await.unwrap();
    store.record("alice", "q1", "Inception").await.unwrap();

    // Re-running schema creation must not clobber existing rows
    let store = HistoryStore::with_pool(pool).await.unwrap();
    let entries = store.recent_queries("alice", 10).await.unwrap();
    assert_eq!(entries.len(), 1);
}
