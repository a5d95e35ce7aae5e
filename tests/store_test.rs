//! Store-level tests for the properties the dashboard relies on:
//! pagination bounds, recency ordering, search semantics, favorites
//! round-trips, ordering upserts, preserved duplicate gaps and write races.

use std::sync::Arc;

use chrono::{Duration, Utc};
use uuid::Uuid;

use content_dashboard::config::FeedConfig;
use content_dashboard::error::AppError;
use content_dashboard::models::{
    ContentPayload, ContentType, NewContentItem, NewUser, UserPreferences,
};
use content_dashboard::services::FeedService;
use content_dashboard::store::ContentStore;

fn feed_config() -> FeedConfig {
    FeedConfig {
        default_page_size: 20,
        max_page_size: 100,
        trending_limit: 10,
    }
}

fn news_item(title: &str, category: &str, age_minutes: i64) -> NewContentItem {
    NewContentItem {
        content_type: ContentType::News,
        title: title.to_string(),
        description: format!("{title} description"),
        content: ContentPayload::News {
            source: "Test Wire".to_string(),
            author: None,
            url: "#".to_string(),
        },
        image_url: None,
        source_url: None,
        category: Some(category.to_string()),
        published_at: Some(Utc::now() - Duration::minutes(age_minutes)),
        is_trending: false,
    }
}

fn new_user(username: &str, email: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        email: email.to_string(),
        password: "secret-password".to_string(),
        preferences: None,
    }
}

#[tokio::test]
async fn listing_respects_limit_and_recency_order() {
    let store = ContentStore::new();
    for i in 0..5 {
        store.create_content_item(news_item(&format!("item {i}"), "technology", i * 10)).await;
    }

    let items = store.list_content(1, 3, None).await;
    assert_eq!(items.len(), 3);
    for pair in items.windows(2) {
        assert!(pair[0].effective_timestamp() >= pair[1].effective_timestamp());
    }
    // Most recent first: item 0 has the smallest age.
    assert_eq!(items[0].title, "item 0");
}

#[tokio::test]
async fn category_filter_is_exact_match() {
    let store = ContentStore::new();
    store.create_content_item(news_item("tech", "technology", 1)).await;
    store.create_content_item(news_item("fin", "finance", 2)).await;

    let items = store.list_content(1, 20, Some("finance")).await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "fin");

    // Prefixes must not match.
    assert!(store.list_content(1, 20, Some("tech")).await.is_empty());
}

#[tokio::test]
async fn pagination_boundaries() {
    let store = ContentStore::new();
    for i in 0..20 {
        store.create_content_item(news_item(&format!("a{i}"), "technology", i)).await;
    }

    assert_eq!(store.list_content(1, 20, None).await.len(), 20);
    assert!(store.list_content(2, 20, None).await.is_empty());

    store.create_content_item(news_item("twenty-first", "technology", 30)).await;
    assert_eq!(store.list_content(2, 20, None).await.len(), 1);
}

#[tokio::test]
async fn search_uses_or_of_tokens() {
    let store = ContentStore::new();
    store.create_content_item(news_item("Cat news", "animals", 1)).await;
    store.create_content_item(news_item("Dog news", "animals", 2)).await;
    store.create_content_item(news_item("Fish report", "animals", 3)).await;

    let results = store.search_content("cat dog", 1, 20).await;
    let titles: Vec<&str> = results.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles.len(), 2);
    assert!(titles.contains(&"Cat news"));
    assert!(titles.contains(&"Dog news"));
}

#[tokio::test]
async fn search_matches_category_and_is_case_insensitive() {
    let store = ContentStore::new();
    store.create_content_item(news_item("Quarterly outlook", "finance", 1)).await;

    assert_eq!(store.search_content("FINANCE", 1, 20).await.len(), 1);
    assert_eq!(store.search_content("OUTLOOK", 1, 20).await.len(), 1);
    assert!(store.search_content("sports", 1, 20).await.is_empty());
}

#[tokio::test]
async fn empty_search_query_is_rejected_by_feed_service() {
    let store = Arc::new(ContentStore::new());
    let feed = FeedService::new(store, feed_config());

    match feed.search("   ", 1, 20).await {
        Err(AppError::Validation(_)) => {}
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn trending_caps_at_ten() {
    let store = Arc::new(ContentStore::new());
    for i in 0..15 {
        store.create_content_item(news_item(&format!("t{i}"), "technology", i)).await;
    }

    let feed = FeedService::new(store, feed_config());
    let items = feed.trending(Some("technology")).await;
    assert_eq!(items.len(), 10);
    assert!(feed.trending(Some("missing")).await.is_empty());
}

#[tokio::test]
async fn favorites_round_trip() {
    let store = ContentStore::new();
    let user = store.create_user(new_user("alice", "alice@example.com")).await.unwrap();
    let item = store.create_content_item(news_item("fav me", "technology", 1)).await;

    store.add_to_favorites(user.id, item.id).await;
    assert!(store.is_favorite(user.id, item.id).await);

    let favorites = store.get_user_favorites(user.id).await;
    assert_eq!(favorites.len(), 1);
    assert!(favorites[0].is_favorite);

    assert!(store.remove_from_favorites(user.id, item.id).await);
    assert!(!store.is_favorite(user.id, item.id).await);

    // Removing a relation that does not exist reports false, never panics.
    assert!(!store.remove_from_favorites(user.id, item.id).await);
    assert!(!store.remove_from_favorites(user.id, Uuid::new_v4()).await);
}

#[tokio::test]
async fn duplicate_favorite_inserts_are_preserved() {
    // The original design never hard-enforced one relation per pair; that
    // gap is kept on purpose and each removal drops exactly one relation.
    let store = ContentStore::new();
    let user = store.create_user(new_user("bob", "bob@example.com")).await.unwrap();
    let item = store.create_content_item(news_item("twice", "technology", 1)).await;

    store.add_to_favorites(user.id, item.id).await;
    store.add_to_favorites(user.id, item.id).await;
    assert_eq!(store.get_user_favorites(user.id).await.len(), 2);

    assert!(store.remove_from_favorites(user.id, item.id).await);
    assert!(store.is_favorite(user.id, item.id).await);
    assert!(store.remove_from_favorites(user.id, item.id).await);
    assert!(!store.is_favorite(user.id, item.id).await);
}

#[tokio::test]
async fn content_order_upsert_reads_back_exactly() {
    let store = ContentStore::new();
    let user_id = Uuid::new_v4();
    let order = vec![Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()];

    let first = store.update_user_content_order(user_id, order.clone()).await;
    let read = store.get_user_content_order(user_id).await.unwrap();
    assert_eq!(read.content_order, order);

    // Upsert keeps the record id and replaces the ordering in place.
    let reordered: Vec<Uuid> = order.iter().rev().cloned().collect();
    let second = store.update_user_content_order(user_id, reordered.clone()).await;
    assert_eq!(second.id, first.id);
    assert_eq!(
        store.get_user_content_order(user_id).await.unwrap().content_order,
        reordered
    );
}

#[tokio::test]
async fn reconstruction_places_ordered_items_first() {
    let store = Arc::new(ContentStore::new());
    let a = store.create_content_item(news_item("A", "technology", 3)).await;
    let b = store.create_content_item(news_item("B", "technology", 2)).await;
    let c = store.create_content_item(news_item("C", "technology", 1)).await;

    let user_id = Uuid::new_v4();
    store.update_user_content_order(user_id, vec![b.id, a.id]).await;

    let feed = FeedService::new(store, feed_config());
    let items = feed.list(1, 20, None, Some(user_id)).await;
    let ids: Vec<Uuid> = items.iter().map(|i| i.id).collect();
    // B and A lead in order; C keeps its recency position among the rest.
    assert_eq!(ids, vec![b.id, a.id, c.id]);
}

#[tokio::test]
async fn stale_ids_in_stored_order_are_dropped() {
    let store = Arc::new(ContentStore::new());
    let a = store.create_content_item(news_item("A", "technology", 1)).await;

    let user_id = Uuid::new_v4();
    store
        .update_user_content_order(user_id, vec![Uuid::new_v4(), a.id])
        .await;

    let feed = FeedService::new(store, feed_config());
    let items = feed.list(1, 20, None, Some(user_id)).await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, a.id);
}

#[tokio::test]
async fn personalized_feed_projects_favorite_flags() {
    let store = Arc::new(ContentStore::new());
    let user = store.create_user(new_user("carol", "carol@example.com")).await.unwrap();
    let fav = store.create_content_item(news_item("starred", "technology", 1)).await;
    store.create_content_item(news_item("plain", "technology", 2)).await;
    store.add_to_favorites(user.id, fav.id).await;

    let feed = FeedService::new(store, feed_config());
    let items = feed.list(1, 20, None, Some(user.id)).await;
    for item in &items {
        assert_eq!(item.is_favorite, item.id == fav.id);
    }
}

#[tokio::test]
async fn username_and_email_uniqueness_enforced() {
    let store = ContentStore::new();
    store.create_user(new_user("dave", "dave@example.com")).await.unwrap();

    match store.create_user(new_user("dave", "other@example.com")).await {
        Err(AppError::Conflict(_)) => {}
        other => panic!("expected conflict on username, got {other:?}"),
    }
    match store.create_user(new_user("other", "dave@example.com")).await {
        Err(AppError::Conflict(_)) => {}
        other => panic!("expected conflict on email, got {other:?}"),
    }

    assert!(store.get_user_by_username("dave").await.is_some());
    assert!(store.get_user_by_email("dave@example.com").await.is_some());
    assert!(store.get_user_by_username("other").await.is_none());
}

#[tokio::test]
async fn preference_update_replaces_wholesale_and_dedups() {
    let store = ContentStore::new();
    let user = store.create_user(new_user("erin", "erin@example.com")).await.unwrap();

    let prefs = UserPreferences {
        categories: vec![
            "technology".to_string(),
            "finance".to_string(),
            "technology".to_string(),
        ],
        notifications: Default::default(),
    };
    let updated = store.update_user_preferences(user.id, prefs).await.unwrap();
    assert_eq!(updated.preferences.categories, vec!["technology", "finance"]);

    match store
        .update_user_preferences(Uuid::new_v4(), Default::default())
        .await
    {
        Err(AppError::NotFound(_)) => {}
        other => panic!("expected not-found, got {other:?}"),
    }
}

#[tokio::test]
async fn published_at_defaults_to_ingestion_time() {
    let store = ContentStore::new();
    let mut item = news_item("undated", "technology", 0);
    item.published_at = None;

    let created = store.create_content_item(item).await;
    assert_eq!(created.published_at, Some(created.created_at));
    assert_eq!(created.effective_timestamp(), created.created_at);
}

#[tokio::test]
async fn equal_timestamps_order_by_insertion() {
    let store = ContentStore::new();
    let ts = Utc::now();
    for i in 0..4 {
        let mut item = news_item(&format!("same {i}"), "technology", 0);
        item.published_at = Some(ts);
        store.create_content_item(item).await;
    }

    let first = store.list_content(1, 10, None).await;
    let second = store.list_content(1, 10, None).await;
    let titles: Vec<&str> = first.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["same 0", "same 1", "same 2", "same 3"]);
    assert_eq!(
        first.iter().map(|i| i.id).collect::<Vec<_>>(),
        second.iter().map(|i| i.id).collect::<Vec<_>>()
    );
}

#[tokio::test]
async fn concurrent_favorite_toggles_leave_consistent_state() {
    let store = Arc::new(ContentStore::new());
    let user = store.create_user(new_user("frank", "frank@example.com")).await.unwrap();
    let item = store.create_content_item(news_item("contended", "technology", 1)).await;

    let mut handles = Vec::new();
    for i in 0..32 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            if i % 2 == 0 {
                store.add_to_favorites(user.id, item.id).await;
            } else {
                store.remove_from_favorites(user.id, item.id).await;
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    // Every add appended one relation and every successful remove dropped
    // exactly one; whatever interleaving happened, the count stays bounded
    // and the membership check agrees with the listing.
    let favorites = store.get_user_favorites(user.id).await;
    assert!(favorites.len() <= 16);
    assert_eq!(
        store.is_favorite(user.id, item.id).await,
        !favorites.is_empty()
    );
}

#[tokio::test]
async fn reorder_racing_ingestion_keeps_both_writes() {
    let store = Arc::new(ContentStore::new());
    let user_id = Uuid::new_v4();
    let existing = store.create_content_item(news_item("pre", "technology", 5)).await;

    let order_store = store.clone();
    let reorder = tokio::spawn(async move {
        order_store
            .update_user_content_order(user_id, vec![existing.id])
            .await
    });
    let ingest_store = store.clone();
    let ingest = tokio::spawn(async move {
        for i in 0..8 {
            ingest_store
                .create_content_item(news_item(&format!("new {i}"), "technology", i))
                .await;
        }
    });

    reorder.await.unwrap();
    ingest.await.unwrap();

    assert_eq!(store.content_count().await, 9);
    let record = store.get_user_content_order(user_id).await.unwrap();
    assert_eq!(record.content_order, vec![existing.id]);
}
