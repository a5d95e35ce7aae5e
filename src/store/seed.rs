//! Demo seed data
//!
//! Populates the store with one default user and a handful of sample items
//! across all three content types so the dashboard renders something before
//! any provider ingestion has run. The default user is a demo convenience,
//! not a tenancy or security boundary.

use chrono::{Duration, TimeZone, Utc};
use uuid::Uuid;

use crate::models::{
    ContentPayload, ContentType, NewContentItem, NotificationSettings, SocialAuthor, User,
    UserPreferences,
};
use crate::store::ContentStore;

/// Fixed id for the default demo user so clients can reference it without a
/// signup round-trip.
pub const DEFAULT_USER_ID: Uuid = Uuid::from_u128(0x8d8b_1c7e_4f5a_4b3c_9e2d_6f1a_0c7b_5e4d);

pub async fn seed_demo_data(store: &ContentStore) {
    seed_default_user(store).await;
    for item in sample_content() {
        store.create_content_item(item).await;
    }
    tracing::info!(items = store.content_count().await, "Seeded demo content");
}

async fn seed_default_user(store: &ContentStore) {
    let user = User {
        id: DEFAULT_USER_ID,
        username: "demo".to_string(),
        email: "demo@example.com".to_string(),
        password: "demo-password".to_string(),
        preferences: UserPreferences {
            categories: vec!["technology".to_string(), "finance".to_string()],
            notifications: NotificationSettings {
                breaking: true,
                digest: false,
            },
        },
        created_at: Utc::now(),
    };
    store.insert_seed_user(user).await;
}

fn sample_content() -> Vec<NewContentItem> {
    let now = Utc::now();
    vec![
        NewContentItem {
            content_type: ContentType::News,
            title: "AI Breakthrough: New Language Model Achieves Human-Level Performance"
                .to_string(),
            description: "Researchers have developed a system that demonstrates human-level \
                          reasoning capabilities across multiple domains."
                .to_string(),
            content: ContentPayload::News {
                source: "Tech News Daily".to_string(),
                author: Some("Dr. Sarah Chen".to_string()),
                url: "#".to_string(),
            },
            image_url: Some(
                "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=500".to_string(),
            ),
            source_url: Some("#".to_string()),
            category: Some("technology".to_string()),
            published_at: Some(now - Duration::hours(2)),
            is_trending: false,
        },
        NewContentItem {
            content_type: ContentType::Movie,
            title: "The Matrix Resurrections".to_string(),
            description: "Return to a world of two realities: one, everyday life; the other, \
                          what lies behind it."
                .to_string(),
            content: ContentPayload::Movie {
                tmdb_id: 624860,
                release_date: "2021-12-15".to_string(),
                rating: 5.7,
                vote_count: 8420,
            },
            image_url: Some(
                "https://images.unsplash.com/photo-1489599735734-79b4af4e8c3b?w=500".to_string(),
            ),
            source_url: None,
            category: Some("entertainment".to_string()),
            published_at: Utc.with_ymd_and_hms(2021, 12, 15, 0, 0, 0).single(),
            is_trending: false,
        },
        NewContentItem {
            content_type: ContentType::News,
            title: "Global Markets Show Strong Recovery in Q4".to_string(),
            description: "Financial markets worldwide demonstrate resilience with significant \
                          gains across major indices."
                .to_string(),
            content: ContentPayload::News {
                source: "Financial Times".to_string(),
                author: Some("Michael Rodriguez".to_string()),
                url: "#".to_string(),
            },
            image_url: Some(
                "https://images.unsplash.com/photo-1611974789855-9c2a0a7236a3?w=500".to_string(),
            ),
            source_url: Some("#".to_string()),
            category: Some("finance".to_string()),
            published_at: Some(now - Duration::hours(4)),
            is_trending: false,
        },
        NewContentItem {
            content_type: ContentType::Movie,
            title: "Inception".to_string(),
            description: "A thief who steals corporate secrets through dream-sharing technology \
                          is given the inverse task of planting an idea."
                .to_string(),
            content: ContentPayload::Movie {
                tmdb_id: 27205,
                release_date: "2010-07-16".to_string(),
                rating: 8.8,
                vote_count: 35000,
            },
            image_url: Some(
                "https://images.unsplash.com/photo-1440404653325-ab127d49abc1?w=500".to_string(),
            ),
            source_url: None,
            category: Some("entertainment".to_string()),
            published_at: Utc.with_ymd_and_hms(2010, 7, 16, 0, 0, 0).single(),
            is_trending: false,
        },
        NewContentItem {
            content_type: ContentType::News,
            title: "Cryptocurrency Market Sees Major Breakthrough in DeFi Technology".to_string(),
            description: "New decentralized finance protocols show promise for transforming \
                          traditional banking systems."
                .to_string(),
            content: ContentPayload::News {
                source: "Crypto Weekly".to_string(),
                author: Some("Alex Thompson".to_string()),
                url: "#".to_string(),
            },
            image_url: Some(
                "https://images.unsplash.com/photo-1639762681485-074b7f938ba0?w=500".to_string(),
            ),
            source_url: Some("#".to_string()),
            category: Some("finance".to_string()),
            published_at: Some(now - Duration::minutes(30)),
            is_trending: true,
        },
        NewContentItem {
            content_type: ContentType::Social,
            title: "Frontend Development Tips".to_string(),
            description: "Best practices for modern web development".to_string(),
            content: ContentPayload::Social {
                author: SocialAuthor {
                    name: "Dev Daily".to_string(),
                    handle: "@devdaily".to_string(),
                    avatar: None,
                },
                text: "Just shipped a dashboard rebuild. Key learnings: keep state management \
                       boring and type your API layer end to end. #WebDev"
                    .to_string(),
                likes: 128,
                retweets: 34,
                platform: "twitter".to_string(),
            },
            image_url: None,
            source_url: None,
            category: Some("technology".to_string()),
            published_at: Some(now - Duration::minutes(45)),
            is_trending: true,
        },
    ]
}

impl ContentStore {
    /// Seed-only user insert that bypasses the uniqueness scan and keeps the
    /// caller-chosen fixed id.
    pub(crate) async fn insert_seed_user(&self, user: User) {
        let mut state = self.state.write().await;
        state.users.insert(user.id, user);
    }
}
