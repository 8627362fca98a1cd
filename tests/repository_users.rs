mod common;

use query_gateway::application::services::UserService;
use query_gateway::domain::entities::TimelineKind;
use query_gateway::domain::repositories::UserRepository;
use query_gateway::infrastructure::persistence::PgUserRepository;
use sqlx::PgPool;
use std::sync::Arc;

async fn seed_users(pool: &PgPool) {
    common::create_test_user(pool, 1, "alice", "2020-01-01T00:00:00Z").await;
    common::create_test_user(pool, 2, "bob", "2021-01-01T00:00:00Z").await;
    common::create_test_user(pool, 3, "carol", "2022-01-01T00:00:00Z").await;
    common::create_test_user(pool, 4, "dave", "2023-01-01T00:00:00Z").await;
}

#[sqlx::test]
async fn test_post_commenters_most_recent_first(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool.clone()));
    seed_users(&pool).await;

    common::create_test_post(&pool, 10, Some(1), "Joins", "body", "2024-01-01T08:00:00Z").await;
    common::create_test_comment(&pool, 100, 10, Some(2), "early", "2024-01-01T09:00:00Z").await;
    common::create_test_comment(&pool, 101, 10, Some(2), "again", "2024-01-01T10:00:00Z").await;
    common::create_test_comment(&pool, 102, 10, Some(3), "late", "2024-01-01T11:00:00Z").await;

    let users = repo.find_post_commenters(10).await.unwrap();

    let ids: Vec<i32> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![3, 2]);
    assert_eq!(users[0].displayname, "carol");
    assert_eq!(users[0].reputation, 1);
    assert_eq!(users[0].creationdate, common::ts("2024-01-01T11:00:00Z"));
    assert_eq!(users[1].creationdate, common::ts("2024-01-01T10:00:00Z"));
    assert_eq!(users[0].location, None);
}

#[sqlx::test]
async fn test_post_commenters_unknown_post(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool.clone()));
    seed_users(&pool).await;

    let users = repo.find_post_commenters(999).await.unwrap();

    assert!(users.is_empty());
}

#[sqlx::test]
async fn test_friends_through_own_and_commented_posts(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool.clone()));
    seed_users(&pool).await;

    // bob comments on alice's post; alice and carol comment on carol's post.
    common::create_test_post(&pool, 10, Some(1), "Mine", "body", "2024-01-01T08:00:00Z").await;
    common::create_test_post(&pool, 20, Some(3), "Theirs", "body", "2024-01-01T08:00:00Z").await;
    common::create_test_post(&pool, 30, Some(4), "Elsewhere", "body", "2024-01-01T08:00:00Z").await;
    common::create_test_comment(&pool, 100, 10, Some(2), "hi", "2024-01-01T09:00:00Z").await;
    common::create_test_comment(&pool, 101, 20, Some(1), "hello", "2024-01-01T09:00:00Z").await;
    common::create_test_comment(&pool, 102, 20, Some(3), "reply", "2024-01-01T10:00:00Z").await;
    common::create_test_comment(&pool, 103, 30, Some(4), "alone", "2024-01-01T10:00:00Z").await;

    let users = repo.find_friends(1).await.unwrap();

    let ids: Vec<i32> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(users[1].creationdate, common::ts("2021-01-01T00:00:00Z"));
}

#[sqlx::test]
async fn test_badge_post_pairs(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool.clone()));
    seed_users(&pool).await;

    common::create_test_post(&pool, 100, Some(1), "First", "body", "2024-01-01T12:00:00Z").await;
    common::create_test_post(&pool, 101, Some(1), "Second", "body", "2024-01-05T12:00:00Z").await;
    common::create_test_badge(&pool, 500, 1, "Too Early", "2023-12-01T12:00:00Z").await;
    common::create_test_badge(&pool, 501, 1, "Student", "2024-01-03T12:00:00Z").await;
    common::create_test_badge(&pool, 502, 1, "Teacher", "2024-01-06T12:00:00Z").await;
    common::create_test_badge(&pool, 503, 1, "Editor", "2024-01-07T12:00:00Z").await;

    let pairs = repo.find_badge_post_pairs(1).await.unwrap();

    let ids: Vec<(i32, i32)> = pairs.iter().map(|p| (p.post_id, p.badge_id)).collect();
    assert_eq!(ids, vec![(100, 501), (101, 502)]);
}

#[sqlx::test]
async fn test_badge_history_timeline(pool: PgPool) {
    let service = UserService::new(Arc::new(PgUserRepository::new(Arc::new(pool.clone()))));
    seed_users(&pool).await;

    common::create_test_post(&pool, 100, Some(1), "First", "body", "2024-01-01T12:00:00Z").await;
    common::create_test_badge(&pool, 501, 1, "Student", "2024-01-03T12:00:00Z").await;

    let entries = service.badge_history(1).await.unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].kind, TimelineKind::Post);
    assert_eq!(entries[0].id, 100);
    assert_eq!(entries[1].kind, TimelineKind::Badge);
    assert_eq!(entries[1].title.as_deref(), Some("Student"));
    assert!(entries.iter().all(|e| e.position == 1));
}

#[sqlx::test]
async fn test_badge_pairs_equal_post_times_prefer_higher_post_id(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool.clone()));
    seed_users(&pool).await;

    common::create_test_post(&pool, 101, Some(1), "Later id", "body", "2024-01-01T12:00:00Z").await;
    common::create_test_post(&pool, 100, Some(1), "Earlier id", "body", "2024-01-01T12:00:00Z").await;
    common::create_test_badge(&pool, 501, 1, "Student", "2024-01-03T12:00:00Z").await;

    let pairs = repo.find_badge_post_pairs(1).await.unwrap();

    let ids: Vec<(i32, i32)> = pairs.iter().map(|p| (p.post_id, p.badge_id)).collect();
    assert_eq!(ids, vec![(101, 501)]);
}

#[sqlx::test]
async fn test_badge_pairs_equal_badge_dates_prefer_lower_badge_id(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool.clone()));
    seed_users(&pool).await;

    common::create_test_post(&pool, 100, Some(1), "Only", "body", "2024-01-01T12:00:00Z").await;
    common::create_test_badge(&pool, 502, 1, "Editor", "2024-01-03T12:00:00Z").await;
    common::create_test_badge(&pool, 501, 1, "Student", "2024-01-03T12:00:00Z").await;

    let pairs = repo.find_badge_post_pairs(1).await.unwrap();

    let ids: Vec<(i32, i32)> = pairs.iter().map(|p| (p.post_id, p.badge_id)).collect();
    assert_eq!(ids, vec![(100, 501)]);
}
