mod common;

use query_gateway::application::services::TagService;
use query_gateway::domain::repositories::TagRepository;
use query_gateway::infrastructure::persistence::PgTagRepository;
use sqlx::PgPool;
use std::sync::Arc;

// 2024-01-01 is a Monday. Posts are created at noon so the weekday holds in
// any session time zone.
async fn seed_tagged_posts(pool: &PgPool) {
    common::create_test_tag(pool, 1, "sql").await;
    common::create_test_tag(pool, 2, "rust").await;

    common::create_test_post(pool, 1, None, "Mon sql", "b", "2024-01-01T12:00:00Z").await;
    common::create_test_post(pool, 2, None, "Mon plain", "b", "2024-01-01T12:00:00Z").await;
    common::create_test_post(pool, 3, None, "Tue sql", "b", "2024-01-02T12:00:00Z").await;
    common::create_test_post(pool, 4, None, "Wed rust", "b", "2024-01-03T12:00:00Z").await;

    common::tag_post(pool, 1, 1).await;
    common::tag_post(pool, 3, 1).await;
    common::tag_post(pool, 4, 2).await;
}

#[sqlx::test]
async fn test_weekday_shares_cover_every_day(pool: PgPool) {
    let repo = PgTagRepository::new(Arc::new(pool.clone()));
    seed_tagged_posts(&pool).await;

    let shares = repo.weekday_shares("sql").await.unwrap();

    assert_eq!(shares.len(), 7);
    assert_eq!(shares[0].isodow, 1);
    assert_eq!(shares[0].percentage, 50.0);
    assert_eq!(shares[1].percentage, 100.0);
    assert_eq!(shares[2].percentage, 0.0);
    assert!(shares.iter().all(|s| (0.0..=100.0).contains(&s.percentage)));
}

#[sqlx::test]
async fn test_weekday_shares_unknown_tag(pool: PgPool) {
    let repo = PgTagRepository::new(Arc::new(pool.clone()));
    seed_tagged_posts(&pool).await;

    let shares = repo.weekday_shares("haskell").await.unwrap();

    assert_eq!(shares.len(), 7);
    assert!(shares.iter().all(|s| s.percentage == 0.0));
}

#[sqlx::test]
async fn test_comment_gaps_running_average(pool: PgPool) {
    let repo = PgTagRepository::new(Arc::new(pool.clone()));
    seed_tagged_posts(&pool).await;

    common::create_test_comment(&pool, 100, 1, None, "first", "2024-01-01T12:01:00Z").await;
    common::create_test_comment(&pool, 101, 1, None, "second", "2024-01-01T12:05:00Z").await;

    let gaps = repo.comment_gaps("sql", 1).await.unwrap();

    assert_eq!(gaps.len(), 2);
    assert!(gaps.iter().all(|g| g.post_id == 1));
    assert_eq!(gaps[0].diff_ms, 60_000.0);
    assert_eq!(gaps[0].avg_ms, 60_000.0);
    assert_eq!(gaps[1].diff_ms, 240_000.0);
    assert_eq!(gaps[1].avg_ms, 150_000.0);
}

#[sqlx::test]
async fn test_comment_gaps_require_more_than_count(pool: PgPool) {
    let repo = PgTagRepository::new(Arc::new(pool.clone()));
    seed_tagged_posts(&pool).await;

    common::create_test_comment(&pool, 100, 1, None, "first", "2024-01-01T12:01:00Z").await;
    common::create_test_comment(&pool, 101, 1, None, "second", "2024-01-01T12:05:00Z").await;

    let gaps = repo.comment_gaps("sql", 2).await.unwrap();

    assert!(gaps.is_empty());
}

#[sqlx::test]
async fn test_comments_at_position(pool: PgPool) {
    let repo = PgTagRepository::new(Arc::new(pool.clone()));
    seed_tagged_posts(&pool).await;
    common::create_test_user(&pool, 7, "bob", "2020-01-01T00:00:00Z").await;

    common::create_test_comment(&pool, 100, 1, Some(7), "p1 first", "2024-01-01T12:01:00Z").await;
    common::create_test_comment(&pool, 101, 1, None, "p1 second", "2024-01-01T12:05:00Z").await;
    common::create_test_comment(&pool, 102, 3, None, "p3 first", "2024-01-02T12:02:00Z").await;

    let second = repo.comments_at_position("sql", 2, 10).await.unwrap();
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].id, 101);
    assert_eq!(second[0].position, 2);

    let first = repo.comments_at_position("sql", 1, 10).await.unwrap();
    let ids: Vec<i32> = first.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![100, 102]);
    assert_eq!(first[0].displayname.as_deref(), Some("bob"));

    let limited = repo.comments_at_position("sql", 1, 1).await.unwrap();
    assert_eq!(limited.len(), 1);

    let beyond = repo.comments_at_position("sql", 5, 10).await.unwrap();
    assert!(beyond.is_empty());
}

#[sqlx::test]
async fn test_simultaneous_comments_ordered_by_id(pool: PgPool) {
    let repo = PgTagRepository::new(Arc::new(pool.clone()));
    seed_tagged_posts(&pool).await;

    common::create_test_comment(&pool, 201, 1, None, "second by id", "2024-01-01T12:01:00Z").await;
    common::create_test_comment(&pool, 200, 1, None, "first by id", "2024-01-01T12:01:00Z").await;

    let gaps = repo.comment_gaps("sql", 1).await.unwrap();

    assert_eq!(gaps.len(), 2);
    assert_eq!(gaps[0].text.as_deref(), Some("first by id"));
    assert_eq!(gaps[0].diff_ms, 60_000.0);
    assert_eq!(gaps[1].text.as_deref(), Some("second by id"));
    assert_eq!(gaps[1].diff_ms, 0.0);
    assert_eq!(gaps[1].avg_ms, 30_000.0);

    let second = repo.comments_at_position("sql", 2, 10).await.unwrap();
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].id, 201);
}

#[sqlx::test]
async fn test_simultaneous_comment_timing_formats_zero_gap(pool: PgPool) {
    let service = TagService::new(Arc::new(PgTagRepository::new(Arc::new(pool.clone()))));
    seed_tagged_posts(&pool).await;

    common::create_test_comment(&pool, 200, 1, None, "a", "2024-01-01T12:01:00Z").await;
    common::create_test_comment(&pool, 201, 1, None, "b", "2024-01-01T12:01:00Z").await;

    let timings = service.comment_timings("sql", 1).await.unwrap();

    assert_eq!(timings[0].diff, "00:01:00.000");
    assert_eq!(timings[1].diff, "00:00:00.000");
    assert_eq!(timings[1].avg, "00:00:30.000");
}
