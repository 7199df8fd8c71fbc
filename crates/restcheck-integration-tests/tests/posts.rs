//! Posts conformance tests

use restcheck::types::CreatePost;
use restcheck_integration_tests::TestHarness;
use rstest::rstest;
use serde_json::json;

#[tokio::test]
async fn test_get_posts() {
    let harness = TestHarness::simulated();
    harness.reset();

    let posts = harness.client.posts().list().await.expect("list posts");

    assert_eq!(posts.len(), 2);
    assert!(posts.iter().all(|p| !p.title.is_empty()));
}

#[tokio::test]
async fn test_get_user_posts() {
    let harness = TestHarness::simulated();
    harness.reset();

    let posts = harness
        .client
        .posts()
        .list_for_user(5)
        .await
        .expect("list user posts");

    // Fixed single-item list; the simulator keeps no per-id correlation
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].title, "Test Post");
}

#[tokio::test]
async fn test_user_posts_route_not_swallowed_by_user_route() {
    let harness = TestHarness::simulated();
    harness.reset();

    // If /users/{id} matched first this would parse as a user entity and
    // the list deserialization would fail.
    let posts = harness
        .client
        .posts()
        .list_for_user(5)
        .await
        .expect("list user posts");
    assert!(!posts.is_empty());

    let user = harness.client.users().get(5).await.expect("get user");
    assert_eq!(user.id, 5);
}

#[tokio::test]
async fn test_create_post() {
    let harness = TestHarness::simulated();
    harness.reset();

    let payload = CreatePost::random();
    let post = harness
        .client
        .posts()
        .create_for_user(7, &payload)
        .await
        .expect("create post");

    assert_eq!(post.id, 12345);
    assert_eq!(post.title, payload.title);
    assert_eq!(post.body, payload.body);
}

#[rstest]
#[case::missing_body(json!({"title": "Test Post"}))]
#[case::missing_title(json!({"body": "Test Body"}))]
#[case::empty(json!({}))]
#[tokio::test]
async fn test_create_post_missing_fields(#[case] payload: serde_json::Value) {
    let harness = TestHarness::simulated();
    harness.reset();

    let err = harness
        .client
        .posts()
        .create_for_user_raw(7, payload)
        .await
        .unwrap_err();

    assert!(err.is_validation());
    let errors = err.field_errors().expect("field errors");
    assert_eq!(errors[0].field, "title");
    assert_eq!(errors[0].message, "can't be blank");
}
