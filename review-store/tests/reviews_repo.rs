use review_store::{Error, NewReview, ReviewDigest, ReviewStore};
use tempfile::TempDir;

async fn open_store() -> (TempDir, ReviewStore) {
    let temp_dir = TempDir::new().unwrap();
    let store = ReviewStore::open(temp_dir.path().join("reviews.db"))
        .await
        .unwrap();
    (temp_dir, store)
}

fn new_review(rating: i64, text: &str) -> NewReview {
    NewReview {
        rating,
        review: text.to_string(),
        ai_response: format!("Thanks for: {text}"),
        ai_summary: format!("Summary of {text}"),
        ai_action: "N/A".to_string(),
    }
}

#[tokio::test]
async fn insert_assigns_increasing_ids() {
    let (_dir, store) = open_store().await;
    let repo = store.reviews();

    let first = repo.insert(&new_review(5, "Great")).await.unwrap();
    let second = repo.insert(&new_review(1, "Bad")).await.unwrap();

    assert!(first > 0);
    assert!(second > first);
    assert_eq!(repo.count().await.unwrap(), 2);
}

#[tokio::test]
async fn find_by_id_round_trips_every_column() {
    let (_dir, store) = open_store().await;
    let repo = store.reviews();

    let id = repo.insert(&new_review(3, "  padded text  ")).await.unwrap();
    let stored = repo.find_by_id(id).await.unwrap();

    assert_eq!(stored.id, id);
    assert_eq!(stored.rating, 3);
    assert_eq!(stored.review, "  padded text  ");
    assert_eq!(stored.ai_response, "Thanks for:   padded text  ");
    assert_eq!(stored.ai_action, "N/A");
}

#[tokio::test]
async fn find_missing_id_is_not_found() {
    let (_dir, store) = open_store().await;
    let err = store.reviews().find_by_id(42).await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[tokio::test]
async fn rating_is_stored_without_range_checks() {
    let (_dir, store) = open_store().await;
    let repo = store.reviews();

    let id = repo.insert(&new_review(-7, "odd")).await.unwrap();
    assert_eq!(repo.find_by_id(id).await.unwrap().rating, -7);

    let id = repo.insert(&new_review(1_000, "odder")).await.unwrap();
    assert_eq!(repo.find_by_id(id).await.unwrap().rating, 1_000);
}

#[tokio::test]
async fn digests_project_admin_fields_in_insertion_order() {
    let (_dir, store) = open_store().await;
    let repo = store.reviews();

    repo.insert(&new_review(5, "Great")).await.unwrap();
    repo.insert(&new_review(2, "Meh")).await.unwrap();

    let digests = repo.list_digests().await.unwrap();
    assert_eq!(
        digests,
        vec![
            ReviewDigest {
                rating: 5,
                review: "Great".into(),
                ai_summary: "Summary of Great".into(),
                ai_action: "N/A".into(),
            },
            ReviewDigest {
                rating: 2,
                review: "Meh".into(),
                ai_summary: "Summary of Meh".into(),
                ai_action: "N/A".into(),
            },
        ]
    );

    assert_eq!(repo.count().await.unwrap(), 2);
}

#[tokio::test]
async fn empty_store_lists_nothing() {
    let (_dir, store) = open_store().await;
    assert!(store.reviews().list_digests().await.unwrap().is_empty());
    assert_eq!(store.reviews().count().await.unwrap(), 0);
}
