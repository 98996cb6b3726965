//! Integration tests for video reads scoped by visibility, and renditions.
//!
//! - Anonymous callers see published videos only
//! - Users additionally see their own unpublished videos
//! - Administrators see everything
//! - Renditions are unique per (video, quality) and listed in batches

use sqlx::PgPool;
use vidcat_core::quality::RenditionQuality;
use vidcat_core::visibility::Viewer;
use vidcat_db::models::rendition::CreateRendition;
use vidcat_db::models::user::{CreateUser, User};
use vidcat_db::models::video::{CreateVideo, UpdateVideo, Video};
use vidcat_db::repositories::{RenditionRepo, UserRepo, VideoRepo};
use vidcat_db::visibility::VisibilityFilter;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn new_user(pool: &PgPool, username: &str, is_staff: bool) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            password_hash: "not-a-real-hash".to_string(),
            is_staff,
        },
    )
    .await
    .unwrap()
}

async fn new_video(pool: &PgPool, owner_id: i64, name: &str, published: bool) -> Video {
    VideoRepo::create(
        pool,
        owner_id,
        &CreateVideo {
            name: name.to_string(),
            is_published: Some(published),
        },
    )
    .await
    .unwrap()
}

async fn visible_names(pool: &PgPool, viewer: Viewer) -> Vec<String> {
    let mut names: Vec<String> = VideoRepo::list_visible(pool, &VisibilityFilter::from(&viewer))
        .await
        .unwrap()
        .into_iter()
        .map(|v| v.name)
        .collect();
    names.sort();
    names
}

/// Owner with one published and one draft video, plus a stranger and an admin.
async fn setup_catalog(pool: &PgPool) -> (User, User, User) {
    let owner = new_user(pool, "owner", false).await;
    let stranger = new_user(pool, "stranger", false).await;
    let admin = new_user(pool, "admin", true).await;
    new_video(pool, owner.id, "public", true).await;
    new_video(pool, owner.id, "draft", false).await;
    new_video(pool, stranger.id, "stranger_draft", false).await;
    (owner, stranger, admin)
}

// ---------------------------------------------------------------------------
// Visibility
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_anonymous_sees_only_published(pool: PgPool) {
    setup_catalog(&pool).await;

    assert_eq!(visible_names(&pool, Viewer::Anonymous).await, vec!["public"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_sees_published_and_own(pool: PgPool) {
    let (owner, stranger, _) = setup_catalog(&pool).await;

    assert_eq!(
        visible_names(&pool, Viewer::User(owner.id)).await,
        vec!["draft", "public"]
    );
    assert_eq!(
        visible_names(&pool, Viewer::User(stranger.id)).await,
        vec!["public", "stranger_draft"]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_sees_everything(pool: PgPool) {
    let (_, _, admin) = setup_catalog(&pool).await;

    assert_eq!(
        visible_names(&pool, Viewer::Admin(admin.id)).await,
        vec!["draft", "public", "stranger_draft"]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_visible_applies_same_rule(pool: PgPool) {
    let owner = new_user(&pool, "owner", false).await;
    let stranger = new_user(&pool, "stranger", false).await;
    let draft = new_video(&pool, owner.id, "draft", false).await;

    let as_anon = VideoRepo::find_visible(&pool, draft.id, &VisibilityFilter::from(&Viewer::Anonymous))
        .await
        .unwrap();
    assert!(as_anon.is_none());

    let as_stranger =
        VideoRepo::find_visible(&pool, draft.id, &VisibilityFilter::from(&Viewer::User(stranger.id)))
            .await
            .unwrap();
    assert!(as_stranger.is_none());

    let as_owner =
        VideoRepo::find_visible(&pool, draft.id, &VisibilityFilter::from(&Viewer::User(owner.id)))
            .await
            .unwrap()
            .expect("owner must see own draft");
    assert_eq!(as_owner.owner_username, "owner");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_is_newest_first(pool: PgPool) {
    let owner = new_user(&pool, "owner", false).await;
    let first = new_video(&pool, owner.id, "first", true).await;
    let second = new_video(&pool, owner.id, "second", true).await;

    let listed = VideoRepo::list_visible(&pool, &VisibilityFilter::from(&Viewer::Anonymous))
        .await
        .unwrap();

    let ids: Vec<i64> = listed.iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_published_ids_and_update(pool: PgPool) {
    let owner = new_user(&pool, "owner", false).await;
    let public = new_video(&pool, owner.id, "public", true).await;
    let draft = new_video(&pool, owner.id, "draft", false).await;

    let ids: Vec<i64> = VideoRepo::list_published_ids(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|v| v.id)
        .collect();
    assert_eq!(ids, vec![public.id]);

    let updated = VideoRepo::update(
        &pool,
        draft.id,
        &UpdateVideo {
            name: None,
            is_published: Some(true),
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert!(updated.is_published);
    assert_eq!(updated.name, "draft");
    assert_eq!(updated.total_likes, 0);
    assert_eq!(VideoRepo::list_published_ids(&pool).await.unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Renditions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_rendition_quality_is_unique_per_video(pool: PgPool) {
    let owner = new_user(&pool, "owner", false).await;
    let video = new_video(&pool, owner.id, "clip", true).await;
    let input = CreateRendition {
        file_path: "videos/clip_720.mp4".to_string(),
        quality: RenditionQuality::Hd,
    };

    let created = RenditionRepo::create(&pool, video.id, &input).await.unwrap();
    assert_eq!(created.quality, RenditionQuality::Hd);

    let duplicate = RenditionRepo::create(&pool, video.id, &input).await;
    match duplicate {
        Err(sqlx::Error::Database(db_err)) => {
            assert_eq!(db_err.constraint(), Some("uq_video_renditions_video_quality"));
        }
        other => panic!("expected unique violation, got {other:?}"),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_renditions_listed_per_video_batch(pool: PgPool) {
    let owner = new_user(&pool, "owner", false).await;
    let a = new_video(&pool, owner.id, "a", true).await;
    let b = new_video(&pool, owner.id, "b", true).await;
    for quality in RenditionQuality::ALL {
        RenditionRepo::create(
            &pool,
            a.id,
            &CreateRendition {
                file_path: format!("videos/a_{}.mp4", quality.as_str()),
                quality,
            },
        )
        .await
        .unwrap();
    }
    RenditionRepo::create(
        &pool,
        b.id,
        &CreateRendition {
            file_path: "videos/b.mp4".to_string(),
            quality: RenditionQuality::Uhd,
        },
    )
    .await
    .unwrap();

    let batch = RenditionRepo::list_by_videos(&pool, &[a.id, b.id]).await.unwrap();
    assert_eq!(batch.len(), 4);
    let a_qualities: Vec<RenditionQuality> = batch
        .iter()
        .filter(|r| r.video_id == a.id)
        .map(|r| r.quality)
        .collect();
    assert_eq!(a_qualities, RenditionQuality::ALL.to_vec());
    assert_eq!(RenditionRepo::list_by_video(&pool, b.id).await.unwrap().len(), 1);
    assert!(RenditionRepo::list_by_videos(&pool, &[]).await.unwrap().is_empty());

    VideoRepo::delete(&pool, a.id).await.unwrap();
    assert!(RenditionRepo::list_by_video(&pool, a.id).await.unwrap().is_empty());
}
