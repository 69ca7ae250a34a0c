//! Full lookups through the HTTP client against a mock TMDB.

mod common;

use assert_matches::assert_matches;
use common::TestHarness;
use serde_json::json;

use tmdb_gatherer::host::{GatherTypes, MediaInfo, MetadataArtAggregator};
use tmdb_gatherer::{Error, GatherOutcome};

async fn mount_show(harness: &TestHarness) {
    harness.mount_configuration().await;
    harness
        .mount_json(
            "/search/tv",
            json!({"results": [{"id": 10, "name": "Show Name", "original_name": "Show Name"}]}),
        )
        .await;
    harness
        .mount_json(
            "/tv/10",
            json!({
                "id": 10,
                "original_name": "Show Name",
                "first_air_date": "2010-05-01",
                "genres": [{"name": "Drama"}]
            }),
        )
        .await;
}

#[tokio::test]
async fn episode_lookup_end_to_end() {
    let harness = TestHarness::new().await;
    mount_show(&harness).await;
    harness
        .mount_json("/tv/10/season/2", json!({"id": 1, "poster_path": "/p.jpg"}))
        .await;
    harness
        .mount_json(
            "/tv/10/season/2/episode/5",
            json!({
                "id": 99,
                "season_number": 2,
                "episode_number": 5,
                "name": "Ep Title",
                "overview": "desc",
                "still_path": "/s.jpg"
            }),
        )
        .await;

    let media = MediaInfo::new("/media/tv/Show.Name.S02E05.mkv").with_episode(5);
    let outcome = harness
        .gatherer()
        .get_metadata(&GatherTypes::new(["tvshow"]), &media)
        .await;

    let md = assert_matches!(outcome, GatherOutcome::Matched(md) => md);
    let value = serde_json::to_value(&md).unwrap();
    assert_eq!(
        value,
        json!({
            "tvshow": "Show Name",
            "tvshow_year": 2010,
            "tmdb_id": 99,
            "tmdb_tvshow_id": 10,
            "original_name": "Ep Title",
            "art": "https://image.tmdb.org/t/p/original/s.jpg",
            "genre": ["Drama"],
            "description": "desc",
            "tvshow_season": 2,
            "tvshow_episode": 5,
            "tvshow_season_art": "https://image.tmdb.org/t/p/original/p.jpg"
        })
    );
}

#[tokio::test]
async fn unknown_season_stops_before_episode() {
    let harness = TestHarness::new().await;
    mount_show(&harness).await;
    harness.mount_status("/tv/10/season/7", 404).await;
    harness.forbid("/tv/10/season/7/episode/1").await;

    let media = MediaInfo::new("Show.Name.S07E01.mkv").with_episode(1);
    let outcome = harness
        .gatherer()
        .get_metadata(&GatherTypes::new(["tvshow"]), &media)
        .await;

    let md = assert_matches!(outcome, GatherOutcome::Matched(md) => md);
    assert_eq!(md.tmdb_tvshow_id, Some(10));
    assert_eq!(md.tvshow_season_art, None);
    assert_eq!(md.tmdb_id, None);
}

#[tokio::test]
async fn movie_lookup_end_to_end() {
    let harness = TestHarness::new().await;
    harness.mount_configuration().await;
    harness
        .mount_json(
            "/search/movie",
            json!({"results": [{"id": 603, "title": "The Matrix"}, {"id": 604}]}),
        )
        .await;
    harness
        .mount_json(
            "/movie/603",
            json!({
                "id": 603,
                "imdb_id": "tt0133093",
                "original_title": "The Matrix",
                "release_date": "1999-03-31",
                "poster_path": "/poster.jpg",
                "backdrop_path": null,
                "genres": [{"id": 28, "name": "Action"}, {"id": 878, "name": "Science Fiction"}]
            }),
        )
        .await;

    let outcome = harness
        .gatherer()
        .get_metadata(
            &GatherTypes::new(["movie"]),
            &MediaInfo::new("The.Matrix.1999.1080p.BluRay.x264-GROUP.mkv"),
        )
        .await;

    let md = assert_matches!(outcome, GatherOutcome::Matched(md) => md);
    assert_eq!(md.title.as_deref(), Some("The Matrix"));
    assert_eq!(md.tmdb_id, Some(603));
    assert_eq!(md.imdb_id.as_deref(), Some("tt0133093"));
    assert_eq!(md.release_date, Some(922_838_400));
    assert_eq!(md.year, Some(1999));
    assert_eq!(
        md.art.as_deref(),
        Some("https://image.tmdb.org/t/p/original/poster.jpg")
    );
    assert_eq!(md.background_art, None);
    assert_eq!(
        md.genre,
        Some(vec!["Action".to_string(), "Science Fiction".to_string()])
    );
}

#[tokio::test]
async fn blank_image_paths_are_omitted() {
    let harness = TestHarness::new().await;
    harness.mount_configuration().await;
    harness
        .mount_json("/search/movie", json!({"results": [{"id": 603}]}))
        .await;
    harness
        .mount_json(
            "/movie/603",
            json!({"id": 603, "poster_path": "", "backdrop_path": ""}),
        )
        .await;

    let outcome = harness
        .gatherer()
        .get_metadata(
            &GatherTypes::new(["movie"]),
            &MediaInfo::new("The.Matrix.1999.mkv"),
        )
        .await;

    let md = assert_matches!(outcome, GatherOutcome::Matched(md) => md);
    let value = serde_json::to_value(&md).unwrap();
    assert!(value.get("art").is_none());
    assert!(value.get("background_art").is_none());
    assert_eq!(md.tmdb_id, Some(603));
}

#[tokio::test]
async fn remote_failure_returns_partial_result() {
    let harness = TestHarness::new().await;
    harness.mount_configuration().await;
    harness
        .mount_json("/search/movie", json!({"results": [{"id": 603}]}))
        .await;
    harness.mount_status("/movie/603", 500).await;

    let outcome = harness
        .gatherer()
        .get_metadata(
            &GatherTypes::new(["movie"]),
            &MediaInfo::new("The.Matrix.1999.mkv"),
        )
        .await;

    let (partial, error) =
        assert_matches!(outcome, GatherOutcome::Failed { partial, error } => (partial, error));
    assert_matches!(error, Error::Status { status: 500, .. });
    assert_eq!(
        serde_json::to_value(&partial).unwrap(),
        json!({"title": "The Matrix", "year": 1999, "tmdb_id": 603})
    );
}

#[tokio::test]
async fn unparseable_name_never_reaches_tmdb() {
    let harness = TestHarness::new().await;
    harness.forbid("/configuration").await;
    harness.forbid("/search/movie").await;

    let outcome = harness
        .gatherer()
        .get_metadata(&GatherTypes::new(["movie"]), &MediaInfo::new("1080p.x264.mkv"))
        .await;

    assert!(outcome.into_metadata().is_none());
}

#[tokio::test]
async fn season_art_through_aggregator() {
    let harness = TestHarness::new().await;
    mount_show(&harness).await;
    harness
        .mount_json("/tv/10/season/2", json!({"id": 1, "poster_path": "/p.jpg"}))
        .await;

    let arts = harness
        .gatherer()
        .gather_arts(
            &MetadataArtAggregator,
            "tvshow_season",
            &MediaInfo::new("Show.Name.S02E05.mkv"),
            5,
        )
        .await;

    assert_eq!(arts.len(), 1);
    assert_eq!(arts[0].url, "https://image.tmdb.org/t/p/original/p.jpg");
}
