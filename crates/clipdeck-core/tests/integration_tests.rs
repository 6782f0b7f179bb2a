//! Integration tests for Clipdeck Core

use clipdeck_core::{
    ActiveTracking, Catalog, Error, PlaybackSpeed, Player, PlayerAction, PlayerConfig,
    RecordingSurface, SkipDirection, SurfaceCall, VideoEntry, Volume,
};
use std::io::Write;
use url::Url;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("clipdeck_core=debug")
        .with_test_writer()
        .try_init();
}

fn catalog(titles: &[&str]) -> Catalog {
    let base = Url::parse("https://media.example.com/").unwrap();
    let entries = titles
        .iter()
        .enumerate()
        .map(|(i, title)| {
            VideoEntry::new(
                i as u32 + 1,
                base.join(&format!("{title}.mp4")).unwrap(),
                *title,
                base.join(&format!("{title}.jpg")).unwrap(),
            )
        })
        .collect();
    Catalog::new(entries).unwrap()
}

fn mounted(titles: &[&str], config: PlayerConfig) -> Player<RecordingSurface> {
    init_tracing();
    let mut player = Player::new(catalog(titles), config, RecordingSurface::new()).unwrap();
    player.mount();
    player.surface_mut().take_calls();
    player
}

fn order(player: &Player<RecordingSurface>) -> Vec<String> {
    player.playlist().iter().map(|e| e.title.clone()).collect()
}

// =============================================================================
// Transport Tests
// =============================================================================

#[test]
fn test_skip_wraparound_for_all_lengths() {
    for len in 1..=6 {
        let titles: Vec<String> = (0..len).map(|i| format!("v{i}")).collect();
        let refs: Vec<&str> = titles.iter().map(String::as_str).collect();

        for start in 0..len {
            let mut player = mounted(&refs, PlayerConfig::default());
            player.select(start).unwrap();

            player.skip(SkipDirection::Forward);
            assert_eq!(player.state().current_index, (start + 1) % len);

            player.select(start).unwrap();
            player.skip(SkipDirection::Backward);
            assert_eq!(player.state().current_index, (start + len - 1) % len);
        }
    }
}

#[test]
fn test_skip_always_resets_speed() {
    for speed in PlaybackSpeed::ALL {
        for direction in [SkipDirection::Forward, SkipDirection::Backward] {
            let mut player = mounted(&["A", "B", "C"], PlayerConfig::default());
            player.set_speed(speed).unwrap();
            player.skip(direction);
            assert_eq!(player.state().speed, PlaybackSpeed::Normal);
            assert_eq!(player.surface().playback_rate(), 1.0);
        }
    }
}

#[test]
fn test_end_of_last_track_wraps_and_keeps_playing() {
    let mut player = mounted(&["A", "B", "C"], PlayerConfig::default());
    player.select(2).unwrap();

    player.dispatch(PlayerAction::Ended).unwrap();

    assert_eq!(player.state().current_index, 0);
    assert!(player.state().is_playing);
    assert_eq!(player.current_entry().title, "A");
    assert_eq!(player.surface().source().unwrap().path(), "/A.mp4");
}

#[test]
fn test_volume_pushed_once_per_change() {
    let mut player = mounted(&["A", "B"], PlayerConfig::default());

    for level in [0.0, 0.01, 0.42, 0.42, 1.0] {
        player.surface_mut().take_calls();
        player.set_volume(Volume::new(level));

        assert_eq!(player.surface().calls(), &[SurfaceCall::SetVolume(level)]);
        assert_eq!(player.state().volume.get(), level);
        assert_eq!(player.surface().volume(), player.state().volume.get());
    }
}

#[test]
fn test_volume_persists_across_tracks() {
    let mut player = mounted(&["A", "B"], PlayerConfig::default());
    player.set_volume(Volume::new(0.2));
    player.skip(SkipDirection::Forward);
    player.select(0).unwrap();
    assert_eq!(player.surface().volume(), 0.2);
}

#[test]
fn test_select_sets_index_without_touching_speed() {
    let mut player = mounted(&["A", "B", "C"], PlayerConfig::default());
    player.set_speed(PlaybackSpeed::Double).unwrap();

    player.dispatch(PlayerAction::Select { index: 1 }).unwrap();

    assert_eq!(player.state().current_index, 1);
    assert_eq!(player.state().speed, PlaybackSpeed::Double);
    assert_eq!(player.surface().playback_rate(), 2.0);
}

#[test]
fn test_fullscreen_rejection_is_not_fatal() {
    init_tracing();
    let mut player = Player::new(
        catalog(&["A"]),
        PlayerConfig::default(),
        RecordingSurface::rejecting_fullscreen(),
    )
    .unwrap();
    player.mount();

    player.dispatch(PlayerAction::ToggleFullScreen).unwrap();
    assert!(player.state().is_full_screen);

    player.dispatch(PlayerAction::ExitFullScreen).unwrap();
    assert!(!player.state().is_full_screen);
    assert!(!player
        .surface()
        .calls()
        .contains(&SurfaceCall::ExitFullscreen));
}

// =============================================================================
// Reorder Tests
// =============================================================================

#[test]
fn test_concrete_scenario() {
    let mut player = mounted(&["A", "B", "C"], PlayerConfig::default());
    player.select(2).unwrap();

    player.skip(SkipDirection::Forward);
    assert_eq!(player.state().current_index, 0);
    assert_eq!(player.state().speed, PlaybackSpeed::Normal);

    let payload = player.drag_start(0).unwrap();
    assert!(player.drop_payload(payload.as_str(), 2));
    assert_eq!(order(&player), vec!["B", "C", "A"]);
}

#[test]
fn test_reorder_is_id_preserving_permutation() {
    let titles = ["A", "B", "C", "D", "E"];
    for from in 0..titles.len() {
        for to in 0..titles.len() {
            let mut player = mounted(&titles, PlayerConfig::default());
            let moved = player.playlist().get(from).unwrap().id;

            player.dispatch(PlayerAction::Reorder { from, to }).unwrap();

            assert_eq!(player.playlist().len(), titles.len());
            assert_eq!(player.playlist().get(to).unwrap().id, moved);
            let mut ids: Vec<u32> = player.playlist().ids().iter().map(|id| id.0).collect();
            ids.sort_unstable();
            assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        }
    }
}

#[test]
fn test_position_tracking_changes_active_identity() {
    let config = PlayerConfig {
        active_tracking: ActiveTracking::Position,
        ..Default::default()
    };
    let mut player = mounted(&["A", "B", "C"], config);
    player.select(1).unwrap();

    assert!(player.drop_payload("1", 2));
    assert_eq!(order(&player), vec!["A", "C", "B"]);
    assert_eq!(player.state().current_index, 1);
    assert_eq!(player.current_entry().title, "C");
    assert_eq!(player.surface().source().unwrap().path(), "/C.mp4");
}

#[test]
fn test_identity_tracking_keeps_active_entry() {
    let mut player = mounted(&["A", "B", "C"], PlayerConfig::default());
    player.select(1).unwrap();
    player.surface_mut().take_calls();

    assert!(player.drop_payload("1", 2));
    assert_eq!(player.state().current_index, 2);
    assert_eq!(player.current_entry().title, "B");
    assert!(player.surface().calls().is_empty());
}

#[test]
fn test_foreign_drop_is_ignored() {
    let mut player = mounted(&["A", "B", "C"], PlayerConfig::default());
    for raw in ["", "B", "https://elsewhere.example.com/clip.mp4", "-2", "99"] {
        assert!(!player.drop_payload(raw, 0));
    }
    assert_eq!(order(&player), vec!["A", "B", "C"]);
}

#[test]
fn test_reorder_rejects_out_of_range() {
    let mut player = mounted(&["A", "B"], PlayerConfig::default());
    let err = player
        .dispatch(PlayerAction::Reorder { from: 0, to: 2 })
        .unwrap_err();
    assert!(matches!(err, Error::IndexOutOfRange { index: 2, len: 2 }));
    assert!(err.is_recoverable());
    assert_eq!(order(&player), vec!["A", "B"]);
}

// =============================================================================
// Configuration Tests
// =============================================================================

#[test]
fn test_catalog_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "baseUrl": "https://cdn.example.com/static/",
            "videos": [
                {{ "id": 10, "src": "media/intro.mp4", "title": "Intro", "thumbnail": "thumbs/intro.jpg" }},
                {{ "id": 11, "src": "media/outro.mp4", "title": "Outro", "thumbnail": "thumbs/outro.jpg" }}
            ]
        }}"#
    )
    .unwrap();

    let catalog = Catalog::from_path(file.path()).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(
        catalog.entries()[1].source.as_str(),
        "https://cdn.example.com/static/media/outro.mp4"
    );
}

#[test]
fn test_missing_catalog_file() {
    let err = Catalog::from_path("/nonexistent/clipdeck/catalog.json").unwrap_err();
    assert_eq!(err.error_code(), "IO");
}

#[test]
fn test_config_from_file_drives_player() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "speeds": [1, 1.5], "initialVolume": 0.9, "autoplay": false }}"#
    )
    .unwrap();

    let config = PlayerConfig::from_path(file.path()).unwrap();
    let mut player = Player::new(
        catalog(&["A", "B"]),
        config,
        RecordingSurface::new().with_autoplay(false),
    )
    .unwrap();
    player.mount();

    assert!(!player.state().is_playing);
    assert_eq!(player.surface().volume(), 0.9);
    assert_eq!(player.snapshot().speed_options.len(), 2);
}

#[test]
fn test_invalid_config_is_rejected_at_construction() {
    let config = PlayerConfig {
        speeds: vec![PlaybackSpeed::Double],
        ..Default::default()
    };
    let result = Player::new(catalog(&["A"]), config, RecordingSurface::new());
    assert!(matches!(result, Err(Error::InvalidConfig(_))));
}
