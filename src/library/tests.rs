use super::load::parse_playlist;
use super::*;
use crate::config::TrackDisplayField;
use crate::error::PlayerError;
use std::path::Path;

#[test]
fn playlist_rejects_empty_track_list() {
    assert!(matches!(Playlist::new(Vec::new()), Err(PlayerError::EmptyPlaylist)));
}

#[test]
fn playlist_check_index_reports_bounds() {
    let playlist = Playlist::new(vec![Track::new("A", "x", ""), Track::new("B", "y", "")]).unwrap();
    assert_eq!(playlist.len(), 2);
    assert_eq!(playlist.check_index(1).unwrap(), 1);
    match playlist.check_index(2) {
        Err(PlayerError::OutOfRange { index, len }) => {
            assert_eq!(index, 2);
            assert_eq!(len, 2);
        }
        other => panic!("expected OutOfRange, got {other:?}"),
    }
}

#[test]
fn display_from_fields_can_format_title_artist() {
    let track = Track::new("Song", "  Artist  ", "cover.png");
    assert_eq!(
        display_from_fields(
            &track,
            &[TrackDisplayField::Artist, TrackDisplayField::Title],
            " - ",
        ),
        "Artist - Song"
    );
    assert_eq!(
        display_from_fields(&track, &[TrackDisplayField::Cover], " - "),
        "cover.png"
    );
}

#[test]
fn display_from_fields_falls_back_to_title() {
    let track = Track::new("Song", "", "");
    assert_eq!(
        display_from_fields(&track, &[TrackDisplayField::Artist], " - "),
        "Song"
    );
    assert_eq!(display_from_fields(&track, &[], " - "), "Song");
}

#[test]
fn parse_playlist_reads_tracks_in_order() {
    let text = r#"
[[tracks]]
title = "First"
artist = "One"
cover = "/covers/first.svg"

[[tracks]]
title = "Second"
"#;
    let playlist = parse_playlist(text, Path::new("inline.toml")).unwrap();
    assert_eq!(playlist.len(), 2);
    assert_eq!(playlist[0].title(), "First");
    assert_eq!(playlist[0].artist(), "One");
    assert_eq!(playlist[0].cover_ref(), "/covers/first.svg");
    assert_eq!(playlist[1].title(), "Second");
    assert_eq!(playlist[1].artist(), "");
}

#[test]
fn parse_playlist_without_tracks_is_empty_playlist() {
    let err = parse_playlist("tracks = []\n", Path::new("empty.toml")).unwrap_err();
    assert!(matches!(err, PlayerError::EmptyPlaylist));

    let err = parse_playlist("", Path::new("blank.toml")).unwrap_err();
    assert!(matches!(err, PlayerError::EmptyPlaylist));
}

#[test]
fn parse_playlist_reports_malformed_toml() {
    let err = parse_playlist("[[tracks]\ntitle = ", Path::new("bad.toml")).unwrap_err();
    assert!(matches!(err, PlayerError::PlaylistParse { .. }));
}

#[test]
fn load_playlist_file_reads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("playlist.toml");
    std::fs::write(
        &path,
        "[[tracks]]\ntitle = \"Only\"\nartist = \"Someone\"\ncover = \"only.png\"\n",
    )
    .unwrap();

    let playlist = load_playlist_file(&path).unwrap();
    assert_eq!(playlist.len(), 1);
    assert_eq!(playlist[0], Track::new("Only", "Someone", "only.png"));
}

#[test]
fn load_playlist_file_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_playlist_file(&dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, PlayerError::PlaylistFile { .. }));
}
