use super::*;
use crate::error::PlayerError;
use crate::library::{Playlist, Track};
use proptest::prelude::*;

fn playlist_of(len: usize) -> Playlist {
    let tracks = (0..len)
        .map(|n| Track::new(format!("track {n}"), format!("artist {n}"), ""))
        .collect();
    Playlist::new(tracks).unwrap()
}

#[test]
fn new_controller_starts_paused_on_first_track() {
    let transport = TransportController::new(playlist_of(3));
    assert_eq!(transport.current_index(), 0);
    assert!(!transport.is_playing());
    assert_eq!(transport.current_track().title(), "track 0");
    assert_eq!(transport.playlist_len(), 3);
}

#[test]
fn toggle_play_pause_flips_and_restores() {
    let mut transport = TransportController::new(playlist_of(2));
    assert!(transport.toggle_play_pause());
    assert!(transport.is_playing());
    assert!(!transport.toggle_play_pause());
    assert!(!transport.is_playing());
    assert_eq!(transport.current_index(), 0);
}

#[test]
fn advance_wraps_at_both_ends() {
    let mut transport = TransportController::new(playlist_of(3));
    assert_eq!(transport.advance(Direction::Previous), 2);
    assert_eq!(transport.advance(Direction::Next), 0);
    assert_eq!(transport.advance(Direction::Next), 1);
    assert_eq!(transport.advance(Direction::Next), 2);
    assert_eq!(transport.advance(Direction::Next), 0);
}

#[test]
fn advance_on_single_track_playlist_stays_put() {
    let mut transport = TransportController::new(playlist_of(1));
    assert_eq!(transport.advance(Direction::Next), 0);
    assert_eq!(transport.advance(Direction::Previous), 0);
}

#[test]
fn advance_keeps_play_flag() {
    let mut transport = TransportController::new(playlist_of(4));
    transport.toggle_play_pause();
    transport.advance(Direction::Next);
    assert!(transport.is_playing());
    transport.advance(Direction::Previous);
    assert!(transport.is_playing());
}

#[test]
fn select_index_sets_current_without_touching_play_flag() {
    let mut transport = TransportController::new(playlist_of(5));
    transport.select_index(3).unwrap();
    assert_eq!(transport.current_index(), 3);
    assert!(!transport.is_playing());
    assert_eq!(transport.current_track().title(), "track 3");
}

#[test]
fn select_index_out_of_range_leaves_state_unchanged() {
    let mut transport = TransportController::new(playlist_of(3));
    transport.select_index(1).unwrap();
    transport.toggle_play_pause();
    let before = transport.state();

    let err = transport.select_index(3).unwrap_err();
    assert!(matches!(err, PlayerError::OutOfRange { index: 3, len: 3 }));
    let err = transport.select_index(usize::MAX).unwrap_err();
    assert!(matches!(err, PlayerError::OutOfRange { .. }));

    assert_eq!(transport.state(), before);
}

proptest! {
    #[test]
    fn advancing_next_len_times_returns_to_start(len in 1usize..64, start in 0usize..64) {
        let mut transport = TransportController::new(playlist_of(len));
        let start = start % len;
        transport.select_index(start).unwrap();

        for _ in 0..len {
            transport.advance(Direction::Next);
            prop_assert!(transport.current_index() < len);
        }
        prop_assert_eq!(transport.current_index(), start);
    }

    #[test]
    fn previous_undoes_next_and_vice_versa(len in 1usize..64, start in 0usize..64) {
        let mut transport = TransportController::new(playlist_of(len));
        let start = start % len;
        transport.select_index(start).unwrap();

        transport.advance(Direction::Next);
        transport.advance(Direction::Previous);
        prop_assert_eq!(transport.current_index(), start);

        transport.advance(Direction::Previous);
        transport.advance(Direction::Next);
        prop_assert_eq!(transport.current_index(), start);
    }

    #[test]
    fn every_state_pair_is_reachable(len in 1usize..32, target in 0usize..32, playing in any::<bool>()) {
        let mut transport = TransportController::new(playlist_of(len));
        let target = target % len;
        if playing {
            transport.toggle_play_pause();
        }
        for _ in 0..target {
            transport.advance(Direction::Next);
        }
        prop_assert_eq!(
            transport.state(),
            PlaybackState { current_index: target, is_playing: playing }
        );
    }
}
