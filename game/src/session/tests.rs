use super::*;
use crate::direction::Dir4;
use crate::levels::LevelSet;

fn level(text: &str) -> Level {
    LevelSet::from_texts([text]).load(0).unwrap()
}

fn idle() -> Controls {
    Controls::default()
}

fn step(dir: Dir4) -> Controls {
    Controls::held(dir)
}

fn quit() -> Controls {
    Controls {
        quit: true,
        ..Controls::default()
    }
}

fn restart() -> Controls {
    Controls {
        restart: true,
        ..Controls::default()
    }
}

/// Walks east along a corridor until the exit, one tick per step.
fn walk_to_exit(session: &mut LevelSession, store: &mut BestTimeStore, times: &[f64]) {
    for &now in times {
        assert_eq!(session.tick(&step(Dir4::East), now, store), None);
    }
}

#[test]
fn starts_playing_at_start() {
    let store = BestTimeStore::in_memory();
    let session = LevelSession::new(level("S  E"), 100.0, &store);
    assert_eq!(session.state(), SessionState::Playing);
    assert_eq!(session.position(), Position::new(0, 0));
    assert_eq!(session.elapsed(), 0);
    assert_eq!(session.previous_best(), None);
    assert!(!session.new_record());
}

#[test]
fn moves_one_tile_per_tick() {
    let mut store = BestTimeStore::in_memory();
    let mut session = LevelSession::new(level("S  E"), 0.0, &store);
    session.tick(&step(Dir4::East), 0.1, &mut store);
    assert_eq!(session.position(), Position::new(1, 0));
    session.tick(&idle(), 0.2, &mut store);
    assert_eq!(session.position(), Position::new(1, 0));
    session.tick(&step(Dir4::West), 0.3, &mut store);
    assert_eq!(session.position(), Position::new(0, 0));
}

#[test]
fn blocked_move_keeps_position() {
    let mut store = BestTimeStore::in_memory();
    let mut session = LevelSession::new(level("S#E\n   "), 0.0, &store);
    assert_eq!(session.tick(&step(Dir4::East), 0.1, &mut store), None);
    assert_eq!(session.position(), Position::new(0, 0));
    assert_eq!(session.tick(&step(Dir4::North), 0.2, &mut store), None);
    assert_eq!(session.position(), Position::new(0, 0));
    assert_eq!(session.state(), SessionState::Playing);
}

#[test]
fn reaching_exit_wins_and_records() {
    let mut store = BestTimeStore::in_memory();
    let mut session = LevelSession::new(level("S  E"), 10.0, &store);
    walk_to_exit(&mut session, &mut store, &[11.0, 13.0, 17.5]);

    assert_eq!(
        session.state(),
        SessionState::Won {
            at: 17.5,
            elapsed: 7
        }
    );
    assert!(session.new_record());
    assert_eq!(store.best("level_1"), Some(7));
}

#[test]
fn win_is_entered_exactly_once() {
    let mut store = BestTimeStore::in_memory();
    let mut session = LevelSession::new(level("S E"), 0.0, &store);
    walk_to_exit(&mut session, &mut store, &[0.2, 3.4]);
    assert!(session.new_record());

    // Standing on the exit (or pushing against the edge) while the acknowledgement shows.
    for now in [3.5, 3.6, 4.0, 4.3] {
        assert_eq!(session.tick(&step(Dir4::East), now, &mut store), None);
        assert_eq!(
            session.state(),
            SessionState::Won {
                at: 3.4,
                elapsed: 3
            }
        );
        assert!(session.new_record(), "record flag must survive later ticks");
    }
    assert_eq!(store.best("level_1"), Some(3));
}

#[test]
fn movement_is_ignored_after_winning() {
    let mut store = BestTimeStore::in_memory();
    let mut session = LevelSession::new(level("SE "), 0.0, &store);
    walk_to_exit(&mut session, &mut store, &[0.5]);
    let exit = session.position();
    session.tick(&step(Dir4::East), 0.6, &mut store);
    session.tick(&step(Dir4::West), 0.7, &mut store);
    assert_eq!(session.position(), exit);
}

#[test]
fn advances_after_win_delay() {
    let mut store = BestTimeStore::in_memory();
    let mut session = LevelSession::new(level("S E"), 0.0, &store);
    walk_to_exit(&mut session, &mut store, &[1.0, 4.0]);

    assert_eq!(session.tick(&idle(), 4.5, &mut store), None);
    assert_eq!(session.tick(&idle(), 4.99, &mut store), None);
    assert_eq!(
        session.tick(&idle(), 5.0, &mut store),
        Some(SessionOutcome::Advance(4))
    );
    assert_eq!(
        session.state(),
        SessionState::Finished(SessionOutcome::Advance(4))
    );
}

#[test]
fn outcome_is_produced_once() {
    let mut store = BestTimeStore::in_memory();
    let mut session = LevelSession::new(level("S E"), 0.0, &store);
    assert_eq!(
        session.tick(&quit(), 0.1, &mut store),
        Some(SessionOutcome::Quit)
    );
    assert_eq!(session.tick(&quit(), 0.2, &mut store), None);
    assert_eq!(session.tick(&restart(), 0.3, &mut store), None);
    assert_eq!(session.tick(&step(Dir4::East), 0.4, &mut store), None);
    assert_eq!(session.position(), Position::new(0, 0));
}

#[test]
fn quit_and_restart_end_play_immediately() {
    let mut store = BestTimeStore::in_memory();
    let mut session = LevelSession::new(level("S E"), 0.0, &store);
    assert_eq!(
        session.tick(&restart(), 0.1, &mut store),
        Some(SessionOutcome::Restart)
    );

    let mut session = LevelSession::new(level("S E"), 0.0, &store);
    let both = Controls {
        quit: true,
        restart: true,
        ..Controls::default()
    };
    assert_eq!(
        session.tick(&both, 0.1, &mut store),
        Some(SessionOutcome::Quit)
    );
}

#[test]
fn quit_during_win_delay_takes_precedence() {
    let mut store = BestTimeStore::in_memory();
    let mut session = LevelSession::new(level("S E"), 0.0, &store);
    walk_to_exit(&mut session, &mut store, &[0.5, 2.0]);
    assert_eq!(
        session.tick(&quit(), 2.1, &mut store),
        Some(SessionOutcome::Quit)
    );
    // The record made on reaching the exit stays.
    assert_eq!(store.best("level_1"), Some(2));
}

#[test]
fn restart_during_win_delay_beats_auto_advance() {
    let mut store = BestTimeStore::in_memory();
    let mut session = LevelSession::new(level("S E"), 0.0, &store);
    walk_to_exit(&mut session, &mut store, &[0.5, 2.0]);
    assert_eq!(
        session.tick(&restart(), 2.0 + WIN_DELAY * 2.0, &mut store),
        Some(SessionOutcome::Restart)
    );
}

#[test]
fn slower_completion_is_not_a_record() {
    let mut store = BestTimeStore::in_memory();
    store.record("level_1", 2);
    let mut session = LevelSession::new(level("S E"), 0.0, &store);
    assert_eq!(session.previous_best(), Some(2));
    walk_to_exit(&mut session, &mut store, &[1.0, 5.0]);
    assert!(!session.new_record());
    assert_eq!(store.best("level_1"), Some(2));
}

#[test]
fn hud_elapsed_tracks_every_tick() {
    let mut store = BestTimeStore::in_memory();
    let mut session = LevelSession::new(level("S  E"), 50.0, &store);
    session.tick(&idle(), 50.9, &mut store);
    assert_eq!(session.elapsed(), 0);
    session.tick(&idle(), 52.4, &mut store);
    assert_eq!(session.elapsed(), 2);
    session.tick(&idle(), 61.0, &mut store);
    assert_eq!(session.elapsed(), 11);
}

#[test]
fn elapsed_is_floored_to_whole_seconds() {
    let mut store = BestTimeStore::in_memory();
    let mut session = LevelSession::new(level("SE"), 0.25, &store);
    walk_to_exit(&mut session, &mut store, &[9.99]);
    assert_eq!(
        session.state(),
        SessionState::Won {
            at: 9.99,
            elapsed: 9
        }
    );
}
