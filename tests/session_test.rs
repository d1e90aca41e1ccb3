//! Tests for the command interface.

use s4d_timer::{Command, Notice, Session, Settings, TimeFormat, TimerState};

fn session_with_roster(names: &[&str]) -> Session {
    let mut session = Session::new(Settings::new());
    session.dispatch(Command::SetGroupSize(names.len().to_string()));
    for (index, name) in names.iter().enumerate() {
        session.dispatch(Command::RecordName {
            index,
            name: name.to_string(),
        });
    }
    let notice = session.dispatch(Command::SubmitRoster);
    assert!(!notice.is_error(), "unexpected {notice:?}");
    session
}

#[test]
fn test_timer_commands() {
    let mut session = Session::new(Settings::new());
    session.dispatch(Command::Start);
    for _ in 0..250 {
        session.dispatch(Command::Tick);
    }
    let notice = session.dispatch(Command::Stop);
    assert_eq!(notice, Notice::Info("Timer stopped at 00:02:50".to_string()));

    session.dispatch(Command::Tick);
    assert_eq!(session.elapsed_display(), "00:02:50");

    session.dispatch(Command::Reset);
    assert_eq!(session.clock().state(), TimerState::Stopped);
    assert_eq!(session.elapsed_display(), "00:00:00");
}

#[test]
fn test_invalid_size_reports_error_and_keeps_roster() {
    let mut session = session_with_roster(&["Alice", "Bob"]);

    let notice = session.dispatch(Command::SetGroupSize("abc".to_string()));
    assert!(notice.is_error());
    assert_eq!(
        session.accepted_roster().map(|r| r.len()),
        Some(2),
        "roster survives a rejected size"
    );
}

#[test]
fn test_incomplete_roster_reports_error() {
    let mut session = Session::new(Settings::new());
    session.dispatch(Command::SetGroupSize("3".to_string()));
    let notice = session.dispatch(Command::SubmitRoster);
    assert_eq!(
        notice,
        Notice::Error("Incomplete roster: missing names for players 1, 2, 3".to_string())
    );
}

#[test]
fn test_roster_submit_does_not_tick_timer() {
    let mut session = Session::new(Settings::new());
    session.dispatch(Command::Start);
    session.dispatch(Command::SetGroupSize("1".to_string()));
    session.dispatch(Command::RecordName {
        index: 0,
        name: "Solo".to_string(),
    });
    session.dispatch(Command::SubmitRoster);
    assert_eq!(session.clock().elapsed().total_centis(), 0);
}

#[test]
fn test_accepted_roster_seeds_scoreboard() {
    let mut session = session_with_roster(&["Alice", "Bob"]);
    assert_eq!(session.scoreboard().len(), 2);

    session.dispatch(Command::AwardPoint(1));
    session.dispatch(Command::AwardPoint(1));
    session.dispatch(Command::DeductPoint(0));

    let ranked = session.scoreboard().ranked();
    assert_eq!(ranked[0].1.name(), "Bob");
    assert_eq!(*ranked[0].1.score(), 2);
    assert_eq!(*ranked[1].1.score(), 0);
}

#[test]
fn test_point_for_unknown_player_is_error() {
    let mut session = Session::new(Settings::new());
    assert!(session.dispatch(Command::AwardPoint(0)).is_error());
}

#[test]
fn test_save_settings_changes_display() {
    let mut session = Session::new(Settings::new());
    session.dispatch(Command::Start);
    for _ in 0..6_100 {
        session.dispatch(Command::Tick);
    }
    assert_eq!(session.elapsed_display(), "01:01:00");

    let notice = session.dispatch(Command::SaveSettings(Settings {
        time_format: TimeFormat::Clock,
    }));
    assert_eq!(notice, Notice::Info("Settings saved successfully!".to_string()));
    assert_eq!(session.elapsed_display(), "00:01:01");
}

#[test]
fn test_save_settings_replaces_session_settings() {
    let mut session = Session::new(Settings::new());
    assert_eq!(session.settings().time_format, TimeFormat::Stopwatch);

    let clock = Settings {
        time_format: TimeFormat::Clock,
    };
    session.dispatch(Command::SaveSettings(clock));
    assert_eq!(*session.settings(), clock);

    let notice = session.dispatch(Command::SaveSettings(Settings::new()));
    assert!(!notice.is_error());
    assert_eq!(session.settings().time_format, TimeFormat::Stopwatch);
    assert_eq!(session.elapsed_display(), "00:00:00");
}

#[test]
fn test_oversized_group_reports_error_and_keeps_roster() {
    let mut session = session_with_roster(&["Alice", "Bob"]);
    let notice = session.dispatch(Command::SetGroupSize("18446744073709551615".to_string()));
    assert!(notice.is_error());
    assert_eq!(session.accepted_roster().map(|r| r.len()), Some(2));
    assert_eq!(session.scoreboard().len(), 2);
}
