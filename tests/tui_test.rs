//! Tests for tab key handling and rendering.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

use std::time::Duration;

use s4d_timer::tui::{Flow, MIN_TICK_INTERVAL, TabKind, TimerController};
use s4d_timer::{AppConfig, Command, Notice, TimeFormat, TimerState};

fn press(controller: &mut TimerController, code: KeyCode) -> Flow {
    controller.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_text(controller: &mut TimerController, text: &str) {
    for c in text.chars() {
        press(controller, KeyCode::Char(c));
    }
}

fn screen_text(controller: &TimerController) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("Test terminal");
    terminal.draw(|f| controller.render(f)).expect("Draw succeeds");
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_home_shortcuts_drive_timer() {
    let mut controller = TimerController::new(&AppConfig::default());
    press(&mut controller, KeyCode::Char('p'));
    assert_eq!(controller.session().clock().state(), TimerState::Running);

    press(&mut controller, KeyCode::Char('s'));
    assert_eq!(controller.session().clock().state(), TimerState::Stopped);
}

#[test]
fn test_home_renders_elapsed_time() {
    let mut controller = TimerController::new(&AppConfig::default());
    controller.dispatch(Command::Start);
    for _ in 0..250 {
        controller.dispatch(Command::Tick);
    }
    controller.dispatch(Command::Stop);

    let text = screen_text(&controller);
    assert!(text.contains("00:02:50"));
    assert!(text.contains("PLAY"));
}

#[test]
fn test_tab_key_cycles_tabs() {
    let mut controller = TimerController::new(&AppConfig::default());
    press(&mut controller, KeyCode::Tab);
    assert_eq!(*controller.active(), TabKind::Group);
    press(&mut controller, KeyCode::BackTab);
    press(&mut controller, KeyCode::BackTab);
    assert_eq!(*controller.active(), TabKind::Settings);
}

#[test]
fn test_group_tab_collects_roster() {
    let mut controller = TimerController::new(&AppConfig::default());
    controller.select_tab(TabKind::Group);

    type_text(&mut controller, "2");
    press(&mut controller, KeyCode::Enter);
    type_text(&mut controller, "Alice");
    press(&mut controller, KeyCode::Enter);
    type_text(&mut controller, "Bob");
    press(&mut controller, KeyCode::Enter);
    press(&mut controller, KeyCode::Enter);

    let roster = controller
        .session()
        .accepted_roster()
        .expect("Roster accepted");
    assert_eq!(roster.iter().collect::<Vec<_>>(), ["Alice", "Bob"]);
    assert!(screen_text(&controller).contains("Player: Alice"));
}

#[test]
fn test_group_tab_reports_invalid_size() {
    let mut controller = TimerController::new(&AppConfig::default());
    controller.select_tab(TabKind::Group);

    type_text(&mut controller, "abc");
    press(&mut controller, KeyCode::Enter);
    assert!(controller.notice().is_error());
    assert!(controller.session().roster().pending().is_empty());
}

#[test]
fn test_group_tab_submits_empty_group() {
    let mut controller = TimerController::new(&AppConfig::default());
    controller.select_tab(TabKind::Group);

    type_text(&mut controller, "0");
    press(&mut controller, KeyCode::Enter);
    press(&mut controller, KeyCode::Enter);

    let roster = controller
        .session()
        .accepted_roster()
        .expect("Empty roster accepted");
    assert!(roster.is_empty());
    assert_eq!(
        *controller.notice(),
        Notice::Info("Roster accepted: 0 players".to_string())
    );
}

#[test]
fn test_group_tab_rejects_oversized_group() {
    let mut controller = TimerController::new(&AppConfig::default());
    controller.select_tab(TabKind::Group);

    type_text(&mut controller, "18446744073709551615");
    press(&mut controller, KeyCode::Enter);
    assert!(controller.notice().is_error());
    assert!(controller.session().roster().pending().is_empty());

    // Submit is unreachable until a size is accepted.
    press(&mut controller, KeyCode::Esc);
    press(&mut controller, KeyCode::Enter);
    assert!(controller.session().accepted_roster().is_none());
}

#[test]
fn test_typing_q_in_input_does_not_quit() {
    let mut controller = TimerController::new(&AppConfig::default());
    controller.select_tab(TabKind::Group);
    assert_eq!(press(&mut controller, KeyCode::Char('q')), Flow::Continue);

    press(&mut controller, KeyCode::Esc);
    assert_eq!(press(&mut controller, KeyCode::Char('q')), Flow::Quit);
}

#[test]
fn test_settings_tab_saves_time_format() {
    let mut controller = TimerController::new(&AppConfig::default());
    controller.select_tab(TabKind::Settings);
    press(&mut controller, KeyCode::Enter);
    assert_eq!(
        controller.session().settings().time_format,
        TimeFormat::Stopwatch,
        "toggling only edits the draft"
    );

    press(&mut controller, KeyCode::Char('s'));
    assert_eq!(controller.session().settings().time_format, TimeFormat::Clock);
    assert_eq!(
        *controller.notice(),
        Notice::Info("Settings saved successfully!".to_string())
    );
}

#[test]
fn test_number_keys_select_tabs() {
    let mut controller = TimerController::new(&AppConfig::default());
    press(&mut controller, KeyCode::Char('4'));
    assert_eq!(*controller.active(), TabKind::Scoreboard);
}

#[test]
fn test_ctrl_c_always_quits() {
    let mut controller = TimerController::new(&AppConfig::default());
    controller.select_tab(TabKind::Group);
    let flow = controller.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(flow, Flow::Quit);
}

#[test]
fn test_arrow_keys_switch_tabs() {
    let mut controller = TimerController::new(&AppConfig::default());
    press(&mut controller, KeyCode::Right);
    assert_eq!(*controller.active(), TabKind::Group);
    press(&mut controller, KeyCode::Esc);
    press(&mut controller, KeyCode::Left);
    assert_eq!(*controller.active(), TabKind::Home);
    press(&mut controller, KeyCode::Left);
    assert_eq!(*controller.active(), TabKind::Settings);
}

#[test]
fn test_zero_tick_interval_is_clamped() {
    let config: AppConfig =
        toml::from_str("tick_interval_ms = 0").expect("Parses without validation");
    assert_eq!(config.tick_interval(), Duration::ZERO);

    let controller = TimerController::new(&config);
    assert_eq!(*controller.tick_interval(), MIN_TICK_INTERVAL);
}
