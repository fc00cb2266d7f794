//! End-to-end scenarios through the public `GameLoop` API.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;

use ping_pong_go::sim::{GamePhase, GameState};
use ping_pong_go::{AudioController, GameLoop, NullAudio, Tuning, snapshot};

/// Captures the fire-and-forget audio commands for assertions.
#[derive(Clone, Default)]
struct RecordingAudio {
    commands: Rc<RefCell<Vec<&'static str>>>,
}

impl AudioController for RecordingAudio {
    fn play(&mut self) {
        self.commands.borrow_mut().push("play");
    }

    fn pause(&mut self) {
        self.commands.borrow_mut().push("pause");
    }
}

fn running_state(tuning: &Tuning) -> GameState {
    let mut state = GameState::new(tuning);
    state.phase = GamePhase::Running;
    state
}

#[test]
fn test_start_begins_play_and_audio() {
    let audio = RecordingAudio::default();
    let mut game = GameLoop::new(1, Tuning::default(), audio.clone());
    assert_eq!(game.state().phase, GamePhase::NotStarted);

    game.start();
    assert_eq!(game.state().phase, GamePhase::Running);
    assert_eq!(*audio.commands.borrow(), vec!["play"]);
}

#[test]
fn test_pause_and_resume_drive_audio() {
    let audio = RecordingAudio::default();
    let mut game = GameLoop::new(1, Tuning::default(), audio.clone());
    game.start();
    game.toggle_pause();
    game.toggle_pause();
    assert_eq!(*audio.commands.borrow(), vec!["play", "pause", "play"]);
}

#[test]
fn test_losing_the_last_life_ends_the_game() {
    let tuning = Tuning::default();
    let audio = RecordingAudio::default();
    let mut game = GameLoop::new(1, tuning.clone(), audio.clone());
    game.start();

    // Jump to a lost cause: no lives left, ball about to cross the bottom
    // goal line.
    let mut state = running_state(&tuning);
    state.lives = 0;
    state.opponent_score = 2;
    state.ball.pos = Vec2::new(30.0, 94.9);
    state.ball.vel = Vec2::new(0.0, 0.8);
    game.restore(state);

    game.advance(0.03);
    assert_eq!(game.state().phase, GamePhase::GameOver);
    assert_eq!(game.state().opponent_score, 3);
    assert_eq!(*audio.commands.borrow(), vec!["play", "pause"]);

    // The ball froze where it went out; later frames move nothing.
    let frozen = game.state().clone();
    game.advance(2.0);
    assert_eq!(*game.state(), frozen);
}

#[test]
fn test_restart_resets_to_initial_values() {
    let tuning = Tuning::default();
    let mut game = GameLoop::new(7, tuning.clone(), NullAudio);
    game.start();

    // A messy mid-game state, then restart from it.
    let mut state = running_state(&tuning);
    state.ball.pos = Vec2::new(22.0, 71.0);
    state.ball.vel = Vec2::new(-1.3, 1.1);
    state.player_score = 6;
    state.opponent_score = 4;
    state.lives = 1;
    state.level = 3;
    state.currency = 30;
    state.ball_speed = 1.0;
    game.restore(state);
    game.restart();

    let expected = running_state(&tuning);
    assert_eq!(*game.state(), expected);
    assert_eq!(game.state().ball.vel, Vec2::new(0.8, -0.8));
    assert_eq!(game.state().lives, 2);
    assert_eq!(game.state().ball_speed, 0.8);
}

#[test]
fn test_level_up_on_fifth_combined_point_only() {
    let tuning = Tuning::default();
    let mut game = GameLoop::new(3, tuning.clone(), NullAudio);
    game.start();

    // Player at 3, opponent at 1, ball about to cross the top goal line.
    let mut state = running_state(&tuning);
    state.player_score = 3;
    state.opponent_score = 1;
    state.currency = 15;
    state.ball.pos = Vec2::new(70.0, 5.1);
    state.ball.vel = Vec2::new(0.0, -0.8);
    game.restore(state);

    game.advance(0.03);
    assert_eq!(game.state().player_score, 4);
    assert_eq!(game.state().level, 2);
    assert!((game.state().ball_speed - 0.9).abs() < 1e-6);

    // Sixth combined point: no re-trigger.
    let mut state = game.state().clone();
    state.ball.pos = Vec2::new(70.0, 5.1);
    state.ball.vel = Vec2::new(0.0, -0.8);
    game.restore(state);

    game.advance(0.03);
    assert_eq!(game.state().player_score, 5);
    assert_eq!(game.state().level, 2);
    assert!((game.state().ball_speed - 0.9).abs() < 1e-6);
}

#[test]
fn test_out_of_range_pointer_converges_to_clamp() {
    let mut game = GameLoop::new(5, Tuning::default(), NullAudio);
    game.start();
    game.set_player_paddle_target(200.0, 85.0);
    assert_eq!(game.state().player.target.x, 95.0);

    for _ in 0..120 {
        game.advance(1.0 / 60.0);
        assert!(game.state().player.pos.x <= 95.0);
    }
    assert!((game.state().player.pos.x - 95.0).abs() < 0.01);
}

#[test]
fn test_snapshot_restore_resumes_identical_trajectory() {
    let tuning = Tuning::default();
    let mut original = GameLoop::new(11, tuning.clone(), NullAudio);
    original.start();
    original.set_player_paddle_target(80.0, 75.0);
    for _ in 0..20 {
        original.advance(0.02);
    }

    let json = snapshot::encode(original.state()).unwrap();
    let decoded = snapshot::decode(&json).unwrap();
    assert_eq!(&decoded, original.state());

    let mut restored = GameLoop::new(11, tuning, NullAudio);
    restored.restore(decoded);

    // Pause/resume re-arms the original's scheduler the same way a restore
    // does; from here both loops see identical cadences.
    original.toggle_pause();
    original.toggle_pause();

    for _ in 0..20 {
        original.advance(0.02);
        restored.advance(0.02);
    }
    assert_eq!(original.state(), restored.state());
}
