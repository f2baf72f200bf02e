//! End-to-end shot scenarios.
//!
//! The keeper never pauses, so each scenario picks the keeper's clock offset so
//! that it is where the scenario needs it at the moment the ball lands.

use std::cell::Cell;
use std::rc::Rc;

use glam::Vec2;
use penalty_shootout::consts::SIM_DT;
use penalty_shootout::sim::{
    GameEvent, GameMessage, GameState, KeeperScheduler, Outcome, ShotPhase, ShotRejection,
    ShotResponse, TickInput, tick,
};
use penalty_shootout::{PenaltySession, Settings, Tuning};

const VIEWPORT: Vec2 = Vec2::new(390.0, 844.0);

fn new_game() -> GameState {
    GameState::new(VIEWPORT, Tuning::default(), Settings::default())
}

/// Shoot, and arrange for the keeper clock to read `keeper_at_landing` when the ball lands
fn shoot_with_keeper_at(state: &mut GameState, dx: f32, dy: f32, keeper_at_landing: f32) -> f32 {
    let ShotResponse::Taken(plan) = state.shoot(dx, dy) else {
        panic!("shot ({dx}, {dy}) should be accepted");
    };
    let start = (keeper_at_landing - plan.duration).rem_euclid(2.0 * state.tuning.keeper.leg_duration);
    state.keeper = KeeperScheduler::new(&state.layout, state.tuning.keeper.leg_duration)
        .with_elapsed(start);
    plan.target_x
}

/// Tick until the shot resolves; returns the resolution event
fn run_to_resolution(state: &mut GameState) -> (Outcome, f32, f32) {
    for _ in 0..1000 {
        tick(state, &TickInput::default(), SIM_DT);
        for event in state.drain_events() {
            if let GameEvent::ShotResolved {
                outcome,
                ball_center_x,
                keeper,
            } = event
            {
                return (outcome, ball_center_x, keeper.left);
            }
        }
    }
    panic!("shot never resolved");
}

#[test]
fn scenario_a_straight_shot_keeper_away_is_goal() {
    let mut state = new_game();
    let leg = state.tuning.keeper.leg_duration;
    let target_x = shoot_with_keeper_at(&mut state, 0.0, -200.0, 2.0 * leg);
    assert_eq!(target_x, state.layout.ball_start.x);

    let (outcome, center_x, keeper_left) = run_to_resolution(&mut state);
    assert!(!state.layout.is_saved_by_keeper(center_x, keeper_left));
    assert_eq!(outcome, Outcome::Goal);
    assert_eq!(state.scoreboard.goals, 1);
    assert_eq!(state.scoreboard.total(), 1);
    assert_eq!(state.message, GameMessage::Scored);
}

#[test]
fn scenario_b_straight_shot_keeper_covering_is_save() {
    let mut state = new_game();
    let leg = state.tuning.keeper.leg_duration;
    shoot_with_keeper_at(&mut state, 0.0, -200.0, leg / 2.0);

    let (outcome, center_x, keeper_left) = run_to_resolution(&mut state);
    assert!(state.layout.is_saved_by_keeper(center_x, keeper_left));
    assert_eq!(outcome, Outcome::Save);
    assert_eq!(state.scoreboard.saves, 1);
    assert_eq!(state.scoreboard.total(), 1);
    assert_eq!(state.message, GameMessage::Saved);
}

#[test]
fn scenario_c_wide_swipe_judged_at_clamped_x() {
    let clamped = {
        let state = new_game();
        state.layout.goal.right() - state.layout.ball_size - state.tuning.shot.target_inset
    };

    // Keeper parked at the right post covers the clamped landing point
    let mut state = new_game();
    let leg = state.tuning.keeper.leg_duration;
    let target_x = shoot_with_keeper_at(&mut state, 5000.0, -200.0, leg);
    assert!((target_x - clamped).abs() < 1e-3);
    let (outcome, center_x, _) = run_to_resolution(&mut state);
    assert!((center_x - (clamped + state.layout.ball_size / 2.0)).abs() < 1e-3);
    assert!(state.layout.is_inside_goal_mouth(center_x, state.ball.position().y));
    assert_eq!(outcome, Outcome::Save);

    // Keeper at the far post: same clamped point is a goal
    let mut state = new_game();
    shoot_with_keeper_at(&mut state, 5000.0, -200.0, 2.0 * leg);
    let (outcome, _, _) = run_to_resolution(&mut state);
    assert_eq!(outcome, Outcome::Goal);
}

#[test]
fn scenario_d_weak_swipe_rejected() {
    let mut state = new_game();
    let ball_before = state.ball;
    let keeper_before = state.keeper.offset();

    assert_eq!(
        state.shoot(0.0, -5.0),
        ShotResponse::Rejected(ShotRejection::TooWeak)
    );
    assert_eq!(state.message, GameMessage::TooWeak);
    assert_eq!(state.message_text(), "Too weak! Swipe up harder");
    assert_eq!(state.scoreboard.total(), 0);
    assert_eq!(state.ball, ball_before);
    assert!(state.is_idle());

    // The keeper is not affected by a rejected swipe either
    assert_eq!(state.keeper.offset(), keeper_before);
}

#[test]
fn scenario_e_close_mid_flight_then_reopen() {
    let closes = Rc::new(Cell::new(0u32));
    let counter = closes.clone();
    let mut session = PenaltySession::new(
        VIEWPORT,
        Settings::default(),
        Tuning::default(),
        move || counter.set(counter.get() + 1),
    );
    session.set_visible(true);

    // One completed shot so the scoreboard is non-empty
    if let Some(game) = session.game_mut() {
        game.shoot(0.0, -200.0);
    }
    for _ in 0..200 {
        session.advance(1.0 / 60.0);
    }
    assert_eq!(session.scoreboard().map(|s| s.total()), Some(1));
    assert!(session.game().is_some_and(|g| g.is_idle()));

    // Second shot, close while the ball is still travelling
    if let Some(game) = session.game_mut() {
        game.shoot(40.0, -150.0);
    }
    session.advance(1.0 / 60.0);
    assert!(matches!(
        session.game().map(|g| &g.phase),
        Some(ShotPhase::InFlight(_))
    ));
    session.close();
    assert!(!session.is_visible());
    assert_eq!(closes.get(), 1);

    // Nothing keeps running after close
    assert!(session.advance(1.0).is_empty());
    assert!(session.scene().is_none());

    // Reopen: fresh keeper, ball on the spot, empty scoreboard
    session.set_visible(true);
    let game = session.game().expect("reopened");
    assert_eq!(game.keeper.offset(), game.layout.keeper_left_bound);
    assert_eq!(game.keeper.elapsed(), 0.0);
    assert_eq!(game.ball.position(), game.layout.ball_start);
    assert_eq!(game.scoreboard.total(), 0);
    assert!(game.is_idle());
    assert_eq!(game.time_ticks, 0);
}

#[test]
fn swipe_from_ball_through_session_resolves() {
    let mut session = PenaltySession::new(VIEWPORT, Settings::default(), Tuning::default(), || {});
    session.set_visible(true);
    let start = session.game().map(|g| g.layout.ball_start).unwrap_or_default() + Vec2::splat(23.0);

    session.pointer_down(start.x, start.y);
    session.advance(1.0 / 60.0);
    session.pointer_up(start.x - 30.0, start.y - 260.0);

    let mut outcomes = Vec::new();
    for _ in 0..200 {
        for event in session.advance(1.0 / 60.0) {
            if let GameEvent::ShotResolved { outcome, .. } = event {
                outcomes.push(outcome);
            }
        }
    }
    assert_eq!(outcomes.len(), 1);
    assert_eq!(session.scoreboard().map(|s| s.total()), Some(1));
}
