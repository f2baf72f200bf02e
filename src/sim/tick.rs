//! Fixed timestep simulation tick
//!
//! Order within a tick: keeper clock, pointer input, flight clock, resolution,
//! reset timer. The keeper and the flight are separate clocks; the only point
//! where one reads the other is the snapshot taken at resolution.

use glam::Vec2;

use super::shot::FlightStatus;
use super::state::{GameEvent, GameState, ShotPhase};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer pressed at this position
    pub pointer_down: Option<Vec2>,
    /// Pointer released at this position
    pub pointer_up: Option<Vec2>,
}

impl TickInput {
    /// A full swipe delivered in one tick
    pub fn swipe(start: Vec2, end: Vec2) -> Self {
        Self {
            pointer_down: Some(start),
            pointer_up: Some(end),
        }
    }
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.time_ticks += 1;

    // The keeper runs regardless of anything the ball does
    state.keeper.advance(dt);

    if let Some(point) = input.pointer_down {
        state.gesture.press(&state.layout, point);
    }
    if let Some(point) = input.pointer_up {
        if let Some(vector) = state.gesture.release(point) {
            state.shoot(vector.dx, vector.dy);
        }
    }

    match &mut state.phase {
        ShotPhase::Idle => {}

        ShotPhase::InFlight(flight) => {
            if let FlightStatus::Landed(pose) = flight.advance(dt) {
                // Commit only now that the position tracks have finished
                state.ball.committed = pose;
                state.push_event(GameEvent::FlightLanded { pos: pose.pos });
                let keeper = state.keeper.snapshot();
                state.resolve(keeper);
            }
        }

        ShotPhase::Resolved { reset_in, .. } => {
            *reset_in -= dt;
            if *reset_in <= 0.0 {
                state.reset_ball();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::settings::Settings;
    use crate::sim::state::{GameMessage, Outcome, ShotResponse};
    use crate::tuning::Tuning;

    fn state() -> GameState {
        GameState::new(Vec2::new(390.0, 844.0), Tuning::default(), Settings::default())
    }

    fn run_until_idle(state: &mut GameState) -> u32 {
        let mut ticks = 0;
        loop {
            tick(state, &TickInput::default(), SIM_DT);
            ticks += 1;
            if state.is_idle() {
                return ticks;
            }
            assert!(ticks < 2000, "shot never finished");
        }
    }

    #[test]
    fn test_swipe_input_starts_flight() {
        let mut state = state();
        let start = state.layout.ball_start + Vec2::splat(20.0);
        tick(&mut state, &TickInput::swipe(start, start + Vec2::new(0.0, -200.0)), SIM_DT);
        assert_eq!(state.phase.name(), "InFlight");
        assert!(matches!(state.events[0], GameEvent::ShotTaken(_)));
    }

    #[test]
    fn test_swipe_from_elsewhere_does_nothing() {
        let mut state = state();
        let start = Vec2::new(5.0, 5.0);
        tick(&mut state, &TickInput::swipe(start, start + Vec2::new(0.0, -200.0)), SIM_DT);
        assert!(state.is_idle());
        assert!(state.events.is_empty());
        assert_eq!(state.message, GameMessage::Prompt);
    }

    #[test]
    fn test_full_shot_cycle_resets() {
        let mut state = state();
        state.shoot(40.0, -220.0);
        run_until_idle(&mut state);

        assert_eq!(state.scoreboard.total(), 1);
        assert_eq!(state.ball.position(), state.layout.ball_start);
        assert_eq!(state.ball.committed.rotation, 0.0);
        assert_eq!(state.ball.committed.scale, 1.0);
        assert_eq!(state.message, GameMessage::Prompt);
        assert!(state.gesture.is_armed());

        let events = state.drain_events();
        let landed = events
            .iter()
            .position(|e| matches!(e, GameEvent::FlightLanded { .. }))
            .unwrap();
        let resolved = events
            .iter()
            .position(|e| matches!(e, GameEvent::ShotResolved { .. }))
            .unwrap();
        assert!(landed < resolved);
        assert_eq!(events.last(), Some(&GameEvent::BallReset));
    }

    #[test]
    fn test_keeper_keeps_moving_during_flight() {
        let mut state = state();
        let before = state.keeper.offset();
        state.shoot(0.0, -200.0);
        for _ in 0..30 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert_eq!(state.phase.name(), "InFlight");
        assert!(state.keeper.offset() > before);
    }

    #[test]
    fn test_resolution_uses_keeper_at_landing() {
        let mut state = state();
        state.shoot(0.0, -200.0);
        let mut snapshot = None;
        let mut keeper_at_landing = None;
        for _ in 0..500 {
            tick(&mut state, &TickInput::default(), SIM_DT);
            for event in state.drain_events() {
                if let GameEvent::ShotResolved { keeper, .. } = event {
                    snapshot = Some(keeper);
                    keeper_at_landing = Some(state.keeper.offset());
                }
            }
            if snapshot.is_some() {
                break;
            }
        }
        assert_eq!(snapshot.map(|k| k.left), keeper_at_landing);
    }

    #[test]
    fn test_message_shown_during_pause_then_prompt() {
        let mut state = state();
        state.shoot(-5000.0, -200.0);
        loop {
            tick(&mut state, &TickInput::default(), SIM_DT);
            if let ShotPhase::Resolved { outcome, .. } = state.phase {
                assert_eq!(state.message, GameMessage::for_outcome(outcome));
                assert_ne!(outcome, Outcome::Miss);
                break;
            }
        }
        run_until_idle(&mut state);
        assert_eq!(state.message, GameMessage::Prompt);
    }

    #[test]
    fn test_nan_flight_time_still_resolves_and_rearms() {
        let mut tuning = Tuning::default();
        tuning.shot.base_duration = f32::NAN;
        let mut state = GameState::new(Vec2::new(390.0, 844.0), tuning, Settings::default());
        assert!(matches!(state.shoot(0.0, -200.0), ShotResponse::Taken(_)));

        let ticks = run_until_idle(&mut state);
        assert!(ticks < 200);
        assert_eq!(state.scoreboard.total(), 1);
        assert!(state.gesture.is_armed());
        assert_eq!(state.ball.position(), state.layout.ball_start);
    }
}
