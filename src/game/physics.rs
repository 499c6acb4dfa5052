use rand::Rng;

use crate::audio::SoundEffect;

use super::collision::check_sprite_collision;
use super::state::{GameState, Phase};

/// What happened during one update, for the screen runner to act on
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameEvents {
    pub pipes_spawned: bool,
    pub crashed: bool,
    pub points: u32,
    pub show_game_over: bool,
}

/// Advance the game by `dt` seconds
pub fn update<R: Rng + ?Sized>(state: &mut GameState, dt: f32, rng: &mut R) -> FrameEvents {
    let mut events = FrameEvents::default();

    if state.phase != Phase::GameOver {
        state.bird.animate(dt);
        state.land.move_land(dt);
    }

    if state.phase == Phase::Playing {
        state.pipe.move_pipes(dt);

        state.clock += dt;
        if state.clock > state.tuning.pipe_spawn_frequency {
            state.pipe.randomise_offset(rng);
            state.pipe.spawn_bottom_pipe();
            state.pipe.spawn_top_pipe();
            state.pipe.spawn_scoring_pipe();
            state.clock = 0.0;

            tracing::debug!(offset = state.pipe.spawn_y_offset(), "pipes spawned");
            events.pipes_spawned = true;
        }

        state.bird.update(dt);

        if check_crash(state) {
            state.phase = Phase::GameOver;
            state.clock = 0.0;
            state.sounds.play(SoundEffect::Hit);

            tracing::info!(score = state.score, bird = ?state.bird.state(), "bird crashed");
            events.crashed = true;
        }

        if state.phase == Phase::Playing {
            events.points = collect_points(state);
        }
    }

    if state.phase == Phase::GameOver {
        state.flash.show(dt);

        state.clock += dt;
        if state.clock > state.tuning.time_before_game_over {
            events.show_game_over = true;
        }
    }

    events
}

/// Bird against the land, then against every pipe
fn check_crash(state: &GameState) -> bool {
    let bird = state.bird.sprite();
    let scale = state.tuning.detection_scale;

    state
        .land
        .sprites()
        .iter()
        .chain(state.pipe.sprites())
        .any(|sprite| check_sprite_collision(sprite, 1.0, bird, scale))
}

/// Award a point for, and remove, every scoring strip the bird overlaps
fn collect_points(state: &mut GameState) -> u32 {
    let bird = state.bird.sprite();
    let scale = state.tuning.detection_scale;

    let points = state
        .pipe
        .remove_scoring(|sprite| check_sprite_collision(bird, scale, sprite, 1.0));

    for _ in 0..points {
        state.score += 1;
        state.hud.update_score(state.score);
        state.sounds.play(SoundEffect::Point);
    }

    if points > 0 {
        tracing::debug!(score = state.score, "scored");
    }
    points
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::game::input::InputAction;
    use crate::game::state::tests::test_game;

    const DT: f32 = 1.0 / 60.0;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    /// Keep the bird hovering mid-field so only the test's setup decides
    /// what it touches
    fn hover(state: &mut GameState) {
        let sprite = state.bird.sprite_mut();
        sprite.y = 300.0;
        sprite.set_rotation(0.0);
    }

    #[test]
    fn test_ready_phase_scrolls_land_but_not_pipes() {
        let (mut state, _) = test_game();
        let land_x = state.land.sprites()[0].x;
        let bird_y = state.bird.sprite().y;

        for _ in 0..200 {
            let events = update(&mut state, DT, &mut rng());
            assert_eq!(events, FrameEvents::default());
        }

        assert_ne!(state.land.sprites()[0].x, land_x);
        assert!(state.pipe.sprites().is_empty());
        assert_eq!(state.bird.sprite().y, bird_y);
        assert_eq!(state.phase, Phase::Ready);
    }

    #[test]
    fn test_pipes_spawn_after_frequency() {
        let (mut state, _) = test_game();
        let mut rng = rng();
        state.handle_input(InputAction::Flap);

        let mut spawned_at = None;
        for frame in 1..=120 {
            hover(&mut state);
            let events = update(&mut state, DT, &mut rng);
            if events.pipes_spawned {
                spawned_at = Some(frame);
                break;
            }
        }

        // 1.5s at 60 FPS, strictly greater than the frequency
        let frame = spawned_at.expect("pipes should spawn");
        assert!((90..=92).contains(&frame));
        assert_eq!(state.pipe.sprites().len(), 2);
        assert_eq!(state.pipe.scoring_sprites().len(), 1);
        assert_eq!(state.clock, 0.0);
    }

    #[test]
    fn test_land_collision_ends_game_with_one_hit_sound() {
        let (mut state, recorder) = test_game();
        state.handle_input(InputAction::Flap);
        recorder.played.borrow_mut().clear();

        // Drop the bird onto the land
        state.bird.sprite_mut().y = 680.0;
        let events = update(&mut state, DT, &mut rng());

        assert!(events.crashed);
        assert_eq!(state.phase, Phase::GameOver);
        assert_eq!(*recorder.played.borrow(), vec![SoundEffect::Hit]);
        assert_eq!(state.clock, DT);
    }

    #[test]
    fn test_pipe_collision_ends_game() {
        let (mut state, _) = test_game();
        state.handle_input(InputAction::Flap);
        hover(&mut state);

        // Bottom pipe right under the bird
        state.pipe.spawn_bottom_pipe();
        let bird_x = state.bird.sprite().x;
        let pipe = &state.pipe.sprites()[0];
        let shift = pipe.x - (bird_x - 20.0);
        state.pipe.move_pipes(shift / state.tuning.pipe_movement_speed);
        state.bird.sprite_mut().y = state.pipe.sprites()[0].y + 10.0;

        let events = update(&mut state, DT, &mut rng());
        assert!(events.crashed);
        assert_eq!(state.phase, Phase::GameOver);
    }

    #[test]
    fn test_scoring_strip_awards_exactly_one_point() {
        let (mut state, recorder) = test_game();
        state.handle_input(InputAction::Flap);
        recorder.played.borrow_mut().clear();

        // Put a scoring strip right on the bird
        state.pipe.spawn_scoring_pipe();
        let shift = state.pipe.scoring_sprites()[0].x - state.bird.sprite().x;
        state.pipe.move_pipes(shift / state.tuning.pipe_movement_speed);

        hover(&mut state);
        let events = update(&mut state, DT, &mut rng());
        assert_eq!(events.points, 1);
        assert_eq!(state.score, 1);
        assert_eq!(state.hud.score(), 1);
        assert!(state.pipe.scoring_sprites().is_empty());
        assert_eq!(*recorder.played.borrow(), vec![SoundEffect::Point]);

        // The strip is gone, so staying put scores nothing more
        hover(&mut state);
        let events = update(&mut state, DT, &mut rng());
        assert_eq!(events.points, 0);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_no_points_outside_playing() {
        let (mut state, _) = test_game();
        state.pipe.spawn_scoring_pipe();
        let shift = state.pipe.scoring_sprites()[0].x - state.bird.sprite().x;
        state.pipe.move_pipes(shift / state.tuning.pipe_movement_speed);

        // Ready: the strip sits on the bird but nothing is scored
        update(&mut state, DT, &mut rng());
        assert_eq!(state.score, 0);

        state.phase = Phase::GameOver;
        update(&mut state, DT, &mut rng());
        assert_eq!(state.score, 0);
        assert_eq!(state.pipe.scoring_sprites().len(), 1);
    }

    #[test]
    fn test_pipes_hold_still_while_ready() {
        let (mut state, _) = test_game();
        state.pipe.spawn_bottom_pipe();
        state.pipe.spawn_scoring_pipe();
        let pipe_x = state.pipe.sprites()[0].x;
        let strip_x = state.pipe.scoring_sprites()[0].x;

        for _ in 0..30 {
            update(&mut state, DT, &mut rng());
        }

        assert_eq!(state.phase, Phase::Ready);
        assert_eq!(state.pipe.sprites()[0].x, pipe_x);
        assert_eq!(state.pipe.scoring_sprites()[0].x, strip_x);
    }

    #[test]
    fn test_pipes_hold_still_after_crash() {
        let (mut state, _) = test_game();
        state.handle_input(InputAction::Flap);
        state.pipe.spawn_bottom_pipe();

        state.bird.sprite_mut().y = 680.0;
        update(&mut state, DT, &mut rng());
        assert_eq!(state.phase, Phase::GameOver);
        let pipe_x = state.pipe.sprites()[0].x;

        for _ in 0..30 {
            let events = update(&mut state, DT, &mut rng());
            assert!(!events.pipes_spawned);
        }
        assert_eq!(state.pipe.sprites()[0].x, pipe_x);
        assert_eq!(state.pipe.sprites().len(), 1);

        // Flapping cannot restart the round
        state.handle_input(InputAction::Flap);
        update(&mut state, DT, &mut rng());
        assert_eq!(state.phase, Phase::GameOver);
        assert_eq!(state.pipe.sprites()[0].x, pipe_x);
    }

    #[test]
    fn test_crash_on_scoring_frame_does_not_score() {
        let (mut state, _) = test_game();
        state.handle_input(InputAction::Flap);

        state.pipe.spawn_scoring_pipe();
        let shift = state.pipe.scoring_sprites()[0].x - state.bird.sprite().x;
        state.pipe.move_pipes(shift / state.tuning.pipe_movement_speed);
        state.bird.sprite_mut().y = 680.0;

        let events = update(&mut state, DT, &mut rng());
        assert!(events.crashed);
        assert_eq!(events.points, 0);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_game_over_screen_after_delay() {
        let (mut state, _) = test_game();
        state.handle_input(InputAction::Flap);
        state.bird.sprite_mut().y = 680.0;
        update(&mut state, DT, &mut rng());
        assert_eq!(state.phase, Phase::GameOver);

        let bird_frame = state.bird.frame_index();
        let land_x = state.land.sprites()[0].x;

        let mut frames = 1;
        loop {
            let events = update(&mut state, DT, &mut rng());
            frames += 1;
            if events.show_game_over {
                break;
            }
            assert!(frames < 200, "game over screen never requested");
        }

        // 1.5s after the crash
        assert!((90..=92).contains(&frames));
        // Everything stays frozen while the flash plays
        assert_eq!(state.bird.frame_index(), bird_frame);
        assert_eq!(state.land.sprites()[0].x, land_x);
        assert_eq!(state.flash.alpha(), 0.0);
    }
}
