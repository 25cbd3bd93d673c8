use std::time::Duration;

use log::{debug, info};

use crate::constants::*;
use crate::renderable::Renderable;
use crate::state::ControllerState;
use crate::timer::IntervalTimer;

// Owns the one repeating timer and advances its target element once per
// elapsed interval. The target is handed in by the caller, never looked
// up here.
pub struct AnimationController {
    timer: Option<IntervalTimer>,
    tick_interval: Duration,
}

impl AnimationController {
    pub fn with_interval(tick_interval: Duration) -> Self {
        Self {
            timer: None,
            tick_interval,
        }
    }

    pub fn state(&self) -> ControllerState {
        if self.timer.is_some() {
            ControllerState::Running
        } else {
            ControllerState::Stopped
        }
    }

    // Arm the repeating timer. Starting while already running is a no-op.
    pub fn start(&mut self) {
        if self.timer.is_none() {
            self.timer = Some(IntervalTimer::new(self.tick_interval));
            info!("animation started ({:?} per tick)", self.tick_interval);
        }
    }

    // Cancel the timer. Stopping while already stopped is a no-op.
    pub fn stop(&mut self) {
        if self.timer.take().is_some() {
            info!("animation stopped");
        }
    }

    // Feed elapsed time from the host loop; runs one tick per full
    // interval elapsed since the last update. Does nothing while stopped.
    pub fn update(&mut self, dt: Duration, target: &mut dyn Renderable) {
        let fired = match self.timer.as_mut() {
            Some(timer) => timer.advance(dt),
            None => return,
        };
        for _ in 0..fired {
            self.tick(target);
        }
    }

    // One animation step: move the element one step to the right,
    // wrapping back to the left end of the track past the right bound.
    pub fn tick(&mut self, target: &mut dyn Renderable) {
        let mut cx = target.position() + TICK_STEP;
        if cx > TRACK_MAX_CX {
            debug!("wrapped from {} back to {}", cx - TICK_STEP, TRACK_MIN_CX);
            cx = TRACK_MIN_CX;
        }
        target.set_position(cx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeCircle {
        cx: i32,
    }

    impl FakeCircle {
        fn at(cx: i32) -> Self {
            Self { cx }
        }
    }

    impl Renderable for FakeCircle {
        fn position(&self) -> i32 {
            self.cx
        }

        fn set_position(&mut self, cx: i32) {
            self.cx = cx;
        }
    }

    const TICK: Duration = Duration::from_millis(TICK_INTERVAL_MS);

    fn make_controller() -> AnimationController {
        AnimationController::with_interval(TICK)
    }

    #[test]
    fn starts_stopped() {
        let controller = make_controller();
        assert_eq!(controller.state(), ControllerState::Stopped);
    }

    #[test]
    fn start_is_idempotent() {
        let mut controller = make_controller();
        let mut circle = FakeCircle::at(50);
        controller.start();
        controller.start();
        assert_eq!(controller.state(), ControllerState::Running);
        // A second start must not stack a second timer
        controller.update(TICK, &mut circle);
        assert_eq!(circle.cx, 51);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut controller = make_controller();
        controller.stop();
        controller.stop();
        assert_eq!(controller.state(), ControllerState::Stopped);

        controller.start();
        controller.stop();
        controller.stop();
        assert_eq!(controller.state(), ControllerState::Stopped);
    }

    #[test]
    fn tick_advances_by_one() {
        let mut controller = make_controller();
        let mut circle = FakeCircle::at(50);
        controller.tick(&mut circle);
        assert_eq!(circle.cx, 51);
    }

    #[test]
    fn tick_wraps_past_right_bound() {
        let mut controller = make_controller();
        let mut circle = FakeCircle::at(600);
        controller.tick(&mut circle);
        assert_eq!(circle.cx, 50);
    }

    #[test]
    fn tick_wraps_out_of_range_position() {
        let mut controller = make_controller();
        let mut circle = FakeCircle::at(601);
        controller.tick(&mut circle);
        assert_eq!(circle.cx, 50);
    }

    #[test]
    fn update_does_nothing_while_stopped() {
        let mut controller = make_controller();
        let mut circle = FakeCircle::at(50);
        controller.update(Duration::from_secs(1), &mut circle);
        assert_eq!(circle.cx, 50);
    }

    #[test]
    fn update_runs_one_tick_per_interval() {
        let mut controller = make_controller();
        let mut circle = FakeCircle::at(50);
        controller.start();
        controller.update(TICK * 3, &mut circle);
        assert_eq!(circle.cx, 53);
    }

    #[test]
    fn full_cycle_wraps_back_to_start() {
        let mut controller = make_controller();
        let mut circle = FakeCircle::at(50);
        controller.start();
        // 50 to 600 is 550 steps; the 551st wraps back to 50
        for _ in 0..551 {
            controller.update(TICK, &mut circle);
        }
        assert_eq!(circle.cx, 50);

        controller.stop();
        controller.update(TICK * 10, &mut circle);
        assert_eq!(circle.cx, 50);

        // A direct tick still computes; the timer just no longer drives it
        controller.tick(&mut circle);
        assert_eq!(circle.cx, 51);
    }
}
