// Animated transactions and per-container transition progress

use eframe::egui;
use std::f32::consts::TAU;

const TRANSACTION_KEY: &str = "stack_navigation_transaction";

/// Timing curve mapping normalized time to progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Curve {
    Linear,
    EaseInOut,
    /// Damped spring step response. `response` is the period of the
    /// undamped oscillation in seconds.
    Spring { response: f32, damping_fraction: f32 },
}

/// A timing curve together with how long it runs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Animation {
    pub curve: Curve,
    pub duration: f32,
}

impl Animation {
    pub fn linear(duration: f32) -> Self {
        Self {
            curve: Curve::Linear,
            duration,
        }
    }

    pub fn ease_in_out(duration: f32) -> Self {
        Self {
            curve: Curve::EaseInOut,
            duration,
        }
    }

    pub fn spring() -> Self {
        Self {
            curve: Curve::Spring {
                response: 0.55,
                damping_fraction: 0.825,
            },
            duration: 0.8,
        }
    }

    /// Progress at `elapsed` seconds. Reaches exactly 1.0 once the
    /// duration has passed.
    pub fn sample(&self, elapsed: f32) -> f32 {
        if self.duration <= 0.0 || elapsed >= self.duration {
            return 1.0;
        }
        let elapsed = elapsed.max(0.0);
        let t = elapsed / self.duration;
        match self.curve {
            Curve::Linear => t,
            Curve::EaseInOut => t * t * (3.0 - 2.0 * t),
            Curve::Spring {
                response,
                damping_fraction,
            } => spring_step(elapsed, response, damping_fraction),
        }
    }
}

fn spring_step(elapsed: f32, response: f32, damping_fraction: f32) -> f32 {
    let omega = TAU / response.max(f32::EPSILON);
    let zeta = damping_fraction.clamp(0.0, 1.0);
    let decay = (-zeta * omega * elapsed).exp();
    if zeta >= 1.0 {
        return 1.0 - decay * (1.0 + omega * elapsed);
    }
    let damped = omega * (1.0 - zeta * zeta).sqrt();
    1.0 - decay * ((damped * elapsed).cos() + (zeta * omega / damped) * (damped * elapsed).sin())
}

#[derive(Clone, Copy, Debug)]
struct Transaction {
    animation: Animation,
    issued_pass: u64,
}

fn transaction_id() -> egui::Id {
    egui::Id::new(TRANSACTION_KEY)
}

/// Run `body` inside an animated transaction.
///
/// Any stack navigation that observes a change of its visibility flag in
/// this pass or the next one animates that change with `animation`.
pub fn with_animation<R>(ctx: &egui::Context, animation: Animation, body: impl FnOnce() -> R) -> R {
    let transaction = Transaction {
        animation,
        issued_pass: ctx.cumulative_pass_nr(),
    };
    ctx.data_mut(|d| d.insert_temp(transaction_id(), transaction));
    ctx.request_repaint();
    body()
}

/// Animation of the transaction still open for the current pass, if any.
pub fn pending_animation(ctx: &egui::Context) -> Option<Animation> {
    let pass = ctx.cumulative_pass_nr();
    ctx.data(|d| d.get_temp::<Transaction>(transaction_id()))
        .filter(|t| pass.saturating_sub(t.issued_pass) <= 1)
        .map(|t| t.animation)
}

/// Consume the open transaction. Stale transactions are discarded.
pub(crate) fn take_transaction(ctx: &egui::Context) -> Option<Animation> {
    let animation = pending_animation(ctx);
    ctx.data_mut(|d| d.remove::<Transaction>(transaction_id()));
    animation
}

/// Visual progress of one container between its root (0.0) and its
/// detail view (1.0).
#[derive(Clone, Copy, Debug)]
pub struct TransitionTracker {
    target: bool,
    from: f32,
    started_at: f64,
    animation: Option<Animation>,
}

impl TransitionTracker {
    pub fn new(showing_detail: bool) -> Self {
        Self {
            target: showing_detail,
            from: if showing_detail { 1.0 } else { 0.0 },
            started_at: 0.0,
            animation: None,
        }
    }

    pub fn target(&self) -> bool {
        self.target
    }

    /// Start moving towards `showing_detail`, from wherever the view is now.
    pub fn retarget(&mut self, showing_detail: bool, now: f64, animation: Option<Animation>) {
        self.from = self.progress(now);
        self.target = showing_detail;
        self.started_at = now;
        self.animation = animation;
    }

    pub fn progress(&self, now: f64) -> f32 {
        let to = if self.target { 1.0 } else { 0.0 };
        match self.animation {
            None => to,
            Some(animation) => {
                let elapsed = (now - self.started_at) as f32;
                self.from + (to - self.from) * animation.sample(elapsed)
            }
        }
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.animation
            .is_some_and(|a| ((now - self.started_at) as f32) < a.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curves_start_at_zero_and_end_at_one() {
        for animation in [
            Animation::linear(0.3),
            Animation::ease_in_out(0.3),
            Animation::spring(),
        ] {
            assert!(animation.sample(0.0).abs() < 1e-4);
            assert_eq!(animation.sample(animation.duration), 1.0);
            assert_eq!(animation.sample(animation.duration + 1.0), 1.0);
        }
    }

    #[test]
    fn test_spring_settles_near_target() {
        let spring = Animation::spring();
        let late = spring.sample(spring.duration * 0.95);
        assert!((late - 1.0).abs() < 0.05, "spring at 95%: {late}");
    }

    #[test]
    fn test_zero_duration_jumps() {
        assert_eq!(Animation::linear(0.0).sample(0.0), 1.0);
    }

    #[test]
    fn test_tracker_without_animation_snaps() {
        let mut tracker = TransitionTracker::new(false);
        assert_eq!(tracker.progress(0.0), 0.0);

        tracker.retarget(true, 1.0, None);
        assert_eq!(tracker.progress(1.0), 1.0);
        assert!(!tracker.is_animating(1.0));
    }

    #[test]
    fn test_tracker_animates_with_transaction() {
        let mut tracker = TransitionTracker::new(false);
        tracker.retarget(true, 10.0, Some(Animation::linear(1.0)));

        assert!(tracker.is_animating(10.5));
        assert!((tracker.progress(10.5) - 0.5).abs() < 1e-4);
        assert_eq!(tracker.progress(11.0), 1.0);
        assert!(!tracker.is_animating(11.0));
    }

    #[test]
    fn test_tracker_retargets_mid_flight() {
        let mut tracker = TransitionTracker::new(false);
        tracker.retarget(true, 0.0, Some(Animation::linear(1.0)));
        tracker.retarget(false, 0.25, Some(Animation::linear(1.0)));

        assert!((tracker.progress(0.25) - 0.25).abs() < 1e-4);
        assert!((tracker.progress(0.75) - 0.125).abs() < 1e-4);
        assert_eq!(tracker.progress(1.25), 0.0);
    }

    #[test]
    fn test_transaction_is_taken_once() {
        let ctx = egui::Context::default();
        let value = with_animation(&ctx, Animation::spring(), || 7);

        assert_eq!(value, 7);
        assert_eq!(pending_animation(&ctx), Some(Animation::spring()));
        assert_eq!(take_transaction(&ctx), Some(Animation::spring()));
        assert_eq!(take_transaction(&ctx), None);
    }
}
