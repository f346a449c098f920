//! Timed interpolation for the page's entrance and hover animations.
//!
//! Every animated value is a [`Tween`]: a start and end value, how long it has
//! been running, an optional start delay and an easing curve. Nothing here owns
//! a clock; the view advances tweens from the browser's frame callback with the
//! time elapsed since the previous frame.

pub const ENTRANCE_DURATION_MS: f64 = 600.0;
pub const HEADING_DELAY_MS: f64 = 300.0;
pub const SUBTITLE_DELAY_MS: f64 = 500.0;
pub const EMPHASIS_DURATION_MS: f64 = 250.0;

const HEADING_OFFSET_PX: f64 = -40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Entrances
    #[default]
    EaseOutCubic,
    /// Hover emphasis, symmetric in both directions
    EaseInOutCubic,
}

impl Easing {
    /// Calculate eased progress
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    elapsed_ms: f64,
    delay_ms: f64,
    duration_ms: f64,
    easing: Easing,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            elapsed_ms: 0.0,
            delay_ms: 0.0,
            duration_ms: duration_ms.max(0.0),
            easing: Easing::default(),
        }
    }

    /// A tween already resting at `value`.
    pub fn settled(value: f64, duration_ms: f64) -> Self {
        let mut tween = Self::new(value, value, duration_ms);
        tween.finish();
        tween
    }

    pub fn with_delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms.max(0.0);
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    /// Fraction of the running time completed, before easing. Zero while the
    /// delay is still pending.
    pub fn progress(&self) -> f64 {
        let running = self.elapsed_ms - self.delay_ms;
        if running < 0.0 {
            0.0
        } else if self.duration_ms == 0.0 {
            1.0
        } else {
            (running / self.duration_ms).clamp(0.0, 1.0)
        }
    }

    pub fn value(&self) -> f64 {
        lerp(self.from, self.to, self.easing.apply(self.progress()))
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.delay_ms + self.duration_ms
    }

    /// Move the clock forward by `dt_ms` and return the new value.
    pub fn advance(&mut self, dt_ms: f64) -> f64 {
        if dt_ms.is_finite() && dt_ms > 0.0 {
            self.elapsed_ms = (self.elapsed_ms + dt_ms).min(self.delay_ms + self.duration_ms);
        }
        self.value()
    }

    pub fn finish(&mut self) {
        self.elapsed_ms = self.delay_ms + self.duration_ms;
    }

    /// Start a new leg from wherever the tween currently is.
    pub fn retarget(&mut self, to: f64) {
        if to == self.to {
            return;
        }
        self.from = self.value();
        self.to = to;
        self.elapsed_ms = 0.0;
        self.delay_ms = 0.0;
        // nothing left to travel
        if self.from == self.to {
            self.finish();
        }
    }
}

/// Fade plus vertical slide used for the heading block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    opacity: Tween,
    offset_y: Tween,
}

impl Entrance {
    pub fn slide_down(delay_ms: f64) -> Self {
        Self {
            opacity: Tween::new(0.0, 1.0, ENTRANCE_DURATION_MS).with_delay(delay_ms),
            offset_y: Tween::new(HEADING_OFFSET_PX, 0.0, ENTRANCE_DURATION_MS).with_delay(delay_ms),
        }
    }

    pub fn fade_in(delay_ms: f64) -> Self {
        Self {
            opacity: Tween::new(0.0, 1.0, ENTRANCE_DURATION_MS).with_delay(delay_ms),
            offset_y: Tween::settled(0.0, ENTRANCE_DURATION_MS),
        }
    }

    pub fn opacity(&self) -> f64 {
        self.opacity.value()
    }

    pub fn offset_y(&self) -> f64 {
        self.offset_y.value()
    }

    pub fn advance(&mut self, dt_ms: f64) {
        self.opacity.advance(dt_ms);
        self.offset_y.advance(dt_ms);
    }

    pub fn finish(&mut self) {
        self.opacity.finish();
        self.offset_y.finish();
    }

    pub fn is_finished(&self) -> bool {
        self.opacity.is_finished() && self.offset_y.is_finished()
    }

    pub fn style(&self) -> String {
        format!(
            "opacity: {:.3}; transform: translate3d(0, {:.1}px, 0);",
            self.opacity(),
            self.offset_y()
        )
    }
}

/// Scale and shadow applied to project cards while hovered.
///
/// Progress runs from 0 (resting) to 1 (emphasized).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Emphasis {
    progress: Tween,
}

impl Default for Emphasis {
    fn default() -> Self {
        Self {
            progress: Tween::settled(0.0, EMPHASIS_DURATION_MS)
                .with_easing(Easing::EaseInOutCubic),
        }
    }
}

impl Emphasis {
    pub const REST_SCALE: f64 = 1.0;
    pub const ACTIVE_SCALE: f64 = 1.05;

    pub fn set_active(&mut self, active: bool) {
        self.progress.retarget(if active { 1.0 } else { 0.0 });
    }

    pub fn is_active(&self) -> bool {
        self.progress.target() == 1.0
    }

    pub fn advance(&mut self, dt_ms: f64) {
        self.progress.advance(dt_ms);
    }

    pub fn finish(&mut self) {
        self.progress.finish();
    }

    pub fn is_finished(&self) -> bool {
        self.progress.is_finished()
    }

    pub fn scale(&self) -> f64 {
        lerp(Self::REST_SCALE, Self::ACTIVE_SCALE, self.progress.value())
    }

    pub fn style(&self) -> String {
        let p = self.progress.value();
        format!(
            "transform: scale({:.3}); box-shadow: 0 {:.1}px {:.1}px rgba(0, 0, 0, {:.3});",
            self.scale(),
            lerp(4.0, 8.0, p),
            lerp(20.0, 40.0, p),
            lerp(0.08, 0.12, p)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::EaseOutCubic, Easing::EaseInOutCubic] {
            assert!(easing.apply(0.0).abs() < EPS);
            assert!((easing.apply(1.0) - 1.0).abs() < EPS);
            assert!((easing.apply(2.0) - 1.0).abs() < EPS);
            assert!(easing.apply(-1.0).abs() < EPS);
        }
        assert!((Easing::EaseInOutCubic.apply(0.5) - 0.5).abs() < EPS);
        assert!(Easing::EaseOutCubic.apply(0.5) > 0.5);
    }

    #[test]
    fn test_tween_respects_delay() {
        let mut tween = Tween::new(0.0, 1.0, 100.0)
            .with_delay(50.0)
            .with_easing(Easing::EaseInOutCubic);
        assert_eq!(tween.value(), 0.0);
        tween.advance(50.0);
        assert_eq!(tween.value(), 0.0);
        assert!((tween.advance(25.0) - 0.0625).abs() < EPS);
        assert!(!tween.is_finished());
        tween.advance(1000.0);
        assert_eq!(tween.value(), 1.0);
        assert!(tween.is_finished());
    }

    #[test]
    fn test_tween_ignores_bad_frame_times() {
        let mut tween = Tween::new(0.0, 10.0, 100.0);
        tween.advance(-20.0);
        tween.advance(f64::NAN);
        assert_eq!(tween.value(), 0.0);
        tween.advance(f64::INFINITY);
        assert_eq!(tween.value(), 0.0);
    }

    #[test]
    fn test_zero_duration_jumps() {
        let tween = Tween::new(3.0, 7.0, 0.0);
        assert_eq!(tween.value(), 7.0);
        assert!(tween.is_finished());
    }

    #[test]
    fn test_retarget_is_continuous() {
        let mut tween = Tween::new(0.0, 1.0, 100.0);
        tween.advance(40.0);
        let before = tween.value();
        tween.retarget(0.0);
        assert!((tween.value() - before).abs() < EPS);
        tween.advance(100.0);
        assert_eq!(tween.value(), 0.0);

        // same target keeps the running leg
        let mut tween = Tween::new(0.0, 1.0, 100.0);
        tween.advance(40.0);
        tween.retarget(1.0);
        assert!((tween.value() - Easing::EaseOutCubic.apply(0.4)).abs() < EPS);
        assert!(!tween.is_finished());
    }

    #[test]
    fn test_slide_down_entrance() {
        let mut heading = Entrance::slide_down(HEADING_DELAY_MS);
        assert_eq!(heading.opacity(), 0.0);
        assert_eq!(heading.offset_y(), -40.0);
        assert_eq!(
            heading.style(),
            "opacity: 0.000; transform: translate3d(0, -40.0px, 0);"
        );
        heading.advance(HEADING_DELAY_MS);
        assert_eq!(heading.opacity(), 0.0);
        heading.advance(ENTRANCE_DURATION_MS);
        assert!(heading.is_finished());
        assert_eq!(
            heading.style(),
            "opacity: 1.000; transform: translate3d(0, 0.0px, 0);"
        );
    }

    #[test]
    fn test_fade_in_does_not_move() {
        let mut subtitle = Entrance::fade_in(SUBTITLE_DELAY_MS);
        assert_eq!(subtitle.offset_y(), 0.0);
        subtitle.finish();
        assert_eq!(subtitle.opacity(), 1.0);
        assert!(subtitle.is_finished());
    }

    #[test]
    fn test_emphasis_rest_and_active_styles() {
        let mut emphasis = Emphasis::default();
        assert!(emphasis.is_finished());
        assert!(!emphasis.is_active());
        assert_eq!(
            emphasis.style(),
            "transform: scale(1.000); box-shadow: 0 4.0px 20.0px rgba(0, 0, 0, 0.080);"
        );

        emphasis.set_active(true);
        assert!(emphasis.is_active());
        emphasis.advance(EMPHASIS_DURATION_MS);
        assert!((emphasis.scale() - Emphasis::ACTIVE_SCALE).abs() < EPS);
        assert_eq!(
            emphasis.style(),
            "transform: scale(1.050); box-shadow: 0 8.0px 40.0px rgba(0, 0, 0, 0.120);"
        );
    }

    #[test]
    fn test_emphasis_immediate_round_trip() {
        let mut emphasis = Emphasis::default();
        let rest = emphasis.style();
        emphasis.set_active(true);
        emphasis.set_active(false);
        assert!(!emphasis.is_active());
        assert_eq!(emphasis.style(), rest);
        assert!(emphasis.is_finished());
        assert_eq!(emphasis, Emphasis::default());
    }

    #[test]
    fn test_retarget_to_current_value_settles() {
        let mut tween = Tween::settled(0.0, 100.0);
        tween.retarget(1.0);
        assert!(!tween.is_finished());
        tween.retarget(0.0);
        assert!(tween.is_finished());
        assert_eq!(tween, Tween::settled(0.0, 100.0));
    }
}
