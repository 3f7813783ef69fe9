/// Constants of a damped spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Distance from the target under which the spring may settle.
    pub rest_delta: f64,
    /// Speed under which the spring may settle.
    pub rest_speed: f64,
}

/// Smoothing applied to the raw scroll ratio.
pub const SCROLL_SPRING: SpringConfig = SpringConfig {
    stiffness: 100.0,
    damping: 30.0,
    mass: 1.0,
    rest_delta: 0.001,
    rest_speed: 0.01,
};

// integration step, seconds
const SUBSTEP: f64 = 0.001;
// frames longer than this (background tabs) are shortened
const MAX_FRAME: f64 = 0.1;

/// A one dimensional spring chasing a target inside `[min, max]`.
///
/// `step` reports a value only while the spring is moving. Once it comes to
/// rest it snaps onto the target and stays silent until the target changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
    min: f64,
    max: f64,
    at_rest: bool,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self::bounded(config, initial, 0.0, 1.0)
    }

    pub fn bounded(config: SpringConfig, initial: f64, min: f64, max: f64) -> Self {
        let initial = initial.clamp(min, max);
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
            min,
            max,
            at_rest: true,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    pub fn set_target(&mut self, target: f64) {
        let target = if target.is_finite() {
            target.clamp(self.min, self.max)
        } else {
            self.min
        };
        if target == self.target && self.at_rest {
            return;
        }
        self.target = target;
        self.at_rest = false;
    }

    /// Advances the spring by `dt` seconds.
    ///
    /// Returns the new value, or `None` if the spring was already at rest.
    pub fn step(&mut self, dt: f64) -> Option<f64> {
        if self.at_rest {
            return None;
        }
        let mut remaining = dt.clamp(0.0, MAX_FRAME);
        let SpringConfig {
            stiffness,
            damping,
            mass,
            rest_delta,
            rest_speed,
        } = self.config;
        while remaining > 0.0 {
            let h = remaining.min(SUBSTEP);
            let force = -stiffness * (self.value - self.target) - damping * self.velocity;
            self.velocity += force / mass * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
        if self.value < self.min || self.value > self.max {
            self.value = self.value.clamp(self.min, self.max);
            self.velocity = 0.0;
        }
        if (self.value - self.target).abs() < rest_delta && self.velocity.abs() < rest_speed {
            self.value = self.target;
            self.velocity = 0.0;
            self.at_rest = true;
        }
        Some(self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn settle(spring: &mut Spring) -> Vec<f64> {
        let mut out = Vec::new();
        for _ in 0..600 {
            match spring.step(FRAME) {
                Some(v) => out.push(v),
                None => break,
            }
        }
        out
    }

    #[test]
    fn test_starts_at_rest() {
        let mut spring = Spring::new(SCROLL_SPRING, 0.0);
        assert!(spring.is_at_rest());
        assert_eq!(spring.step(FRAME), None);
        assert_eq!(spring.value(), 0.0);
    }

    #[test]
    fn test_converges_and_goes_quiet() {
        let mut spring = Spring::new(SCROLL_SPRING, 0.0);
        spring.set_target(1.0);
        let values = settle(&mut spring);
        assert!(!values.is_empty());
        assert!(spring.is_at_rest());
        assert_eq!(spring.value(), 1.0);
        assert_eq!(values.last().copied(), Some(1.0));
        // no further distinct output once input is stable
        for _ in 0..10 {
            assert_eq!(spring.step(FRAME), None);
        }
    }

    #[test]
    fn test_settles_within_bounded_time() {
        let mut spring = Spring::new(SCROLL_SPRING, 0.0);
        spring.set_target(1.0);
        let frames = settle(&mut spring).len();
        // roughly two seconds at 60fps for a full-page jump
        assert!(frames < 240, "took {frames} frames");
    }

    #[test]
    fn test_tracks_monotonically_without_overshoot() {
        let mut spring = Spring::new(SCROLL_SPRING, 0.2);
        spring.set_target(0.8);
        let values = settle(&mut spring);
        for pair in values.windows(2) {
            assert!(pair[1] >= pair[0], "{} then {}", pair[0], pair[1]);
        }
        assert!(values.iter().all(|v| *v <= 0.8));

        spring.set_target(0.1);
        let values = settle(&mut spring);
        for pair in values.windows(2) {
            assert!(pair[1] <= pair[0], "{} then {}", pair[0], pair[1]);
        }
        assert!(values.iter().all(|v| *v >= 0.1));
    }

    #[test]
    fn test_output_is_clamped() {
        let mut spring = Spring::new(SCROLL_SPRING, 0.5);
        spring.set_target(7.0);
        assert_eq!(spring.target(), 1.0);
        for v in settle(&mut spring) {
            assert!((0.0..=1.0).contains(&v));
        }
        spring.set_target(-3.0);
        assert_eq!(spring.target(), 0.0);
        for v in settle(&mut spring) {
            assert!((0.0..=1.0).contains(&v));
        }
        spring.set_target(f64::NAN);
        assert_eq!(spring.target(), 0.0);
    }

    #[test]
    fn test_same_target_does_not_wake() {
        let mut spring = Spring::new(SCROLL_SPRING, 0.4);
        spring.set_target(0.4);
        assert!(spring.is_at_rest());
        assert_eq!(spring.step(FRAME), None);
    }

    #[test]
    fn test_long_frames_stay_stable() {
        let mut spring = Spring::new(SCROLL_SPRING, 0.0);
        spring.set_target(1.0);
        for _ in 0..100 {
            if let Some(v) = spring.step(5.0) {
                assert!((0.0..=1.0).contains(&v));
            }
        }
        assert!(spring.is_at_rest());
    }
}
