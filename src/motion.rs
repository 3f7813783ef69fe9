//! Timing and geometry behind the page's motion effects.
//!
//! Everything here is plain arithmetic over progress values and indices so it
//! can be exercised without a browser. The view layer turns the results into
//! inline styles.

mod reveal;
mod spring;
mod tilt;

pub use reveal::RevealLatch;
pub use spring::{Spring, SpringConfig, SCROLL_SPRING};
pub use tilt::Tilt;

/// Easing shared by every fade-in.
pub const EASE_OUT: &str = "cubic-bezier(0.25, 0.1, 0.25, 1)";
/// Length of a fade-in-up, seconds.
pub const FADE_DURATION: f64 = 0.8;
/// Distance a fade-in-up travels, px.
pub const FADE_OFFSET: f64 = 60.0;
/// Delay between consecutive children of a revealed group, seconds.
pub const STAGGER: f64 = 0.2;
/// Delay between consecutive badges, seconds.
pub const BADGE_STAGGER: f64 = 0.1;
/// Distance a project badge slides in from, px.
pub const BADGE_OFFSET: f64 = -20.0;

/// Linear map from smoothed scroll progress to a vertical offset in px.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    pub from: f64,
    pub to: f64,
}

impl Parallax {
    pub const fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    pub fn at(&self, progress: f64) -> f64 {
        let p = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.from + (self.to - self.from) * p
    }

    pub fn translate_y(&self, progress: f64) -> String {
        format!("transform: translateY({:.1}px);", self.at(progress))
    }
}

pub const GRID_PARALLAX: Parallax = Parallax::new(0.0, 100.0);

/// A looping decorative shape in the hero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingShape {
    pub class: &'static str,
    pub parallax: Parallax,
    /// Peak scale of the loop.
    pub grow: f64,
    /// Peak rotation of the loop, degrees.
    pub spin: f64,
    /// Loop length, seconds.
    pub period: f64,
    pub clip_path: Option<&'static str>,
    pub rounded: bool,
}

impl FloatingShape {
    pub fn loop_style(&self) -> String {
        format!(
            "--grow: {}; --spin: {}deg; animation-duration: {}s;",
            self.grow, self.spin, self.period
        )
    }
}

pub const FLOATING_SHAPES: [FloatingShape; 3] = [
    FloatingShape {
        class: "top-20 right-20 w-64 h-64",
        parallax: Parallax::new(0.0, -200.0),
        grow: 1.1,
        spin: 90.0,
        period: 20.0,
        clip_path: None,
        rounded: true,
    },
    FloatingShape {
        class: "top-1/2 left-10 w-48 h-48",
        parallax: Parallax::new(0.0, -100.0),
        grow: 1.2,
        spin: -90.0,
        period: 15.0,
        clip_path: None,
        rounded: false,
    },
    FloatingShape {
        class: "bottom-40 right-1/4 w-56 h-56",
        parallax: Parallax::new(0.0, -150.0),
        grow: 1.15,
        spin: 180.0,
        period: 18.0,
        clip_path: Some("polygon(50% 0%, 0% 100%, 100% 100%)"),
        rounded: false,
    },
];

/// Inline style for the `index`th child of a fade-in-up group.
pub fn fade_in_up(index: usize, revealed: bool) -> String {
    let (opacity, offset) = if revealed { (1, 0.0) } else { (0, FADE_OFFSET) };
    format!(
        "opacity: {opacity}; transform: translateY({offset}px); transition: opacity {FADE_DURATION}s {EASE_OUT} {delay:.1}s, transform {FADE_DURATION}s {EASE_OUT} {delay:.1}s;",
        delay = stagger_delay(index, STAGGER),
    )
}

/// Breathing float for the `index`th tech stack pill.
pub fn breathe(index: usize) -> String {
    format!(
        "animation-duration: {:.1}s; animation-delay: {:.1}s;",
        2.0 + index as f64 * 0.2,
        stagger_delay(index, BADGE_STAGGER)
    )
}

/// Slide-in for the `index`th badge of a project card.
pub fn slide_in(index: usize, revealed: bool) -> String {
    let (opacity, offset) = if revealed { (1, 0.0) } else { (0, BADGE_OFFSET) };
    format!(
        "opacity: {opacity}; transform: translateX({offset}px); transition: opacity 0.4s ease-out {delay:.1}s, transform 0.4s ease-out {delay:.1}s;",
        delay = stagger_delay(index, BADGE_STAGGER),
    )
}

pub fn stagger_delay(index: usize, step: f64) -> f64 {
    index as f64 * step
}
