const PERSPECTIVE_PX: f64 = 1000.0;
// pointer distance (px) per degree of rotation
const SENSITIVITY: f64 = 20.0;
const HOVER_SCALE: f64 = 1.02;

/// 3D rotation of a card following the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub scale: f64,
}

impl Default for Tilt {
    fn default() -> Self {
        Self::REST
    }
}

impl Tilt {
    pub const REST: Tilt = Tilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
        scale: 1.0,
    };

    /// Tilt for a pointer at `(x, y)` inside a `width` x `height` card,
    /// coordinates relative to the card's top left corner.
    pub fn from_pointer(x: f64, y: f64, width: f64, height: f64) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::REST;
        }
        let x = x.clamp(0.0, width);
        let y = y.clamp(0.0, height);
        Self {
            rotate_x: (y - height / 2.0) / SENSITIVITY,
            rotate_y: (width / 2.0 - x) / SENSITIVITY,
            scale: HOVER_SCALE,
        }
    }

    pub fn css_transform(&self) -> String {
        format!(
            "perspective({PERSPECTIVE_PX}px) rotateX({:.2}deg) rotateY({:.2}deg) scale({})",
            self.rotate_x, self.rotate_y, self.scale
        )
    }
}
