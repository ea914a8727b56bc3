use std::fmt;

/// Planar vector: `x` is horizontal, `y` is vertical.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub fn new(x: f64, y: f64) -> Self {
        Vector2D { x, y }
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        write!(
            f,
            "x = {:.precision$} m, y = {:.precision$} m",
            self.x,
            self.y,
            precision = precision
        )
    }
}
