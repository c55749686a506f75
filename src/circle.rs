use nalgebra::Vector2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub position: Vector2<f64>,
    pub radius: f64,
}

impl Circle {
    pub fn new(x: f64, y: f64, radius: f64) -> Circle {
        Circle {
            position: Vector2::new(x, y),
            radius,
        }
    }

    /// Inclusive: points on the rim count as inside.
    pub fn contains(&self, point: &Vector2<f64>) -> bool {
        (point - self.position).norm() <= self.radius
    }
}

impl From<(f64, f64, f64)> for Circle {
    fn from((x, y, radius): (f64, f64, f64)) -> Circle {
        Circle::new(x, y, radius)
    }
}
