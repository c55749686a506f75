use crate::circle::Circle;
use log::debug;

/// Circle sliding up and down, turning around when its edge reaches the top or
/// bottom of the window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Oscillator {
    pub circle: Circle,
    pub speed: f64,
    pub height: f64,
}

impl Oscillator {
    pub fn new(circle: Circle, speed: f64, height: f64) -> Oscillator {
        Oscillator {
            circle,
            speed,
            height,
        }
    }

    pub fn advance(&mut self) {
        let circle = &mut self.circle;
        circle.position.y += self.speed;
        if circle.position.y + circle.radius >= self.height
            || circle.position.y - circle.radius <= 0.
        {
            self.speed = -self.speed;
            debug!("Obstacle turned at y = {:.1}", circle.position.y);
        }
    }
}
