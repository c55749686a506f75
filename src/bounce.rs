use crate::circle::Circle;
use crate::consts::{DAMPING, GRAVITY, HEIGHT, WIDTH};
use log::debug;
use nalgebra::Vector2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BounceParams {
    pub gravity: f64,
    pub damping: f64,
    pub width: f64,
    pub height: f64,
    /// Also reflect when the ball's edge sits exactly on a wall. Only fires on
    /// exact floating point equality.
    pub reflect_on_flush_edge: bool,
}

impl Default for BounceParams {
    fn default() -> Self {
        BounceParams {
            gravity: GRAVITY,
            damping: DAMPING,
            width: WIDTH as f64,
            height: HEIGHT as f64,
            reflect_on_flush_edge: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BounceState {
    pub ball: Circle,
    pub velocity: Vector2<f64>,
}

impl BounceState {
    pub fn new(ball: Circle, velocity: Vector2<f64>) -> BounceState {
        BounceState { ball, velocity }
    }

    /// Advances one tick. An axis whose tentative move would leave the window
    /// keeps its position and has its velocity inverted and damped instead.
    #[must_use]
    pub fn step(self, params: &BounceParams) -> BounceState {
        let BounceState {
            mut ball,
            mut velocity,
        } = self;
        velocity.y += params.gravity;

        let limits = [params.width, params.height];
        for axis in 0..2 {
            let next = ball.position[axis] + velocity[axis];
            if next > 0. && next < limits[axis] {
                ball.position[axis] = next;
            } else {
                debug!(
                    "Wall bounce on axis {} at {:.2}, speed {:.2}",
                    axis, ball.position[axis], velocity[axis]
                );
                velocity[axis] = -(velocity[axis] * params.damping);
            }
        }

        if params.reflect_on_flush_edge {
            for axis in 0..2 {
                let position = ball.position[axis];
                if position + ball.radius == limits[axis] || position - ball.radius == 0. {
                    velocity[axis] = -(velocity[axis] * params.damping);
                }
            }
        }

        BounceState { ball, velocity }
    }
}
