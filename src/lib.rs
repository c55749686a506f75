extern crate sdl2;

pub mod bounce;
pub mod circle;
pub mod logging;
pub mod obstacle;
pub mod rays;
pub mod render;
pub mod scenes;
pub mod simulation;
pub mod trajectory;

/// Compile-time simulation parameters shared by both programs.
pub mod consts {
    pub const WIDTH: u32 = 1200;
    pub const HEIGHT: u32 = 600;

    /// Milliseconds slept between frames.
    pub const FRAME_DELAY_MS: u64 = 20;

    // Bouncing ball.
    pub const GRAVITY: f64 = 0.4;
    pub const DAMPING: f64 = 0.8;
    pub const TRAJECTORY_LEN: usize = 100;
    pub const TRAJECTORY_DOT_SIZE: u32 = 3;
    pub const BALL_START: (f64, f64, f64) = (200., 200., 40.);
    pub const BALL_START_VELOCITY: (f64, f64) = (7., 10.);

    // Light rays.
    pub const NUM_RAYS: usize = 520;
    pub const LIGHT_START: (f64, f64, f64) = (200., 0., 55.);
    pub const OBSTACLE_START: (f64, f64, f64) = (650., 300., 130.);
    pub const OBSTACLE_SPEED: f64 = 3.;
}
