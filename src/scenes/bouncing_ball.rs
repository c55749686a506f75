use crate::bounce::{BounceParams, BounceState};
use crate::circle::Circle;
use crate::consts::{BALL_START, BALL_START_VELOCITY, TRAJECTORY_LEN};
use crate::render::{
    fill_circle, fill_trajectory, PixelTarget, BACKGROUND_GRAY, TRAJECTORY_PURPLE, WHITE,
};
use crate::simulation::Simulation;
use crate::trajectory::Trajectory;
use nalgebra::Vector2;
use sdl2::pixels::Color;

pub struct BouncingBallScene {
    pub state: BounceState,
    pub params: BounceParams,
    pub trajectory: Trajectory,
}

impl BouncingBallScene {
    pub fn new(state: BounceState, params: BounceParams) -> BouncingBallScene {
        BouncingBallScene {
            state,
            params,
            trajectory: Trajectory::with_capacity(TRAJECTORY_LEN),
        }
    }
}

impl Default for BouncingBallScene {
    fn default() -> Self {
        let (vx, vy) = BALL_START_VELOCITY;
        BouncingBallScene::new(
            BounceState::new(Circle::from(BALL_START), Vector2::new(vx, vy)),
            BounceParams::default(),
        )
    }
}

impl Simulation for BouncingBallScene {
    fn background(&self) -> Color {
        BACKGROUND_GRAY
    }

    fn update(&mut self) {
        self.state = self.state.step(&self.params);
        self.trajectory.push(self.state.ball.position);
    }

    fn render(&self, target: &mut dyn PixelTarget) -> anyhow::Result<()> {
        fill_circle(target, &self.state.ball, WHITE)?;
        fill_trajectory(target, &self.trajectory, TRAJECTORY_PURPLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_update_records_the_new_center() {
        let mut scene = BouncingBallScene::default();
        scene.update();
        scene.update();
        let recorded: Vec<_> = scene.trajectory.iter().cloned().collect();
        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded[1], scene.state.ball.position);
        assert!(recorded[0].x < recorded[1].x);
    }

    #[test]
    fn trail_is_capped() {
        let mut scene = BouncingBallScene::default();
        for _ in 0..250 {
            scene.update();
        }
        assert_eq!(scene.trajectory.len(), TRAJECTORY_LEN);
        assert_eq!(
            scene.trajectory.iter().last().cloned(),
            Some(scene.state.ball.position)
        );
    }
}
