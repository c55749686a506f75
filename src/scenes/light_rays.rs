use crate::circle::Circle;
use crate::consts::{HEIGHT, LIGHT_START, NUM_RAYS, OBSTACLE_SPEED, OBSTACLE_START};
use crate::obstacle::Oscillator;
use crate::rays::{generate_rays, trace_all, Bounds, Ray, RayTrace};
use crate::render::{fill_circle, fill_rays, PixelTarget, BLACK, GOLD, WHITE};
use crate::simulation::Simulation;
use log::debug;
use nalgebra::Vector2;
use sdl2::event::Event;
use sdl2::pixels::Color;

pub struct LightRaysScene {
    pub light: Circle,
    pub obstacle: Oscillator,
    pub bounds: Bounds,
    rays: Vec<Ray>,
    ray_count: usize,
}

impl LightRaysScene {
    pub fn new(light: Circle, obstacle: Oscillator, ray_count: usize, bounds: Bounds) -> Self {
        LightRaysScene {
            light,
            obstacle,
            bounds,
            rays: generate_rays(light.position, ray_count),
            ray_count,
        }
    }

    pub fn rays(&self) -> &[Ray] {
        &self.rays
    }

    /// Moves the light source and regenerates its whole fan.
    pub fn move_light(&mut self, x: f64, y: f64) {
        self.light.position = Vector2::new(x, y);
        self.rays = generate_rays(self.light.position, self.ray_count);
        debug!("Light moved to ({}, {})", x, y);
    }

    pub fn trace(&self) -> Vec<RayTrace> {
        trace_all(&self.rays, &self.obstacle.circle, self.bounds)
    }
}

impl Default for LightRaysScene {
    fn default() -> Self {
        LightRaysScene::new(
            Circle::from(LIGHT_START),
            Oscillator::new(Circle::from(OBSTACLE_START), OBSTACLE_SPEED, HEIGHT as f64),
            NUM_RAYS,
            Bounds::default(),
        )
    }
}

impl Simulation for LightRaysScene {
    fn background(&self) -> Color {
        BLACK
    }

    fn handle_event(&mut self, event: &Event) {
        if let Event::MouseMotion {
            mousestate, x, y, ..
        } = event
        {
            if mousestate.pressed_mouse_buttons().next().is_some() {
                self.move_light(*x as f64, *y as f64);
            }
        }
    }

    fn update(&mut self) {
        self.obstacle.advance();
    }

    fn render(&self, target: &mut dyn PixelTarget) -> anyhow::Result<()> {
        fill_circle(target, &self.light, WHITE)?;
        fill_circle(target, &self.obstacle.circle, WHITE)?;
        fill_rays(target, &self.trace(), GOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::mouse::MouseState;

    fn motion(buttons: u32, x: i32, y: i32) -> Event {
        Event::MouseMotion {
            timestamp: 0,
            window_id: 0,
            which: 0,
            mousestate: MouseState::from_sdl_state(buttons),
            x,
            y,
            xrel: 0,
            yrel: 0,
        }
    }

    #[test]
    fn starts_with_a_full_fan_at_the_light() {
        let scene = LightRaysScene::default();
        assert_eq!(scene.rays().len(), NUM_RAYS);
        assert!(scene
            .rays()
            .iter()
            .all(|ray| ray.origin == Vector2::new(200., 0.)));
    }

    #[test]
    fn dragging_moves_the_light_and_its_rays() {
        let mut scene = LightRaysScene::default();
        scene.handle_event(&motion(1, 400, 250));
        assert_eq!(scene.light.position, Vector2::new(400., 250.));
        assert_eq!(scene.rays().len(), NUM_RAYS);
        assert!(scene
            .rays()
            .iter()
            .all(|ray| ray.origin == Vector2::new(400., 250.)));
    }

    #[test]
    fn hovering_without_a_button_does_nothing() {
        let mut scene = LightRaysScene::default();
        scene.handle_event(&motion(0, 400, 250));
        assert_eq!(scene.light.position, Vector2::new(200., 0.));
        assert_eq!(scene.rays()[0].origin, Vector2::new(200., 0.));
    }

    #[test]
    fn update_moves_only_the_obstacle() {
        let mut scene = LightRaysScene::default();
        scene.update();
        assert_eq!(scene.obstacle.circle.position, Vector2::new(650., 303.));
        assert_eq!(scene.light.position, Vector2::new(200., 0.));
    }
}
