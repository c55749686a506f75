use crate::circle::Circle;
use crate::consts::{HEIGHT, WIDTH};
use nalgebra::Vector2;
use rayon::prelude::*;
use std::f64::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vector2<f64>,
    pub angle: f64,
}

impl Ray {
    pub fn direction(&self) -> Vector2<f64> {
        Vector2::new(self.angle.cos(), self.angle.sin())
    }
}

/// Inclusive window rectangle `[0, width] x [0, height]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn contains(&self, point: &Vector2<f64>) -> bool {
        point.x >= 0. && point.x <= self.width && point.y >= 0. && point.y <= self.height
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds {
            width: WIDTH as f64,
            height: HEIGHT as f64,
        }
    }
}

/// A fan of `count` rays leaving `origin`, evenly spaced over a full turn
/// starting at angle zero.
pub fn generate_rays(origin: Vector2<f64>, count: usize) -> Vec<Ray> {
    (0..count)
        .map(|i| Ray {
            origin,
            angle: i as f64 / count as f64 * TAU,
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    Hit,
    OutOfBounds,
}

/// Unit-step samples along a ray. The sample that stops the march is still
/// yielded, after which the iterator is exhausted.
pub struct RayMarch<'a> {
    point: Vector2<f64>,
    step: Vector2<f64>,
    obstacle: &'a Circle,
    bounds: Bounds,
    termination: Option<Termination>,
}

impl<'a> RayMarch<'a> {
    pub fn new(ray: &Ray, obstacle: &'a Circle, bounds: Bounds) -> RayMarch<'a> {
        RayMarch {
            point: ray.origin,
            step: ray.direction(),
            obstacle,
            bounds,
            termination: None,
        }
    }

    pub fn termination(&self) -> Option<Termination> {
        self.termination
    }
}

impl<'a> Iterator for RayMarch<'a> {
    type Item = Vector2<f64>;

    fn next(&mut self) -> Option<Vector2<f64>> {
        if self.termination.is_some() {
            return None;
        }
        self.point += self.step;
        if self.obstacle.contains(&self.point) {
            self.termination = Some(Termination::Hit);
        } else if !self.bounds.contains(&self.point) {
            self.termination = Some(Termination::OutOfBounds);
        }
        Some(self.point)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayTrace {
    pub ray: Ray,
    /// Samples drawn, the terminating one included.
    pub steps: usize,
    pub termination: Termination,
}

impl RayTrace {
    pub fn end(&self) -> Vector2<f64> {
        self.points().last().unwrap_or(self.ray.origin)
    }

    /// Replays the samples of this trace in marching order.
    pub fn points(&self) -> impl Iterator<Item = Vector2<f64>> {
        let step = self.ray.direction();
        let mut point = self.ray.origin;
        (0..self.steps).map(move |_| {
            point += step;
            point
        })
    }
}

pub fn trace(ray: &Ray, obstacle: &Circle, bounds: Bounds) -> RayTrace {
    let mut march = RayMarch::new(ray, obstacle, bounds);
    let steps = march.by_ref().count();
    RayTrace {
        ray: *ray,
        steps,
        // A unit step always leaves finite bounds eventually.
        termination: march.termination().unwrap_or(Termination::OutOfBounds),
    }
}

/// Traces the whole fan in parallel; results keep the fan's order.
pub fn trace_all(rays: &[Ray], obstacle: &Circle, bounds: Bounds) -> Vec<RayTrace> {
    rays.par_iter()
        .map(|ray| trace(ray, obstacle, bounds))
        .collect()
}
