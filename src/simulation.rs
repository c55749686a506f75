use crate::consts::FRAME_DELAY_MS;
use crate::render::{Graphics, PixelTarget};
use log::{info, trace};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
    pub frame_delay: Duration,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            frame_delay: Duration::from_millis(FRAME_DELAY_MS),
        }
    }
}

/// One scene driven by `run`: input, then one tick of state, then a frame.
pub trait Simulation {
    fn background(&self) -> Color;

    fn handle_event(&mut self, _event: &Event) {}

    fn update(&mut self);

    /// Draws onto a target already cleared to `background()`.
    fn render(&self, target: &mut dyn PixelTarget) -> anyhow::Result<()>;
}

pub fn is_quit_event(event: &Event) -> bool {
    matches!(
        event,
        Event::Quit { .. }
            | Event::KeyDown {
                keycode: Some(Keycode::Space),
                ..
            }
            | Event::KeyDown {
                keycode: Some(Keycode::Escape),
                ..
            }
    )
}

/// Paces frames to a fixed period, sleeping away whatever the frame did not use.
pub struct FrameClock {
    frame_delay: Duration,
    last_frame: Instant,
}

impl FrameClock {
    pub fn new(config: SimulationConfig) -> FrameClock {
        FrameClock {
            frame_delay: config.frame_delay,
            last_frame: Instant::now(),
        }
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.frame_delay
            .checked_sub(now.saturating_duration_since(self.last_frame))
            .unwrap_or_default()
    }

    pub fn wait(&mut self) {
        let now = Instant::now();
        let to_sleep = self.remaining(now);
        trace!(
            "Frame time: {} ms",
            now.saturating_duration_since(self.last_frame).as_millis()
        );
        std::thread::sleep(to_sleep);
        self.last_frame = now + to_sleep;
    }
}

/// Renders one frame of `simulation` onto `target`.
pub fn draw_frame<S: Simulation + ?Sized>(
    simulation: &S,
    target: &mut dyn PixelTarget,
) -> anyhow::Result<()> {
    target.clear(simulation.background())?;
    simulation.render(target)
}

/// Runs until a quit event arrives. Returns the number of frames presented.
pub fn run<S: Simulation>(
    graphics: &mut Graphics,
    simulation: &mut S,
    config: SimulationConfig,
) -> anyhow::Result<u64> {
    let mut clock = FrameClock::new(config);
    let mut frames = 0u64;
    'running: loop {
        for event in graphics.event_pump.poll_iter() {
            if is_quit_event(&event) {
                break 'running;
            }
            simulation.handle_event(&event);
        }

        simulation.update();

        let mut surface = graphics
            .window
            .surface(&graphics.event_pump)
            .map_err(anyhow::Error::msg)?;
        draw_frame(simulation, &mut *surface)?;
        surface.update_window().map_err(anyhow::Error::msg)?;
        frames += 1;

        clock.wait();
    }
    info!("Quit after {} frames", frames);
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::keyboard::Mod;

    fn key_down(keycode: Keycode) -> Event {
        Event::KeyDown {
            timestamp: 0,
            window_id: 0,
            keycode: Some(keycode),
            scancode: None,
            keymod: Mod::NOMOD,
            repeat: false,
        }
    }

    #[test]
    fn quit_events() {
        assert!(is_quit_event(&Event::Quit { timestamp: 0 }));
        assert!(is_quit_event(&key_down(Keycode::Space)));
        assert!(is_quit_event(&key_down(Keycode::Escape)));
        assert!(!is_quit_event(&key_down(Keycode::A)));
    }

    #[test]
    fn clock_sleeps_only_the_unused_part_of_the_frame() {
        let clock = FrameClock::new(SimulationConfig::default());
        let start = clock.last_frame;
        assert_eq!(clock.remaining(start), Duration::from_millis(20));
        assert_eq!(
            clock.remaining(start + Duration::from_millis(15)),
            Duration::from_millis(5)
        );
        assert_eq!(
            clock.remaining(start + Duration::from_millis(45)),
            Duration::from_millis(0)
        );
    }

    #[test]
    fn wait_paces_consecutive_frames() {
        let mut clock = FrameClock::new(SimulationConfig {
            frame_delay: Duration::from_millis(5),
        });
        let start = Instant::now();
        clock.wait();
        clock.wait();
        assert!(start.elapsed() >= Duration::from_millis(5));
    }
}
