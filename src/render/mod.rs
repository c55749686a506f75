pub mod frame;

use crate::circle::Circle;
use crate::consts::{HEIGHT, TRAJECTORY_DOT_SIZE, WIDTH};
use crate::rays::RayTrace;
use crate::trajectory::Trajectory;
use anyhow::Context;
use log::info;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::surface::SurfaceRef;
use sdl2::video::Window;
use sdl2::{EventPump, Sdl, VideoSubsystem};

pub const WHITE: Color = Color {
    r: 0xff,
    g: 0xff,
    b: 0xff,
    a: 0xff,
};
pub const BLACK: Color = Color {
    r: 0,
    g: 0,
    b: 0,
    a: 0xff,
};
pub const BACKGROUND_GRAY: Color = Color {
    r: 0x0f,
    g: 0x0f,
    b: 0x0f,
    a: 0xff,
};
pub const TRAJECTORY_PURPLE: Color = Color {
    r: 0xe8,
    g: 0x03,
    b: 0xfc,
    a: 0xff,
};
pub const GOLD: Color = Color {
    r: 0xff,
    g: 0xd4,
    b: 0x3b,
    a: 0xff,
};

/// Anything rectangles can be blitted onto: the window surface, or a
/// `frame::FrameBuffer` in tests. Clipping to the target is the target's job.
pub trait PixelTarget {
    fn fill(&mut self, area: Rect, color: Color) -> anyhow::Result<()>;

    fn clear(&mut self, color: Color) -> anyhow::Result<()>;

    fn put_pixel(&mut self, x: f64, y: f64, color: Color) -> anyhow::Result<()> {
        self.fill(Rect::new(x as i32, y as i32, 1, 1), color)
    }
}

impl PixelTarget for SurfaceRef {
    fn fill(&mut self, area: Rect, color: Color) -> anyhow::Result<()> {
        self.fill_rect(area, color).map_err(anyhow::Error::msg)
    }

    fn clear(&mut self, color: Color) -> anyhow::Result<()> {
        self.fill_rect(None, color).map_err(anyhow::Error::msg)
    }
}

/// Fills every unit sample of the circle's bounding square lying within the
/// radius, stepping from the top-left corner `(x - r, y - r)`.
pub fn fill_circle<T: PixelTarget + ?Sized>(
    target: &mut T,
    circle: &Circle,
    color: Color,
) -> anyhow::Result<()> {
    let (cx, cy, r) = (circle.position.x, circle.position.y, circle.radius);
    let mut x = cx - r;
    while x <= cx + r {
        let mut y = cy - r;
        while y <= cy + r {
            let dist = ((x - cx).powi(2) + (y - cy).powi(2)).sqrt();
            if dist <= r {
                target.put_pixel(x, y, color)?;
            }
            y += 1.;
        }
        x += 1.;
    }
    Ok(())
}

pub fn fill_trajectory<T: PixelTarget + ?Sized>(
    target: &mut T,
    trajectory: &Trajectory,
    color: Color,
) -> anyhow::Result<()> {
    for point in trajectory.iter() {
        target.fill(
            Rect::new(
                point.x as i32,
                point.y as i32,
                TRAJECTORY_DOT_SIZE,
                TRAJECTORY_DOT_SIZE,
            ),
            color,
        )?;
    }
    Ok(())
}

pub fn fill_rays<T: PixelTarget + ?Sized>(
    target: &mut T,
    traces: &[RayTrace],
    color: Color,
) -> anyhow::Result<()> {
    for trace in traces {
        for point in trace.points() {
            target.put_pixel(point.x, point.y, color)?;
        }
    }
    Ok(())
}

#[derive(Clone, Debug, PartialEq)]
pub struct DisplayConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl DisplayConfig {
    pub fn new(title: &str) -> DisplayConfig {
        DisplayConfig {
            title: title.to_owned(),
            width: WIDTH,
            height: HEIGHT,
        }
    }
}

pub struct Graphics {
    pub config: DisplayConfig,
    pub sdl_context: Sdl,
    pub video: VideoSubsystem,
    pub window: Window,
    pub event_pump: EventPump,
}

/// Opens a centered borderless window and the event pump that feeds it.
pub fn init_graphics(display_config: DisplayConfig) -> anyhow::Result<Graphics> {
    let sdl_context = sdl2::init()
        .map_err(anyhow::Error::msg)
        .context("failed to initialise SDL")?;
    let video = sdl_context
        .video()
        .map_err(anyhow::Error::msg)
        .context("failed to initialise SDL video subsystem")?;
    let window = video
        .window(
            &display_config.title,
            display_config.width,
            display_config.height,
        )
        .position_centered()
        .borderless()
        .build()
        .with_context(|| format!("failed to create window '{}'", display_config.title))?;
    let event_pump = sdl_context
        .event_pump()
        .map_err(anyhow::Error::msg)
        .context("failed to obtain SDL event pump")?;
    info!(
        "Opened '{}' window ({}x{})",
        display_config.title, display_config.width, display_config.height
    );

    Ok(Graphics {
        config: display_config,
        sdl_context,
        video,
        window,
        event_pump,
    })
}
