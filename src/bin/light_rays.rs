use balls_and_rays::logging::init_logging;
use balls_and_rays::render::{init_graphics, DisplayConfig};
use balls_and_rays::scenes::LightRaysScene;
use balls_and_rays::simulation::{run, SimulationConfig};
use log::info;

pub fn main() -> anyhow::Result<()> {
    init_logging()?;

    // Setup.
    let mut graphics = init_graphics(DisplayConfig::new("raytracing"))?;
    let mut scene = LightRaysScene::default();
    info!(
        "{} rays from {:?}, obstacle at {:?}",
        scene.rays().len(),
        scene.light.position,
        scene.obstacle.circle.position
    );

    run(&mut graphics, &mut scene, SimulationConfig::default())?;
    Ok(())
}
