use balls_and_rays::logging::init_logging;
use balls_and_rays::render::{init_graphics, DisplayConfig};
use balls_and_rays::scenes::BouncingBallScene;
use balls_and_rays::simulation::{run, SimulationConfig};
use log::info;

pub fn main() -> anyhow::Result<()> {
    init_logging()?;

    // Setup.
    let mut graphics = init_graphics(DisplayConfig::new("bouncingball"))?;
    let mut scene = BouncingBallScene::default();
    info!(
        "Ball at {:?}, velocity {:?}",
        scene.state.ball.position, scene.state.velocity
    );

    run(&mut graphics, &mut scene, SimulationConfig::default())?;
    Ok(())
}
