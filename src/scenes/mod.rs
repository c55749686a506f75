pub mod bouncing_ball;
pub mod light_rays;

pub use bouncing_ball::BouncingBallScene;
pub use light_rays::LightRaysScene;
