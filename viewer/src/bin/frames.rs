// Static frames demo: the world frame and a copy rotated 45° about z,
// seen from straight above.
// Run with: cargo run -p viewer --bin frames

use dh_kinematics::Frame;
use viewer::{DrawerConfig, FrameDrawer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    viewer::init_logging();

    let zero = Frame::new(0.0, 0.0, 0.0);
    let mut f1 = Frame::new(0.0, 0.0, 0.0);
    f1.rotate(0.0, 0.0, 45.0_f64.to_radians());

    let config = DrawerConfig {
        title: "Frames".to_string(),
        azimuth_deg: -90.0,
        elevation_deg: 90.0,
        ..DrawerConfig::default()
    };

    FrameDrawer::new(config, vec![zero, f1]).show().await?;

    Ok(())
}
