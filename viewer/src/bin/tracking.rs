// Tracking demo: a frame at the origin closes in on an offset, rotated
// target a small fraction of the remaining gap per tick.
// Run with: cargo run -p viewer --bin tracking

use dh_kinematics::Frame;
use viewer::{DrawerConfig, FrameDrawer, Tracking};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    viewer::init_logging();

    let mut target = Frame::new(2.0, 1.5, 1.0);
    target.rotate(0.4, -0.3, 1.2);
    let scene = Tracking::new(Frame::default(), target);

    let config = DrawerConfig {
        title: "Tracking".to_string(),
        frame_count: 600,
        ..DrawerConfig::default()
    };

    let mut drawer = FrameDrawer::new(config, scene).with_update(Tracking::step);
    drawer.show().await?;

    let finished = drawer.into_state();
    println!("final distance to target: {:.6}", finished.distance);

    Ok(())
}
