// Forward kinematics demo: prints the DH table and tool pose of the bench
// SCARA rig, then animates the first joint up to 90°.
// Run with: cargo run -p viewer

use std::f64::consts::FRAC_PI_2;

use dh_kinematics::ChainConfig;
use viewer::{DrawerConfig, FrameDrawer, JointSweep};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    viewer::init_logging();

    let chain = ChainConfig::scara_test_rig().build()?;

    println!(" ");
    println!("{}", chain.table());
    println!(" ");
    println!("{:.6}", chain.end_effector_pose());

    let sweep = JointSweep {
        link: 0,
        target: FRAC_PI_2,
        step: 0.005,
    };
    let config = DrawerConfig {
        title: "Direct kinematic".to_string(),
        ..DrawerConfig::default()
    };

    let mut drawer = FrameDrawer::new(config, chain).with_update(move |chain| sweep.apply(chain));
    drawer.show().await?;

    Ok(())
}
