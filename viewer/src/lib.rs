// Terminal viewer for coordinate frames and kinematic chains

pub mod drawer;
pub mod drawer_config;
pub mod scenes;

pub use drawer::{FrameDrawer, Scene};
pub use drawer_config::DrawerConfig;
pub use scenes::{JointSweep, Tracking};

/// Installs the fmt subscriber on stderr so stdout stays free for tables and
/// the terminal UI.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::INFO)
        .init();
}
