//! Interactive rectangle scene with global move/rotate/scale.

mod app;
mod bindings;

use anyhow::Result;
use winit::dpi::LogicalSize;

use matrices_engine::device::GpuInit;
use matrices_engine::logging::{init_logging, LoggingConfig};
use matrices_engine::window::{Runtime, RuntimeConfig};

use crate::app::StudioApp;
use crate::bindings::KeyBindings;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let bindings = KeyBindings::default();
    log::info!("key bindings:");
    for line in bindings.describe() {
        log::info!("{line}");
    }

    let config = RuntimeConfig {
        title: "Matrices".to_string(),
        initial_size: LogicalSize::new(600.0, 800.0),
    };

    Runtime::run(config, GpuInit::default(), StudioApp::new(bindings))
}
