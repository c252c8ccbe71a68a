//=========================================================================
// Serpent
//
// Opens a window and plays with the default settings. Arrow keys steer.
// Set RUST_LOG (e.g. `RUST_LOG=sim=debug`) for more detail.
//
//=========================================================================

use log::info;
use serpent_engine::EngineBuilder;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Serpent {}", env!("CARGO_PKG_VERSION"));
    EngineBuilder::new().build().run()?;

    Ok(())
}
