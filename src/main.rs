use anyhow::Result;
use glam::IVec3;
use log::LevelFilter;
use simple_logger::SimpleLogger;

use blockfield::{BlockType, EngineConfig, PerlinHeightField, VoxelWorld};

fn main() -> Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Info).init()?;

    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("loading config from {path}");
            EngineConfig::load(path)?
        }
        None => EngineConfig::default(),
    };

    let field = PerlinHeightField::new(&config.worldgen);
    let world = VoxelWorld::generate(&config, &field)?;

    // A couple of edits to show the incremental remesh path.
    let spot = IVec3::new(3, (config.chunks.chunk_height / 2) as i32, 3);
    world.place_block(spot, BlockType::Stone);
    world.place_block(spot + IVec3::Y, BlockType::Stone);
    world.remove_block(spot + IVec3::Y);
    log::info!(
        "after edits: {} chunks, {} faces",
        world.chunk_count(),
        world.total_faces()
    );

    Ok(())
}
