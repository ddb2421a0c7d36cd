//! Eulerflow Engine - incompressible 2-D fluid on a staggered grid, in WASM
//!
//! Architecture:
//! - core/        - safety macros, errors, logging
//! - domain/      - cell types, field selectors, configuration
//! - spatial/     - grid storage and the obstacle disc
//! - systems/     - solver stages (forces, projection, boundary, interpolation, advection)
//! - simulation/  - orchestration, commands, perf, render extraction, JS facade
//!
//! The renderer and pointer input live in JS. They read grid state between
//! steps and move the obstacle through `FluidSim`; nothing else mutates cells.

// Safety macros must come first so `fast!` is visible to later modules
#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

pub use spatial::grid;
pub use spatial::obstacle;

use wasm_bindgen::prelude::*;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Thread pool initialization for the parallel render fill
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine (panic hook + console logger)
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::logging::init_console_logger(log::LevelFilter::Info);
    log::info!("Eulerflow WASM engine initialized");
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::error::{SimError, SimResult};
pub use domain::cells::CellType;
pub use domain::config::SimConfig;
pub use domain::fields::Field;
pub use grid::FluidGrid;
pub use obstacle::Obstacle;
pub use simulation::{DragController, FluidSim, Playback, SimulationCore};

// Cell and field codes for JS
#[wasm_bindgen]
pub fn cell_solid() -> u8 { domain::cells::CELL_SOLID }
#[wasm_bindgen]
pub fn cell_fluid() -> u8 { domain::cells::CELL_FLUID }
#[wasm_bindgen]
pub fn field_horizontal() -> u8 { Field::Horizontal.id() }
#[wasm_bindgen]
pub fn field_vertical() -> u8 { Field::Vertical.id() }
#[wasm_bindgen]
pub fn field_density() -> u8 { Field::Density.id() }
