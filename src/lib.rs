#[cfg(not(target_arch = "wasm32"))]
pub mod dump;
pub mod world_core;
