//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod console;
mod error;
mod session;

pub use console::init_logging;
pub use error::BridgeError;
pub use session::WebSignSession;
