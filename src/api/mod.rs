//! JavaScript-facing API for the harmony engine
//!
//! # Module Structure
//!
//! - `helpers`: serialization and error conversion shared by all exports
//! - `engine`: the `#[wasm_bindgen]` functions called by the front end
//!
//! History, rendering and audio scheduling live on the JS side; they call
//! in here and never the other way round.

pub mod engine;
pub mod helpers;

pub use engine::*;
