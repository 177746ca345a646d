//! Infrastructure configuration modules.

pub mod cache;
pub mod decision;
pub mod llm;
pub mod logging;
pub mod screen;
pub mod settings;
