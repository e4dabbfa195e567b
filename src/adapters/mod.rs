// Adapters layer: concrete implementations of the domain ports for external systems.

pub mod browser;
pub mod document;
pub mod llm;
