// Adapters layer: concrete implementations of the domain ports (storage, clock, terminal UI).

pub mod clock;
pub mod file_store;
pub mod memory;
pub mod terminal;
