//! Container repository trait and implementations.

pub mod container;
pub mod memory;

pub use container::ContainerRepository;
pub use memory::MemoryContainerRepository;
