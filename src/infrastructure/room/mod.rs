//! Room infrastructure - room source implementations

mod in_memory;

pub use in_memory::InMemoryRoomRepository;
