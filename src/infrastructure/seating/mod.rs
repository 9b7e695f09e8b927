//! Seating infrastructure - arrangement sinks

mod in_memory;

pub use in_memory::InMemorySeatingRepository;
