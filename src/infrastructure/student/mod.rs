//! Student infrastructure - roster source implementations

mod in_memory;

pub use in_memory::InMemoryStudentRepository;
