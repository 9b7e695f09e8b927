//! Application services

mod seating_service;

pub use seating_service::SeatingService;
