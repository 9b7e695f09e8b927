//! Infrastructure layer - in-memory sources, plan files, logging and services

pub mod exam;
pub mod logging;
pub mod plan;
pub mod room;
pub mod seating;
pub mod services;
pub mod student;
