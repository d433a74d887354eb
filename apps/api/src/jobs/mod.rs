// Persistence of reviewed job candidates (clients + jobs tables).

pub mod handlers;
pub mod repository;
