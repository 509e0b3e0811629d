// Scheduling engine services

pub mod event;
pub mod notification;
pub mod overlap;
pub mod recurrence;
pub mod search;
pub mod series;
pub mod store;
