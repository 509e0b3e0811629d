// Calendar Core Library
// Event scheduling engine: recurrence expansion, overlap detection,
// notification windows, and recurring-group operations over plain data.

pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::CalendarError;
