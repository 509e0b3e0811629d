// Data models for the scheduling core

pub mod category;
pub mod event;
pub mod notification;
pub mod repeat;
