pub mod actions;
pub mod agent;
pub mod ask;
pub mod calendar;
pub mod campaign;
pub mod chat;
pub mod config;
pub mod dispatch;
pub mod email;
pub mod inbox;
pub mod lead;
pub mod shared;
pub mod strategy;
pub mod vision;
pub mod workspace;
