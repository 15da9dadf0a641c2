pub mod commands;
pub mod controller;
