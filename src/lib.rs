// Library exports for the Battlesnake bot
// The server binary and the replay tool both build on the decision core here

pub mod board;
pub mod bot;
pub mod config;
pub mod debug_logger;
pub mod pathfinding;
pub mod replay;
pub mod safety;
pub mod scoring;
pub mod selector;
pub mod types;
