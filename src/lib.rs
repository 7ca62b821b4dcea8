//! Pocket Trainer - Turn-Based Creature Battling Through Text Prompts

pub mod battle;
pub mod combat;
pub mod core;
pub mod entity;
pub mod simulation;
pub mod ui;
pub mod world;
