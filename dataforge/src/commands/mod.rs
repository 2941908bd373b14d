// dataforge/src/commands/mod.rs

pub mod generate;
pub mod list;
pub mod publish;
