pub mod command;
pub mod di;
pub mod state;
