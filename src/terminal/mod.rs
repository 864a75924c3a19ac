pub mod command;
pub mod editor;
pub mod format;
pub mod interpreter;
pub mod session;
pub mod text;
