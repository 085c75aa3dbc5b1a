pub mod cli;
pub mod io;
pub mod list;
pub mod types;
