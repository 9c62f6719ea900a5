pub mod file;
pub mod proceset;
