pub mod colorize;
pub mod mapping;
pub mod suggest;
