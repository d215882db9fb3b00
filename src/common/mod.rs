pub mod cli;
pub mod colors;
pub mod constants;
pub mod error;
pub mod newton;
pub mod output;
pub mod params;
pub mod renderer;
