pub mod arena;
pub mod play;
