pub mod config;
pub mod dict;
pub mod normalize;
