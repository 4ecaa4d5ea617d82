pub mod duration;
pub mod markdown;
