pub mod assets;
pub mod http;
pub mod utils;
