pub mod api;
pub mod appwrite_api;
pub mod functions_api;
