pub mod deployments;
pub mod projects;
pub mod table;
pub mod workflows;
