pub mod authorization;
pub mod columns;
pub mod delete_response;
pub mod error;
pub mod extractors;
pub mod projects;
pub mod resolve;
pub mod tasks;
