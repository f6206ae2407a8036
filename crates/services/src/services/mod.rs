pub mod dashboard;
pub mod role_data;
