pub mod maintenance;
pub mod seed;
