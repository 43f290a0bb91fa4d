pub mod controller;
pub mod interactions;
pub mod session;
