pub mod contact;
pub mod service;
