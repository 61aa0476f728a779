pub mod access_log;
pub mod access_service;
