pub mod error;
pub mod ports;
pub mod service;

#[cfg(test)]
mod service_test;
