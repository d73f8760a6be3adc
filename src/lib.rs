//! Gym Tracker - Personal workout log backend
//!
//! Records workout sessions and the sets performed in them, aggregates
//! volume and progress statistics, and serves a fixed three-day training
//! program behind a single shared password.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
