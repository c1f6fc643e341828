//! Core infrastructure: configuration, errors, resource fetching, VCS

pub mod config;
pub mod error;
pub mod resource;
pub mod vcs;
