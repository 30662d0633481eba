//! Shared configuration for the rolodex crates.

pub mod config;
