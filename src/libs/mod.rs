//! Core library modules for taskman.
//!
//! - **Model**: [`task`], [`validation`]
//! - **Management**: [`manager`], [`stats`]
//! - **Infrastructure**: [`config`], [`data_storage`], [`error`], [`messages`]
//! - **User Interface**: [`view`], [`export`]

pub mod config;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod manager;
pub mod messages;
pub mod stats;
pub mod task;
pub mod validation;
pub mod view;
