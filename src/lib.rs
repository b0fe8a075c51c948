pub mod args;
pub mod audio;
pub mod catalog;
pub mod content;
pub mod error;
pub mod scoring;
pub mod session;
pub mod tiles;
pub mod timer;
pub mod ui;
