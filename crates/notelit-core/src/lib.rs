//! Notelit Core Library
//!
//! Core domain logic for the Notelit note-taking client: the note and
//! label model, the derived view pipeline, and the chip overflow layout.

pub mod chips;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod note;
pub mod store;
pub mod view;
