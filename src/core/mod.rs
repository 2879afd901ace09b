//! Core leaf types shared by components, the form engine, and presentation.

pub mod error;
pub mod handle;
pub mod mode;
pub mod text;
pub mod title;
