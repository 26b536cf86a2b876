//! CLI library components for the dossier catalog viewer.

pub mod logging;
pub mod render;
