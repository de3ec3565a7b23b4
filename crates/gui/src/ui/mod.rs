//! Side panels, toolbar and status bar

pub mod library;
pub mod properties;
pub mod scene_tree;
pub mod status_bar;
pub mod toolbar;
