pub mod error;
pub(crate) mod frame;
pub mod heatmap;
pub mod monthly;
pub mod view;
pub mod yearly;
