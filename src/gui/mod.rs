//! GUI module - User interface components

mod app;
mod chart_preview;
mod control_panel;

pub use app::SigPlotApp;
pub use chart_preview::ChartPreview;
pub use control_panel::{ControlPanel, ControlPanelAction};
