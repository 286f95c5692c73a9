//! Chart module - parameters, bracket layout, rendering, export

mod export;
mod layout;
mod params;
mod renderer;

pub use export::{encode_png, ExportError, EXPORT_FILE_NAME, EXPORT_MIME_TYPE};
pub use layout::{layout_brackets, BracketPlacement, LayoutError, SIGNIFICANCE_LABEL};
pub use params::{
    BarColor, ChartParams, GroupInput, AXIS_NUM_FONT_RANGE, FIG_HEIGHT_RANGE, FIG_WIDTH_RANGE,
    LABEL_FONT_RANGE, LINE_WIDTH_RANGE, NUM_GROUPS_RANGE, TICK_FONT_RANGE, TITLE_FONT_RANGE,
};
pub use renderer::{ChartRenderer, RenderError};
