//! Chart Parameters Module
//! The validated configuration for one chart: groups, styling, sizing.

use egui::Color32;
use std::ops::RangeInclusive;

/// Widget ranges for the numeric settings. The control panel clamps to
/// these; the core modules never see out-of-range values from the GUI.
pub const NUM_GROUPS_RANGE: RangeInclusive<usize> = 1..=10;
pub const FIG_WIDTH_RANGE: RangeInclusive<f64> = 4.0..=20.0;
pub const FIG_HEIGHT_RANGE: RangeInclusive<f64> = 3.0..=15.0;
pub const LINE_WIDTH_RANGE: RangeInclusive<f64> = 0.5..=5.0;
pub const TITLE_FONT_RANGE: RangeInclusive<u32> = 10..=30;
pub const LABEL_FONT_RANGE: RangeInclusive<u32> = 10..=20;
pub const TICK_FONT_RANGE: RangeInclusive<u32> = 8..=20;
pub const AXIS_NUM_FONT_RANGE: RangeInclusive<u32> = 8..=20;

/// One bar: a named group with its mean and standard error.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupInput {
    pub name: String,
    pub mean: f64,
    pub std_error: f64,
}

impl GroupInput {
    fn numbered(index: usize) -> Self {
        Self {
            name: format!("Group {}", index + 1),
            mean: 0.0,
            std_error: 0.0,
        }
    }
}

/// Fixed palette of bar fill colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarColor {
    SkyBlue,
    LightGreen,
    Salmon,
    Gold,
    Plum,
}

impl BarColor {
    pub const ALL: [BarColor; 5] = [
        BarColor::SkyBlue,
        BarColor::LightGreen,
        BarColor::Salmon,
        BarColor::Gold,
        BarColor::Plum,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BarColor::SkyBlue => "Sky Blue",
            BarColor::LightGreen => "Light Green",
            BarColor::Salmon => "Salmon",
            BarColor::Gold => "Gold",
            BarColor::Plum => "Plum",
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            BarColor::SkyBlue => (135, 206, 235),
            BarColor::LightGreen => (144, 238, 144),
            BarColor::Salmon => (250, 128, 114),
            BarColor::Gold => (255, 215, 0),
            BarColor::Plum => (221, 160, 221),
        }
    }

    pub fn color32(self) -> Color32 {
        let (r, g, b) = self.rgb();
        Color32::from_rgb(r, g, b)
    }
}

/// All settings describing one chart. Owned by the control panel and passed
/// immutably into the render pipeline on each render.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartParams {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub title_font_size: u32,
    pub label_font_size: u32,
    pub tick_font_size: u32,
    pub axis_num_font_size: u32,
    pub line_width: f64,
    /// Figure size in abstract units; the PNG renderer maps 1 unit to 100 px.
    pub fig_width: f64,
    pub fig_height: f64,
    pub bar_color: BarColor,
    pub groups: Vec<GroupInput>,
    /// Significant pairs, each `(i, j)` with `i < j`, no duplicates.
    significance: Vec<(usize, usize)>,
}

impl Default for ChartParams {
    fn default() -> Self {
        Self {
            title: "Mean and Standard Error".to_string(),
            x_label: "Category".to_string(),
            y_label: "Value".to_string(),
            title_font_size: 20,
            label_font_size: 14,
            tick_font_size: 12,
            axis_num_font_size: 12,
            line_width: 1.0,
            fig_width: 8.0,
            fig_height: 6.0,
            bar_color: BarColor::SkyBlue,
            groups: (0..3).map(GroupInput::numbered).collect(),
            significance: Vec::new(),
        }
    }
}

impl ChartParams {
    pub fn num_groups(&self) -> usize {
        self.groups.len()
    }

    /// Resize the group list. Existing entries keep their values; new
    /// entries get default names. Pairs referencing removed groups are
    /// dropped.
    pub fn set_num_groups(&mut self, count: usize) {
        let count = count.clamp(*NUM_GROUPS_RANGE.start(), *NUM_GROUPS_RANGE.end());
        while self.groups.len() < count {
            let index = self.groups.len();
            self.groups.push(GroupInput::numbered(index));
        }
        self.groups.truncate(count);
        self.significance.retain(|&(_, j)| j < count);
    }

    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.significance
    }

    pub fn has_pair(&self, i: usize, j: usize) -> bool {
        self.significance.contains(&(i, j))
    }

    /// Mark or unmark a pair as significant. Malformed pairs are ignored;
    /// the checkbox grid only produces `i < j` within range.
    pub fn set_pair(&mut self, i: usize, j: usize, significant: bool) {
        if i >= j || j >= self.groups.len() {
            return;
        }
        let present = self.has_pair(i, j);
        if significant && !present {
            self.significance.push((i, j));
        } else if !significant && present {
            self.significance.retain(|&pair| pair != (i, j));
        }
    }

    pub fn means(&self) -> Vec<f64> {
        self.groups.iter().map(|g| g.mean).collect()
    }

    pub fn std_errors(&self) -> Vec<f64> {
        self.groups.iter().map(|g| g.std_error).collect()
    }

    pub fn group_names(&self) -> Vec<String> {
        self.groups.iter().map(|g| g.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_are_consistent() {
        let params = ChartParams::default();
        assert_eq!(params.num_groups(), 3);
        assert!(NUM_GROUPS_RANGE.contains(&params.num_groups()));
        assert!(FIG_WIDTH_RANGE.contains(&params.fig_width));
        assert!(FIG_HEIGHT_RANGE.contains(&params.fig_height));
        assert!(LINE_WIDTH_RANGE.contains(&params.line_width));
        assert!(params.pairs().is_empty());
        assert_eq!(params.groups[2].name, "Group 3");
    }

    #[test]
    fn growing_keeps_existing_groups() {
        let mut params = ChartParams::default();
        params.groups[0].mean = 4.2;
        params.set_num_groups(5);
        assert_eq!(params.num_groups(), 5);
        assert_eq!(params.groups[0].mean, 4.2);
        assert_eq!(params.groups[4].name, "Group 5");
    }

    #[test]
    fn shrinking_prunes_stale_pairs() {
        let mut params = ChartParams::default();
        params.set_num_groups(4);
        params.set_pair(0, 1, true);
        params.set_pair(1, 3, true);
        params.set_num_groups(2);
        assert_eq!(params.pairs(), &[(0, 1)]);
    }

    #[test]
    fn group_count_is_clamped() {
        let mut params = ChartParams::default();
        params.set_num_groups(0);
        assert_eq!(params.num_groups(), 1);
        params.set_num_groups(100);
        assert_eq!(params.num_groups(), 10);
    }

    #[test]
    fn set_pair_rejects_malformed_input() {
        let mut params = ChartParams::default();
        params.set_pair(1, 1, true);
        params.set_pair(2, 0, true);
        params.set_pair(0, 7, true);
        assert!(params.pairs().is_empty());
    }

    #[test]
    fn set_pair_does_not_duplicate() {
        let mut params = ChartParams::default();
        params.set_pair(0, 2, true);
        params.set_pair(0, 2, true);
        assert_eq!(params.pairs(), &[(0, 2)]);
        params.set_pair(0, 2, false);
        assert!(params.pairs().is_empty());
    }
}
