//! Declarative chart model and layout math.
//!
//! The canvas renderer in the frontend consumes these types; everything
//! here is plain geometry and validates without a display.

use thiserror::Error;

/// Fixed pixel padding around the plotting area.
pub const PADDING: f32 = 40.0;

/// Vertical grid divisions across a line chart's plotting area.
pub const GRID_COLUMNS: u32 = 10;

/// Horizontal grid divisions across a line chart's plotting area.
pub const GRID_ROWS: u32 = 5;

/// Headroom factor applied below the combined minimum of a line chart.
pub const HEADROOM_LOW: f64 = 0.9;

/// Headroom factor applied above the combined maximum of a line chart.
pub const HEADROOM_HIGH: f64 = 1.1;

/// Fraction of a bar slot occupied by the bar itself.
pub const BAR_FILL: f32 = 0.8;

/// An RGBA color, channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Default series color when a dataset specifies none (indigo).
    pub const SERIES: Rgba = Rgba::opaque(0.400, 0.494, 0.918);

    /// Default translucent fill tint for line datasets.
    pub const FILL: Rgba = Rgba::new(0.400, 0.494, 0.918, 0.1);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// The same color with a different alpha channel.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }
}

/// Which renderer a chart description drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Multi-series polylines with optional area fill.
    Line,
    /// Single-series bars with value and category labels.
    Bar,
}

/// Background paint for a dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    /// One color for the whole dataset (line fills).
    Solid(Rgba),
    /// One color per sample index (bar charts).
    PerIndex(Vec<Rgba>),
}

/// One named numeric series plus its styling.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Legend label.
    pub label: String,
    /// Samples, oldest first. Line charts roll this window in place.
    pub data: Vec<f64>,
    /// Stroke color; falls back to [`Rgba::SERIES`].
    pub border_color: Option<Rgba>,
    /// Fill paint; falls back to [`Rgba::FILL`] / [`Rgba::SERIES`].
    pub background: Option<Paint>,
    /// Whether a line dataset fills the area down to the plot bottom.
    pub fill: bool,
}

impl Dataset {
    /// Create a dataset with default styling.
    pub fn new(label: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            data,
            border_color: None,
            background: None,
            fill: false,
        }
    }

    /// Set the stroke color.
    pub fn with_border(mut self, color: Rgba) -> Self {
        self.border_color = Some(color);
        self
    }

    /// Set the background paint.
    pub fn with_background(mut self, paint: Paint) -> Self {
        self.background = Some(paint);
        self
    }

    /// Fill the area under the polyline (line charts).
    pub fn filled(mut self) -> Self {
        self.fill = true;
        self
    }

    /// Stroke color with the default applied.
    pub fn stroke_color(&self) -> Rgba {
        self.border_color.unwrap_or(Rgba::SERIES)
    }

    /// Solid fill color for a line dataset, with the default tint applied.
    pub fn fill_color(&self) -> Rgba {
        match &self.background {
            Some(Paint::Solid(color)) => *color,
            _ => Rgba::FILL,
        }
    }

    /// Bar color for the given index, with the default applied.
    pub fn bar_color(&self, index: usize) -> Rgba {
        match &self.background {
            Some(Paint::PerIndex(colors)) => colors.get(index).copied().unwrap_or(Rgba::SERIES),
            Some(Paint::Solid(color)) => *color,
            None => Rgba::SERIES,
        }
    }

    /// Color used for this dataset's legend swatch.
    pub fn swatch_color(&self) -> Rgba {
        if let Some(color) = self.border_color {
            return color;
        }
        match &self.background {
            Some(Paint::Solid(color)) => *color,
            Some(Paint::PerIndex(colors)) => colors.first().copied().unwrap_or(Rgba::SERIES),
            None => Rgba::SERIES,
        }
    }

    /// Largest sample of this dataset (bar y-scaling).
    pub fn max_value(&self) -> f64 {
        self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Validation failures for a chart description.
#[derive(Debug, Error, PartialEq)]
pub enum ChartError {
    #[error("chart has no datasets")]
    NoDatasets,

    #[error("dataset '{0}' has no samples")]
    EmptySeries(String),

    #[error("dataset '{label}' has {found} samples, expected {expected}")]
    MismatchedSampleCounts {
        label: String,
        expected: usize,
        found: usize,
    },

    #[error("bar charts render a single dataset, got {0}")]
    ExtraBarDatasets(usize),

    #[error("{labels} category labels for {bars} bars")]
    LabelCountMismatch { labels: usize, bars: usize },
}

/// A declarative chart description.
///
/// The shape is immutable after construction; only the numeric contents
/// of the datasets change over time.
#[derive(Debug, Clone)]
pub struct ChartSpec {
    pub kind: ChartKind,
    /// Category labels, paired with samples by index (bar charts).
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartSpec {
    pub fn new(kind: ChartKind, labels: Vec<String>, datasets: Vec<Dataset>) -> Self {
        Self {
            kind,
            labels,
            datasets,
        }
    }

    /// Check the invariants the renderers rely on.
    ///
    /// Rejects empty dataset lists, empty series, mismatched line sample
    /// counts, surplus bar datasets and bar label/count mismatches.
    pub fn validate(&self) -> Result<(), ChartError> {
        let first = self.datasets.first().ok_or(ChartError::NoDatasets)?;

        for dataset in &self.datasets {
            if dataset.data.is_empty() {
                return Err(ChartError::EmptySeries(dataset.label.clone()));
            }
        }

        match self.kind {
            ChartKind::Line => {
                let expected = first.data.len();
                for dataset in &self.datasets[1..] {
                    if dataset.data.len() != expected {
                        return Err(ChartError::MismatchedSampleCounts {
                            label: dataset.label.clone(),
                            expected,
                            found: dataset.data.len(),
                        });
                    }
                }
            }
            ChartKind::Bar => {
                if self.datasets.len() > 1 {
                    return Err(ChartError::ExtraBarDatasets(self.datasets.len()));
                }
                if self.labels.len() != first.data.len() {
                    return Err(ChartError::LabelCountMismatch {
                        labels: self.labels.len(),
                        bars: first.data.len(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Combined y-range across all datasets, with headroom applied.
    ///
    /// Line charts scale every series against this shared range, not
    /// against each series' own extent.
    pub fn value_range(&self) -> ValueScale {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for dataset in &self.datasets {
            for &value in &dataset.data {
                min = min.min(value);
                max = max.max(value);
            }
        }
        ValueScale::with_headroom(min, max)
    }
}

/// The plotting area of a chart surface, inset by the fixed padding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PlotArea {
    /// Inset a surface of the given logical size by [`PADDING`].
    pub fn of(surface_width: f32, surface_height: f32) -> Self {
        Self {
            x: PADDING,
            y: PADDING,
            width: surface_width - PADDING * 2.0,
            height: surface_height - PADDING * 2.0,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// X position of the sample at `index` out of `count`.
    ///
    /// With a single sample the step degenerates; it falls back to the
    /// full plot width and the sole point sits on the left edge.
    pub fn sample_x(&self, index: usize, count: usize) -> f32 {
        let step = if count > 1 {
            self.width / (count - 1) as f32
        } else {
            self.width
        };
        self.x + step * index as f32
    }
}

/// Linear y-axis mapping over a value range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    pub min: f64,
    pub max: f64,
}

impl ValueScale {
    /// Range with [`HEADROOM_LOW`]/[`HEADROOM_HIGH`] applied.
    ///
    /// A degenerate range (all samples equal) is padded by ±0.5 so the
    /// mapping stays finite.
    pub fn with_headroom(min: f64, max: f64) -> Self {
        let mut min = min * HEADROOM_LOW;
        let mut max = max * HEADROOM_HIGH;
        if max - min < 0.001 {
            min -= 0.5;
            max += 0.5;
        }
        Self { min, max }
    }

    /// Y pixel for a value within the given plot.
    pub fn y_at(&self, value: f64, plot: &PlotArea) -> f32 {
        let normalized = ((value - self.min) / (self.max - self.min)) as f32;
        plot.bottom() - normalized * plot.height
    }
}

/// Geometry for laying out the bars of a bar chart.
///
/// Each bar occupies [`BAR_FILL`] of its slot, centered; the y-scale is
/// the dataset's own maximum, so every bar chart instance scales
/// independently.
#[derive(Debug, Clone, Copy)]
pub struct BarLayout {
    slot: f32,
    pub bar_width: f32,
}

impl BarLayout {
    pub fn new(plot: &PlotArea, count: usize) -> Self {
        let slot = plot.width / count as f32;
        Self {
            slot,
            bar_width: slot * BAR_FILL,
        }
    }

    /// Left edge of the bar at `index`.
    pub fn bar_x(&self, plot: &PlotArea, index: usize) -> f32 {
        plot.x + self.slot * index as f32 + (self.slot - self.bar_width) / 2.0
    }

    /// Horizontal center of the slot at `index` (category labels).
    pub fn slot_center(&self, plot: &PlotArea, index: usize) -> f32 {
        plot.x + self.slot * index as f32 + self.slot / 2.0
    }

    /// Bar height for a value scaled against the dataset maximum.
    pub fn bar_height(value: f64, max: f64, plot: &PlotArea) -> f32 {
        if max <= 0.0 {
            return 0.0;
        }
        ((value / max) as f32) * plot.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_spec(datasets: Vec<Dataset>) -> ChartSpec {
        ChartSpec::new(ChartKind::Line, Vec::new(), datasets)
    }

    #[test]
    fn test_value_range_spans_all_datasets() {
        let spec = line_spec(vec![
            Dataset::new("a", vec![20.0, 25.0, 30.0]),
            Dataset::new("b", vec![50.0, 60.0, 70.0]),
        ]);

        let scale = spec.value_range();
        assert!((scale.min - 18.0).abs() < 1e-9);
        assert!((scale.max - 77.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_range_is_padded() {
        let spec = line_spec(vec![Dataset::new("flat", vec![10.0, 10.0, 10.0])]);

        let scale = spec.value_range();
        assert!(scale.max > scale.min);

        let plot = PlotArea::of(200.0, 100.0);
        assert!(scale.y_at(10.0, &plot).is_finite());
    }

    #[test]
    fn test_y_at_maps_range_endpoints() {
        let scale = ValueScale { min: 0.0, max: 100.0 };
        let plot = PlotArea::of(300.0, 200.0);

        assert_eq!(scale.y_at(0.0, &plot), plot.bottom());
        assert_eq!(scale.y_at(100.0, &plot), plot.y);
    }

    #[test]
    fn test_sample_x_single_sample_fallback() {
        let plot = PlotArea::of(300.0, 200.0);

        let x = plot.sample_x(0, 1);
        assert!(x.is_finite());
        assert_eq!(x, plot.x);

        // Two samples span the full plot width.
        assert_eq!(plot.sample_x(0, 2), plot.x);
        assert_eq!(plot.sample_x(1, 2), plot.right());
    }

    #[test]
    fn test_bar_height_scales_against_own_max() {
        let plot = PlotArea::of(500.0, 300.0);
        let height = BarLayout::bar_height(85.0, 95.0, &plot);
        let expected = (85.0 / 95.0) as f32 * plot.height;
        assert!((height - expected).abs() < 1e-4);

        assert_eq!(BarLayout::bar_height(1.0, 0.0, &plot), 0.0);
    }

    #[test]
    fn test_bar_layout_centers_bars_in_slots() {
        let plot = PlotArea::of(540.0, 300.0);
        let layout = BarLayout::new(&plot, 5);

        // 5 slots of 92 px, bars of 73.6 px with 9.2 px margins.
        let slot = plot.width / 5.0;
        assert!((layout.bar_width - slot * 0.8).abs() < 1e-4);
        assert!((layout.bar_x(&plot, 0) - (plot.x + slot * 0.1)).abs() < 1e-4);
        assert!((layout.slot_center(&plot, 2) - (plot.x + slot * 2.5)).abs() < 1e-4);
    }

    #[test]
    fn test_validate_rejects_empty_charts() {
        let spec = line_spec(Vec::new());
        assert_eq!(spec.validate(), Err(ChartError::NoDatasets));

        let spec = line_spec(vec![Dataset::new("empty", Vec::new())]);
        assert_eq!(
            spec.validate(),
            Err(ChartError::EmptySeries("empty".to_string()))
        );
    }

    #[test]
    fn test_validate_rejects_mismatched_line_lengths() {
        let spec = line_spec(vec![
            Dataset::new("a", vec![1.0, 2.0, 3.0]),
            Dataset::new("b", vec![1.0, 2.0]),
        ]);

        assert_eq!(
            spec.validate(),
            Err(ChartError::MismatchedSampleCounts {
                label: "b".to_string(),
                expected: 3,
                found: 2,
            })
        );
    }

    #[test]
    fn test_validate_rejects_bar_shape_violations() {
        let labels = vec!["a".to_string(), "b".to_string()];

        let spec = ChartSpec::new(
            ChartKind::Bar,
            labels.clone(),
            vec![
                Dataset::new("one", vec![1.0, 2.0]),
                Dataset::new("two", vec![3.0, 4.0]),
            ],
        );
        assert_eq!(spec.validate(), Err(ChartError::ExtraBarDatasets(2)));

        let spec = ChartSpec::new(
            ChartKind::Bar,
            labels,
            vec![Dataset::new("one", vec![1.0, 2.0, 3.0])],
        );
        assert_eq!(
            spec.validate(),
            Err(ChartError::LabelCountMismatch { labels: 2, bars: 3 })
        );
    }

    #[test]
    fn test_color_fallbacks() {
        let plain = Dataset::new("plain", vec![1.0]);
        assert_eq!(plain.stroke_color(), Rgba::SERIES);
        assert_eq!(plain.fill_color(), Rgba::FILL);
        assert_eq!(plain.bar_color(0), Rgba::SERIES);
        assert_eq!(plain.swatch_color(), Rgba::SERIES);

        let red = Rgba::opaque(1.0, 0.0, 0.0);
        let styled = Dataset::new("styled", vec![1.0, 2.0])
            .with_background(Paint::PerIndex(vec![red]));
        assert_eq!(styled.bar_color(0), red);
        // Indexes past the palette fall back to the default.
        assert_eq!(styled.bar_color(1), Rgba::SERIES);
        assert_eq!(styled.swatch_color(), red);
    }
}
