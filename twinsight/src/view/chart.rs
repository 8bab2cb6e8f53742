//! Chart rendering onto the Iced canvas.
//!
//! Consumes the declarative [`ChartSpec`] model from `twinsight-common`
//! and paints it with canvas primitives: gridded multi-series polylines
//! with optional area fill, or annotated bars with category labels.

use iced::mouse;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke, Text};
use iced::{Element, Length, Point, Rectangle, Renderer, Size, Theme};

use twinsight_common::chart::{
    BarLayout, ChartKind, ChartSpec, GRID_COLUMNS, GRID_ROWS, PlotArea,
};

use crate::message::Message;
use crate::view::formatting::format_value;
use crate::view::theme;

/// Swatch size of a legend entry.
const LEGEND_SWATCH: f32 = 12.0;

/// Horizontal stride between legend entries.
const LEGEND_STRIDE: f32 = 120.0;

/// State for one chart: the spec plus the cached geometry.
///
/// The spec is checked at draw time; an invalid spec renders its
/// validation error in place of a plot instead of crashing or painting
/// garbage.
#[derive(Debug)]
pub struct ChartState {
    spec: ChartSpec,
    cache: Cache,
}

impl ChartState {
    pub fn new(spec: ChartSpec) -> Self {
        Self {
            spec,
            cache: Cache::new(),
        }
    }

    pub fn spec(&self) -> &ChartSpec {
        &self.spec
    }

    /// Roll the sample window: drop the oldest sample of every series
    /// and append the matching new reading, then invalidate the cache.
    /// Series lengths are preserved.
    pub fn roll(&mut self, latest: &[f64]) {
        for (dataset, &value) in self.spec.datasets.iter_mut().zip(latest) {
            if !dataset.data.is_empty() {
                dataset.data.remove(0);
            }
            dataset.data.push(value);
        }
        self.cache.clear();
    }

    /// Invalidate the cached geometry so the next frame repaints.
    pub fn redraw(&self) {
        self.cache.clear();
    }

    /// Create a canvas element for this chart.
    pub fn view(&self, height: f32) -> Element<'_, Message> {
        Canvas::new(ChartCanvas { state: self })
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .into()
    }
}

/// Canvas program painting one [`ChartState`].
struct ChartCanvas<'a> {
    state: &'a ChartState,
}

impl<'a> canvas::Program<Message> for ChartCanvas<'a> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self.state.cache.draw(renderer, bounds.size(), |frame| {
            draw_chart(&self.state.spec, frame, bounds.size());
        });

        vec![geometry]
    }
}

/// Paint a validated spec, or its validation error.
fn draw_chart(spec: &ChartSpec, frame: &mut Frame, size: Size) {
    if let Err(error) = spec.validate() {
        let message = Text {
            content: format!("Chart not drawable: {}", error),
            position: Point::new(size.width / 2.0 - 80.0, size.height / 2.0),
            color: theme::color(theme::RED),
            size: 12.0.into(),
            ..Text::default()
        };
        frame.fill_text(message);
        return;
    }

    let plot = PlotArea::of(size.width, size.height);
    if plot.width <= 0.0 || plot.height <= 0.0 {
        return;
    }

    match spec.kind {
        ChartKind::Line => draw_line_chart(spec, frame, &plot),
        ChartKind::Bar => draw_bar_chart(spec, frame, &plot),
    }

    draw_legend(spec, frame, size);
}

/// Grid, polylines and optional fills for a line chart.
fn draw_line_chart(spec: &ChartSpec, frame: &mut Frame, plot: &PlotArea) {
    draw_grid(frame, plot);

    // All series share the combined value range.
    let scale = spec.value_range();

    for dataset in &spec.datasets {
        let count = dataset.data.len();
        let points: Vec<Point> = dataset
            .data
            .iter()
            .enumerate()
            .map(|(i, &value)| Point::new(plot.sample_x(i, count), scale.y_at(value, plot)))
            .collect();

        frame.stroke(
            &polyline(&points),
            Stroke::default()
                .with_color(theme::color(dataset.stroke_color()))
                .with_width(2.0),
        );

        if dataset.fill {
            let mut builder = canvas::path::Builder::new();
            builder.move_to(points[0]);
            for point in &points[1..] {
                builder.line_to(*point);
            }
            builder.line_to(Point::new(plot.right(), plot.bottom()));
            builder.line_to(Point::new(plot.x, plot.bottom()));
            builder.close();

            frame.fill(&builder.build(), theme::color(dataset.fill_color()));
        }
    }
}

/// Fixed 10x5 grid across the plotting area.
fn draw_grid(frame: &mut Frame, plot: &PlotArea) {
    let stroke = Stroke::default()
        .with_color(theme::color(theme::GRID))
        .with_width(1.0);

    for i in 0..=GRID_COLUMNS {
        let x = plot.x + plot.width / GRID_COLUMNS as f32 * i as f32;
        frame.stroke(
            &Path::line(Point::new(x, plot.y), Point::new(x, plot.bottom())),
            stroke,
        );
    }

    for i in 0..=GRID_ROWS {
        let y = plot.y + plot.height / GRID_ROWS as f32 * i as f32;
        frame.stroke(
            &Path::line(Point::new(plot.x, y), Point::new(plot.right(), y)),
            stroke,
        );
    }
}

/// Bars with value annotations and category labels beneath.
fn draw_bar_chart(spec: &ChartSpec, frame: &mut Frame, plot: &PlotArea) {
    // Validation guarantees exactly one dataset with matching labels.
    let dataset = &spec.datasets[0];
    let count = dataset.data.len();
    let layout = BarLayout::new(plot, count);
    let max = dataset.max_value();

    for (i, &value) in dataset.data.iter().enumerate() {
        let height = BarLayout::bar_height(value, max, plot);
        let x = layout.bar_x(plot, i);
        let y = plot.bottom() - height;

        frame.fill(
            &Path::rectangle(Point::new(x, y), Size::new(layout.bar_width, height)),
            theme::color(dataset.bar_color(i)),
        );

        let annotation = format!("{}%", format_value(value));
        frame.fill_text(Text {
            content: annotation,
            position: Point::new(x + layout.bar_width / 2.0 - 12.0, y - 17.0),
            color: theme::color(theme::LABEL_STRONG),
            size: 12.0.into(),
            ..Text::default()
        });
    }

    for (i, label) in spec.labels.iter().enumerate() {
        frame.fill_text(Text {
            content: label.clone(),
            position: Point::new(layout.slot_center(plot, i) - 20.0, plot.bottom() + 8.0),
            color: theme::color(theme::LABEL_MUTED),
            size: 11.0.into(),
            ..Text::default()
        });
    }
}

/// One swatch + label per dataset, centered; single-dataset charts are
/// assumed self-explanatory and get no legend.
fn draw_legend(spec: &ChartSpec, frame: &mut Frame, size: Size) {
    if spec.datasets.len() <= 1 {
        return;
    }

    let legend_y = 20.0;
    let mut legend_x = size.width / 2.0 - 100.0;

    for dataset in &spec.datasets {
        frame.fill(
            &Path::rectangle(
                Point::new(legend_x, legend_y),
                Size::new(LEGEND_SWATCH, LEGEND_SWATCH),
            ),
            theme::color(dataset.swatch_color()),
        );

        frame.fill_text(Text {
            content: dataset.label.clone(),
            position: Point::new(legend_x + LEGEND_SWATCH + 4.0, legend_y),
            color: theme::color(theme::LABEL_STRONG),
            size: 12.0.into(),
            ..Text::default()
        });

        legend_x += LEGEND_STRIDE;
    }
}

/// Build a stroke path connecting consecutive points.
fn polyline(points: &[Point]) -> Path {
    let mut builder = canvas::path::Builder::new();
    if let Some((first, rest)) = points.split_first() {
        builder.move_to(*first);
        for point in rest {
            builder.line_to(*point);
        }
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use twinsight_common::chart::Dataset;

    fn rolling_spec() -> ChartSpec {
        ChartSpec::new(
            ChartKind::Line,
            Vec::new(),
            vec![
                Dataset::new("a", vec![1.0, 2.0, 3.0]),
                Dataset::new("b", vec![4.0, 5.0, 6.0]),
            ],
        )
    }

    #[test]
    fn test_roll_preserves_window_length() {
        let mut chart = ChartState::new(rolling_spec());

        chart.roll(&[10.0, 20.0]);
        chart.roll(&[11.0, 21.0]);

        for dataset in &chart.spec().datasets {
            assert_eq!(dataset.data.len(), 3);
        }
        assert_eq!(chart.spec().datasets[0].data, vec![3.0, 10.0, 11.0]);
        assert_eq!(chart.spec().datasets[1].data, vec![6.0, 20.0, 21.0]);
    }

    #[test]
    fn test_roll_keeps_spec_valid() {
        let mut chart = ChartState::new(rolling_spec());
        for _ in 0..50 {
            chart.roll(&[1.0, 2.0]);
        }
        assert!(chart.spec().validate().is_ok());
    }
}
