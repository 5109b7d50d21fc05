use std::f64::consts::{FRAC_PI_2, TAU};

use indexmap::IndexSet;

use crate::core::{ChartKind, LinearScale, Viewport, cardinal_spline};
use crate::error::{ChartError, ChartResult};
use crate::render::palette::{ACCENT, AXIS_LABEL, CARD_BACKGROUND, GRID_LINE, category_color};
use crate::render::{
    LinePrimitive, RectPrimitive, RenderFrame, SectorPrimitive, TextHAlign, TextPrimitive,
};

use super::{ChartDemoState, DemoConfig};

const CARD_CORNER_RADIUS: f64 = 10.0;
const CARD_PADDING: f64 = 16.0;
const VALUE_AXIS_WIDTH: f64 = 40.0;
const VALUE_LABEL_GAP: f64 = 6.0;
const CATEGORY_AXIS_HEIGHT: f64 = 18.0;
const LEGEND_ROW_HEIGHT: f64 = 18.0;
const LEGEND_SWATCH_PX: f64 = 8.0;
const LEGEND_ITEM_GAP: f64 = 10.0;
const LABEL_FONT_PX: f64 = 10.0;
const LABEL_CHAR_WIDTH_RATIO: f64 = 0.6;
const BAR_BAND_FILL: f64 = 0.6;
const LINE_STROKE_WIDTH: f64 = 2.0;
const GRID_STROKE_WIDTH: f64 = 1.0;
const LINE_TENSION: f64 = 0.0;

/// Axis-aligned pixel rectangle used while laying out the card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotRect {
    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn is_drawable(self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }

    fn clamp_y(self, y: f64) -> f64 {
        y.clamp(self.top, self.bottom.max(self.top))
    }
}

/// One sample as the mark builders see it.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Mark {
    category: usize,
    value: f64,
    progress: f64,
}

impl Mark {
    fn animated_value(self) -> f64 {
        self.value.max(0.0) * self.progress
    }
}

/// Builds the draw primitives for the current state and chart kind.
///
/// Hidden samples contribute zero magnitude and zero opacity; samples that are
/// mid-transition are scaled by their eased progress.
pub fn build_frame(state: &ChartDemoState) -> ChartResult<RenderFrame> {
    build_frame_for_viewport(state, state.config().viewport)
}

/// Same as [`build_frame`] but laid out for a host-provided surface size.
pub fn build_frame_for_viewport(
    state: &ChartDemoState,
    viewport: Viewport,
) -> ChartResult<RenderFrame> {
    let config = state.config();
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }

    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);
    let mut frame = RenderFrame::new(viewport).with_background(
        RectPrimitive::new(0.0, 0.0, width, height, CARD_BACKGROUND)
            .with_corner_radius(CARD_CORNER_RADIUS),
    );

    let content = PlotRect {
        left: CARD_PADDING,
        top: CARD_PADDING,
        right: width - CARD_PADDING,
        bottom: height - CARD_PADDING,
    };
    if !content.is_drawable() {
        return Ok(frame);
    }

    let (categories, marks) = collect_marks(state);
    match state.kind() {
        ChartKind::Bar => {
            let plot = cartesian_plot(content, true);
            if plot.is_drawable() {
                let scale = value_scale(config, plot)?;
                push_value_axis(&mut frame, config, scale, plot);
                push_category_axis(&mut frame, &categories, plot);
                push_bars(&mut frame, &marks, categories.len(), scale, plot);
            }
            push_legend(&mut frame, &categories, content);
        }
        ChartKind::Line => {
            let plot = cartesian_plot(content, false);
            if plot.is_drawable() {
                let scale = value_scale(config, plot)?;
                push_value_axis(&mut frame, config, scale, plot);
                push_category_axis(&mut frame, &categories, plot);
                push_line(&mut frame, config, &marks, categories.len(), scale, plot);
            }
        }
        ChartKind::Pie => {
            let plot = PlotRect {
                bottom: content.bottom - LEGEND_ROW_HEIGHT,
                ..content
            };
            if plot.is_drawable() {
                push_sectors(&mut frame, config, &marks, plot);
            }
            push_legend(&mut frame, &categories, content);
        }
    }

    frame.validate()?;
    Ok(frame)
}

/// Formats an axis value with thousands separators, e.g. `12,000`.
#[must_use]
pub fn format_value_label(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if negative {
        grouped.insert(0, '-');
    }
    grouped
}

fn collect_marks(state: &ChartDemoState) -> (IndexSet<String>, Vec<Mark>) {
    let mut categories = IndexSet::new();
    let mut marks = Vec::with_capacity(state.points().len());
    for (index, point) in state.points().iter().enumerate() {
        let (category, _) = categories.insert_full(point.month.clone());
        marks.push(Mark {
            category,
            value: point.value,
            progress: state.progress_at(index),
        });
    }
    (categories, marks)
}

fn cartesian_plot(content: PlotRect, with_legend: bool) -> PlotRect {
    let legend = if with_legend { LEGEND_ROW_HEIGHT } else { 0.0 };
    PlotRect {
        left: content.left,
        top: content.top,
        right: content.right - VALUE_AXIS_WIDTH,
        bottom: content.bottom - CATEGORY_AXIS_HEIGHT - legend,
    }
}

fn value_scale(config: &DemoConfig, plot: PlotRect) -> ChartResult<LinearScale> {
    LinearScale::new(0.0, config.value_domain_max, plot.bottom, plot.top)
}

fn band_width(category_count: usize, plot: PlotRect) -> f64 {
    plot.width() / category_count.max(1) as f64
}

fn category_center_x(category: usize, category_count: usize, plot: PlotRect) -> f64 {
    plot.left + band_width(category_count, plot) * (category as f64 + 0.5)
}

fn push_value_axis(
    frame: &mut RenderFrame,
    config: &DemoConfig,
    scale: LinearScale,
    plot: PlotRect,
) {
    for tick in scale.ticks(config.value_tick_step) {
        let y = scale.to_pixel(tick);
        frame.lines.push(LinePrimitive::new(
            plot.left,
            y,
            plot.right,
            y,
            GRID_STROKE_WIDTH,
            GRID_LINE,
        ));
        frame.texts.push(TextPrimitive::new(
            format_value_label(tick),
            plot.right + VALUE_LABEL_GAP,
            y,
            LABEL_FONT_PX,
            AXIS_LABEL,
            TextHAlign::Left,
        ));
    }
}

fn push_category_axis(frame: &mut RenderFrame, categories: &IndexSet<String>, plot: PlotRect) {
    let y = plot.bottom + CATEGORY_AXIS_HEIGHT / 2.0;
    for (index, month) in categories.iter().enumerate() {
        frame.texts.push(TextPrimitive::new(
            month.as_str(),
            category_center_x(index, categories.len(), plot),
            y,
            LABEL_FONT_PX,
            AXIS_LABEL,
            TextHAlign::Center,
        ));
    }
}

/// Samples sharing a month stack on top of each other in insertion order.
fn push_bars(
    frame: &mut RenderFrame,
    marks: &[Mark],
    category_count: usize,
    scale: LinearScale,
    plot: PlotRect,
) {
    let band = band_width(category_count, plot);
    let bar_width = band * BAR_BAND_FILL;
    let mut stacks = vec![0.0_f64; category_count];

    for mark in marks {
        let base = stacks[mark.category];
        let top = base + mark.animated_value();
        stacks[mark.category] = top;
        if mark.progress <= 0.0 {
            continue;
        }

        let y_base = plot.clamp_y(scale.to_pixel(base));
        let y_top = plot.clamp_y(scale.to_pixel(top));
        let x = category_center_x(mark.category, category_count, plot) - bar_width / 2.0;
        frame.rects.push(RectPrimitive::new(
            x,
            y_top,
            bar_width,
            (y_base - y_top).max(0.0),
            category_color(mark.category).with_opacity(mark.progress),
        ));
    }
}

fn push_line(
    frame: &mut RenderFrame,
    config: &DemoConfig,
    marks: &[Mark],
    category_count: usize,
    scale: LinearScale,
    plot: PlotRect,
) {
    if marks.len() < 2 {
        return;
    }

    let anchors: Vec<(f64, f64)> = marks
        .iter()
        .map(|mark| {
            (
                category_center_x(mark.category, category_count, plot),
                plot.clamp_y(scale.to_pixel(mark.animated_value())),
            )
        })
        .collect();
    let samples = config.line_samples_per_segment;
    let curve = cardinal_spline(&anchors, LINE_TENSION, samples);

    for (span, pair) in marks.windows(2).enumerate() {
        let opacity = pair[0].progress.min(pair[1].progress);
        if opacity <= 0.0 {
            continue;
        }
        let color = ACCENT.with_opacity(opacity);
        let start = span * samples;
        for piece in curve[start..=start + samples].windows(2) {
            frame.lines.push(LinePrimitive::new(
                piece[0].0,
                plot.clamp_y(piece[0].1),
                piece[1].0,
                plot.clamp_y(piece[1].1),
                LINE_STROKE_WIDTH,
                color,
            ));
        }
    }
}

/// Donut sectors sweep clockwise from twelve o'clock, sized by animated share.
fn push_sectors(frame: &mut RenderFrame, config: &DemoConfig, marks: &[Mark], plot: PlotRect) {
    let total: f64 = marks.iter().map(|mark| mark.animated_value()).sum();
    if total <= 0.0 {
        return;
    }

    let outer_radius = plot.width().min(plot.height()) / 2.0;
    if outer_radius <= 0.0 {
        return;
    }
    let inner_radius = outer_radius * config.pie_inner_radius_ratio;
    let half_inset = config.pie_angular_inset_deg.to_radians() / 2.0;
    let center_x = plot.left + plot.width() / 2.0;
    let center_y = plot.top + plot.height() / 2.0;

    let mut angle = -FRAC_PI_2;
    for mark in marks {
        let sweep = mark.animated_value() / total * TAU;
        let start_angle = angle + half_inset;
        let end_angle = angle + sweep - half_inset;
        angle += sweep;
        if mark.progress <= 0.0 || end_angle <= start_angle {
            continue;
        }
        frame.sectors.push(SectorPrimitive {
            center_x,
            center_y,
            inner_radius,
            outer_radius,
            start_angle,
            end_angle,
            fill_color: category_color(mark.category).with_opacity(mark.progress),
        });
    }
}

fn push_legend(frame: &mut RenderFrame, categories: &IndexSet<String>, content: PlotRect) {
    let y = content.bottom - LEGEND_ROW_HEIGHT / 2.0;
    let mut x = content.left;
    for (index, month) in categories.iter().enumerate() {
        let label_width = month.chars().count() as f64 * LABEL_FONT_PX * LABEL_CHAR_WIDTH_RATIO;
        let item_width = LEGEND_SWATCH_PX + 4.0 + label_width;
        if x + item_width > content.right {
            break;
        }
        frame.rects.push(
            RectPrimitive::new(
                x,
                y - LEGEND_SWATCH_PX / 2.0,
                LEGEND_SWATCH_PX,
                LEGEND_SWATCH_PX,
                category_color(index),
            )
            .with_corner_radius(LEGEND_SWATCH_PX / 2.0),
        );
        frame.texts.push(TextPrimitive::new(
            month.as_str(),
            x + LEGEND_SWATCH_PX + 4.0,
            y,
            LABEL_FONT_PX,
            AXIS_LABEL,
            TextHAlign::Left,
        ));
        x += item_width + LEGEND_ITEM_GAP;
    }
}
