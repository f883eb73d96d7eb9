//! Chart view - executes plot draw operations on a braille canvas.

use crate::app::App;
use crate::plot::{self, DrawOp, PlotPalette, Viewport};
use crate::ui::{formatters, ThemeColors};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Context, Line as CanvasLine},
        Block, Borders, Paragraph,
    },
    Frame,
};

// Braille dots per terminal cell.
const DOTS_X: u16 = 2;
const DOTS_Y: u16 = 4;

/// Draw the chart area.
pub(super) fn draw_chart(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let Some(ref series) = app.series else {
        draw_welcome(f, area, app, colors);
        return;
    };

    let title = format!(
        " {} ({} points) ",
        series.name,
        formatters::format_number(series.len())
    );

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));

    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width == 0 || inner.height < 2 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    draw_bounds_line(f, chunks[0], series, colors);

    let plot_area = chunks[1];
    let viewport = Viewport::new(
        plot_area.width.saturating_mul(DOTS_X),
        plot_area.height.saturating_mul(DOTS_Y),
    );

    let palette = PlotPalette {
        axis: colors.axis,
        line: colors.graph,
        marker: colors.graph,
        highlight: colors.highlight,
    };

    let ops = plot::render(&series.points, &app.options, viewport, &palette);

    let canvas = Canvas::default()
        .background_color(colors.bg)
        .marker(symbols::Marker::Braille)
        .x_bounds([0.0, f64::from(viewport.width)])
        .y_bounds([0.0, f64::from(viewport.height)])
        .paint(|ctx| paint_ops(ctx, &ops, f64::from(viewport.height)));

    f.render_widget(canvas, plot_area);
}

/// Data-space bounds readout above the plot.
fn draw_bounds_line(
    f: &mut Frame<'_>,
    area: Rect,
    series: &crate::data::PointSeries,
    colors: &ThemeColors,
) {
    let Some(bounds) = series.bounds() else {
        let paragraph = Paragraph::new("No points to display")
            .style(Style::default().fg(colors.text).bg(colors.bg));
        f.render_widget(paragraph, area);
        return;
    };

    let line = Line::from(vec![
        Span::styled("X: ", Style::default().fg(colors.label)),
        Span::styled(
            format!(
                "[{}, {}]",
                formatters::format_stat_value(bounds.min_x),
                formatters::format_stat_value(bounds.max_x)
            ),
            Style::default().fg(colors.value),
        ),
        Span::styled("  Y: ", Style::default().fg(colors.label)),
        Span::styled(
            format!(
                "[{}, {}]",
                formatters::format_stat_value(bounds.min_y),
                formatters::format_stat_value(bounds.max_y)
            ),
            Style::default().fg(colors.value),
        ),
    ]);

    let paragraph = Paragraph::new(line).style(Style::default().bg(colors.bg));
    f.render_widget(paragraph, area);
}

/// Execute draw operations against the canvas.
///
/// Operations are in screen space (origin top-left, y down); the canvas
/// y axis grows upward, so y coordinates are flipped here.
fn paint_ops(ctx: &mut Context<'_>, ops: &[DrawOp], height: f64) {
    for op in ops {
        match op {
            DrawOp::Line {
                x1,
                y1,
                x2,
                y2,
                color,
            } => {
                ctx.draw(&CanvasLine {
                    x1: f64::from(*x1),
                    y1: height - f64::from(*y1),
                    x2: f64::from(*x2),
                    y2: height - f64::from(*y2),
                    color: *color,
                });
            }
            DrawOp::Polygon { vertices, color } => {
                // Stroke the outline; braille cells are too coarse to fill.
                for i in 0..vertices.len() {
                    let (x1, y1) = vertices[i];
                    let (x2, y2) = vertices[(i + 1) % vertices.len()];
                    ctx.draw(&CanvasLine {
                        x1: f64::from(x1),
                        y1: height - f64::from(y1),
                        x2: f64::from(x2),
                        y2: height - f64::from(y2),
                        color: *color,
                    });
                }
            }
            DrawOp::Text { x, y, text, color } => {
                ctx.print(
                    f64::from(*x),
                    height - f64::from(*y),
                    Line::styled(text.clone(), Style::default().fg(*color)),
                );
            }
        }
    }
}

fn draw_welcome(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Welcome to Argand!",
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Open a point-series file to get started"),
        Line::from(""),
        Line::from("Usage: argand <points.csv>"),
        Line::from(""),
        Line::from("Keyboard shortcuts:"),
        Line::from("  a           - Toggle axis"),
        Line::from("  m           - Toggle markers"),
        Line::from("  s           - Toggle special-point highlight"),
        Line::from("  o           - Open file browser"),
        Line::from("  T           - Cycle theme"),
        Line::from("  q           - Quit"),
    ];

    if let Some(ref error) = app.error_message {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(colors.error),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Argand ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .style(Style::default().bg(colors.bg)),
        )
        .style(Style::default().fg(colors.text));

    f.render_widget(paragraph, area);
}
