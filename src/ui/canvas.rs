//! Chart canvas
//!
//! Draws a [`ChartScene`] onto a ratatui canvas. Scenes use screen
//! orientation (y down) while the canvas has y pointing up, so every y is
//! flipped against the viewport height.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Points, Rectangle},
        Block, Borders, Paragraph,
    },
    Frame,
};

use crate::chart::{ChartScene, Marks};

const AXIS_COLOR: Color = Color::Gray;
const TICK_COLOR: Color = Color::Red;
const DATA_COLOR: Color = Color::Blue;
const LINE_COLOR: Color = Color::White;
const LABEL_COLOR: Color = Color::DarkGray;

/// Space reserved left of and below the chart for labels, as a fraction of
/// the extent
const LABEL_MARGIN: f64 = 0.12;

/// Approximate terminal columns one x label needs
const X_LABEL_COLUMNS: u16 = 12;

/// Render `scene` into `area`, or a placeholder when there is nothing to plot
pub fn render_scene(frame: &mut Frame, area: Rect, title: &str, scene: Option<&ChartScene>) {
    let block = Block::default().borders(Borders::ALL).title(format!(" {} ", title));

    let Some(scene) = scene else {
        let placeholder = Paragraph::new("No data to chart")
            .alignment(Alignment::Center)
            .style(Style::default().fg(LABEL_COLOR))
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    };

    let height = scene.viewport.height;
    let flip = move |y: f64| height - y;

    let extent = scene.extent();
    let margin_x = extent.width * LABEL_MARGIN;
    let margin_y = extent.height * LABEL_MARGIN;
    let left = extent.x - margin_x;
    let right = extent.x + extent.width;
    let bottom = flip(extent.y + extent.height) - margin_y;
    let top = flip(extent.y);

    // Thin out x labels so neighbours do not overwrite each other
    let label_slots = usize::from((area.width / X_LABEL_COLUMNS).max(1));
    let label_every = scene.x_ticks.len().div_ceil(label_slots).max(1);

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([left, right])
        .y_bounds([bottom, top])
        .paint(move |ctx| {
            let width = scene.viewport.width;

            ctx.draw(&CanvasLine {
                x1: 0.0,
                y1: 0.0,
                x2: width,
                y2: 0.0,
                color: AXIS_COLOR,
            });
            ctx.draw(&CanvasLine {
                x1: 0.0,
                y1: 0.0,
                x2: 0.0,
                y2: height,
                color: AXIS_COLOR,
            });

            let y_ticks: Vec<(f64, f64)> = scene.y_ticks.iter().map(|t| (0.0, flip(t.position))).collect();
            let x_ticks: Vec<(f64, f64)> = scene.x_ticks.iter().map(|t| (t.position, 0.0)).collect();
            ctx.draw(&Points {
                coords: &y_ticks,
                color: TICK_COLOR,
            });
            ctx.draw(&Points {
                coords: &x_ticks,
                color: TICK_COLOR,
            });

            ctx.layer();

            match &scene.marks {
                Marks::Line(points) => {
                    for pair in points.windows(2) {
                        ctx.draw(&CanvasLine {
                            x1: pair[0].x,
                            y1: flip(pair[0].y),
                            x2: pair[1].x,
                            y2: flip(pair[1].y),
                            color: LINE_COLOR,
                        });
                    }
                    let coords: Vec<(f64, f64)> = points.iter().map(|p| (p.x, flip(p.y))).collect();
                    ctx.draw(&Points {
                        coords: &coords,
                        color: DATA_COLOR,
                    });
                }
                Marks::Bars(bars) => {
                    for bar in bars {
                        ctx.draw(&Rectangle {
                            x: bar.rect.x,
                            y: flip(bar.rect.y + bar.rect.height),
                            width: bar.rect.width,
                            height: bar.rect.height,
                            color: DATA_COLOR,
                        });
                    }
                }
            }

            ctx.layer();

            for tick in &scene.y_ticks {
                ctx.print(
                    left,
                    flip(tick.position),
                    Span::styled(tick.label.clone(), Style::default().fg(LABEL_COLOR)),
                );
            }
            for tick in scene.x_ticks.iter().step_by(label_every) {
                ctx.print(
                    tick.position,
                    bottom,
                    Span::styled(tick.label.clone(), Style::default().fg(LABEL_COLOR)),
                );
            }
        });

    frame.render_widget(canvas, area);
}
