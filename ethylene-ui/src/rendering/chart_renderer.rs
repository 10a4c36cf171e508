//! Draws a line chart of simulation results onto a canvas.
//!
//! Mirrors a small matplotlib figure: tinted plot area, ticks on both
//! axes, axis labels and a legend in the upper right corner.

use std::f64::consts::FRAC_PI_2;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::axes::{format_tick, nice_ticks, ChartLayout};
use super::canvas_utils::{device_pixel_ratio, get_2d_context};
use super::plot_data::PlotData;
use crate::config::ChartSpec;

const AXIS_COLOR: &str = "#333333";
const GRID_COLOR: &str = "rgba(0, 0, 0, 0.08)";
const FONT: &str = "12px system-ui, sans-serif";
const TICK_LEN: f64 = 5.0;
const TARGET_TICKS: usize = 6;
const LEGEND_SWATCH: f64 = 22.0;
const LEGEND_ROW: f64 = 18.0;
const LEGEND_PAD: f64 = 8.0;

/// Render `plot` into `canvas`, sized to `css_width` × `css_height`.
pub fn draw_chart(
    canvas: &HtmlCanvasElement,
    spec: &ChartSpec,
    plot: &PlotData,
    css_width: f64,
    css_height: f64,
) -> Result<(), JsValue> {
    let ratio = device_pixel_ratio();
    canvas.set_width((css_width * ratio).round() as u32);
    canvas.set_height((css_height * ratio).round() as u32);

    let ctx = get_2d_context(canvas)?;
    ctx.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, css_width, css_height);
    ctx.set_font(FONT);

    let layout = ChartLayout::new(
        css_width,
        css_height,
        (0.0, plot.x_limit_days),
        spec.y_range,
    );
    let rect = layout.plot_rect();

    ctx.set_fill_style_str(spec.background);
    ctx.fill_rect(rect.left, rect.top, rect.width, rect.height);

    draw_axes(&ctx, &layout, spec)?;

    // Lines are clipped to the plot area; values above the fixed y range
    // run off the top of the chart.
    ctx.save();
    ctx.begin_path();
    ctx.rect(rect.left, rect.top, rect.width, rect.height);
    ctx.clip();
    for series in spec.series {
        draw_line(&ctx, &layout, plot.points(series.kind), series.color);
    }
    ctx.restore();

    draw_legend(&ctx, &layout, spec)
}

fn draw_axes(
    ctx: &CanvasRenderingContext2d,
    layout: &ChartLayout,
    spec: &ChartSpec,
) -> Result<(), JsValue> {
    let rect = layout.plot_rect();

    ctx.set_stroke_style_str(AXIS_COLOR);
    ctx.set_line_width(1.0);
    ctx.stroke_rect(rect.left, rect.top, rect.width, rect.height);

    ctx.set_fill_style_str(AXIS_COLOR);

    // X axis
    let (x_min, x_max) = layout.x_range;
    let x_ticks = nice_ticks(x_min, x_max, TARGET_TICKS);
    let x_step = tick_step(&x_ticks);
    ctx.set_text_align("center");
    ctx.set_text_baseline("top");
    for &tick in &x_ticks {
        let px = layout.x_to_px(tick);
        vertical_line(ctx, px, rect.bottom(), rect.bottom() + TICK_LEN, AXIS_COLOR);
        ctx.fill_text(
            &format_tick(tick, x_step),
            px,
            rect.bottom() + TICK_LEN + 2.0,
        )?;
    }
    ctx.fill_text(
        spec.x_label,
        rect.left + rect.width / 2.0,
        rect.bottom() + TICK_LEN + 20.0,
    )?;

    // Y axis
    let (y_min, y_max) = layout.y_range;
    let y_ticks = nice_ticks(y_min, y_max, TARGET_TICKS);
    let y_step = tick_step(&y_ticks);
    ctx.set_text_align("right");
    ctx.set_text_baseline("middle");
    for &tick in &y_ticks {
        let py = layout.y_to_px(tick);
        if tick > y_min && tick < y_max {
            horizontal_line(ctx, rect.left, rect.right(), py, GRID_COLOR);
        }
        horizontal_line(ctx, rect.left - TICK_LEN, rect.left, py, AXIS_COLOR);
        ctx.fill_text(&format_tick(tick, y_step), rect.left - TICK_LEN - 3.0, py)?;
    }

    ctx.save();
    ctx.translate(14.0, rect.top + rect.height / 2.0)?;
    ctx.rotate(-FRAC_PI_2)?;
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text(spec.y_label, 0.0, 0.0)?;
    ctx.restore();

    Ok(())
}

fn tick_step(ticks: &[f64]) -> f64 {
    match ticks {
        [a, b, ..] => b - a,
        _ => 1.0,
    }
}

fn vertical_line(ctx: &CanvasRenderingContext2d, x: f64, y0: f64, y1: f64, color: &str) {
    ctx.set_stroke_style_str(color);
    ctx.begin_path();
    ctx.move_to(x, y0);
    ctx.line_to(x, y1);
    ctx.stroke();
}

fn horizontal_line(ctx: &CanvasRenderingContext2d, x0: f64, x1: f64, y: f64, color: &str) {
    ctx.set_stroke_style_str(color);
    ctx.begin_path();
    ctx.move_to(x0, y);
    ctx.line_to(x1, y);
    ctx.stroke();
}

fn draw_line(
    ctx: &CanvasRenderingContext2d,
    layout: &ChartLayout,
    points: impl Iterator<Item = (f64, f64)>,
    color: &str,
) {
    ctx.set_stroke_style_str(color);
    ctx.set_line_width(1.5);
    ctx.begin_path();
    let mut started = false;
    for (x, y) in points {
        let (px, py) = (layout.x_to_px(x), layout.y_to_px(y));
        if started {
            ctx.line_to(px, py);
        } else {
            ctx.move_to(px, py);
            started = true;
        }
    }
    ctx.stroke();
}

fn draw_legend(
    ctx: &CanvasRenderingContext2d,
    layout: &ChartLayout,
    spec: &ChartSpec,
) -> Result<(), JsValue> {
    let rect = layout.plot_rect();

    let mut text_width: f64 = 0.0;
    for series in spec.series {
        text_width = text_width.max(ctx.measure_text(series.label)?.width());
    }
    let box_width = LEGEND_PAD * 3.0 + LEGEND_SWATCH + text_width;
    let box_height = LEGEND_PAD * 2.0 + LEGEND_ROW * spec.series.len() as f64;
    let left = rect.right() - box_width - LEGEND_PAD;
    let top = rect.top + LEGEND_PAD;

    ctx.set_fill_style_str("rgba(255, 255, 255, 0.85)");
    ctx.fill_rect(left, top, box_width, box_height);
    ctx.set_stroke_style_str("rgba(0, 0, 0, 0.2)");
    ctx.set_line_width(1.0);
    ctx.stroke_rect(left, top, box_width, box_height);

    ctx.set_text_align("left");
    ctx.set_text_baseline("middle");
    for (row, series) in spec.series.iter().enumerate() {
        let y = top + LEGEND_PAD + LEGEND_ROW * (row as f64 + 0.5);
        let swatch_left = left + LEGEND_PAD;

        ctx.set_line_width(1.5);
        horizontal_line(
            ctx,
            swatch_left,
            swatch_left + LEGEND_SWATCH,
            y,
            series.color,
        );

        ctx.set_fill_style_str(AXIS_COLOR);
        ctx.fill_text(series.label, swatch_left + LEGEND_SWATCH + LEGEND_PAD, y)?;
    }

    Ok(())
}
