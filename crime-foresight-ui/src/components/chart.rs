//! Chart Component
//!
//! Category-axis line charts drawn on an HTML5 canvas.

use crime_foresight::data::{CRIME_TREND, PREDICTIONS};
use leptos::*;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const MARGIN_LEFT: f64 = 50.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 40.0;

/// One line on a chart. `None` values leave a gap.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: &'static str,
    pub color: &'static str,
    pub values: Vec<Option<f64>>,
    pub dashed: bool,
}

impl Series {
    pub fn solid(name: &'static str, color: &'static str, values: Vec<Option<f64>>) -> Self {
        Self { name, color, values, dashed: false }
    }

    pub fn dashed(name: &'static str, color: &'static str, values: Vec<Option<f64>>) -> Self {
        Self { name, color, values, dashed: true }
    }
}

/// Line chart over a fixed set of x labels
#[component]
pub fn LineChart(labels: Vec<&'static str>, series: Vec<Series>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let legend: Vec<(&'static str, &'static str)> =
        series.iter().map(|s| (s.name, s.color)).collect();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &labels, &series);
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="800"
                height="320"
                class="w-full h-64 rounded-lg"
            />

            <div class="flex justify-center flex-wrap gap-4 mt-4">
                {legend
                    .into_iter()
                    .map(|(name, color)| view! {
                        <div class="flex items-center space-x-2">
                            <div
                                class="w-3 h-3 rounded-full"
                                style=format!("background-color: {}", color)
                            />
                            <span class="text-sm text-gray-300">{name}</span>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Monthly incidents by crime family
#[component]
pub fn TrendChart() -> impl IntoView {
    let labels: Vec<&str> = CRIME_TREND.iter().map(|p| p.month).collect();
    let series = vec![
        Series::solid("Violent", "#F44336", CRIME_TREND.iter().map(|p| Some(p.violent as f64)).collect()),
        Series::solid("Property", "#FF9800", CRIME_TREND.iter().map(|p| Some(p.property as f64)).collect()),
        Series::solid("Other", "#2196F3", CRIME_TREND.iter().map(|p| Some(p.other as f64)).collect()),
    ];

    view! { <LineChart labels=labels series=series /> }
}

/// Predicted totals against observed actuals
#[component]
pub fn PredictionChart() -> impl IntoView {
    let labels: Vec<&str> = PREDICTIONS.iter().map(|p| p.month).collect();
    let series = vec![
        Series::solid("Actual", "#4CAF50", PREDICTIONS.iter().map(|p| p.actual.map(f64::from)).collect()),
        Series::dashed("Predicted", "#9C27B0", PREDICTIONS.iter().map(|p| Some(p.predicted as f64)).collect()),
    ];

    view! { <LineChart labels=labels series=series /> }
}

/// Padded y range over every present value
fn y_bounds(series: &[Series]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for value in series.iter().flat_map(|s| s.values.iter().flatten()) {
        min = min.min(*value);
        max = max.max(*value);
    }

    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }

    let range = max - min;
    let padding = if range > 0.0 { range * 0.1 } else { 1.0 };
    (min - padding, max + padding)
}

/// X coordinate of the `index`th of `count` evenly spaced labels
fn x_position(index: usize, count: usize, left: f64, width: f64) -> f64 {
    if count <= 1 {
        return left + width / 2.0;
    }
    left + (index as f64 / (count - 1) as f64) * width
}

/// Y coordinate of `value`; canvas y grows downward
fn y_position(value: f64, bounds: (f64, f64), top: f64, height: f64) -> f64 {
    let (min, max) = bounds;
    top + ((max - value) / (max - min)) * height
}

fn draw_chart(canvas: &HtmlCanvasElement, labels: &[&str], series: &[Series]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    let bounds = y_bounds(series);
    let (min, max) = bounds;

    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);
    ctx.set_fill_style(&"#9ca3af".into()); // gray-400
    ctx.set_font("12px sans-serif");

    for i in 0..=4 {
        let y = MARGIN_TOP + (i as f64 / 4.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(width - MARGIN_RIGHT, y);
        ctx.stroke();

        let value = max - (i as f64 / 4.0) * (max - min);
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    for (i, label) in labels.iter().enumerate() {
        let x = x_position(i, labels.len(), MARGIN_LEFT, chart_width);
        let _ = ctx.fill_text(label, x - 10.0, height - 12.0);
    }

    for line in series {
        let dash = if line.dashed {
            js_sys::Array::of2(&JsValue::from_f64(6.0), &JsValue::from_f64(4.0))
        } else {
            js_sys::Array::new()
        };
        let _ = ctx.set_line_dash(&dash);

        ctx.set_stroke_style(&line.color.into());
        ctx.set_line_width(2.0);
        ctx.begin_path();

        let mut pen_down = false;
        for (i, value) in line.values.iter().enumerate() {
            let Some(value) = value else {
                pen_down = false;
                continue;
            };
            let x = x_position(i, line.values.len(), MARGIN_LEFT, chart_width);
            let y = y_position(*value, bounds, MARGIN_TOP, chart_height);
            if pen_down {
                ctx.line_to(x, y);
            } else {
                ctx.move_to(x, y);
                pen_down = true;
            }
        }
        ctx.stroke();

        let _ = ctx.set_line_dash(&js_sys::Array::new());
        ctx.set_fill_style(&line.color.into());
        for (i, value) in line.values.iter().enumerate() {
            if let Some(value) = value {
                let x = x_position(i, line.values.len(), MARGIN_LEFT, chart_width);
                let y = y_position(*value, bounds, MARGIN_TOP, chart_height);
                ctx.begin_path();
                let _ = ctx.arc(x, y, 3.0, 0.0, std::f64::consts::PI * 2.0);
                ctx.fill();
            }
        }
    }
}
