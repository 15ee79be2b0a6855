//! Interactive Chart Card
//!
//! Weekly multi-series chart on HTML5 Canvas with three independently
//! scaled axes, a customize dialog for the slot bindings, and a saved
//! defaults snapshot.

use leptos::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::components::dialog::Dialog;
use crate::state::chart::{self, AxisBindings, AxisSlot, Metric, SeriesPoint};

/// Interactive chart component
#[component]
pub fn ChartSection() -> impl IntoView {
    // Generated once on mount, immutable afterwards
    let series = store_value(chart::generate_series(chart::SERIES_LEN));

    let bindings = create_rw_signal(AxisBindings::default());
    let saved_defaults = create_rw_signal(AxisBindings::default());
    let customize_open = create_rw_signal(false);

    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever a slot binding changes
    create_effect(move |_| {
        let current = bindings.get();
        if let Some(canvas) = canvas_ref.get() {
            series.with_value(|s| draw_chart(&canvas, s, current));
        }
    });

    view! {
        <div class="bg-white rounded-xl border border-gray-200 shadow-sm p-5">
            <div class="flex items-center mb-4">
                <h2 class="text-lg font-bold text-gray-900 flex-1">"Interactive Chart"</h2>
                <button
                    on:click=move |_| customize_open.set(true)
                    class="px-3 py-1.5 rounded-lg border border-blue-600 text-blue-600 text-sm font-semibold hover:bg-blue-50 transition-colors"
                >
                    "⚙ Customizable"
                </button>
                <button
                    on:click=move |_| saved_defaults.set(bindings.get())
                    class="ml-2 px-3 py-1.5 rounded-lg bg-green-600 text-white text-sm font-semibold hover:bg-green-700 transition-colors"
                >
                    "Save as Default"
                </button>
            </div>

            <canvas
                node_ref=canvas_ref
                width="900"
                height="340"
                class="w-full rounded-lg"
            />

            // Legend for the three bound metrics
            <div class="flex justify-center flex-wrap gap-4 mt-3">
                {move || {
                    let current = bindings.get();
                    AxisSlot::ALL
                        .into_iter()
                        .map(|slot| {
                            let metric = current.get(slot);
                            view! {
                                <div class="flex items-center space-x-2">
                                    <div
                                        class="w-3 h-3 rounded-full"
                                        style=format!("background-color: {}", metric.color())
                                    />
                                    <span class="text-sm text-gray-700">
                                        {format!("{}{}", metric.label(), current.legend_suffix(metric))}
                                    </span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            // Axis customization dialog; selections apply immediately
            <Dialog
                title="Customize Chart Axes"
                open=customize_open
                on_close=Callback::new(move |_| customize_open.set(false))
            >
                <div class="space-y-4">
                    <AxisSelect axis_slot=AxisSlot::Left bindings=bindings />
                    <AxisSelect axis_slot=AxisSlot::Right1 bindings=bindings />
                    <AxisSelect axis_slot=AxisSlot::Right2 bindings=bindings />
                </div>
                <div class="flex justify-end mt-4">
                    <button
                        on:click=move |_| customize_open.set(false)
                        class="px-4 py-2 rounded-lg bg-blue-600 text-white text-sm font-semibold hover:bg-blue-700 transition-colors"
                    >
                        "Done"
                    </button>
                </div>
            </Dialog>
        </div>
    }
}

/// Metric selector for one axis slot
#[component]
fn AxisSelect(
    axis_slot: AxisSlot,
    bindings: RwSignal<AxisBindings>,
) -> impl IntoView {
    let slot = axis_slot;
    view! {
        <div>
            <label class="block text-xs text-gray-500 font-medium mb-1">{slot.label()}</label>
            <select
                on:change=move |ev| {
                    let key = event_target_value(&ev);
                    bindings.update(|b| {
                        b.set(slot, &key);
                    });
                }
                prop:value=move || bindings.get().get(slot).key()
                class="w-full bg-white rounded-lg px-3 py-2 text-sm text-gray-900
                       border border-gray-300 focus:border-blue-500 focus:outline-none"
            >
                {Metric::ALL.into_iter().map(|metric| view! {
                    <option value=metric.key()>{metric.label()}</option>
                }).collect_view()}
            </select>
        </div>
    }
}

/// Draw the chart on canvas: shared x axis, one independently scaled y
/// domain per slot.
fn draw_chart(canvas: &HtmlCanvasElement, series: &[SeriesPoint], bindings: AxisBindings) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins; the right side holds two label columns
    let margin_left = 55.0;
    let margin_right = 90.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style_str("#ffffff");
    ctx.fill_rect(0.0, 0.0, width, height);

    if series.is_empty() {
        return;
    }

    let domains: Vec<(AxisSlot, Metric, (f64, f64))> = AxisSlot::ALL
        .into_iter()
        .map(|slot| {
            let metric = bindings.get(slot);
            (slot, metric, chart::domain(series, metric))
        })
        .collect();

    // Horizontal grid lines with per-axis tick labels
    ctx.set_line_width(1.0);
    ctx.set_font("11px sans-serif");

    for i in 0..=5 {
        let frac = i as f64 / 5.0;
        let y = margin_top + frac * chart_height;

        ctx.set_stroke_style_str("#e5e7eb");
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        for (slot, metric, (low, high)) in &domains {
            let value = high - frac * (high - low);
            let label = format!("{:.1}", value);
            let x = match slot {
                AxisSlot::Left => 5.0,
                AxisSlot::Right1 => width - margin_right + 6.0,
                AxisSlot::Right2 => width - margin_right + 48.0,
            };

            ctx.set_fill_style_str(metric.color());
            let _ = ctx.fill_text(&label, x, y + 4.0);
        }
    }

    // One polyline per slot, scaled to that slot's domain
    let step = chart_width / (series.len() - 1).max(1) as f64;

    for (_, metric, (low, high)) in &domains {
        let span = (high - low).max(f64::EPSILON);

        ctx.set_stroke_style_str(metric.color());
        ctx.set_line_width(2.5);
        ctx.begin_path();

        for (i, point) in series.iter().enumerate() {
            let x = margin_left + i as f64 * step;
            let y = margin_top + ((high - point.value(*metric)) / span) * chart_height;

            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }

        ctx.stroke();
    }

    // Date labels along the x axis
    ctx.set_fill_style_str("#6b7280");
    ctx.set_font("11px sans-serif");

    let num_labels = 5;
    for i in 0..=num_labels {
        let index = i * (series.len() - 1) / num_labels;
        let x = margin_left + index as f64 * step;
        let _ = ctx.fill_text(&series[index].date, x - 25.0, height - 12.0);
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    use wasm_bindgen::JsCast;

    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}
