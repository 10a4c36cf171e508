use leptos::*;
use leptos_use::use_window_size;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, HtmlElement};

use crate::config::{ChartSpec, CHART_ASPECT};
use crate::rendering::{draw_chart, PlotData};

/// Smallest width a chart is drawn at, in CSS pixels.
const MIN_CHART_WIDTH: f64 = 240.0;

#[component]
pub fn LineChart(
    /// Which chart to draw
    spec: &'static ChartSpec,
    /// Decimated results of the last run
    plot: Signal<Option<Rc<PlotData>>>,
) -> impl IntoView {
    let container_ref = create_node_ref::<leptos::html::Figure>();
    let canvas_ref = create_node_ref::<leptos::html::Canvas>();

    // Redraws whenever the window resizes or new results arrive
    let window_size = use_window_size();

    create_effect(move |_| {
        let _ = window_size.width.get();
        let Some(plot) = plot.get() else {
            return;
        };
        let (Some(container), Some(canvas_el)) = (container_ref.get(), canvas_ref.get()) else {
            return;
        };

        // Wait a frame so the container has been laid out
        request_animation_frame(move || {
            let container = container.unchecked_ref::<HtmlElement>();
            let canvas = canvas_el.unchecked_ref::<HtmlCanvasElement>();

            let width = (container.client_width() as f64).max(MIN_CHART_WIDTH);
            let height = (width * CHART_ASPECT).round();

            let style = canvas.style();
            for (name, px) in [("width", width), ("height", height)] {
                if let Err(e) = style.set_property(name, &format!("{px}px")) {
                    log::warn!("Failed to set {} {}: {:?}", spec.id, name, e);
                }
            }

            if let Err(e) = draw_chart(canvas, spec, &plot, width, height) {
                log::warn!("Failed to draw {}: {:?}", spec.id, e);
            }
        });
    });

    view! {
        <figure class="chart" node_ref=container_ref>
            <canvas id=spec.id node_ref=canvas_ref class="block" />
        </figure>
    }
}
