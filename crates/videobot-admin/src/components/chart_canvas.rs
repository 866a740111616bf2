//! Canvas hosting one Chart.js widget

use leptos::*;

use crate::charts::{self, Chart, ChartSlot};
use crate::state::use_admin_state;

/// Redraws whenever the panel renders a new chart into `chart`.
#[component]
pub fn ChartCanvas(chart: ChartSlot) -> impl IntoView {
    let panel = use_admin_state().panel;
    let canvas_ref = create_node_ref::<html::Canvas>();
    let widget = store_value::<Option<Chart>>(None);

    let generation = create_memo(move |_| panel.with(|p| p.charts.generation(chart)));

    create_effect(move |_| {
        let generation = generation.get();
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let Some(spec) = panel.with_untracked(|p| p.charts.spec(chart).cloned()) else {
            return;
        };
        tracing::debug!(chart = chart.name(), generation, "drawing chart");
        let previous = widget.try_update_value(Option::take).flatten();
        let next = charts::redraw(&canvas, previous, &spec);
        widget.set_value(next);
    });

    on_cleanup(move || charts::release(widget.try_update_value(Option::take).flatten()));

    view! {
        <div class="chart-container">
            <canvas id=chart.canvas_id() node_ref=canvas_ref></canvas>
        </div>
    }
}
