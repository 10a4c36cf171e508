use leptos::*;

use crate::components::{ErrorList, LineChart, ParamForm, RunSummaryPanel, SiteHeader};
use crate::config::CHARTS;
use crate::hooks::use_simulation;

#[component]
pub fn App() -> impl IntoView {
    let sim = use_simulation();

    let plot = Signal::derive(move || sim.plot.get());
    let summary = Signal::derive(move || sim.summary.get());
    let errors = Signal::derive(move || sim.errors.get());

    view! {
        <main class="page">
            <SiteHeader />
            <section class="inputs">
                <ParamForm sim=sim />
                <ErrorList errors=errors />
            </section>
            <Show when=move || sim.plot.with(Option::is_some)>
                <section class="results">
                    <div class="charts">
                        {CHARTS
                            .iter()
                            .map(|&spec| view! { <LineChart spec=spec plot=plot /> })
                            .collect_view()}
                    </div>
                    <RunSummaryPanel summary=summary />
                </section>
            </Show>
        </main>
    }
}
