use leptos::*;

use crate::rendering::RunSummary;

fn stat(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="stat">
            <dt>{label}</dt>
            <dd>{value}</dd>
        </div>
    }
}

/// Headline figures of the last run, shown under the charts.
#[component]
pub fn RunSummaryPanel(summary: Signal<Option<RunSummary>>) -> impl IntoView {
    move || {
        summary.get().map(|s| {
            let scavenger = s.has_scavenger.then(|| {
                let exhausted = match s.scavenger_exhausted_day {
                    Some(day) => format!("day {day:.2}"),
                    None => "not within the test".to_string(),
                };
                view! {
                    {stat("Scavenger capacity", format!("{:.3} ppm", s.scavenger_capacity_ppm))}
                    {stat(
                        "Remaining capacity",
                        format!("{:.3} ppm", s.remaining_scavenger_capacity_ppm),
                    )}
                    {stat("Scavenger exhausted", exhausted)}
                }
            });

            view! {
                <dl class="run-summary">
                    {stat("Final O₂", format!("{:.2} %", s.final_o2_pct))}
                    {stat("Final CO₂", format!("{:.2} %", s.final_co2_pct))}
                    {stat("Final C₂H₄", format!("{:.3} ppm", s.final_ethylene_ppm))}
                    {stat("Peak C₂H₄", format!("{:.3} ppm", s.peak_ethylene_ppm))}
                    {scavenger}
                </dl>
            }
        })
    }
}
