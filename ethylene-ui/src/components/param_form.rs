//! Input form for the seven package parameters.

use ethylene_core::{Field, LIMITS};
use leptos::*;

use crate::hooks::SimulationHandle;

/// Placeholder hint for a field, showing its accepted range.
fn hint(field: Field) -> String {
    match field {
        Field::FruitMass => format!("≤ {}", LIMITS.max_fruit_mass_kg),
        Field::StorageTemperature => format!("≤ {}", LIMITS.max_storage_temperature_c),
        Field::PerforationDiameter => format!("0 – {}", LIMITS.max_perforation_diameter_um),
        Field::PerforationCount => format!("0 – {}", LIMITS.max_perforations),
        Field::ScavengerMass => format!("0 – {}", LIMITS.max_scavenger_mass_g),
        Field::PackageVolume => format!("headspace ≥ {} mL", LIMITS.min_headspace_ml),
        Field::TestDays => format!("≤ {}", LIMITS.max_test_days),
    }
}

#[component]
fn FieldInput(field: Field, sim: SimulationHandle) -> impl IntoView {
    let id = format!("field-{}", field.key());
    let label = if field.unit().is_empty() {
        field.label().to_string()
    } else {
        format!("{} ({})", field.label(), field.unit())
    };

    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            <input
                id=id
                name=field.key()
                type="text"
                inputmode="decimal"
                autocomplete="off"
                placeholder=hint(field)
                prop:value=move || sim.inputs.with(|inputs| inputs.get(field).to_string())
                on:input=move |ev| sim.set_field(field, event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn ParamForm(sim: SimulationHandle) -> impl IntoView {
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        sim.run();
    };

    view! {
        <form class="param-form" on:submit=on_submit>
            <div class="fields">
                {Field::ALL
                    .into_iter()
                    .map(|field| view! { <FieldInput field=field sim=sim /> })
                    .collect_view()}
            </div>
            <div class="actions">
                <button
                    type="submit"
                    class="btn btn-primary"
                    prop:disabled=move || sim.is_running.get()
                >
                    {move || if sim.is_running.get() { "Running…" } else { "Run simulation" }}
                </button>
                <button
                    type="button"
                    class="btn btn-secondary"
                    on:click=move |_| sim.reset()
                >
                    "Reset"
                </button>
            </div>
        </form>
    }
}
