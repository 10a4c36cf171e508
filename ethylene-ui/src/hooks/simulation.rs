use ethylene_compute::simulate;
use ethylene_core::RawInputs;
use leptos::*;
use std::rc::Rc;

use super::persistence::{clear_inputs, load_inputs, save_inputs};
use crate::config::PLOT_MAX_POINTS;
use crate::rendering::{performance_now, yield_to_browser, PlotData, RunSummary};

/// Reactive state of the simulator page.
#[derive(Clone, Copy)]
pub struct SimulationHandle {
    /// Form contents as typed
    pub inputs: RwSignal<RawInputs>,
    /// User-facing messages from the last run
    pub errors: RwSignal<Vec<String>>,
    pub plot: RwSignal<Option<Rc<PlotData>>>,
    pub summary: RwSignal<Option<RunSummary>>,
    pub is_running: RwSignal<bool>,
}

/// Hook that owns the form and the results of the last run.
/// Inputs start from whatever was last submitted in this browser.
pub fn use_simulation() -> SimulationHandle {
    SimulationHandle {
        inputs: create_rw_signal(load_inputs().unwrap_or_default()),
        errors: create_rw_signal(Vec::new()),
        plot: create_rw_signal(None),
        summary: create_rw_signal(None),
        is_running: create_rw_signal(false),
    }
}

impl SimulationHandle {
    pub fn set_field(&self, field: ethylene_core::Field, value: String) {
        self.inputs.update(|inputs| inputs.set(field, value));
    }

    /// Parse the form and simulate.
    ///
    /// The run starts on the next animation frame so the busy state is
    /// painted before the (synchronous) integration blocks the thread.
    pub fn run(self) {
        if self.is_running.get_untracked() {
            return;
        }
        let raw = self.inputs.get_untracked();
        save_inputs(&raw);
        self.is_running.set(true);

        spawn_local(async move {
            yield_to_browser().await;

            let started = performance_now();
            match raw.parse().and_then(|params| simulate(&params)) {
                Ok(result) => {
                    log::info!(
                        "Simulated {} samples over {} days in {:.0} ms",
                        result.len(),
                        result.x_limit_days,
                        performance_now() - started
                    );
                    self.errors.set(Vec::new());
                    self.summary.set(Some(RunSummary::from_result(&result)));
                    self.plot
                        .set(Some(Rc::new(PlotData::from_result(&result, PLOT_MAX_POINTS))));
                }
                Err(errors) => {
                    log::info!("Inputs rejected: {}", errors);
                    self.errors.set(errors.messages());
                    self.summary.set(None);
                    self.plot.set(None);
                }
            }

            self.is_running.set(false);
        });
    }

    /// Clear the form, messages and charts.
    pub fn reset(self) {
        clear_inputs();
        self.inputs.set(RawInputs::default());
        self.errors.set(Vec::new());
        self.summary.set(None);
        self.plot.set(None);
    }
}
