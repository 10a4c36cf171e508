use leptos::*;

/// Validation messages from the last run, one per line.
#[component]
pub fn ErrorList(errors: Signal<Vec<String>>) -> impl IntoView {
    view! {
        <Show when=move || errors.with(|e| !e.is_empty())>
            <ul class="errors" role="alert">
                {move || {
                    errors
                        .get()
                        .into_iter()
                        .map(|msg| view! { <li>{format!("⚠︎ {msg}")}</li> })
                        .collect_view()
                }}
            </ul>
        </Show>
    }
}
