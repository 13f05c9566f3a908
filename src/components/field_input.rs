//! Labeled form input with inline per-field error display.

#[cfg(test)]
#[path = "field_input_test.rs"]
mod field_input_test;

use leptos::prelude::*;

/// CSS class for an input group, flagging the error state.
fn group_class(has_error: bool) -> &'static str {
    if has_error {
        "input-group input-error"
    } else {
        "input-group"
    }
}

/// A required form field whose title row shows the active error inline.
#[component]
pub fn FieldInput(
    /// Visible field title (e.g. `"Email Address"`).
    label: &'static str,
    /// HTML input type (`"email"`, `"password"`).
    input_type: &'static str,
    /// HTML input name.
    name: &'static str,
    /// Current field value.
    value: RwSignal<String>,
    /// Active error message for this field, if any.
    #[prop(into)]
    error: Signal<Option<String>>,
    /// Invoked on every edit, after the value signal updates.
    on_edit: Callback<()>,
) -> impl IntoView {
    view! {
        <div class=move || group_class(error.get().is_some())>
            <div class="input-title">
                {label}
                <Show when=move || error.get().is_some()>
                    <span>" - " {move || error.get().unwrap_or_default()}</span>
                </Show>
            </div>
            <input
                type=input_type
                name=name
                required=true
                prop:value=move || value.get()
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                    on_edit.run(());
                }
            />
        </div>
    }
}
