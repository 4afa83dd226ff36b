//! Form that converts a picked zone, date and hour to California time.

use leptos::prelude::*;
use zones::{CONVERTER_ZONES, HOUR_OPTIONS};

use crate::state::converter::{ConverterPhase, ConverterState};

#[component]
pub fn ManualConverter() -> impl IntoView {
    let state = RwSignal::new(ConverterState::default());

    let on_convert = move |_| {
        let mut next = state.get_untracked();
        if next.trigger() {
            state.set(next);
        }
    };

    view! {
        <div class="converter">
            <div class="converter__field">
                <label class="converter__label">"Select Time Zone"</label>
                <select
                    class="converter__input"
                    prop:value=move || state.get().selection.zone_id
                    on:change=move |ev| {
                        let zone_id = event_target_value(&ev);
                        state.update(|s| s.selection.zone_id = zone_id);
                    }
                >
                    {CONVERTER_ZONES
                        .iter()
                        .map(|zone| view! { <option value=zone.iana_id>{zone.display_name}</option> })
                        .collect_view()}
                </select>
            </div>

            <div class="converter__row">
                <div class="converter__field">
                    <label class="converter__label">"Select Date"</label>
                    <input
                        class="converter__input"
                        type="date"
                        prop:value=move || state.get().selection.date
                        on:input=move |ev| {
                            let date = event_target_value(&ev);
                            state.update(|s| s.selection.date = date);
                        }
                    />
                </div>
                <div class="converter__field">
                    <label class="converter__label">"Select Hour"</label>
                    <select
                        class="converter__input"
                        prop:value=move || state.get().selection.hour
                        on:change=move |ev| {
                            let hour = event_target_value(&ev);
                            state.update(|s| s.selection.hour = hour);
                        }
                    >
                        <option value="">"Select hour"</option>
                        {HOUR_OPTIONS
                            .iter()
                            .map(|hour| view! { <option value=hour.value>{hour.label}</option> })
                            .collect_view()}
                    </select>
                </div>
            </div>

            <button class="converter__button" on:click=on_convert>
                "Convert to California Time"
            </button>

            <Show when=move || state.get().phase() == ConverterPhase::HasResult>
                <div class="converter__result">
                    <p class="converter__result-label">"California time is"</p>
                    <p class="converter__result-time">{move || state.get().result.unwrap_or_default()}</p>
                </div>
            </Show>
        </div>
    }
}
