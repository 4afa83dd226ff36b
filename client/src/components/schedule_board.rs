//! Weekly meeting time shown in California, locally, and in each listed zone.
//!
//! SYSTEM CONTEXT
//! ==============
//! Computes once after mount from the build-time reference instant. A failed
//! computation is logged and leaves the board blank.

#[cfg(test)]
#[path = "schedule_board_test.rs"]
mod schedule_board_test;

use leptos::prelude::*;
use zones::{ReferenceInstant, ZoneError, detect_local_zone};

use crate::state::schedule::{ScheduleState, load_schedule};

#[component]
pub fn ScheduleBoard() -> impl IntoView {
    let state = RwSignal::new(ScheduleState::default());

    // No tracked reads: runs once per mount.
    Effect::new(move || match compute_board() {
        Ok(board) => state.set(board),
        Err(e) => leptos::logging::error!("schedule board unavailable: {e}"),
    });

    view! {
        <div class="schedule">
            <div class="schedule__header">
                <div class="schedule__california">
                    <p class="schedule__california-label">"California time"</p>
                    <p class="schedule__california-time">{move || state.get().california_time}</p>
                </div>
                <div class="schedule__local">
                    <p class="schedule__local-label">
                        "Your local time"
                        {move || local_zone_suffix(&state.get().local_zone_id)}
                    </p>
                    <p class="schedule__local-time">{move || state.get().local_time}</p>
                </div>
            </div>
            <div class="schedule__grid">
                {move || {
                    state
                        .get()
                        .rows
                        .into_iter()
                        .map(|row| {
                            view! {
                                <div class="zone-card">
                                    <div class="zone-card__header">
                                        <span class="zone-card__dot"></span>
                                        <p class="zone-card__name">{row.label}</p>
                                    </div>
                                    <p class="zone-card__time">{row.formatted_time}</p>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

fn compute_board() -> Result<ScheduleState, ZoneError> {
    let reference = ReferenceInstant::from_build_env_or_default()?;
    let local = detect_local_zone();
    let board = load_schedule(&reference, &local)?;
    leptos::logging::log!("schedule board loaded for local zone {}", board.local_zone_id);
    Ok(board)
}

/// ` (America/New_York)` once a zone is known, empty before load.
fn local_zone_suffix(zone_id: &str) -> String {
    if zone_id.is_empty() { String::new() } else { format!(" ({zone_id})") }
}
