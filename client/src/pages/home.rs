//! Landing page: the weekly schedule board above the manual converter.

use leptos::prelude::*;

use crate::components::manual_converter::ManualConverter;
use crate::components::schedule_board::ScheduleBoard;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home">
            <h1 class="home__title">"Time Zone Converter"</h1>
            <div class="home__sections">
                <section class="home__section">
                    <h2 class="home__section-title">"This Week's Schedule"</h2>
                    <ScheduleBoard/>
                </section>
                <section class="home__section">
                    <h2 class="home__section-title">"Find California Time"</h2>
                    <ManualConverter/>
                </section>
            </div>
        </main>
    }
}
