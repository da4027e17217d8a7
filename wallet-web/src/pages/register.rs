use leptos::prelude::*;

use crate::components::RegistrationSection;

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <main>
            <RegistrationSection/>
        </main>
    }
}
