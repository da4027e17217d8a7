use leptos::prelude::*;

use crate::components::VerificationSection;

#[component]
pub fn VerifyPage() -> impl IntoView {
    view! {
        <main>
            <div class="page-header">
                <h1>"Verify Content Ownership"</h1>
                <p>
                    "Check if content has been registered and verify its ownership details on the blockchain."
                </p>
            </div>
            <VerificationSection/>
        </main>
    }
}
