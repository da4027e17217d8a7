//! Licensing overview (static)

use leptos::prelude::*;

const LICENSE_TYPES: &[(&str, &str)] = &[
    (
        "Personal Use",
        "Allow individuals to use your content for non-commercial purposes with attribution.",
    ),
    (
        "Commercial",
        "Grant businesses the right to use your content in products and marketing.",
    ),
    (
        "Exclusive",
        "Transfer sole usage rights to a single licensee for an agreed period.",
    ),
];

#[component]
pub fn LicensePage() -> impl IntoView {
    view! {
        <main>
            <div class="page-header">
                <h1>"License Your Content"</h1>
                <p>
                    "Create blockchain-enforced licenses for your content to manage usage rights and monetization."
                </p>
            </div>
            <section class="section">
                <div class="feature-grid">
                    {LICENSE_TYPES
                        .iter()
                        .map(|(name, terms)| {
                            view! {
                                <div class="card">
                                    <h3>{*name}</h3>
                                    <p>{*terms}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </main>
    }
}
