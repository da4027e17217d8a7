//! Landing page

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::RegistrationSection;

const FEATURES: &[(&str, &str)] = &[
    (
        "Blockchain Registration",
        "Record proof of ownership for text, images and files with an immutable timestamp.",
    ),
    (
        "Ownership Verification",
        "Check whether content has already been registered and who owns it.",
    ),
    (
        "Plagiarism Detection",
        "Similarity scoring flags content that closely matches registered work.",
    ),
    (
        "Content Licensing",
        "Publish usage terms for your content and manage who may use it.",
    ),
];

const STEPS: &[(&str, &str)] = &[
    (
        "Upload Your Content",
        "Upload your text, images, or files to our secure platform for registration or verification.",
    ),
    (
        "Register Ownership",
        "We store your content on IPFS and record ownership details on the Ethereum blockchain.",
    ),
    (
        "Detect Plagiarism",
        "Our AI algorithms compare your content with others to detect unauthorized use.",
    ),
    (
        "License Content",
        "Create and manage licenses for your content with blockchain-enforced terms.",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main>
            <Hero/>
            <Features/>
            <HowItWorks/>
            <RegistrationSection/>
        </main>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <h1>"Protect Your Content on the Blockchain"</h1>
            <p>
                "Register, verify and license your creative work with tamper-proof ownership records."
            </p>
            <div class="hero-actions">
                <A href="/register"><span class="btn">"Register Content"</span></A>
                <A href="/verify"><span class="btn btn-outline">"Verify Ownership"</span></A>
            </div>
        </section>
    }
}

#[component]
fn Features() -> impl IntoView {
    view! {
        <section class="section">
            <div class="section-header">
                <h2>"Features"</h2>
            </div>
            <div class="feature-grid">
                {FEATURES
                    .iter()
                    .map(|(title, description)| {
                        view! {
                            <div class="card feature">
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn HowItWorks() -> impl IntoView {
    view! {
        <section class="section how-it-works">
            <div class="section-header">
                <h2>"How It Works"</h2>
                <p>
                    "Our platform makes it easy to protect and manage your content ownership in just a few simple steps."
                </p>
            </div>
            <ol class="steps">
                {STEPS
                    .iter()
                    .enumerate()
                    .map(|(index, (title, description))| {
                        view! {
                            <li class="step">
                                <span class="step-number">{index + 1}</span>
                                <div>
                                    <h3>{*title}</h3>
                                    <p>{*description}</p>
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}
