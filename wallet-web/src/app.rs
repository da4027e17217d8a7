//! Content Guardian Web App - Leptos Frontend

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

use crate::components::{Navbar, Toaster};
use crate::pages::{HomePage, LicensePage, RegisterPage, VerifyPage};
use crate::state::toast::provide_toast_context;
use crate::state::wallet::provide_wallet_context;

#[component]
pub fn App() -> impl IntoView {
    let toasts = provide_toast_context();
    provide_wallet_context(toasts);

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/register") view=RegisterPage/>
                    <Route path=path!("/verify") view=VerifyPage/>
                    <Route path=path!("/license") view=LicensePage/>
                </Routes>
                <Footer/>
                <Toaster/>
            </div>
        </Router>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer>
            <span>"ContentGuardian"</span>
            <span class="footer-note">"Registration and verification results are simulated."</span>
        </footer>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <div class="card">
                <h1>"404 - Page Not Found"</h1>
                <p>"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="btn">"Go to Home"</span>
                </A>
            </div>
        </div>
    }
}
