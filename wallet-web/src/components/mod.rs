//! UI Components

pub mod navbar;
pub mod registration;
pub mod toaster;
pub mod verification;

pub use navbar::Navbar;
pub use registration::RegistrationSection;
pub use toaster::Toaster;
pub use verification::VerificationSection;

pub(crate) fn tab_class(active: bool) -> &'static str {
    if active {
        "tab tab-active"
    } else {
        "tab"
    }
}
