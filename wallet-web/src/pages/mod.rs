//! Page modules

pub mod home;
pub mod license;
pub mod register;
pub mod verify;

pub use home::HomePage;
pub use license::LicensePage;
pub use register::RegisterPage;
pub use verify::VerifyPage;
