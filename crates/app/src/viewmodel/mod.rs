//! View models for Fitlink screens
//!
//! Each screen owns its local edit-buffer state here and merges into the
//! session store only on explicit save/submit. No algorithmic work beyond
//! filter/map over store-held collections.

pub mod auth;
pub mod booking;
pub mod directory;
pub mod messages;
pub mod payment;
pub mod plans;
pub mod profile;

pub use auth::{LoginForm, RegisterForm};
pub use booking::BookingForm;
pub use directory::{DirectoryBrowser, PendingCheckout};
pub use messages::ConversationView;
pub use payment::PaymentForm;
pub use plans::{PlanCatalog, PlanEditor};
pub use profile::{ClientProfileForm, CoachProfileForm};
