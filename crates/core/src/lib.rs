//! Fitlink Core Library
//!
//! Models, session store, route guard, and external-service interfaces for
//! the Fitlink coaching marketplace.

pub mod config;
pub mod directory;
pub mod error;
pub mod fixtures;
pub mod invariants;
pub mod models;
pub mod routing;
pub mod services;
pub mod session;

pub use config::AppConfig;
pub use directory::{CoachDirectory, CoachListing};
pub use error::{Error, Result};
pub use models::*;
pub use routing::{resolve, Access, Route, RouteDecision};
pub use services::{
    with_timeout, IdentityProvider, MockIdentityProvider, MockPaymentProcessor, PaymentCard,
    PaymentProcessor, PaymentReceipt,
};
pub use session::SessionStore;
