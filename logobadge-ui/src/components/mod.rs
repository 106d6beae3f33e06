//! Reusable UI components.

mod provider_logo;

pub use provider_logo::{ProviderLogo, badge_markup};
