//! User profile: account details, order history and saved addresses

use crate::catalog::format_price;
use crate::validation::{has_min_chars, is_email};
use chrono::NaiveDate;
use rust_i18n::t;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;
use tracing::info;

/// Editable account field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileField {
    Name,
    Email,
}

impl ProfileField {
    pub const ALL: [ProfileField; 2] = [ProfileField::Name, ProfileField::Email];

    pub fn label(&self) -> Cow<'static, str> {
        match self {
            ProfileField::Name => t!("profile_field_name"),
            ProfileField::Email => t!("profile_field_email"),
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileField::Name => f.write_str("name"),
            ProfileField::Email => f.write_str("email"),
        }
    }
}

/// Rejected account field
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ProfileError {
    pub field: ProfileField,
    pub message: String,
}

/// Name and email of the account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDetails {
    pub name: String,
    pub email: String,
}

impl Default for ProfileDetails {
    fn default() -> Self {
        Self {
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
        }
    }
}

impl ProfileDetails {
    /// Check both fields, collecting every failure
    pub fn validate(&self) -> Vec<ProfileError> {
        let mut errors = Vec::new();
        if !has_min_chars(&self.name, 2) {
            errors.push(ProfileError {
                field: ProfileField::Name,
                message: t!("error_profile_name").to_string(),
            });
        }
        if !is_email(&self.email) {
            errors.push(ProfileError {
                field: ProfileField::Email,
                message: t!("error_profile_email").to_string(),
            });
        }
        errors
    }
}

/// Badge style for an order status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Default,
    Secondary,
    Destructive,
}

/// State of a past order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Delivered,
    Processing,
    Cancelled,
}

impl OrderStatus {
    pub fn badge(&self) -> BadgeVariant {
        match self {
            OrderStatus::Delivered => BadgeVariant::Default,
            OrderStatus::Processing => BadgeVariant::Secondary,
            OrderStatus::Cancelled => BadgeVariant::Destructive,
        }
    }

    pub fn label(&self) -> Cow<'static, str> {
        match self {
            OrderStatus::Delivered => t!("status_delivered"),
            OrderStatus::Processing => t!("status_processing"),
            OrderStatus::Cancelled => t!("status_cancelled"),
        }
    }
}

/// A past order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: String,
    pub date: NaiveDate,
    pub total_cents: u32,
    pub status: OrderStatus,
}

impl OrderRecord {
    pub fn display_total(&self) -> String {
        format_price(self.total_cents)
    }
}

/// A stored delivery address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedAddress {
    /// Kind of address, e.g. "Home"
    pub label: String,
    pub address: String,
}

/// Everything shown on the profile screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub details: ProfileDetails,
    #[serde(default)]
    pub order_history: Vec<OrderRecord>,
    #[serde(default)]
    pub addresses: Vec<SavedAddress>,
}

impl Profile {
    /// Replace the account details if both fields pass validation
    pub fn update_details(&mut self, details: ProfileDetails) -> Result<(), Vec<ProfileError>> {
        let errors = details.validate();
        if !errors.is_empty() {
            return Err(errors);
        }

        info!(name = %details.name, email = %details.email, "Profile updated");
        self.details = details;
        Ok(())
    }
}

fn record(id: &str, (y, m, d): (i32, u32, u32), total_cents: u32, status: OrderStatus) -> Option<OrderRecord> {
    Some(OrderRecord {
        id: id.to_string(),
        date: NaiveDate::from_ymd_opt(y, m, d)?,
        total_cents,
        status,
    })
}

impl Default for Profile {
    fn default() -> Self {
        let order_history = [
            record("ORD001", (2023, 10, 26), 4250, OrderStatus::Delivered),
            record("ORD002", (2023, 10, 28), 2999, OrderStatus::Delivered),
            record("ORD003", (2023, 11, 5), 7500, OrderStatus::Processing),
            record("ORD004", (2023, 11, 1), 1520, OrderStatus::Cancelled),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self {
            details: ProfileDetails::default(),
            order_history,
            addresses: vec![
                SavedAddress {
                    label: "Home".to_string(),
                    address: "123 Cosmic Lane, Galaxy City, 12345".to_string(),
                },
                SavedAddress {
                    label: "Work".to_string(),
                    address: "456 Starship Ave, Nebula Town, 67890".to_string(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let profile = Profile::default();
        assert_eq!(profile.order_history.len(), 4);
        assert_eq!(profile.order_history[2].display_total(), "$75.00");
        assert_eq!(profile.addresses[1].label, "Work");
        assert!(profile.details.validate().is_empty());
    }

    #[test]
    fn test_badge_mapping() {
        assert_eq!(OrderStatus::Delivered.badge(), BadgeVariant::Default);
        assert_eq!(OrderStatus::Processing.badge(), BadgeVariant::Secondary);
        assert_eq!(OrderStatus::Cancelled.badge(), BadgeVariant::Destructive);
    }

    #[test]
    fn test_update_rejects_invalid_details() {
        let mut profile = Profile::default();
        let errors = profile
            .update_details(ProfileDetails {
                name: "J".to_string(),
                email: "not-an-email".to_string(),
            })
            .unwrap_err();

        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![ProfileField::Name, ProfileField::Email]);
        assert_eq!(profile.details, ProfileDetails::default());
    }

    #[test]
    fn test_update_accepts_valid_details() {
        let mut profile = Profile::default();
        let details = ProfileDetails {
            name: "Ada".to_string(),
            email: "ada@example.org".to_string(),
        };
        profile.update_details(details.clone()).unwrap();
        assert_eq!(profile.details, details);
    }
}
