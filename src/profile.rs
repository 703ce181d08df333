//! Presentation helpers for the signed-in user's profile card. Pure
//! functions over a `Principal`; nothing here touches session state.

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::auth::{Principal, Role};

/// Badge severity used by the profile and directory views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeVariant {
    Default,
    Secondary,
    Destructive,
    Outline,
}

pub fn badge_variant(role: Role) -> BadgeVariant {
    match role {
        Role::Admin => BadgeVariant::Destructive,
        Role::Sales => BadgeVariant::Default,
        Role::Cashier => BadgeVariant::Secondary,
    }
}

pub fn display_name(role: Role) -> &'static str {
    match role {
        Role::Admin => "ADMIN",
        Role::Sales => "SALES EMPLOYEE",
        Role::Cashier => "CASHIER",
    }
}

pub fn role_description(role: Role) -> &'static str {
    match role {
        Role::Admin => "Full system access and user management",
        Role::Sales => "Customer management and sales operations",
        Role::Cashier => "Transaction processing and view-only access",
    }
}

/// Everything the profile view renders, resolved up front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileCard {
    pub name: String,
    pub email: String,
    pub role_label: String,
    pub role_description: String,
    pub badge: BadgeVariant,
    pub login_date: String,
}

impl ProfileCard {
    pub fn for_principal(p: &Principal) -> Self {
        ProfileCard {
            name: p.name.clone(),
            email: p.email.clone(),
            role_label: display_name(p.role).to_string(),
            role_description: role_description(p.role).to_string(),
            badge: badge_variant(p.role),
            login_date: Local::now().date_naive().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_and_labels_per_role() {
        assert_eq!(badge_variant(Role::Admin), BadgeVariant::Destructive);
        assert_eq!(badge_variant(Role::Sales), BadgeVariant::Default);
        assert_eq!(badge_variant(Role::Cashier), BadgeVariant::Secondary);
        assert_eq!(display_name(Role::Sales), "SALES EMPLOYEE");
        assert_eq!(
            role_description(Role::Cashier),
            "Transaction processing and view-only access"
        );
    }

    #[test]
    fn card_resolves_from_principal() {
        let p = Principal {
            id: "1".into(),
            email: "admin@escaoptical.com".into(),
            name: "System Administrator".into(),
            role: Role::Admin,
        };
        let card = ProfileCard::for_principal(&p);
        assert_eq!(card.role_label, "ADMIN");
        assert_eq!(card.badge, BadgeVariant::Destructive);
        assert_eq!(card.email, "admin@escaoptical.com");
        assert!(!card.login_date.is_empty());
    }
}
