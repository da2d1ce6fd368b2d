//! Domain model for the user-management dashboard.
//!
//! The serde field names mirror the JSON shape a real backend would serve
//! (`lastLogin`, `createdAt`, `totalPages`), so swapping the mock API for an
//! HTTP client would not change any of these types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ustr::Ustr;

/// Account status. Only mutable field of a [`User`] in this system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Disabled,
}

impl UserStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Disabled => "disabled",
        }
    }

    /// The status a toggle action switches to.
    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Disabled,
            Self::Disabled => Self::Active,
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user account record.
///
/// Identifiers are `Ustr` because they are cloned and compared constantly
/// (row clicks, list patches, detail fetches).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Ustr,
    pub name: String,
    pub email: String,
    pub role: String,
    pub department: String,
    pub status: UserStatus,
    pub last_login: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    /// Initials shown in the avatar placeholder, e.g. "Ava Chen" -> "AC".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

/// Status restriction for the list query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Disabled,
}

impl StatusFilter {
    pub fn matches(self, status: UserStatus) -> bool {
        match self {
            Self::All => true,
            Self::Active => status == UserStatus::Active,
            Self::Disabled => status == UserStatus::Disabled,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Status",
            Self::Active => "Active Users",
            Self::Disabled => "Disabled Users",
        }
    }
}

/// Transient list query. Recreated on every filter change, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserFilters {
    pub search: String,
    pub status: StatusFilter,
}

impl UserFilters {
    /// True when `user` passes both the case-insensitive substring search
    /// (on name or email) and the status restriction.
    pub fn matches(&self, user: &User) -> bool {
        if !self.status.matches(user.status) {
            return false;
        }
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        user.name.to_lowercase().contains(&needle) || user.email.to_lowercase().contains(&needle)
    }
}

/// One page of results plus the bookkeeping the pagination strip needs.
///
/// Invariants: `data.len() <= limit`, `data` is exactly the slice
/// `[(page-1)*limit, page*limit)` of the filtered set in store order, and
/// `total_pages == ceil(total / limit)` (zero when `total` is zero).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub total: usize,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn sample_user() -> User {
        User {
            id: Ustr::from("7"),
            name: "Ava Chen".to_owned(),
            email: "ava.chen@example.com".to_owned(),
            role: "Engineer".to_owned(),
            department: "Engineering".to_owned(),
            status: UserStatus::Active,
            last_login: Utc.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap(),
            created_at: Utc.with_ymd_and_hms(2023, 1, 15, 12, 0, 0).unwrap(),
            phone: None,
            avatar: None,
        }
    }

    #[test]
    fn serializes_with_camel_case_field_names() {
        let json = serde_json::to_value(sample_user()).unwrap();

        assert_eq!(json["id"], "7");
        assert_eq!(json["status"], "active");
        assert!(json.get("lastLogin").is_some());
        assert!(json.get("createdAt").is_some());
        // Absent optionals are omitted, matching the original JSON shape.
        assert!(json.get("phone").is_none());
    }

    #[test]
    fn search_matches_name_and_email_case_insensitively() {
        let user = sample_user();

        let by_name = UserFilters {
            search: "AVA".to_owned(),
            status: StatusFilter::All,
        };
        let by_email = UserFilters {
            search: "chen@example".to_owned(),
            status: StatusFilter::All,
        };
        let miss = UserFilters {
            search: "zardoz".to_owned(),
            status: StatusFilter::All,
        };

        assert!(by_name.matches(&user));
        assert!(by_email.matches(&user));
        assert!(!miss.matches(&user));
    }

    #[test]
    fn status_filter_restricts_unless_all() {
        let user = sample_user();

        assert!(StatusFilter::All.matches(user.status));
        assert!(StatusFilter::Active.matches(user.status));
        assert!(!StatusFilter::Disabled.matches(user.status));
    }

    #[test]
    fn filters_require_both_search_and_status() {
        let user = sample_user();
        let filters = UserFilters {
            search: "ava".to_owned(),
            status: StatusFilter::Disabled,
        };

        assert!(!filters.matches(&user));
    }

    #[test]
    fn toggled_flips_status() {
        assert_eq!(UserStatus::Active.toggled(), UserStatus::Disabled);
        assert_eq!(UserStatus::Disabled.toggled(), UserStatus::Active);
    }

    #[test]
    fn initials_take_first_letter_of_each_word() {
        assert_eq!(sample_user().initials(), "AC");
    }
}
