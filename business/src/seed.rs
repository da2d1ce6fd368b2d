//! Seed roster for the default mock store.

use chrono::{DateTime, Utc};
use ustr::Ustr;

use crate::user::{User, UserStatus};

fn ts(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .expect("seed timestamps are valid RFC 3339")
        .with_timezone(&Utc)
}

fn user(
    id: u32,
    name: &str,
    role: &str,
    department: &str,
    status: UserStatus,
    last_login: &str,
    created_at: &str,
) -> User {
    let email = format!("{}@userdeck.io", name.to_lowercase().replace(' ', "."));
    User {
        id: Ustr::from(&id.to_string()),
        name: name.to_owned(),
        email,
        role: role.to_owned(),
        department: department.to_owned(),
        status,
        last_login: ts(last_login),
        created_at: ts(created_at),
        phone: None,
        avatar: None,
    }
}

/// The 25 accounts the dashboard starts with.
pub fn roster() -> Vec<User> {
    use UserStatus::{Active, Disabled};

    let mut users = vec![
        user(1, "Ava Chen", "Engineering Manager", "Engineering", Active, "2025-08-20T08:41:00Z", "2022-03-14T10:00:00Z"),
        user(2, "Liam Okafor", "Senior Engineer", "Engineering", Active, "2025-08-21T16:05:00Z", "2022-06-01T09:30:00Z"),
        user(3, "Mia Lindqvist", "Engineer", "Engineering", Disabled, "2024-11-02T12:12:00Z", "2023-01-09T14:20:00Z"),
        user(4, "Noah Petrov", "Engineer", "Engineering", Active, "2025-08-22T07:55:00Z", "2023-02-27T11:45:00Z"),
        user(5, "Emma Rossi", "QA Engineer", "Engineering", Active, "2025-08-19T18:30:00Z", "2023-04-03T08:15:00Z"),
        user(6, "Oliver Tanaka", "Site Reliability Engineer", "Engineering", Disabled, "2025-01-15T22:10:00Z", "2022-09-19T13:00:00Z"),
        user(7, "Sophia Marchetti", "Product Manager", "Product", Active, "2025-08-21T10:22:00Z", "2022-05-11T09:00:00Z"),
        user(8, "Ethan Kowalski", "Product Analyst", "Product", Active, "2025-08-18T14:48:00Z", "2023-07-24T10:30:00Z"),
        user(9, "Isabella Novak", "UX Designer", "Design", Disabled, "2024-09-30T09:05:00Z", "2022-11-08T15:10:00Z"),
        user(10, "Lucas Fernandez", "UI Designer", "Design", Active, "2025-08-22T11:15:00Z", "2023-03-16T12:40:00Z"),
        user(11, "Amelia Haddad", "Design Lead", "Design", Active, "2025-08-20T15:33:00Z", "2021-12-01T09:20:00Z"),
        user(12, "Mason Eriksen", "Sales Executive", "Sales", Active, "2025-08-21T09:02:00Z", "2023-05-29T08:50:00Z"),
        user(13, "Harper Nguyen", "Sales Executive", "Sales", Disabled, "2025-03-11T17:44:00Z", "2023-08-07T10:05:00Z"),
        user(14, "Elijah Brandt", "Account Manager", "Sales", Active, "2025-08-19T13:27:00Z", "2022-08-15T14:30:00Z"),
        user(15, "Evelyn Castillo", "Marketing Manager", "Marketing", Active, "2025-08-22T08:08:00Z", "2022-04-25T11:00:00Z"),
        user(16, "Logan Dubois", "Content Strategist", "Marketing", Active, "2025-08-17T19:52:00Z", "2023-09-12T09:40:00Z"),
        user(17, "Abigail Sato", "SEO Specialist", "Marketing", Disabled, "2024-12-20T10:31:00Z", "2023-10-02T13:25:00Z"),
        user(18, "Jackson Meyer", "Finance Manager", "Finance", Active, "2025-08-21T12:19:00Z", "2021-10-18T10:10:00Z"),
        user(19, "Ella Virtanen", "Accountant", "Finance", Active, "2025-08-20T16:58:00Z", "2023-06-05T08:35:00Z"),
        user(20, "Aiden Morales", "Payroll Specialist", "Finance", Disabled, "2025-02-03T11:47:00Z", "2022-12-13T14:55:00Z"),
        user(21, "Scarlett Byrne", "HR Manager", "Human Resources", Active, "2025-08-22T09:36:00Z", "2022-01-31T09:15:00Z"),
        user(22, "Grayson Alvarez", "Recruiter", "Human Resources", Active, "2025-08-18T15:14:00Z", "2023-11-20T10:45:00Z"),
        user(23, "Chloe Andersen", "Support Lead", "Support", Active, "2025-08-21T20:03:00Z", "2022-07-06T12:00:00Z"),
        user(24, "Carter Osei", "Support Agent", "Support", Disabled, "2025-04-28T08:26:00Z", "2024-01-17T09:55:00Z"),
        user(25, "Lily Vasquez", "Support Agent", "Support", Active, "2025-08-22T06:49:00Z", "2024-02-26T11:30:00Z"),
    ];

    // A few records carry the optional contact fields.
    users[0].phone = Some("+1 (415) 555-0134".to_owned());
    users[0].avatar = Some("avatars/ava-chen.png".to_owned());
    users[6].phone = Some("+1 (206) 555-0189".to_owned());
    users[11].phone = Some("+44 20 7946 0921".to_owned());
    users[17].phone = Some("+1 (312) 555-0172".to_owned());
    users[20].avatar = Some("avatars/scarlett-byrne.png".to_owned());

    users
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_has_twenty_five_users_with_unique_ids() {
        let users = roster();
        assert_eq!(users.len(), 25);

        let mut ids: Vec<_> = users.iter().map(|u| u.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 25);
    }

    #[test]
    fn roster_status_split() {
        let users = roster();
        let active = users
            .iter()
            .filter(|u| u.status == UserStatus::Active)
            .count();

        assert_eq!(active, 18);
        assert_eq!(users.len() - active, 7);
    }
}
