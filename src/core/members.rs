//! Member statistics for the admin dashboard.

use crate::entities::{Role, user};

/// Headline numbers shown to the admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberStats {
    /// Users with the member role
    pub total_members: usize,
    /// Rounded mean age over members with a known age
    pub average_age: Option<i32>,
}

/// Users with the member role, in the order given.
#[must_use]
pub fn members(users: &[user::Model]) -> Vec<&user::Model> {
    users.iter().filter(|u| u.role == Role::Member).collect()
}

/// Counts members and averages the ages that are known.
#[must_use]
pub fn member_stats(users: &[user::Model]) -> MemberStats {
    let members = members(users);
    let ages: Vec<i64> = members.iter().filter_map(|u| u.age).map(i64::from).collect();

    let average_age = if ages.is_empty() {
        None
    } else {
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
        // Ages are small integers; the rounded mean always fits
        let mean = (ages.iter().sum::<i64>() as f64 / ages.len() as f64).round() as i32;
        Some(mean)
    };

    MemberStats {
        total_members: members.len(),
        average_age,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_user_model;

    #[test]
    fn test_member_stats_excludes_admin() {
        let mut admin = sample_user_model("Admin User", "admin@gmail.com", Role::Admin);
        admin.age = Some(35);
        let mut priya = sample_user_model("Priya Sharma", "priya@gmail.com", Role::Member);
        priya.age = Some(23);
        let mut rahul = sample_user_model("Rahul Patel", "rahul@gmail.com", Role::Member);
        rahul.age = Some(25);
        let mut anita = sample_user_model("Anita Devi", "anita@gmail.com", Role::Member);
        anita.age = Some(22);

        let users = vec![admin, priya, rahul, anita];
        let stats = member_stats(&users);

        assert_eq!(stats.total_members, 3);
        // (23 + 25 + 22) / 3 = 23.33
        assert_eq!(stats.average_age, Some(23));
        assert_eq!(members(&users)[0].name, "Priya Sharma");
    }

    #[test]
    fn test_member_stats_skips_unknown_ages() {
        let mut priya = sample_user_model("Priya Sharma", "priya@gmail.com", Role::Member);
        priya.age = Some(24);
        let mut rahul = sample_user_model("Rahul Patel", "rahul@gmail.com", Role::Member);
        rahul.age = None;

        let stats = member_stats(&[priya, rahul]);
        assert_eq!(stats.total_members, 2);
        assert_eq!(stats.average_age, Some(24));
    }

    #[test]
    fn test_member_stats_empty() {
        let stats = member_stats(&[]);
        assert_eq!(stats.total_members, 0);
        assert_eq!(stats.average_age, None);
    }
}
