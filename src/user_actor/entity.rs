use chrono::Utc;

use crate::actor_framework::Entity;
use crate::domain::{User, UserCreate, UserRole};

impl Entity for User {
    type Id = String;
    type CreatePayload = UserCreate;
    /// Updates replace the whole record, mirroring how the forms submit edits.
    type Patch = User;
    /// Role the caller expects the deleted user to have, if any.
    type DeleteGuard = Option<UserRole>;

    fn id(&self) -> &String {
        &self.id
    }

    /// Creates a new User from creation parameters.
    ///
    /// The join date is the current UTC calendar day.
    fn from_create(id: String, params: UserCreate) -> Result<Self, String> {
        let user = Self {
            id,
            name: params.name,
            role: params.role,
            city: params.city,
            specialization: params.specialization,
            package_id: params.package_id,
            sessions_left: params.sessions_left,
            join_date: Utc::now().date_naive(),
        };
        validate(&user)?;
        Ok(user)
    }

    /// Replaces every field except the identity. The role is fixed at creation.
    fn on_update(&mut self, patch: User) -> Result<(), String> {
        check_role(self, patch.role)?;
        let replacement = User {
            id: self.id.clone(),
            ..patch
        };
        validate(&replacement)?;
        *self = replacement;
        Ok(())
    }

    fn on_delete(&self, expected: &Option<UserRole>) -> Result<(), String> {
        match expected {
            Some(role) => check_role(self, *role),
            None => Ok(()),
        }
    }
}

fn check_role(user: &User, expected: UserRole) -> Result<(), String> {
    if user.role != expected {
        return Err(format!("{} has role {:?}, expected {:?}", user.id, user.role, expected));
    }
    Ok(())
}

fn validate(user: &User) -> Result<(), String> {
    if user.name.trim().is_empty() {
        return Err("name must not be empty".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_from_create_stamps_join_date() {
        let user = User::from_create(
            "t1".into(),
            UserCreate {
                role: UserRole::Trainer,
                name: "Sara".into(),
                city: Some("Dammam".into()),
                specialization: Some("Platten".into()),
                package_id: None,
                sessions_left: None,
            },
        )
        .unwrap();

        assert_eq!(user.id, "t1");
        assert_eq!(user.join_date, Utc::now().date_naive());
        assert!(user.is_trainer());
    }

    #[test]
    fn test_update_keeps_identity() {
        let mut user = User::client("c1", "Ali", "Riyadh", Some("p1".into()), Some(2), date());
        let mut patch = user.clone();
        patch.id = "other".into();
        patch.sessions_left = Some(0);

        user.on_update(patch).unwrap();
        assert_eq!(user.id, "c1");
        assert_eq!(user.sessions_left, Some(0));
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let mut user = User::trainer("t1", "Ahmed", "Riyadh", "Fitness", date());
        let mut patch = user.clone();
        patch.name = "   ".into();

        assert!(user.on_update(patch).is_err());
        assert_eq!(user.name, "Ahmed");
    }

    #[test]
    fn test_update_cannot_change_role() {
        let mut user = User::client("c3", "Omar", "Jeddah", Some("p1".into()), Some(2), date());
        let mut patch = user.clone();
        patch.role = UserRole::Trainer;

        let err = user.on_update(patch).unwrap_err();
        assert!(err.contains("expected Trainer"));
        assert_eq!(user.role, UserRole::Client);
    }

    #[test]
    fn test_delete_checks_expected_role() {
        let client = User::client("c3", "Omar", "Jeddah", Some("p1".into()), Some(2), date());

        assert!(client.on_delete(&Some(UserRole::Trainer)).is_err());
        assert!(client.on_delete(&Some(UserRole::Client)).is_ok());
        assert!(client.on_delete(&None).is_ok());
    }
}
