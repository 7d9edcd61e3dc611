//! Goal service
//!
//! Goals are the only entity with a post-creation numeric update: the saved
//! amount is re-entered by the user, never derived from savings records.

use crate::error::{FinFlowError, FinFlowResult};
use crate::models::{Goal, GoalId, Money};
use crate::storage::Storage;

/// Service for goal management
pub struct GoalService<'a> {
    storage: &'a Storage,
}

impl<'a> GoalService<'a> {
    /// Create a new goal service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate and append a new goal
    pub fn add(&self, goal: Goal) -> FinFlowResult<Goal> {
        goal.validate()
            .map_err(|e| FinFlowError::Validation(e.to_string()))?;

        self.storage.goals.insert(goal.clone())?;
        self.storage.goals.save()?;

        Ok(goal)
    }

    /// All goals
    pub fn list_all(&self) -> FinFlowResult<Vec<Goal>> {
        self.storage.goals.all()
    }

    /// Update the saved amount on an existing goal
    pub fn set_saved(&self, id: GoalId, saved: Money) -> FinFlowResult<Goal> {
        let mut goal = self
            .storage
            .goals
            .get(id)?
            .ok_or_else(|| FinFlowError::goal_not_found(id.to_string()))?;

        goal.set_saved(saved);
        goal.validate()
            .map_err(|e| FinFlowError::Validation(e.to_string()))?;

        self.storage.goals.update(goal.clone())?;
        self.storage.goals.save()?;

        Ok(goal)
    }

    /// Delete a goal by ID
    pub fn delete(&self, id: GoalId) -> FinFlowResult<Goal> {
        match self.storage.goals.delete(id)? {
            Some(removed) => {
                self.storage.goals.save()?;
                Ok(removed)
            }
            None => Err(FinFlowError::goal_not_found(id.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FinFlowPaths;
    use crate::models::GoalCategory;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinFlowPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn target_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
    }

    #[test]
    fn test_add_goal() {
        let (_temp_dir, storage) = create_test_storage();
        let service = GoalService::new(&storage);

        let goal = service
            .add(
                Goal::new(
                    "Emergency Fund",
                    Money::from_units(15000),
                    target_date(),
                    GoalCategory::EmergencyFund,
                )
                .with_saved(Money::from_units(8500)),
            )
            .unwrap();

        assert_eq!(goal.saved.cents(), 850_000);
        assert_eq!(service.list_all().unwrap().len(), 1);
    }

    #[test]
    fn test_set_saved() {
        let (_temp_dir, storage) = create_test_storage();
        let service = GoalService::new(&storage);

        let goal = service
            .add(Goal::new(
                "Laptop",
                Money::from_units(2000),
                target_date(),
                GoalCategory::Other,
            ))
            .unwrap();

        let updated = service.set_saved(goal.id, Money::from_units(2000)).unwrap();
        assert!(updated.is_achieved());
    }

    #[test]
    fn test_set_saved_on_missing_goal() {
        let (_temp_dir, storage) = create_test_storage();
        let service = GoalService::new(&storage);

        let err = service
            .set_saved(GoalId::new(), Money::from_units(100))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_zero_target_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = GoalService::new(&storage);

        let result = service.add(Goal::new(
            "Bad",
            Money::zero(),
            target_date(),
            GoalCategory::Other,
        ));
        assert!(matches!(result, Err(FinFlowError::Validation(_))));
    }
}
