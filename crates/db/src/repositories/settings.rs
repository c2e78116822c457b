//! Settings repository for the report configuration singleton.

use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};

use daybrief_core::settings::ReportSettings;

use crate::entities::report_settings;

/// Fixed row ID of the settings singleton.
const SETTINGS_ROW_ID: i32 = 1;

/// Repository for the report settings singleton row.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    db: DatabaseConnection,
}

impl SettingsRepository {
    /// Creates a new settings repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads the current settings.
    ///
    /// A never-configured installation has no row; defaults are returned
    /// in that case rather than an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn load(&self) -> Result<ReportSettings, DbErr> {
        let row = report_settings::Entity::find_by_id(SETTINGS_ROW_ID)
            .one(&self.db)
            .await?;

        Ok(row.map_or_else(ReportSettings::default, settings_from_model))
    }

    /// Saves the settings, creating the singleton row on first save.
    ///
    /// # Errors
    ///
    /// Returns an error if the database write fails.
    pub async fn save(&self, settings: &ReportSettings) -> Result<(), DbErr> {
        let now = chrono::Utc::now().into();
        let existing = report_settings::Entity::find_by_id(SETTINGS_ROW_ID)
            .one(&self.db)
            .await?;

        let model = report_settings::ActiveModel {
            id: Set(SETTINGS_ROW_ID),
            days: Set(settings.days),
            sales: Set(settings.sales),
            shipments: Set(settings.shipments),
            productions: Set(settings.productions),
            inventories: Set(settings.inventories),
            updated_at: Set(now),
        };

        if existing.is_some() {
            model.update(&self.db).await?;
        } else {
            model.insert(&self.db).await?;
        }

        Ok(())
    }
}

fn settings_from_model(model: report_settings::Model) -> ReportSettings {
    ReportSettings {
        days: model.days,
        sales: model.sales,
        shipments: model.shipments,
        productions: model.productions,
        inventories: model.inventories,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn test_settings_from_model() {
        let model = report_settings::Model {
            id: SETTINGS_ROW_ID,
            days: 5,
            sales: true,
            shipments: false,
            productions: true,
            inventories: false,
            updated_at: Utc::now().into(),
        };

        let settings = settings_from_model(model);

        assert_eq!(settings.days, 5);
        assert!(settings.sales);
        assert!(!settings.shipments);
        assert!(settings.productions);
        assert!(!settings.inventories);
    }
}
