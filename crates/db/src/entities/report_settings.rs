//! `SeaORM` Entity for the report settings singleton.
//!
//! Exactly one row (id = 1) exists once the settings have been saved; a
//! missing row means the installation was never configured and defaults
//! apply.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "report_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub days: i64,
    pub sales: bool,
    pub shipments: bool,
    pub productions: bool,
    pub inventories: bool,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
