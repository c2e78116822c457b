//! `SeaORM` entity definitions.

pub mod inventories;
pub mod productions;
pub mod report_settings;
pub mod sales;
pub mod sea_orm_active_enums;
pub mod shipments;
