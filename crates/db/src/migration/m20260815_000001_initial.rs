//! Initial schema for the reported record tables and the settings row.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(INITIAL_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(
            "DROP TABLE IF EXISTS report_settings, inventories, productions, shipments, sales CASCADE;
             DROP TYPE IF EXISTS production_state, shipment_state, sale_state;",
        )
        .await?;
        Ok(())
    }
}

const INITIAL_SQL: &str = r"
-- Record state enums
CREATE TYPE sale_state AS ENUM (
    'draft', 'quotation', 'confirmed', 'processing', 'done', 'cancelled'
);
CREATE TYPE shipment_state AS ENUM (
    'draft', 'waiting', 'assigned', 'packed', 'done', 'cancelled'
);
CREATE TYPE production_state AS ENUM (
    'request', 'draft', 'waiting', 'assigned', 'running', 'done', 'cancelled'
);

-- Sale orders
CREATE TABLE sales (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    reference VARCHAR(64) NOT NULL,
    party VARCHAR(255) NOT NULL,
    state sale_state NOT NULL DEFAULT 'draft',
    total NUMERIC(20, 4) NOT NULL DEFAULT 0,
    sale_date DATE NOT NULL,
    create_date TIMESTAMPTZ NOT NULL DEFAULT now(),
    write_date TIMESTAMPTZ NOT NULL DEFAULT now()
);

-- Report scans sales by state and recency
CREATE INDEX idx_sales_state_write_date ON sales(state, write_date DESC);

-- Outbound shipments
CREATE TABLE shipments (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    reference VARCHAR(64) NOT NULL,
    customer VARCHAR(255) NOT NULL,
    state shipment_state NOT NULL DEFAULT 'draft',
    effective_date DATE,
    create_date TIMESTAMPTZ NOT NULL DEFAULT now(),
    write_date TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_shipments_state_write_date ON shipments(state, write_date DESC);

-- Count of completed shipments filters on effective date
CREATE INDEX idx_shipments_effective_date ON shipments(effective_date)
    WHERE state = 'done';

-- Production orders
CREATE TABLE productions (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    reference VARCHAR(64) NOT NULL,
    product VARCHAR(255) NOT NULL,
    quantity NUMERIC(20, 4) NOT NULL DEFAULT 0,
    state production_state NOT NULL DEFAULT 'draft',
    create_date TIMESTAMPTZ NOT NULL DEFAULT now(),
    write_date TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_productions_state_write_date ON productions(state, write_date DESC);

-- Inventory counts
CREATE TABLE inventories (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    location VARCHAR(255) NOT NULL,
    date DATE NOT NULL,
    create_date TIMESTAMPTZ NOT NULL DEFAULT now(),
    write_date TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_inventories_date ON inventories(date DESC);

-- Report settings singleton (row created on first save)
CREATE TABLE report_settings (
    id INTEGER PRIMARY KEY,
    days BIGINT NOT NULL DEFAULT 1,
    sales BOOLEAN NOT NULL DEFAULT TRUE,
    shipments BOOLEAN NOT NULL DEFAULT TRUE,
    productions BOOLEAN NOT NULL DEFAULT TRUE,
    inventories BOOLEAN NOT NULL DEFAULT TRUE,
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_settings_singleton CHECK (id = 1)
);
";
