//! Demo data seeder for Daybrief development and testing.
//!
//! Seeds a handful of sales, shipments, productions, and inventory counts
//! spread over the last few days so a local report run has something to
//! show.
//!
//! Usage: cargo run --bin seeder

use chrono::{Duration, Utc};
use rust_decimal_macros::dec;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set};
use uuid::Uuid;

use daybrief_db::entities::{
    inventories, productions, sales,
    sea_orm_active_enums::{ProductionState, SaleState, ShipmentState},
    shipments,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = daybrief_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    let existing = sales::Entity::find()
        .count(&db)
        .await
        .expect("Failed to check for existing data");
    if existing > 0 {
        println!("Database already seeded, nothing to do.");
        return;
    }

    println!("Seeding sales...");
    seed_sales(&db).await;

    println!("Seeding shipments...");
    seed_shipments(&db).await;

    println!("Seeding productions...");
    seed_productions(&db).await;

    println!("Seeding inventories...");
    seed_inventories(&db).await;

    println!("Seeding complete!");
}

/// Seeds sale orders across states and recency.
async fn seed_sales(db: &DatabaseConnection) {
    let now = Utc::now();
    let rows = [
        ("SO-1001", "Acme Corp", SaleState::Confirmed, dec!(1250.00), 0),
        ("SO-1002", "Globex", SaleState::Processing, dec!(430.50), 1),
        ("SO-1003", "Initech", SaleState::Done, dec!(99.99), 2),
        ("SO-1004", "Acme Corp", SaleState::Draft, dec!(780.00), 0),
        ("SO-0990", "Globex", SaleState::Done, dec!(5400.00), 12),
    ];

    for (reference, party, state, total, days_ago) in rows {
        let stamp = now - Duration::days(days_ago);
        sales::ActiveModel {
            id: Set(Uuid::new_v4()),
            reference: Set(reference.to_string()),
            party: Set(party.to_string()),
            state: Set(state),
            total: Set(total),
            sale_date: Set(stamp.date_naive()),
            create_date: Set(stamp.into()),
            write_date: Set(stamp.into()),
        }
        .insert(db)
        .await
        .expect("Failed to seed sale");
    }
}

/// Seeds outbound shipments, one completed today.
async fn seed_shipments(db: &DatabaseConnection) {
    let now = Utc::now();
    let rows = [
        ("OUT-501", "Acme Corp", ShipmentState::Done, Some(0i64), 0i64),
        ("OUT-502", "Globex", ShipmentState::Packed, None, 1),
        ("OUT-503", "Initech", ShipmentState::Waiting, None, 2),
        ("OUT-480", "Globex", ShipmentState::Done, Some(15), 15),
    ];

    for (reference, customer, state, effective_days_ago, modified_days_ago) in rows {
        let stamp = now - Duration::days(modified_days_ago);
        shipments::ActiveModel {
            id: Set(Uuid::new_v4()),
            reference: Set(reference.to_string()),
            customer: Set(customer.to_string()),
            state: Set(state),
            effective_date: Set(
                effective_days_ago.map(|d| (now - Duration::days(d)).date_naive())
            ),
            create_date: Set(stamp.into()),
            write_date: Set(stamp.into()),
        }
        .insert(db)
        .await
        .expect("Failed to seed shipment");
    }
}

/// Seeds production orders.
async fn seed_productions(db: &DatabaseConnection) {
    let now = Utc::now();
    let rows = [
        ("PROD-301", "Widget A", ProductionState::Running, dec!(200), 0),
        ("PROD-302", "Widget B", ProductionState::Done, dec!(50), 1),
        ("PROD-303", "Widget A", ProductionState::Request, dec!(75), 0),
    ];

    for (reference, product, state, quantity, days_ago) in rows {
        let stamp = now - Duration::days(days_ago);
        productions::ActiveModel {
            id: Set(Uuid::new_v4()),
            reference: Set(reference.to_string()),
            product: Set(product.to_string()),
            quantity: Set(quantity),
            state: Set(state),
            create_date: Set(stamp.into()),
            write_date: Set(stamp.into()),
        }
        .insert(db)
        .await
        .expect("Failed to seed production");
    }
}

/// Seeds inventory counts.
async fn seed_inventories(db: &DatabaseConnection) {
    let now = Utc::now();
    let rows = [("Main warehouse", 0i64), ("Overflow", 1), ("Main warehouse", 20)];

    for (location, days_ago) in rows {
        let stamp = now - Duration::days(days_ago);
        inventories::ActiveModel {
            id: Set(Uuid::new_v4()),
            location: Set(location.to_string()),
            date: Set(stamp.date_naive()),
            create_date: Set(stamp.into()),
            write_date: Set(stamp.into()),
        }
        .insert(db)
        .await
        .expect("Failed to seed inventory");
    }
}
