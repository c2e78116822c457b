//! Tests for report settings defaults.

use super::ReportSettings;

#[test]
fn test_unconfigured_defaults() {
    let settings = ReportSettings::default();

    assert_eq!(settings.days, 1);
    assert!(settings.sales);
    assert!(settings.shipments);
    assert!(settings.productions);
    assert!(settings.inventories);
}

#[test]
fn test_settings_json_round_trip() {
    let settings = ReportSettings {
        days: 7,
        sales: false,
        ..ReportSettings::default()
    };

    let json = serde_json::to_string(&settings).unwrap();
    let back: ReportSettings = serde_json::from_str(&json).unwrap();

    assert_eq!(back, settings);
}
