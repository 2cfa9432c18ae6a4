use rbistro::{
    project, BookingError, BookingWizard, ConfigStore, ConfigUpdate, Configuration, PartySize,
    WizardStep, CONFIG_KEY,
};
use anyhow::Result;
use chrono::NaiveDate;
use std::collections::HashMap;

/// In-memory stand-in for eframe's persisted key-value store.
#[derive(Default)]
struct MemoryStorage {
    data: HashMap<String, String>,
}

impl eframe::Storage for MemoryStorage {
    fn get_string(&self, key: &str) -> Option<String> {
        self.data.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.data.insert(key.to_string(), value);
    }

    fn flush(&mut self) {}
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_default_booking_scenario() -> Result<()> {
    let storage = MemoryStorage::default();
    let store = ConfigStore::open(Some(&storage));
    assert_eq!(store.current().display_name, "The Golden Bistro");
    assert_eq!(store.current().accent_color, "#ec4913");

    let today = date(2025, 5, 20);
    let mut wizard = BookingWizard::new();
    wizard.set_party_size("2".parse()?);
    wizard.set_date_str("2025-06-01", today)?;
    wizard.set_time("19:00".parse()?);

    assert!(wizard.draft().is_step1_valid());
    assert_eq!(wizard.advance(), WizardStep::Contact);

    wizard.set_customer_name("Jane Doe");
    assert!(!wizard.can_confirm());
    assert!(wizard.clone().confirm().is_none());

    wizard.set_customer_phone("+15550000000");
    assert!(wizard.can_confirm());

    let reservation = wizard.confirm().expect("confirm should succeed");
    assert_eq!(reservation.party_size, PartySize::Two);
    assert_eq!(reservation.date, date(2025, 6, 1));
    assert_eq!(reservation.time.label(), "19:00");
    assert_eq!(reservation.customer_name, "Jane Doe");
    assert_eq!(reservation.customer_phone, "+15550000000");

    // The draft is gone once confirmed.
    assert_eq!(wizard, BookingWizard::new());
    Ok(())
}

#[test]
fn test_each_missing_field_blocks_advance() -> Result<()> {
    let today = date(2025, 5, 20);
    let setters: [fn(&mut BookingWizard, NaiveDate) -> Result<()>; 3] = [
        |w, _| {
            w.set_party_size(PartySize::One);
            Ok(())
        },
        |w, today| Ok(w.set_date(date(2025, 6, 1), today)?),
        |w, _| {
            w.set_time("21:30".parse()?);
            Ok(())
        },
    ];

    for skipped in 0..setters.len() {
        let mut wizard = BookingWizard::new();
        for (i, set) in setters.iter().enumerate() {
            if i != skipped {
                set(&mut wizard, today)?;
            }
        }
        assert!(!wizard.draft().is_step1_valid());
        assert_eq!(wizard.advance(), WizardStep::Details);
    }
    Ok(())
}

#[test]
fn test_date_boundary() {
    let today = date(2025, 5, 20);
    let mut wizard = BookingWizard::new();

    assert!(wizard.set_date(today, today).is_ok());
    for days_back in [1, 2, 30, 365] {
        let past = today - chrono::Duration::days(days_back);
        let err = wizard.set_date(past, today).unwrap_err();
        assert!(matches!(err, BookingError::DateInPast { .. }));
    }
    assert_eq!(wizard.draft().date, Some(today));
}

#[test]
fn test_branding_persists_across_sessions() {
    let mut storage = MemoryStorage::default();

    {
        let mut store = ConfigStore::open(Some(&storage));
        store.update(Some(&mut storage), ConfigUpdate::display_name("Osteria Blu"));
        store.update(Some(&mut storage), ConfigUpdate::accent_color("#3b82f6"));
    }

    let reopened = ConfigStore::open(Some(&storage));
    assert_eq!(
        reopened.current(),
        &Configuration {
            display_name: "Osteria Blu".to_string(),
            accent_color: "#3b82f6".to_string(),
        }
    );

    let projection = project(reopened.current());
    assert_eq!(projection.accent, "#3b82f6");
    assert_eq!(projection.accent_muted, "#3b82f633");
}

#[test]
fn test_corrupt_storage_falls_back_to_defaults() {
    let mut storage = MemoryStorage::default();
    storage
        .data
        .insert(CONFIG_KEY.to_string(), "{\"displayName\": ".to_string());

    let store = ConfigStore::open(Some(&storage));
    assert_eq!(store.current(), &Configuration::default());
}
