use std::fs;

use anyhow::Result;
use oddswise::domain::{AlertDirection, PriceAlert};
use oddswise::store::{AlertStore, FileAlertStore};
use oddswise::testkit;
use rust_decimal_macros::dec;

#[test]
fn collection_round_trips_through_disk() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let store = FileAlertStore::new(dir.path().join("alerts.json"));

    let alerts = vec![
        testkit::barcelona_alert(AlertDirection::AtLeast),
        testkit::barcelona_alert(AlertDirection::AtMost),
    ];
    store.save(&alerts)?;

    let loaded = store.load()?.expect("saved collection");
    assert_eq!(loaded, alerts);
    Ok(())
}

#[test]
fn mutation_always_rewrites_the_whole_collection() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let store = FileAlertStore::new(dir.path().join("alerts.json"));

    let first = vec![testkit::barcelona_alert(AlertDirection::AtLeast)];
    store.save(&first)?;
    store.save(&[])?;

    assert_eq!(store.load()?, Some(vec![]));
    Ok(())
}

#[test]
fn reads_alert_json_in_the_dashboard_wire_layout() -> Result<()> {
    // camelCase field names and the ">="/"<=" operator encoding, as the
    // web dashboard stored them.
    let json = r#"[{
        "id": "3f2c8a54-9d1e-4b7a-8f05-6c2d1e9b7a31",
        "eventId": "event_1",
        "eventName": "FC Barcelona vs Real Madrid",
        "sport": "Soccer",
        "outcomeName": "FC Barcelona Win",
        "targetOdds": 2.2,
        "operator": ">="
    }]"#;

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("alerts.json");
    fs::write(&path, json)?;

    let store = FileAlertStore::new(&path);
    let alerts = store.load()?.expect("collection present");
    assert_eq!(alerts.len(), 1);

    let alert: &PriceAlert = &alerts[0];
    assert_eq!(alert.event_id.as_str(), "event_1");
    assert_eq!(alert.outcome, "FC Barcelona Win");
    assert_eq!(alert.target_odds, dec!(2.2));
    assert_eq!(alert.direction, AlertDirection::AtLeast);
    Ok(())
}
