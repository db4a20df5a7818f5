//! Unit tests for the storage change bus.

use linkstack::services::change_bus::{ChangeBus, StorageChange};
use serde_json::json;

fn change(key: &str, value: serde_json::Value) -> StorageChange {
    StorageChange {
        key: key.to_string(),
        new_value: Some(value),
    }
}

#[test]
fn test_publish_without_subscribers_is_not_an_error() {
    let bus = ChangeBus::new();
    assert_eq!(bus.publish(change("bookmarks:linkstack", json!({}))), 0);
}

#[test]
fn test_subscriber_receives_changes_for_its_key() {
    let bus = ChangeBus::new();
    let mut sub = bus.subscribe("bookmarks:linkstack");
    assert_eq!(sub.key(), "bookmarks:linkstack");

    bus.publish(change("bookmarks:linkstack", json!({"url": "https://a.example"})));

    let changes = sub.drain();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].new_value, Some(json!({"url": "https://a.example"})));
    assert!(sub.drain().is_empty(), "drain consumes pending changes");
}

#[test]
fn test_other_keys_are_filtered_out() {
    let bus = ChangeBus::new();
    let mut linkstack = bus.subscribe("bookmarks:linkstack");
    let mut thinkstack = bus.subscribe("bookmarks:thinkstack");

    bus.publish(change("bookmarks:thinkstack", json!(1)));
    bus.publish(change("bookmarks:thinkstack", json!(2)));

    assert!(linkstack.drain().is_empty());
    assert_eq!(thinkstack.drain().len(), 2);
}

#[test]
fn test_changes_before_subscribe_are_not_seen() {
    let bus = ChangeBus::new();
    bus.publish(change("k", json!(1)));
    let mut sub = bus.subscribe("k");
    assert!(sub.drain().is_empty());
}

#[test]
fn test_cloned_bus_shares_channel() {
    let bus = ChangeBus::new();
    let publisher = bus.clone();
    let mut sub = bus.subscribe("k");

    assert_eq!(publisher.publish(change("k", json!("x"))), 1);
    assert_eq!(sub.drain().len(), 1);
}

#[test]
fn test_lagged_subscriber_still_gets_refresh_marker() {
    let bus = ChangeBus::new();
    let mut sub = bus.subscribe("k");
    for i in 0..200 {
        bus.publish(change("k", json!(i)));
    }

    let changes = sub.drain();
    assert!(!changes.is_empty());
    assert!(changes.iter().any(|c| c.new_value.is_none()));
    assert!(changes.iter().all(|c| c.key == "k"));
}

#[tokio::test]
async fn test_next_waits_for_matching_key() {
    let bus = ChangeBus::new();
    let mut sub = bus.subscribe("bookmarks:linkstack");

    let publisher = bus.clone();
    tokio::spawn(async move {
        publisher.publish(change("bookmarks:thinkstack", json!("skip")));
        publisher.publish(change("bookmarks:linkstack", json!("take")));
    });

    let received = sub.next().await.unwrap();
    assert_eq!(received.new_value, Some(json!("take")));
}

#[tokio::test]
async fn test_next_returns_none_when_bus_dropped() {
    let bus = ChangeBus::new();
    let mut sub = bus.subscribe("k");
    drop(bus);
    assert!(sub.next().await.is_none());
}
