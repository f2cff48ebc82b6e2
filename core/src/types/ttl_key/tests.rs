use super::*;
use std::time::{Duration, SystemTime};

fn make_id(s: &str) -> PasteId {
    PasteId::try_from(s).unwrap()
}

#[test]
fn ttl_key_normal_usage() {
    let deadline = SystemTime::UNIX_EPOCH + Duration::new(1_767_225_600, 123_000_000);
    let ttl_key = TtlKey {
        deadline,
        id: make_id("abcdefABCDEF"),
    };

    let bytes = <TtlKey as redb::Value>::as_bytes(&ttl_key);
    assert_eq!(bytes.len(), <TtlKey as redb::Value>::fixed_width().unwrap());

    let decoded = <TtlKey as redb::Value>::from_bytes(&bytes);
    assert_eq!(ttl_key, decoded);
}

#[test]
fn ttl_key_orders_by_deadline_first() {
    let now = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000);
    let later = now + Duration::from_millis(1);

    let early_z = TtlKey {
        deadline: now,
        id: make_id("zzzzzzzzzzzz"),
    };
    let late_a = TtlKey {
        deadline: later,
        id: make_id("aaaaaaaaaaaa"),
    };

    let early_bytes = <TtlKey as redb::Value>::as_bytes(&early_z);
    let late_bytes = <TtlKey as redb::Value>::as_bytes(&late_a);
    assert_eq!(
        <TtlKey as redb::Key>::compare(&early_bytes, &late_bytes),
        Ordering::Less
    );
}

#[test]
fn ttl_key_same_deadline_orders_by_id() {
    let deadline = SystemTime::UNIX_EPOCH + Duration::from_secs(42);

    let a = TtlKey {
        deadline,
        id: make_id("aaaaaaaaaaaa"),
    };
    let b = TtlKey {
        deadline,
        id: make_id("bbbbbbbbbbbb"),
    };

    let a_bytes = <TtlKey as redb::Value>::as_bytes(&a);
    let b_bytes = <TtlKey as redb::Value>::as_bytes(&b);
    assert_eq!(<TtlKey as redb::Key>::compare(&a_bytes, &b_bytes), Ordering::Less);
    assert_eq!(<TtlKey as redb::Key>::compare(&b_bytes, &a_bytes), Ordering::Greater);
    assert_eq!(<TtlKey as redb::Key>::compare(&a_bytes, &a_bytes), Ordering::Equal);
}
