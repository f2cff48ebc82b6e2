use super::*;

#[test]
fn paste_id_normal_usage() {
    let id_str = "aZ09bY18cX27";
    let id = PasteId::try_from(id_str).unwrap();
    assert_eq!(id.as_str(), id_str);

    let bytes = <PasteId as redb::Value>::as_bytes(&id);
    let id_from_bytes = <PasteId as redb::Value>::from_bytes(bytes);
    assert_eq!(id, id_from_bytes);
}

#[test]
fn paste_id_rejects_wrong_length() {
    PasteId::try_from("abc").unwrap_err();
    PasteId::try_from("").unwrap_err();
    PasteId::try_from("a".repeat(PASTE_ID_LENGTH + 1).as_str()).unwrap_err();
}

#[test]
fn paste_id_rejects_non_alphanumeric() {
    PasteId::try_from("abcdef-12345").unwrap_err();
    PasteId::try_from("abcdef 12345").unwrap_err();
    PasteId::try_from("../etc/passw").unwrap_err();
    // Twelve bytes, none of them ASCII.
    PasteId::try_from("éééééé").unwrap_err();
}

#[test]
fn paste_id_ordering_matches_bytes() {
    const IDS: [&str; 3] = ["AAAAAAAAAAAA", "aaaaaaaaaaaa", "000000000000"];

    for l in IDS.iter() {
        for r in IDS.iter() {
            let id_l = PasteId::try_from(*l).unwrap();
            let id_r = PasteId::try_from(*r).unwrap();
            assert_eq!(
                <PasteId as redb::Key>::compare(l.as_bytes(), r.as_bytes()),
                id_l.cmp(&id_r),
                "Comparing '{}' and '{}'",
                l,
                r
            );
        }
    }
}
