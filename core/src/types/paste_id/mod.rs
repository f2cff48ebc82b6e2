use nutype::nutype;
use redb::TypeName;
use std::cmp::Ordering;
use std::str;

/// Number of characters in every issued paste id.
pub const PASTE_ID_LENGTH: usize = 12;

fn is_well_formed(s: &str) -> bool {
    s.len() == PASTE_ID_LENGTH && s.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Opaque paste identifier: exactly [`PASTE_ID_LENGTH`] ASCII letters and digits.
///
/// The id doubles as the capability to read a paste, so it is never derived from
/// the content or from a counter.
#[nutype(
    validate(predicate = is_well_formed),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Hash,
        Borrow,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct PasteId(String);

impl redb::Key for PasteId {
    fn compare(data1: &[u8], data2: &[u8]) -> Ordering {
        data1.cmp(data2)
    }
}

impl redb::Value for PasteId {
    type SelfType<'a> = Self;
    type AsBytes<'a> = &'a [u8];

    fn fixed_width() -> Option<usize> {
        Some(PASTE_ID_LENGTH)
    }

    fn from_bytes<'a>(data: &'a [u8]) -> Self::SelfType<'a>
    where
        Self: 'a,
    {
        let s = str::from_utf8(data).expect("invalid UTF-8 in paste id");
        Self::try_new(s).expect("malformed paste id in table")
    }

    fn as_bytes<'a, 'b: 'a>(value: &'a Self::SelfType<'b>) -> Self::AsBytes<'a>
    where
        Self: 'b,
    {
        value.as_bytes()
    }

    fn type_name() -> TypeName {
        TypeName::new("pastebin::PasteId")
    }
}

#[cfg(test)]
mod tests;
