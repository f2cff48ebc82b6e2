use crate::types::paste_id::PasteId;
use redb::TypeName;
use std::cmp::Ordering;
use std::time::{Duration, SystemTime};

/// Index entry ordering pastes by their TTL deadline, then by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TtlKey {
    /// The paste's `expires_at`.
    pub deadline: SystemTime,
    pub id: PasteId,
}

const DEADLINE_WIDTH: usize = 12;

fn split_deadline(data: &[u8]) -> (Duration, &[u8]) {
    let (secs, data) = data.split_first_chunk::<8>().expect("truncated ttl key");
    let (nanos, data) = data.split_first_chunk::<4>().expect("truncated ttl key");

    let since_epoch = Duration::new(u64::from_be_bytes(*secs), u32::from_be_bytes(*nanos));
    (since_epoch, data)
}

impl redb::Key for TtlKey {
    fn compare(data1: &[u8], data2: &[u8]) -> Ordering {
        let (deadline1, id1) = split_deadline(data1);
        let (deadline2, id2) = split_deadline(data2);

        deadline1
            .cmp(&deadline2)
            .then_with(|| <PasteId as redb::Key>::compare(id1, id2))
    }
}

impl redb::Value for TtlKey {
    type SelfType<'a> = TtlKey;
    type AsBytes<'a> = Vec<u8>;

    fn fixed_width() -> Option<usize> {
        Some(DEADLINE_WIDTH + crate::types::PASTE_ID_LENGTH)
    }

    fn from_bytes<'a>(data: &'a [u8]) -> Self::SelfType<'a>
    where
        Self: 'a,
    {
        let (since_epoch, data) = split_deadline(data);

        TtlKey {
            deadline: SystemTime::UNIX_EPOCH + since_epoch,
            id: <PasteId as redb::Value>::from_bytes(data),
        }
    }

    fn as_bytes<'a, 'b: 'a>(value: &'a Self::SelfType<'b>) -> Self::AsBytes<'a>
    where
        Self: 'b,
    {
        // Deadlines are always `created_at + ttl`, so they never precede the epoch.
        let since_epoch = value
            .deadline
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap_or_default();

        let mut bytes = Vec::with_capacity(DEADLINE_WIDTH + crate::types::PASTE_ID_LENGTH);
        bytes.extend_from_slice(&since_epoch.as_secs().to_be_bytes());
        bytes.extend_from_slice(&since_epoch.subsec_nanos().to_be_bytes());
        bytes.extend_from_slice(<PasteId as redb::Value>::as_bytes(&value.id));
        bytes
    }

    fn type_name() -> TypeName {
        TypeName::new("pastebin::TtlKey")
    }
}

#[cfg(test)]
mod tests;
