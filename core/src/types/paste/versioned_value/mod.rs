use redb::TypeName;
pub use v1 as latest_value;

pub mod v1;

pub trait ValueVariant {
    const VERSION: u8;
}

/// On-disk paste record: a version byte followed by the postcard-encoded body.
#[derive(Debug, Clone)]
pub enum VersionedPaste {
    V1(v1::PasteRecord),
}

impl VersionedPaste {
    pub fn into_latest(self) -> latest_value::PasteRecord {
        match self {
            VersionedPaste::V1(record) => record,
        }
    }
}

impl redb::Value for VersionedPaste {
    type SelfType<'a> = VersionedPaste;
    type AsBytes<'a> = Vec<u8>;

    fn fixed_width() -> Option<usize> {
        None
    }

    fn from_bytes<'a>(data: &'a [u8]) -> Self::SelfType<'a>
    where
        Self: 'a,
    {
        let (version, data) = data.split_first().expect("empty paste record");
        match *version {
            v1::PasteRecord::VERSION => {
                let record =
                    postcard::from_bytes::<v1::PasteRecord>(data).expect("invalid paste record");
                VersionedPaste::V1(record)
            }
            version => panic!("unsupported paste record version: {}", version),
        }
    }

    fn as_bytes<'a, 'b: 'a>(value: &'a Self::SelfType<'b>) -> Self::AsBytes<'a>
    where
        Self: 'b,
    {
        match value {
            VersionedPaste::V1(record) => {
                postcard::to_extend(record, vec![v1::PasteRecord::VERSION])
                    .expect("paste record serializes")
            }
        }
    }

    fn type_name() -> TypeName {
        TypeName::new("pastebin::Paste")
    }
}
