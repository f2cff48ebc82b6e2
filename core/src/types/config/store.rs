use std::path::PathBuf;

/// Location of a durable paste store.
#[derive(Clone, Debug)]
pub struct Config {
    pub base_path: PathBuf,
}

impl Config {
    pub fn db_path(&self) -> PathBuf {
        self.base_path.join("pastes.redb")
    }
}
