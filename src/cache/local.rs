use std::path::{Path, PathBuf};
use tokio::fs;

use super::WeekKey;
use crate::menu::WeekMenu;

/// One JSON file per week inside a directory.
#[derive(Debug)]
pub struct FileStore(PathBuf);

impl FileStore {
    pub async fn open(p: impl AsRef<Path>) -> crate::Result<Self> {
        let p = p.as_ref();
        fs::create_dir_all(p).await?;
        Ok(Self(p.to_owned()))
    }

    pub fn path(&self, key: WeekKey) -> PathBuf {
        self.0.join(key.file_name())
    }

    pub async fn contains(&self, key: WeekKey) -> crate::Result<bool> {
        fs::try_exists(self.path(key)).await.map_err(From::from)
    }

    pub async fn load(&self, key: WeekKey) -> crate::Result<Option<WeekMenu>> {
        let path = self.path(key);
        if fs::try_exists(&path).await? {
            let data = fs::read(&path).await?;
            serde_json::from_slice(&data).map(Some).map_err(From::from)
        } else {
            Ok(None)
        }
    }

    /// Writes through a temporary file so a week's file is either complete or
    /// absent.
    pub async fn save(&self, key: WeekKey, value: &WeekMenu) -> crate::Result<()> {
        let data = serde_json::to_vec(value)?;
        let path = self.path(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, data).await?;
        fs::rename(&tmp, &path).await?;
        Ok(())
    }
}
