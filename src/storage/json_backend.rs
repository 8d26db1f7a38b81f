use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::ledger::{Ledger, Month};

use super::{Result, StorageBackend};

const DEFAULT_DIR_NAME: &str = ".budgetapp";
const SNAPSHOT_FILE: &str = "budget.json";
const CONFIG_FILE: &str = "config.json";
const REPORTS_DIR: &str = "reports";
const TMP_SUFFIX: &str = "tmp";

/// Filesystem backend. Keeps one snapshot file plus a reports directory
/// under the application data root, and stages every snapshot write to a
/// temporary sibling before renaming it over the target so a crash mid-write
/// cannot truncate the previous snapshot.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    root: PathBuf,
    snapshot_file: PathBuf,
    reports_dir: PathBuf,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(app_data_dir);
        ensure_dir(&root)?;
        let snapshot_file = root.join(SNAPSHOT_FILE);
        let reports_dir = root.join(REPORTS_DIR);
        Ok(Self {
            root,
            snapshot_file,
            reports_dir,
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    pub fn snapshot_path(&self) -> &Path {
        &self.snapshot_file
    }

    /// Path of the optional budget constants override file.
    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }
}

impl StorageBackend for JsonStorage {
    fn save(&self, ledger: &Ledger) -> Result<()> {
        let json = encode_snapshot(ledger)?;
        let tmp = tmp_path(&self.snapshot_file);
        write_all(&tmp, &json)?;
        fs::rename(&tmp, &self.snapshot_file)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<Ledger>> {
        if !self.snapshot_file.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.snapshot_file)?;
        Ok(Some(decode_snapshot(&data)?))
    }

    fn report_file(&self, month: Month) -> Result<PathBuf> {
        ensure_dir(&self.reports_dir)?;
        let path = self.reports_dir.join(format!("{}-report.txt", month));
        File::create(&path)?;
        Ok(path)
    }
}

/// Serializes the full ledger state into the snapshot blob.
pub fn encode_snapshot(ledger: &Ledger) -> Result<String> {
    Ok(serde_json::to_string_pretty(ledger)?)
}

/// Decodes a snapshot blob; a structurally invalid blob is an error, left to
/// the caller's recovery policy.
pub fn decode_snapshot(data: &str) -> Result<Ledger> {
    Ok(serde_json::from_str(data)?)
}

/// Returns the application data directory, honoring a `BUDGETAPP_HOME`
/// override and defaulting to `~/.budgetapp`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("BUDGETAPP_HOME") {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_all(path: &Path, data: &str) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
