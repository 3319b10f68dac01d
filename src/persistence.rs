// File: src/persistence.rs
use crate::core::lookup::{Index, Lookup, Strategy};
use crate::error::{Error, Result};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// Writes a built index to `path` atomically: the snapshot goes to a temp file
/// in the destination directory and is renamed into place.
pub fn save_snapshot(index: &Index, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        bincode::serialize_into(&mut writer, index).map_err(Error::Serialize)?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| Error::Io(e.error))?;
    info!(path = %path.display(), strategy = %index.strategy(), "snapshot saved");
    Ok(())
}

pub fn load_snapshot(path: &Path) -> Result<Index> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let index: Index = bincode::deserialize_from(reader).map_err(Error::Deserialize)?;
    info!(path = %path.display(), strategy = %index.strategy(), "snapshot loaded");
    Ok(index)
}

/// Like `load_snapshot`, but fails if the snapshot holds another strategy.
pub fn load_snapshot_as(path: &Path, expected: Strategy) -> Result<Index> {
    let index = load_snapshot(path)?;
    let found = index.strategy();
    if found != expected {
        return Err(Error::SnapshotStrategy { expected, found });
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: [&str; 5] = ["home", "gone", "good", "book", "cool"];

    #[test]
    fn snapshots_round_trip_every_strategy() {
        let dir = tempfile::tempdir().unwrap();
        for strategy in Strategy::ALL {
            let path = dir.path().join(format!("{strategy}.bin"));
            let index = Index::build(strategy, WORDS);
            save_snapshot(&index, &path).unwrap();

            let loaded = load_snapshot(&path).unwrap();
            assert_eq!(loaded.strategy(), strategy);
            assert_eq!(loaded.query("4663"), index.query("4663"));
            assert_eq!(loaded.query("2665"), index.query("2665"));
        }
    }

    #[test]
    fn creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("index.bin");
        save_snapshot(&Index::build(Strategy::Trie, WORDS), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn rejects_snapshot_of_other_strategy() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.bin");
        save_snapshot(&Index::build(Strategy::Hashed, WORDS), &path).unwrap();

        let err = load_snapshot_as(&path, Strategy::Trie).unwrap_err();
        assert!(matches!(
            err,
            Error::SnapshotStrategy { expected: Strategy::Trie, found: Strategy::Hashed }
        ));
        assert!(load_snapshot_as(&path, Strategy::Hashed).is_ok());
    }

    #[test]
    fn garbage_fails_to_deserialize() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.bin");
        fs::write(&path, [0xff; 3]).unwrap();
        assert!(matches!(load_snapshot(&path), Err(Error::Deserialize(_))));
    }
}
