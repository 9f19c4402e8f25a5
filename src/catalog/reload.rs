//! Dev-only polling reload of a JSON catalog file.

use super::memory::{parse_catalog, InMemoryCatalog};
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, SystemTime};
use tracing::{info, warn};

const POLL: Duration = Duration::from_secs(2);

/// Read `path` and swap it into `catalog`. Returns `true` when the new
/// snapshot is live; parse and lock failures leave the old one in place.
pub(crate) fn reload_from(catalog: &InMemoryCatalog, path: &Path) -> bool {
    let resources = match fs::read_to_string(path)
        .map_err(anyhow::Error::from)
        .and_then(|s| parse_catalog(&s))
    {
        Ok(r) => r,
        Err(e) => {
            warn!(error = %e, "catalog reload skipped");
            return false;
        }
    };
    let count = resources.len();
    match catalog.replace_all(resources) {
        Ok(()) => {
            info!(count, "catalog reloaded");
            true
        }
        Err(e) => {
            warn!(error = %e, "catalog reload not applied");
            false
        }
    }
}

/// Start a polling watcher on `path` that swaps `catalog`'s snapshot whenever
/// the file's mtime moves forward. A file that fails to parse is skipped and
/// the previous snapshot stays in place.
pub fn start_catalog_reload_thread(catalog: InMemoryCatalog, path: PathBuf) {
    info!(path = %path.display(), "catalog hot reload enabled");

    thread::spawn(move || {
        let mut last_mtime: Option<SystemTime> = None;

        loop {
            match fs::metadata(&path).and_then(|m| m.modified()) {
                Ok(mtime) => {
                    let changed = match last_mtime {
                        None => {
                            last_mtime = Some(mtime);
                            false
                        }
                        Some(prev) => mtime > prev,
                    };
                    if changed {
                        reload_from(&catalog, &path);
                        last_mtime = Some(mtime);
                    }
                }
                Err(_) => {
                    // File missing or unreadable; keep trying.
                }
            }
            thread::sleep(POLL);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE: &str = r#"[{"id":"a","category":"Finance","type":"book","title":"A"}]"#;

    #[test]
    fn reload_applies_valid_file_and_skips_broken_one() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("catalog.json");
        let catalog = InMemoryCatalog::new(Vec::new());

        fs::write(&p, ONE).unwrap();
        assert!(reload_from(&catalog, &p));
        assert_eq!(catalog.len(), 1);

        fs::write(&p, "{ not json").unwrap();
        assert!(!reload_from(&catalog, &p));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn reload_reports_poisoned_catalog_instead_of_panicking() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("catalog.json");
        fs::write(&p, ONE).unwrap();

        let catalog = InMemoryCatalog::new(Vec::new());
        catalog.poison();
        assert!(!reload_from(&catalog, &p));
        assert!(catalog.snapshot().is_err());
    }
}
