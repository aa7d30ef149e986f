use crate::{Density, Icon};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub const DEFAULT_RES: &str = "app/src/main/res";

pub const ICON_NAMES: [&str; 2] = ["ic_launcher", "ic_launcher_round"];

/// Android `res` directory holding the `mipmap-<density>` buckets.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MipmapRes {
    res: PathBuf,
}

impl Default for MipmapRes {
    fn default() -> Self {
        Self::new(DEFAULT_RES)
    }
}

impl MipmapRes {
    pub fn new<P: AsRef<Path>>(res: P) -> Self {
        Self {
            res: res.as_ref().to_path_buf(),
        }
    }

    pub fn res(&self) -> &Path {
        &self.res
    }

    pub fn dir(&self, density: Density) -> PathBuf {
        self.res.join(density.dir_name())
    }

    pub fn icon_path(&self, density: Density, name: &str) -> PathBuf {
        self.dir(density).join(format!("{}.png", name))
    }

    /// Creates every `mipmap-<density>` directory. Existing directories are left alone.
    pub fn create_dirs(&self) -> Result<Vec<PathBuf>> {
        let mut dirs = Vec::with_capacity(Density::ALL.len());
        for density in Density::ALL {
            let dir = self.dir(density);
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
            tracing::debug!("created {}", dir.display());
            dirs.push(dir);
        }
        Ok(dirs)
    }

    /// Writes `icon` under every launcher name of every density, replacing existing files.
    /// Stops at the first failed write.
    pub fn write_icons(&self, icon: &Icon) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(Density::ALL.len() * ICON_NAMES.len());
        for density in Density::ALL {
            for name in ICON_NAMES {
                let path = self.icon_path(density, name);
                std::fs::write(&path, icon.bytes())
                    .with_context(|| format!("failed to write {}", path.display()))?;
                tracing::debug!(
                    "wrote {} ({} bytes, replace with {}x{} px)",
                    path.display(),
                    icon.bytes().len(),
                    density.icon_size(),
                    density.icon_size(),
                );
                written.push(path);
            }
        }
        tracing::info!(
            "wrote {} launcher icons to {}",
            written.len(),
            self.res.display()
        );
        Ok(written)
    }

    pub fn generate(&self) -> Result<Vec<PathBuf>> {
        self.create_dirs()?;
        let icon = Icon::placeholder()?;
        self.write_icons(&icon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::init_logger;
    use tempfile::TempDir;

    #[test]
    fn paths_follow_mipmap_layout() {
        let res = MipmapRes::new("res");
        assert_eq!(
            res.icon_path(Density::Xxhdpi, "ic_launcher_round"),
            Path::new("res/mipmap-xxhdpi/ic_launcher_round.png")
        );
        assert_eq!(MipmapRes::default().res(), Path::new(DEFAULT_RES));
    }

    #[test]
    fn create_dirs_builds_missing_parents() -> Result<()> {
        init_logger()?;
        let tmp = TempDir::new()?;
        let res = MipmapRes::new(tmp.path().join("app/src/main/res"));
        let dirs = res.create_dirs()?;
        assert_eq!(dirs.len(), 5);
        for density in Density::ALL {
            assert!(res.dir(density).is_dir());
        }
        // second call is a no-op
        assert_eq!(res.create_dirs()?, dirs);
        Ok(())
    }

    #[test]
    fn write_icons_overwrites_existing_files() -> Result<()> {
        init_logger()?;
        let tmp = TempDir::new()?;
        let res = MipmapRes::new(tmp.path());
        res.create_dirs()?;
        let stale = res.icon_path(Density::Hdpi, "ic_launcher");
        std::fs::write(&stale, b"a much longer file than the placeholder icon")?;

        let icon = Icon::placeholder()?;
        let written = res.write_icons(&icon)?;
        assert_eq!(written.len(), 10);
        assert_eq!(written[0], res.icon_path(Density::Mdpi, "ic_launcher"));
        assert_eq!(written[1], res.icon_path(Density::Mdpi, "ic_launcher_round"));
        assert_eq!(std::fs::read(&stale)?, icon.bytes());
        Ok(())
    }

    #[test]
    fn write_icons_without_dirs_fails() -> Result<()> {
        let tmp = TempDir::new()?;
        let res = MipmapRes::new(tmp.path());
        let err = res.write_icons(&Icon::placeholder()?).unwrap_err();
        assert!(err.to_string().contains("mipmap-mdpi"));
        Ok(())
    }

    #[test]
    fn failed_write_stops_remaining_writes() -> Result<()> {
        let tmp = TempDir::new()?;
        let res = MipmapRes::new(tmp.path());
        res.create_dirs()?;
        std::fs::create_dir(res.icon_path(Density::Xhdpi, "ic_launcher"))?;

        let err = res.write_icons(&Icon::placeholder()?).unwrap_err();
        assert!(err.to_string().contains("mipmap-xhdpi"));
        // earlier writes stay in place
        for density in [Density::Mdpi, Density::Hdpi] {
            for name in ICON_NAMES {
                assert!(res.icon_path(density, name).is_file());
            }
        }
        assert!(!res.icon_path(Density::Xhdpi, "ic_launcher_round").exists());
        for density in [Density::Xxhdpi, Density::Xxxhdpi] {
            for name in ICON_NAMES {
                assert!(!res.icon_path(density, name).exists());
            }
        }
        Ok(())
    }

    #[test]
    fn file_in_place_of_dir_fails() -> Result<()> {
        let tmp = TempDir::new()?;
        let res = MipmapRes::new(tmp.path());
        std::fs::write(res.dir(Density::Xhdpi), b"")?;
        assert!(res.create_dirs().is_err());
        assert!(res.generate().is_err());
        Ok(())
    }
}
