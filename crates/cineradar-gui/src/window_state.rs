//! Window geometry restored on the next launch.
//!
//! Resize and move events arrive in bursts while the user drags, so changes
//! are recorded in memory and written once the window has been still for
//! [`SETTLE_MS`].

use std::path::{Path, PathBuf};

use iced::{Point, Size};
use serde::{Deserialize, Serialize};

use cineradar_core::config::AppConfig;

/// Quiet period after the last geometry change before it is written.
pub const SETTLE_MS: u64 = 600;

pub const MIN_SIZE: Size = Size::new(480.0, 360.0);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct Geometry {
    width: f32,
    height: f32,
    position: Option<(f32, f32)>,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            width: 1100.0,
            height: 720.0,
            position: None,
        }
    }
}

#[derive(Debug)]
pub struct WindowState {
    path: Option<PathBuf>,
    current: Geometry,
    saved: Geometry,
    revision: u64,
}

impl WindowState {
    /// Geometry from the data directory, or defaults.
    pub fn load() -> Self {
        Self::load_from(AppConfig::data_dir().join("window.json"))
    }

    fn load_from(path: PathBuf) -> Self {
        let saved = std::fs::read_to_string(&path)
            .ok()
            .and_then(|content| serde_json::from_str::<Geometry>(&content).ok())
            .unwrap_or_default();
        Self {
            path: Some(path),
            current: saved,
            saved,
            revision: 0,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(
            self.current.width.max(MIN_SIZE.width),
            self.current.height.max(MIN_SIZE.height),
        )
    }

    pub fn position(&self) -> Option<Point> {
        self.current
            .position
            .filter(|(x, y)| *x >= 0.0 && *y >= 0.0)
            .map(|(x, y)| Point::new(x, y))
    }

    /// Record a resize. Returns the revision to flush later, if anything changed.
    pub fn resized(&mut self, size: Size) -> Option<u64> {
        self.change(Geometry {
            width: size.width,
            height: size.height,
            ..self.current
        })
    }

    pub fn moved(&mut self, position: Point) -> Option<u64> {
        self.change(Geometry {
            position: Some((position.x, position.y)),
            ..self.current
        })
    }

    /// Write the geometry if `revision` is still the latest change.
    ///
    /// Returns whether a write was attempted.
    pub fn flush(&mut self, revision: u64) -> bool {
        if revision != self.revision || self.current == self.saved {
            return false;
        }
        let Some(path) = &self.path else {
            return false;
        };
        if let Err(e) = write(path, &self.current) {
            tracing::warn!(error = %e, path = %path.display(), "failed to save window geometry");
        } else {
            self.saved = self.current;
        }
        true
    }

    fn change(&mut self, next: Geometry) -> Option<u64> {
        if next == self.current {
            return None;
        }
        self.current = next;
        self.revision += 1;
        Some(self.revision)
    }
}

fn write(path: &Path, geometry: &Geometry) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(geometry).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_in(dir: &tempfile::TempDir) -> WindowState {
        WindowState::load_from(dir.path().join("window.json"))
    }

    #[test]
    fn test_defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let ws = state_in(&dir);
        assert_eq!(ws.size(), Size::new(1100.0, 720.0));
        assert!(ws.position().is_none());
    }

    #[test]
    fn test_size_has_floor() {
        let dir = tempfile::tempdir().unwrap();
        let mut ws = state_in(&dir);
        ws.resized(Size::new(10.0, 10.0));
        assert_eq!(ws.size(), MIN_SIZE);
    }

    #[test]
    fn test_only_latest_change_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let mut ws = state_in(&dir);

        let first = ws.resized(Size::new(900.0, 600.0)).unwrap();
        let last = ws.moved(Point::new(40.0, 30.0)).unwrap();

        assert!(!ws.flush(first));
        assert!(!dir.path().join("window.json").exists());
        assert!(ws.flush(last));
        assert!(!ws.flush(last));

        let restored = state_in(&dir);
        assert_eq!(restored.size(), Size::new(900.0, 600.0));
        assert_eq!(restored.position(), Some(Point::new(40.0, 30.0)));
    }

    #[test]
    fn test_unchanged_geometry_schedules_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut ws = state_in(&dir);
        assert!(ws.resized(Size::new(1100.0, 720.0)).is_none());
    }
}
