#![allow(dead_code)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use dear_file_dialog::{DialogId, DialogSurface, FileSystem, FsEntry, FsMetadata, RowClick};

/// Input the scripted user gives during one frame.
#[derive(Default)]
pub struct Input {
    pub header: Option<&'static str>,
    pub row: Option<(String, RowClick)>,
    pub type_text: Option<String>,
    pub press: Option<&'static str>,
    pub close_window: bool,
}

impl Input {
    pub fn click(label: &str) -> Self {
        Self {
            row: Some((label.to_string(), RowClick::Single)),
            ..Self::default()
        }
    }

    pub fn double_click(label: &str) -> Self {
        Self {
            row: Some((label.to_string(), RowClick::Double)),
            ..Self::default()
        }
    }

    pub fn header(label: &'static str) -> Self {
        Self {
            header: Some(label),
            ..Self::default()
        }
    }

    pub fn press(label: &'static str) -> Self {
        Self {
            press: Some(label),
            ..Self::default()
        }
    }

    pub fn type_text(text: &str) -> Self {
        Self {
            type_text: Some(text.to_string()),
            ..Self::default()
        }
    }
}

/// Surface that replays scripted input and records what was drawn.
#[derive(Default)]
pub struct ScriptedSurface {
    pub input: Input,
    pub windows: Vec<String>,
    pub ids: Vec<DialogId>,
    pub rows: Vec<String>,
    pub highlighted: Vec<String>,
    pub texts: Vec<String>,
    pub errors: Vec<String>,
    pub headers: Vec<String>,
    pub column_widths: Vec<(usize, f32)>,
    pub field: Option<String>,
}

impl ScriptedSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the drawing log and queues the next frame's input.
    pub fn next_frame(&mut self, input: Input) -> &mut Self {
        self.input = input;
        self.windows.clear();
        self.ids.clear();
        self.rows.clear();
        self.highlighted.clear();
        self.texts.clear();
        self.errors.clear();
        self.headers.clear();
        self.column_widths.clear();
        self.field = None;
        self
    }
}

impl DialogSurface for ScriptedSurface {
    fn with_id<R>(&mut self, id: DialogId, f: impl FnOnce(&mut Self) -> R) -> R {
        self.ids.push(id);
        f(self)
    }

    fn window<R>(
        &mut self,
        title: &str,
        _size: [f32; 2],
        open: &mut bool,
        f: impl FnOnce(&mut Self) -> R,
    ) -> Option<R> {
        self.windows.push(title.to_string());
        if std::mem::take(&mut self.input.close_window) {
            *open = false;
        }
        Some(f(self))
    }

    fn child<R>(&mut self, _id: &str, _size: [f32; 2], f: impl FnOnce(&mut Self) -> R) -> Option<R> {
        Some(f(self))
    }

    fn content_width(&self) -> f32 {
        700.0
    }

    fn columns(&mut self, _count: usize) {}

    fn set_column_width(&mut self, index: usize, width: f32) {
        self.column_widths.push((index, width));
    }

    fn next_column(&mut self) {}

    fn separator(&mut self) {}

    fn header(&mut self, label: &str) -> bool {
        self.headers.push(label.to_string());
        if self.input.header == Some(label) {
            self.input.header = None;
            return true;
        }
        false
    }

    fn row(&mut self, label: &str, selected: bool, _width: f32) -> RowClick {
        self.rows.push(label.to_string());
        if selected {
            self.highlighted.push(label.to_string());
        }
        match &self.input.row {
            Some((target, click)) if target == label => {
                let click = *click;
                self.input.row = None;
                click
            }
            _ => RowClick::None,
        }
    }

    fn text(&mut self, text: &str) {
        self.texts.push(text.to_string());
    }

    fn error_text(&mut self, text: &str) {
        self.errors.push(text.to_string());
    }

    fn input_text(&mut self, _label: &str, buf: &mut String, _width: f32) -> bool {
        self.field = Some(buf.clone());
        match self.input.type_text.take() {
            Some(text) => {
                *buf = text;
                true
            }
            None => false,
        }
    }

    fn button(&mut self, label: &str) -> bool {
        if self.input.press == Some(label) {
            self.input.press = None;
            return true;
        }
        false
    }

    fn same_line(&mut self) {}
}

/// In-memory filesystem with deterministic enumeration order.
#[derive(Default)]
pub struct MemFs {
    dirs: HashMap<PathBuf, Vec<FsEntry>>,
}

impl MemFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dir(mut self, path: &str) -> Self {
        let path = PathBuf::from(path);
        if let Some(parent) = path.parent() {
            if let Some(entries) = self.dirs.get_mut(parent) {
                entries.push(FsEntry {
                    name: file_name(&path),
                    path: path.clone(),
                    is_dir: true,
                    size: 0,
                    modified: None,
                });
            }
        }
        self.dirs.entry(path).or_default();
        self
    }

    pub fn dir_at(mut self, path: &str, secs: u64) -> Self {
        self = self.dir(path);
        let path = PathBuf::from(path);
        if let Some(entry) = path
            .parent()
            .and_then(|p| self.dirs.get_mut(p))
            .and_then(|entries| entries.iter_mut().find(|e| e.path == path))
        {
            entry.modified = Some(epoch(secs));
        }
        self
    }

    pub fn file(mut self, path: &str, size: u64, secs: u64) -> Self {
        let path = PathBuf::from(path);
        let entry = FsEntry {
            name: file_name(&path),
            path: path.clone(),
            is_dir: false,
            size,
            modified: Some(epoch(secs)),
        };
        if let Some(parent) = path.parent() {
            self.dirs.entry(parent.to_path_buf()).or_default().push(entry);
        }
        self
    }

    fn find(&self, path: &Path) -> Option<&FsEntry> {
        let parent = path.parent()?;
        self.dirs.get(parent)?.iter().find(|e| e.path == path)
    }
}

impl FileSystem for MemFs {
    fn read_dir(&self, dir: &Path) -> std::io::Result<Vec<FsEntry>> {
        self.dirs
            .get(dir)
            .cloned()
            .ok_or_else(|| std::io::Error::from(std::io::ErrorKind::NotFound))
    }

    fn metadata(&self, path: &Path) -> std::io::Result<FsMetadata> {
        if self.dirs.contains_key(path) {
            return Ok(FsMetadata {
                is_dir: true,
                is_file: false,
            });
        }
        match self.find(path) {
            Some(e) => Ok(FsMetadata {
                is_dir: e.is_dir,
                is_file: !e.is_dir,
            }),
            None => Err(std::io::Error::from(std::io::ErrorKind::NotFound)),
        }
    }
}

pub fn epoch(secs: u64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(secs)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// `/docs` with `reports/` (2024-01-01) and `notes.txt` (120 bytes, 2024-02-01).
pub fn docs_fs() -> MemFs {
    MemFs::new()
        .dir("/")
        .dir_at("/docs", 1_700_000_000)
        .dir_at("/docs/reports", 1_704_067_200)
        .file("/docs/notes.txt", 120, 1_706_745_600)
        .file("/docs/reports/q1.csv", 10, 1_704_067_200)
}

pub fn unique_temp_dir(prefix: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    let pid = std::process::id();
    let t = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    p.push(format!("dear-file-dialog-{prefix}-{pid}-{t}"));
    p
}
