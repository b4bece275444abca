//! Handwritten font resolution.
//!
//! The Virgil font is looked up next to the running executable and read at
//! most once per process. A missing or unreadable file is not an error: the
//! renderer then falls back to a system font stack.

use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::OnceLock,
};

use log::{debug, info};

use obsidraw_core::draw::{FontFormat, FontPayload};

/// File name of the bundled handwritten font.
pub const VIRGIL_FILE_NAME: &str = "Virgil.woff2";

/// Logical family name used in `@font-face` and font stacks.
pub const VIRGIL_FAMILY: &str = "Virgil";

static BUNDLED: OnceLock<Option<FontPayload>> = OnceLock::new();

/// Returns the bundled Virgil font, reading it on first use.
///
/// Concurrent first callers block on a single read.
pub fn resolve_font() -> Option<&'static FontPayload> {
    BUNDLED
        .get_or_init(|| bundled_font_path().and_then(|path| load_font(&path)))
        .as_ref()
}

/// A memoized font loaded from an explicit path.
#[derive(Debug)]
pub struct FontResolver {
    path: PathBuf,
    payload: OnceLock<Option<FontPayload>>,
}

impl FontResolver {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            payload: OnceLock::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the font, reading the file on first use.
    pub fn resolve(&self) -> Option<&FontPayload> {
        self.payload.get_or_init(|| load_font(&self.path)).as_ref()
    }
}

fn bundled_font_path() -> Option<PathBuf> {
    let exe = env::current_exe().ok()?;
    Some(exe.parent()?.join(VIRGIL_FILE_NAME))
}

fn load_font(path: &Path) -> Option<FontPayload> {
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(err) => {
            debug!(path:? = path, err:%; "Font not available");
            return None;
        }
    };

    let format = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(FontFormat::from_extension)
        .unwrap_or_default();

    info!(path:? = path, bytes = data.len(); "Loaded font");
    Some(FontPayload::new(VIRGIL_FAMILY, format, data))
}
