use std::path::{Path, PathBuf};

use shredder_core::language::{LineSource, SourceError};
use shredder_types::SourceLine;

use crate::subtitle::SubtitleFormat;

/// Every supported file in a directory, in file name order
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
    style: String,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>, style: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            style: style.into(),
        }
    }

    fn files(&self) -> Result<Vec<PathBuf>, SourceError> {
        if !self.dir.is_dir() {
            return Err(SourceError::NotFound(self.dir.clone()));
        }

        let entries = std::fs::read_dir(&self.dir).map_err(|source| SourceError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|source| SourceError::Io {
                    path: self.dir.clone(),
                    source,
                })?
                .path();
            if path.is_file() && SubtitleFormat::from_path(&path).is_some() {
                files.push(path);
            }
        }
        sort_by_file_name(&mut files);
        Ok(files)
    }
}

impl LineSource for DirectorySource {
    fn describe(&self) -> String {
        format!("directory {}", self.dir.display())
    }

    fn lines(&self) -> Result<Vec<SourceLine>, SourceError> {
        let files = self.files()?;
        if files.is_empty() {
            tracing::warn!("No subtitle files found in {}", self.dir.display());
        }
        read_all(&files, &self.style)
    }
}

/// Explicitly listed files, in file name order
#[derive(Debug, Clone)]
pub struct FileListSource {
    paths: Vec<PathBuf>,
    style: String,
}

impl FileListSource {
    pub fn new(paths: Vec<PathBuf>, style: impl Into<String>) -> Self {
        Self {
            paths,
            style: style.into(),
        }
    }
}

impl LineSource for FileListSource {
    fn describe(&self) -> String {
        format!("{} listed file(s)", self.paths.len())
    }

    fn lines(&self) -> Result<Vec<SourceLine>, SourceError> {
        if let Some(missing) = self.paths.iter().find(|p| !p.is_file()) {
            return Err(SourceError::NotFound(missing.clone()));
        }

        let mut files = self.paths.clone();
        sort_by_file_name(&mut files);
        read_all(&files, &self.style)
    }
}

fn sort_by_file_name(files: &mut [PathBuf]) {
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
}

fn read_all(files: &[PathBuf], style: &str) -> Result<Vec<SourceLine>, SourceError> {
    let mut lines = Vec::new();
    for path in files {
        lines.extend(read_source_file(path, style)?);
    }
    Ok(lines)
}

/// Read one file; unknown extensions are treated as plain text
pub fn read_source_file(path: &Path, style: &str) -> Result<Vec<SourceLine>, SourceError> {
    let bytes = std::fs::read(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let content = match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("{} is not valid UTF-8, replacing bad bytes", path.display());
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };

    let source_id = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let format = SubtitleFormat::from_path(path).unwrap_or(SubtitleFormat::Text);

    let lines: Vec<SourceLine> = format
        .extract(&content, style)
        .into_iter()
        .map(|sentence| SourceLine::new(sentence, source_id.as_str()))
        .collect();

    tracing::info!("Read {} line(s) from {}", lines.len(), source_id);
    Ok(lines)
}
