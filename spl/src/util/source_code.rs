// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{ops::Deref, path::{Path, PathBuf}, sync::Arc};

#[derive(Debug, Clone)]
pub struct SourceCode {
    path: Arc<PathBuf>,
    contents: String,
}

impl SourceCode {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: Arc::new(path.into()),
            contents: contents.into(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// The text of the given zero-based line, without its line terminator.
    #[must_use]
    pub fn line(&self, line: usize) -> Option<&str> {
        self.contents.lines().nth(line)
    }
}

impl Deref for SourceCode {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.contents()
    }
}
