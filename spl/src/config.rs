// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use serde::Deserialize;

/// Contents of an `spl.toml` file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigRoot {
    pub log: ConfigSectionLog,
    pub cli: ConfigSectionCli,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionLog {
    /// Log everything down to trace level.
    pub debug: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionCli {
    /// Extra command-line arguments ending in this suffix are rejected, since
    /// they look like a second source file.
    pub reserved_suffix: String,
}

impl Default for ConfigSectionCli {
    fn default() -> Self {
        Self {
            reserved_suffix: ".txt".into(),
        }
    }
}
