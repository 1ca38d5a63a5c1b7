use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;

use crate::ui::theme::ThemePreset;

pub const SETTINGS_FILE_NAME: &str = "hospital.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub hospital_name: String,
    pub window_title: String,
    pub departments: Vec<String>,
    pub seed_sample_data: bool,
    pub theme: ThemePreset,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hospital_name: "City Hospital Management".into(),
            window_title: "Hospital Management System".into(),
            departments: storage::SAMPLE_DEPARTMENTS
                .iter()
                .map(|d| d.to_string())
                .collect(),
            seed_sample_data: true,
            theme: ThemePreset::Light,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileSettings {
    hospital_name: Option<String>,
    window_title: Option<String>,
    departments: Option<Vec<String>>,
    seed_sample_data: Option<bool>,
    theme: Option<ThemePreset>,
}

/// Defaults, then the settings file, then `APP__*` environment variables.
pub fn load_settings(explicit_path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    let path = match explicit_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_settings_file(),
    };
    if let Some(path) = path {
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
        apply_file_overrides(&mut settings, &raw)
            .with_context(|| format!("invalid settings file '{}'", path.display()))?;
        tracing::info!(path = %path.display(), "loaded settings file");
    }

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    Ok(settings)
}

fn discover_settings_file() -> Option<PathBuf> {
    let local = PathBuf::from(SETTINGS_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }

    let user = dirs::config_dir()?
        .join("city_hospital")
        .join(SETTINGS_FILE_NAME);
    user.is_file().then_some(user)
}

fn apply_file_overrides(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file_cfg: FileSettings = toml::from_str(raw)?;

    if let Some(v) = file_cfg.hospital_name {
        settings.hospital_name = v;
    }
    if let Some(v) = file_cfg.window_title {
        settings.window_title = v;
    }
    if let Some(v) = file_cfg.departments {
        settings.departments = normalize_departments(v);
    }
    if let Some(v) = file_cfg.seed_sample_data {
        settings.seed_sample_data = v;
    }
    if let Some(v) = file_cfg.theme {
        settings.theme = v;
    }
    Ok(())
}

fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

    if let Some(v) = read("APP__HOSPITAL_NAME") {
        settings.hospital_name = v;
    }
    if let Some(v) = read("APP__WINDOW_TITLE") {
        settings.window_title = v;
    }
    if let Some(v) = read("APP__DEPARTMENTS") {
        settings.departments = normalize_departments(v.split(',').map(str::to_string));
    }
    if let Some(v) = read("APP__SEED_SAMPLE_DATA") {
        match parse_flag(&v) {
            Some(flag) => settings.seed_sample_data = flag,
            None => tracing::warn!(value = %v, "ignoring unparseable APP__SEED_SAMPLE_DATA"),
        }
    }
    if let Some(v) = read("APP__THEME") {
        match ThemePreset::from_name(&v) {
            Some(theme) => settings.theme = theme,
            None => tracing::warn!(value = %v, "ignoring unknown APP__THEME"),
        }
    }
}

fn normalize_departments(raw: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut departments: Vec<String> = Vec::new();
    for department in raw {
        let department = department.trim();
        if !department.is_empty() && !departments.iter().any(|d| d == department) {
            departments.push(department.to_string());
        }
    }
    departments
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
