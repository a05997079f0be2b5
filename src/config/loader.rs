//! Settings file loading

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use std::path::{Path, PathBuf};

use super::settings::Settings;

pub const ENV_PREFIX: &str = "TAGCONF_";

const SETTINGS_CANDIDATES: [&str; 2] = ["tagconf.toml", ".tagconf.toml"];

/// Resolve settings from defaults, a TOML file and `TAGCONF_*` variables.
///
/// An explicitly named file must exist and parse. An auto-discovered file that
/// fails to parse is warned about and skipped.
pub fn load_settings(work_dir: &Path, settings_path: Option<&Path>) -> Result<Settings> {
    let discovered = match settings_path {
        Some(path) => {
            if !path.is_file() {
                anyhow::bail!("Settings file not found: {}", path.display());
            }
            Some(path.to_path_buf())
        }
        None => discover_settings(work_dir),
    };

    let defaults = Figment::from(Serialized::defaults(Settings::default()));

    let Some(settings_file) = discovered else {
        return extract(defaults.merge(Env::prefixed(ENV_PREFIX)));
    };

    // Validate the file on its own so env errors are not blamed on it.
    let with_file = defaults.clone().merge(Toml::file(&settings_file));
    if let Err(e) = extract(with_file.clone()) {
        if settings_path.is_some() {
            return Err(e.context(format!("Invalid settings file: {}", settings_file.display())));
        }
        tracing::warn!(
            "Failed to parse auto-discovered settings {}: {:#}",
            settings_file.display(),
            e
        );
        return extract(defaults.merge(Env::prefixed(ENV_PREFIX)));
    }

    extract(with_file.merge(Env::prefixed(ENV_PREFIX)))
}

fn extract(figment: Figment) -> Result<Settings> {
    figment.extract::<Settings>().context("Failed to resolve settings")
}

fn discover_settings(work_dir: &Path) -> Option<PathBuf> {
    SETTINGS_CANDIDATES.iter().map(|name| work_dir.join(name)).find(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use figment::Jail;

    #[test]
    fn test_defaults_when_nothing_configured() {
        Jail::expect_with(|jail| {
            let settings = load_settings(jail.directory(), None).expect("settings");
            assert_eq!(settings, Settings::default());
            Ok(())
        });
    }

    #[test]
    fn test_discovered_toml_file() {
        Jail::expect_with(|jail| {
            jail.create_file("tagconf.toml", "overrides = [\"production\"]\nformat = \"json\"\n")?;
            let settings = load_settings(jail.directory(), None).expect("settings");
            assert_eq!(settings.overrides, vec!["production"]);
            assert_eq!(settings.format, OutputFormat::Json);
            Ok(())
        });
    }

    #[test]
    fn test_env_beats_file() {
        Jail::expect_with(|jail| {
            jail.create_file(".tagconf.toml", "overrides = \"staging\"\n")?;
            jail.set_env("TAGCONF_OVERRIDES", "production,eu");
            let settings = load_settings(jail.directory(), None).expect("settings");
            assert_eq!(settings.overrides, vec!["production", "eu"]);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_must_exist() {
        Jail::expect_with(|jail| {
            let missing = jail.directory().join("custom.toml");
            let err = load_settings(jail.directory(), Some(&missing)).unwrap_err();
            assert!(err.to_string().contains("Settings file not found"));
            Ok(())
        });
    }

    #[test]
    fn test_explicit_invalid_file_is_error() {
        Jail::expect_with(|jail| {
            jail.create_file("custom.toml", "format = \"yaml\"\n")?;
            let path = jail.directory().join("custom.toml");
            let result = load_settings(jail.directory(), Some(&path));
            assert!(result.is_err(), "explicit settings with bad format should return Err");
            Ok(())
        });
    }

    #[test]
    fn test_numeric_and_boolean_env_tags() {
        Jail::expect_with(|jail| {
            jail.set_env("TAGCONF_OVERRIDES", "2024");
            let settings = load_settings(jail.directory(), None).expect("settings");
            assert_eq!(settings.overrides, vec!["2024"]);

            jail.set_env("TAGCONF_OVERRIDES", "true");
            let settings = load_settings(jail.directory(), None).expect("settings");
            assert_eq!(settings.overrides, vec!["true"]);
            Ok(())
        });
    }

    #[test]
    fn test_numeric_tags_in_toml_list() {
        Jail::expect_with(|jail| {
            jail.create_file("tagconf.toml", "overrides = [2024, \"eu\"]\n")?;
            let settings = load_settings(jail.directory(), None).expect("settings");
            assert_eq!(settings.overrides, vec!["2024", "eu"]);
            Ok(())
        });
    }

    #[test]
    fn test_bad_env_value_does_not_discard_valid_file() {
        Jail::expect_with(|jail| {
            jail.create_file("tagconf.toml", "overrides = [\"eu\"]\n")?;
            jail.set_env("TAGCONF_FORMAT", "yaml");
            let err = load_settings(jail.directory(), None).unwrap_err();
            assert!(format!("{err:#}").contains("TAGCONF_"), "{err:#}");

            jail.set_env("TAGCONF_FORMAT", "json");
            let settings = load_settings(jail.directory(), None).expect("settings");
            assert_eq!(settings.overrides, vec!["eu"]);
            assert_eq!(settings.format, OutputFormat::Json);
            Ok(())
        });
    }

    #[test]
    fn test_auto_discovered_invalid_file_falls_back() {
        Jail::expect_with(|jail| {
            jail.create_file("tagconf.toml", "format = \"yaml\"\n")?;
            let settings = load_settings(jail.directory(), None).expect("should not error");
            assert_eq!(settings, Settings::default());
            Ok(())
        });
    }
}
