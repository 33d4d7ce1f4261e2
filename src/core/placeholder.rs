//! Placeholder token substitution for content values.
//!
//! Content values may embed a small fixed set of tokens (`{village_name}`,
//! `{village_slogan}`, `{year}`) that are replaced with live profile data at
//! read time. Replacement is purely textual: every literal occurrence of each
//! known token is substituted once, tokens never expand recursively, and
//! unknown tokens pass through unchanged.

use crate::entities::settings;
use chrono::{Datelike, Utc};
use std::collections::BTreeMap;

/// Token replaced by the village name
pub const VILLAGE_NAME_TOKEN: &str = "{village_name}";
/// Token replaced by the village slogan
pub const VILLAGE_SLOGAN_TOKEN: &str = "{village_slogan}";
/// Token replaced by the current four-digit year
pub const YEAR_TOKEN: &str = "{year}";

/// Built-in default replacements, drawn from the fallback village profile.
///
/// Callers can override any of these by supplying the same key in their own
/// replacement map.
#[must_use]
pub fn default_replacements() -> BTreeMap<String, String> {
    profile_replacements(&crate::core::settings::default_profile())
}

/// Builds the replacement map for the built-in tokens from the village profile.
#[must_use]
pub fn profile_replacements(profile: &settings::Model) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    map.insert(VILLAGE_NAME_TOKEN.to_string(), profile.nama_desa.clone());
    map.insert(
        VILLAGE_SLOGAN_TOKEN.to_string(),
        profile.slogan.clone().unwrap_or_default(),
    );
    map.insert(YEAR_TOKEN.to_string(), Utc::now().year().to_string());
    map
}

/// Replaces every occurrence of each known token in `value`.
///
/// Caller-supplied `overrides` take precedence over the built-in defaults for
/// the same key. Tokens are applied in `BTreeMap` key order so the result is
/// deterministic. Tokens absent from both maps are left as literal text; there
/// is no error path.
#[must_use]
pub fn process_content_value(value: &str, overrides: &BTreeMap<String, String>) -> String {
    let mut replacements = default_replacements();
    for (token, replacement) in overrides {
        replacements.insert(token.clone(), replacement.clone());
    }

    let mut processed = value.to_string();
    for (token, replacement) in &replacements {
        processed = processed.replace(token.as_str(), replacement);
    }
    processed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overrides(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_replaces_every_occurrence() {
        let map = overrides(&[("{village_name}", "Desa Sukamaju")]);
        let result =
            process_content_value("{village_name} adalah {village_name}", &map);
        assert_eq!(result, "Desa Sukamaju adalah Desa Sukamaju");
    }

    #[test]
    fn test_unknown_tokens_left_unchanged() {
        let map = overrides(&[]);
        let result = process_content_value("Halo {unknown_token}!", &map);
        assert_eq!(result, "Halo {unknown_token}!");
    }

    #[test]
    fn test_override_beats_default() {
        let map = overrides(&[("{village_name}", "Desa Sukamaju")]);
        let result = process_content_value("Selamat datang di {village_name}", &map);
        assert_eq!(result, "Selamat datang di Desa Sukamaju");
    }

    #[test]
    fn test_default_replacements_apply_without_overrides() {
        let result = process_content_value("{village_name}", &BTreeMap::new());
        assert_eq!(result, "Desa Maju Sejahtera");
    }

    #[test]
    fn test_defaults_track_the_fallback_profile() {
        let profile = crate::core::settings::default_profile();
        let defaults = default_replacements();
        assert_eq!(defaults.get(VILLAGE_NAME_TOKEN), Some(&profile.nama_desa));
        assert_eq!(
            defaults.get(VILLAGE_SLOGAN_TOKEN),
            profile.slogan.as_ref()
        );
    }

    #[test]
    fn test_year_token_is_current_year() {
        let result = process_content_value("Hak cipta {year}", &BTreeMap::new());
        let year = Utc::now().year().to_string();
        assert_eq!(result, format!("Hak cipta {year}"));
    }

    #[test]
    fn test_value_without_tokens_passes_through() {
        let result = process_content_value("Tidak ada token di sini", &BTreeMap::new());
        assert_eq!(result, "Tidak ada token di sini");
    }

    #[test]
    fn test_deterministic_application() {
        let map = overrides(&[("{a}", "1"), ("{b}", "2")]);
        let first = process_content_value("{a}{b}{a}", &map);
        let second = process_content_value("{a}{b}{a}", &map);
        assert_eq!(first, "121");
        assert_eq!(first, second);
    }

    #[test]
    fn test_profile_replacements_use_profile_fields() {
        let profile = crate::core::settings::default_profile();
        let map = profile_replacements(&profile);
        assert_eq!(
            map.get(VILLAGE_NAME_TOKEN),
            Some(&profile.nama_desa)
        );
        assert!(map.contains_key(YEAR_TOKEN));
    }
}
