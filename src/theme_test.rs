use super::*;

// =============================================================
// Wire strings
// =============================================================

#[test]
fn as_str_matches_wire_values() {
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Dark.as_str(), "dark");
}

#[test]
fn from_str_round_trips_both_themes() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(theme.as_str().parse::<Theme>(), Ok(theme));
    }
}

#[test]
fn from_str_rejects_unknown_values() {
    assert!("".parse::<Theme>().is_err());
    assert!("Dark".parse::<Theme>().is_err());
    assert!("solarized".parse::<Theme>().is_err());
}

#[test]
fn default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

// =============================================================
// Flip
// =============================================================

#[test]
fn flip_is_involutive() {
    assert_eq!(Theme::Light.flip(), Theme::Dark);
    assert_eq!(Theme::Dark.flip(), Theme::Light);
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(theme.flip().flip(), theme);
    }
}

// =============================================================
// Icons
// =============================================================

#[test]
fn icon_variants_differ_per_theme() {
    assert!(Theme::Dark.icon_html().contains("bi-sun-fill"));
    assert!(Theme::Light.icon_html().contains("bi-moon-stars-fill"));
}

// =============================================================
// Serde
// =============================================================

#[test]
fn serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), r#""dark""#);
    assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), r#""light""#);
}

#[test]
fn theme_change_detail_payload_shape() {
    let json = serde_json::to_string(&ThemeChangeDetail { theme: Theme::Dark }).unwrap();
    assert_eq!(json, r#"{"theme":"dark"}"#);

    let parsed: ThemeChangeDetail = serde_json::from_str(r#"{"theme":"light"}"#).unwrap();
    assert_eq!(parsed.theme, Theme::Light);
}
