use serial_test::serial;
use tinct::theme::builtin;
use tinct::{
    reset_appearance_detector, set_appearance_detector, AppearanceMode, Theme, ThemeError,
    ThemeRegistry, TokenRole,
};

fn full_yaml(extra: &str) -> String {
    let mut yaml = String::from("name: custom\ncolors:\n");
    for role in TokenRole::ALL {
        yaml.push_str(&format!("  {}: \"#202020\"\n", role.name()));
    }
    yaml.push_str(extra);
    yaml
}

#[test]
fn test_builtins_survive_yaml_round_trip() {
    for (name, build) in builtin::all() {
        let theme = build();
        let yaml = theme.to_yaml().expect("serializes");
        let parsed = Theme::from_yaml(&yaml).expect("parses back");
        assert_eq!(parsed, theme, "{} changed across YAML", name);
    }
}

#[test]
fn test_yaml_theme_registers_and_selects() {
    let yaml = full_yaml("").replace(
        "  primary: \"#202020\"\n",
        "  primary: { dark: \"#D97757\", light: \"#C6613F\" }\n",
    );
    let theme = Theme::from_yaml(&yaml).unwrap();
    assert_eq!(theme.name(), "custom");

    let registry = ThemeRegistry::with_builtin_themes().with_appearance(AppearanceMode::Light);
    registry.register("custom", theme).unwrap();
    registry.set_current("custom").unwrap();

    assert_eq!(registry.snapshot().color(TokenRole::Primary).as_str(), "#C6613F");
}

#[test]
fn test_yaml_with_unknown_role_is_rejected() {
    let err = Theme::from_yaml(&full_yaml("  sparkle: \"#ffffff\"\n")).unwrap_err();
    assert_eq!(err, ThemeError::UnknownRole("sparkle".to_string()));
}

#[test]
fn test_yaml_missing_roles_are_listed() {
    let yaml = full_yaml("").replace("  syntax_keyword: \"#202020\"\n", "");
    match Theme::from_yaml(&yaml) {
        Err(ThemeError::IncompleteTheme { name, missing }) => {
            assert_eq!(name, "custom");
            assert_eq!(missing, vec![TokenRole::SyntaxKeyword]);
        }
        other => panic!("expected IncompleteTheme, got {:?}", other),
    }
}

#[test]
fn test_malformed_yaml_is_a_parse_error() {
    assert!(matches!(Theme::from_yaml("colors: [unclosed"), Err(ThemeError::Parse(_))));
}

#[test]
#[serial]
fn test_builtin_registry_starts_in_detected_mode() {
    set_appearance_detector(|| AppearanceMode::Light);
    let registry = ThemeRegistry::with_builtin_themes();
    reset_appearance_detector();

    assert_eq!(registry.appearance(), AppearanceMode::Light);
    assert_eq!(registry.current_name(), builtin::DEFAULT_THEME);
}

#[test]
#[serial]
fn test_toggle_flips_detected_mode() {
    set_appearance_detector(|| AppearanceMode::Dark);
    let registry = ThemeRegistry::with_builtin_themes();
    reset_appearance_detector();

    assert_eq!(registry.toggle_appearance(), AppearanceMode::Light);
    assert_eq!(registry.snapshot().mode(), AppearanceMode::Light);
}
