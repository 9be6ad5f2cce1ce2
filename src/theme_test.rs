use super::*;

#[test]
fn as_str_matches_attribute_values() {
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Dark.as_str(), "dark");
    assert_eq!(Theme::Dark.to_string(), "dark");
}

#[test]
fn inverse_is_an_involution() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_ne!(theme.inverse(), theme);
        assert_eq!(theme.inverse().inverse(), theme);
    }
}

#[test]
fn default_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn from_str_accepts_exact_values_with_surrounding_whitespace() {
    assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
    assert_eq!(" dark\n".parse::<Theme>(), Ok(Theme::Dark));
}

#[test]
fn from_str_rejects_other_values() {
    assert_eq!("Dark".parse::<Theme>(), Err(UnknownTheme("Dark".into())));
    assert!("".parse::<Theme>().is_err());
    assert!("solarized".parse::<Theme>().is_err());
}

#[test]
fn decode_or_falls_back_on_garbage() {
    assert_eq!(Theme::decode_or("light", Theme::Dark), Theme::Light);
    assert_eq!(Theme::decode_or("true", Theme::Dark), Theme::Dark);
    assert_eq!(Theme::decode_or("", Theme::Light), Theme::Light);
}

#[test]
fn serde_uses_lowercase_names() {
    assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
    let parsed: Theme = serde_json::from_str("\"dark\"").unwrap();
    assert_eq!(parsed, Theme::Dark);
    assert!(serde_json::from_str::<Theme>("\"auto\"").is_err());
}
