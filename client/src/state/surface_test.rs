use std::collections::HashMap;

use super::*;

fn params(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn without_widget_flag_is_full_page() {
    let surface = Surface::from_params(params(&[("client", "acme")]));
    assert_eq!(surface, Surface::Page);
    assert_eq!(surface.client(), None);
    assert_eq!(surface.accent_style(), None);
}

#[test]
fn widget_flag_other_than_one_is_full_page() {
    assert_eq!(Surface::from_params(params(&[("widget", "true")])), Surface::Page);
}

#[test]
fn widget_mode_reads_client_color_and_logo() {
    let surface = Surface::from_params(params(&[
        ("widget", "1"),
        ("client", "acme"),
        ("color", "#ff0000"),
        ("logo", "https://cdn.example/logo.png"),
    ]));
    assert_eq!(surface.accent_style().as_deref(), Some("--accent: #ff0000"));
    assert_eq!(surface.client(), Some("acme"));
    let Surface::Widget(config) = surface else { panic!("expected widget surface") };
    assert_eq!(config.color, "#ff0000");
    assert_eq!(config.logo_url(), Some("https://cdn.example/logo.png"));
}

#[test]
fn widget_mode_defaults_color_and_drops_empty_client() {
    let surface = Surface::from_params(params(&[("widget", "1"), ("client", "  "), ("color", "red;}")]));
    assert_eq!(surface.client(), None);
    assert_eq!(surface.accent_style(), Some(format!("--accent: {DEFAULT_ACCENT}")));
    let Surface::Widget(config) = surface else { panic!("expected widget surface") };
    assert_eq!(config.color, DEFAULT_ACCENT);
    assert_eq!(config.logo_url(), None);
}
