use super::*;

#[test]
fn compose_builds_rgba_from_hex_and_percent() {
    assert_eq!(compose("#0a141e", 100), Some(Rgba::new(10, 20, 30, 1.0)));
    assert_eq!(compose("#0a141e", 50).map(|c| c.to_css()).as_deref(), Some("rgba(10,20,30,0.5)"));
}

#[test]
fn compose_caps_percent_and_rejects_bad_hex() {
    assert_eq!(compose("#ffffff", 250).map(|c| c.a), Some(1.0));
    assert_eq!(compose("white", 100), None);
}

#[test]
fn alpha_percent_reads_rgba_and_defaults_to_opaque() {
    assert_eq!(alpha_percent("rgba(1,2,3,0.25)"), 25);
    assert_eq!(alpha_percent("#1F77B4"), 100);
    assert_eq!(alpha_percent("transparent"), 100);
}

#[test]
fn swatch_change_keeps_current_opacity() {
    assert_eq!(swatch_change("rgba(1,2,3,0.4)", "#0a141e"), Some(Rgba::new(10, 20, 30, 0.4)));
    assert_eq!(swatch_change("#1F77B4", "#0a141e").map(|c| c.a), Some(1.0));
}

#[test]
fn opacity_change_keeps_current_hue() {
    assert_eq!(opacity_change("rgba(10,20,30,1)", "25"), Some(Rgba::new(10, 20, 30, 0.25)));
    assert_eq!(opacity_change("rgba(10,20,30,0.5)", "junk").map(|c| c.a), Some(1.0));
}
