// The build emits only the WASM bundle under /pkg; no stylesheet is produced.
#[test]
fn app_links_no_stylesheet_asset() {
    let source = include_str!("app.rs");
    assert!(!source.contains("Stylesheet"));
    assert!(!source.contains(".css"));
}
