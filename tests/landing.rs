//! End-to-end tests: content folder on disk → rendered `index.html`.
//!
//! Each test builds a small content tree in a temp directory, runs the public
//! scan + generate API, and inspects the written page.

use simple_landing::{generate, scan};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, contents: impl AsRef<[u8]>) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// Scan `content/` under `tmp` and write `site/index.html`; return the page.
fn build(tmp: &TempDir) -> String {
    let site = scan::load_site(&tmp.path().join("content")).unwrap();
    let output = tmp.path().join("site/index.html");
    generate::generate(&site, &output).unwrap();
    fs::read_to_string(output).unwrap()
}

/// Page markup after `<body>`, skipping the inlined stylesheet.
fn body(page: &str) -> &str {
    &page[page.find("<body>").unwrap()..]
}

#[test]
fn empty_content_directory_renders_minimal_page() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("content")).unwrap();

    let page = build(&tmp);
    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.ends_with("</html>"));
    assert!(page.contains("<title>Pagina</title>"));

    let body = body(&page);
    assert!(body.contains("page-header"));
    assert!(body.contains("hero-band"));
    assert!(body.contains("<p></p>"));
    assert!(body.contains("section-divider"));
    assert!(body.contains(r#"<div class="accordion"></div>"#));
    assert!(!body.contains("indicator-section"));
    assert!(!body.contains("registration-band"));
}

#[test]
fn sections_follow_numeric_order_and_first_is_expanded() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "content/Despegables/Des2-B.txt", "segundo\n");
    write(tmp.path(), "content/Despegables/Des1-A.txt", "primero\n");

    let page = build(&tmp);
    let body = body(&page);
    let a = body.find(r#"id="sec-01-btn""#).unwrap();
    let b = body.find(r#"id="sec-02-btn""#).unwrap();
    assert!(a < b);

    let first_panel = &body[a..b];
    assert!(first_panel.contains(r#"aria-expanded="true""#));
    assert!(first_panel.contains(r#"class="sec-panel is-active""#));
    assert!(body[b..].contains(r#"aria-expanded="false""#));
}

#[test]
fn footer_label_links_to_matching_section() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "content/Despegables/Des4-Cobertura Nacional.txt", "Lima\n");
    write(tmp.path(), "content/Botones/Datos/1.Total.txt", "Total\n100\n");
    write(tmp.path(), "content/Botones/Datos/Pie.txt", "Detalle en <COBERTURA!>\n");

    let page = build(&tmp);
    assert!(body(&page).contains(r#"data-open="sec-04""#));
}

#[test]
fn inline_markup_and_escaping() {
    let tmp = TempDir::new().unwrap();
    write(
        tmp.path(),
        "content/Contacto.txt",
        "**Escribanos** en <link:\"el portal\"=https://x.pe>\nA < B & \"C\"\n**oops\n",
    );

    let page = build(&tmp);
    let body = body(&page);
    assert!(body.contains("<strong>Escribanos</strong>"));
    assert!(body.contains(r#"<a href="https://x.pe" target="_blank" rel="noopener">el portal</a>"#));
    assert!(body.contains("A &lt; B &amp; &quot;C&quot;"));
    assert!(body.contains("<p>**oops</p>"));
}

#[test]
fn windows_1252_content_decodes() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "content/Titulo.txt", b"Observatorio\nInformaci\xF3n vial\n");

    let page = build(&tmp);
    assert!(page.contains("<h1>Información vial</h1>"));
}

#[test]
fn rebuilding_is_byte_identical() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "content/Titulo.txt", "Eyebrow\nTitulo\nSub\n");
    write(tmp.path(), "content/Despegables/Des1-A.txt", "uno <https://a.pe>\n");
    write(tmp.path(), "content/Botones/G/1.X.txt", "X\n*1*\n");
    write(tmp.path(), "content/Redes.txt", "x.png <https://x.com/a>\n");

    let first = build(&tmp);
    let second = build(&tmp);
    assert_eq!(first, second);
}

#[test]
fn hero_uses_jpg_when_png_missing() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("content")).unwrap();
    write(tmp.path(), "site/assets/img/im_principal.jpg", "jpg");

    let page = build(&tmp);
    assert!(page.contains(r#"src="assets/img/im_principal.jpg""#));
}

#[test]
fn site_config_changes_presentation() {
    let tmp = TempDir::new().unwrap();
    write(
        tmp.path(),
        "content/site.toml",
        "lang = \"en\"\nfallback_title = \"Landing\"\n[colors]\nlink = \"#00ff00\"\n",
    );

    let page = build(&tmp);
    assert!(page.contains(r#"<html lang="en">"#));
    assert!(page.contains("<title>Landing</title>"));
    assert!(page.contains("--color-link: #00ff00;"));
}

#[test]
fn unknown_site_config_key_fails_scan() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "content/site.toml", "colour = \"red\"\n");

    let result = scan::load_site(&tmp.path().join("content"));
    assert!(matches!(result, Err(scan::ScanError::Config(_))));
}
