//! HTML page generation.
//!
//! Stage 2 of the pipeline. Takes the loaded [`Site`] and writes one
//! self-contained HTML document.
//!
//! ## Page Regions
//!
//! Regions are emitted in a fixed order; regions without content are left out
//! entirely:
//!
//! ```text
//! header → hero → body → divider → beneficiaries → indicators
//!        → registration → accordion → contact
//! ```
//!
//! The body always renders, with one empty paragraph when `Cuerpo.txt` is
//! missing. The accordion container always renders; its first section starts
//! expanded.
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time and inlined into the page:
//! - `static/style.css`: layout (palette injected from `site.toml`)
//! - `static/page.js`: accordion toggle, footer deep links, load staging
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! All content text is escaped by maud; inline markup goes through
//! [`crate::markup`] and footer cross-references through [`crate::links`].

use crate::config::{self, ImagesConfig, SiteConfig};
use crate::links::render_footer;
use crate::markup::render_inline;
use crate::scan::Site;
use crate::types::{Beneficiaries, ButtonGroup, Contact, Content, PageHeader, Registration, Section};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// What [`generate`] wrote.
#[derive(Debug, Clone, PartialEq)]
pub struct Generated {
    /// Path of the HTML file.
    pub path: PathBuf,
    /// Hero image reference used in the page.
    pub hero_src: String,
    /// Whether the hero image was found on disk.
    pub hero_found: bool,
    /// Size of the document in bytes.
    pub bytes: usize,
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/page.js");

/// Render the page and write it to `output`.
///
/// Asset paths are resolved against the directory that contains `output`.
pub fn generate(site: &Site, output: &Path) -> Result<Generated, GenerateError> {
    let root = site_root(output);
    let (hero_src, hero_found) = choose_hero_image(root, &site.config.images);
    if !hero_found {
        tracing::debug!("no hero image found under {}, using {hero_src}", root.display());
    }

    let page = render_page(&site.content, &site.config, &hero_src).into_string();

    if root != Path::new(".") {
        fs::create_dir_all(root)?;
    }
    fs::write(output, &page)?;
    tracing::info!(bytes = page.len(), "wrote {}", output.display());

    Ok(Generated {
        path: output.to_path_buf(),
        hero_src,
        hero_found,
        bytes: page.len(),
    })
}

/// Directory the page's relative asset paths resolve against.
pub fn site_root(output: &Path) -> &Path {
    output
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."))
}

/// Pick the hero image: the PNG if present, else the JPG, else the PNG anyway.
///
/// Returns the reference to use and whether it exists under `site_root`.
pub fn choose_hero_image(site_root: &Path, images: &ImagesConfig) -> (String, bool) {
    if site_root.join(&images.hero_png).is_file() {
        (images.hero_png.clone(), true)
    } else if site_root.join(&images.hero_jpg).is_file() {
        (images.hero_jpg.clone(), true)
    } else {
        (images.hero_png.clone(), false)
    }
}

/// Full stylesheet: palette variables followed by the static sheet.
pub fn stylesheet(config: &SiteConfig) -> String {
    format!("{}\n\n{}", config::generate_theme_css(config), CSS_STATIC)
}

/// Document title: page title, else eyebrow, else the configured fallback.
fn document_title<'a>(header: &'a PageHeader, config: &'a SiteConfig) -> &'a str {
    [header.title.as_str(), header.eyebrow.as_str()]
        .into_iter()
        .find(|s| !s.is_empty())
        .unwrap_or(&config.fallback_title)
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, lang: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(lang) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta http-equiv="Cache-Control" content="no-cache, no-store, must-revalidate";
                meta http-equiv="Pragma" content="no-cache";
                meta http-equiv="Expires" content="0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
                script { (PreEscaped(JS)) }
            }
        }
    }
}

/// Renders eyebrow, title, subtitle and the logo link
fn page_header(header: &PageHeader, config: &SiteConfig) -> Markup {
    html! {
        header.page-header data-animate="1" {
            div {
                p.eyebrow { (header.eyebrow) }
                h1 { (header.title) }
                p.subtitle { (header.subtitle) }
            }
            a.logo-link href=(config.logo.href) target="_blank" rel="noopener" {
                img.logo src=(config.logo.src) alt=(config.logo.alt);
            }
        }
    }
}

fn hero_band(hero_src: &str, alt: &str) -> Markup {
    html! {
        section.hero-band data-animate="2" {
            div.hero {
                img src=(hero_src) alt=(alt);
            }
        }
    }
}

/// Body paragraphs are literal text; an empty body keeps one empty paragraph.
fn body_text(body: &[String]) -> Markup {
    html! {
        section.body-text data-animate="3" {
            @for line in body {
                p { (line) }
            }
            @if body.is_empty() {
                p {}
            }
        }
    }
}

fn beneficiaries_section(block: &Beneficiaries, images: &ImagesConfig) -> Markup {
    html! {
        section.beneficiaries data-animate="3" {
            div.beneficiaries-text {
                p.beneficiaries-title { (block.title) }
                p.beneficiaries-lead { (render_inline(&block.lead)) }
                @for line in &block.lines {
                    p { (render_inline(line)) }
                }
                @if let Some(button) = &block.button {
                    a.beneficiaries-button href=(button.url) target="_blank" rel="noopener" {
                        (render_inline(&button.text))
                    }
                }
            }
            div.beneficiaries-map {
                img src=(images.map) alt="Mapa";
            }
        }
    }
}

/// Renders every button group; footers may deep-link into `sections`.
fn indicator_section(groups: &[ButtonGroup], sections: &[Section], images: &ImagesConfig) -> Markup {
    html! {
        section.indicator-section data-animate="3" {
            @for group in groups {
                div.indicator-group {
                    h2.indicator-heading { (group.title) }
                    div.indicator-row {
                        @for button in &group.buttons {
                            div.indicator-card {
                                img.indicator-icon src=(images.indicator_icon(button.order)) alt="Icono";
                                p.indicator-title { (render_inline(&button.title)) }
                                p.indicator-text { (render_inline(&button.text)) }
                            }
                        }
                    }
                    @if !group.footer.is_empty() {
                        p.indicator-footer { (render_footer(&group.footer, sections)) }
                    }
                }
            }
        }
    }
}

fn registration_section(block: &Registration, images: &ImagesConfig) -> Markup {
    html! {
        section.registration-band data-animate="3" {
            div.registration {
                div.registration-media {
                    img src=(images.platform) alt="Plataforma";
                }
                div.registration-text {
                    p.registration-title { (block.title) }
                    @for line in &block.lines {
                        p { (render_inline(line)) }
                    }
                    @if !block.buttons.is_empty() {
                        div.registration-buttons {
                            @for button in &block.buttons {
                                a.registration-button href=(button.url) target="_blank" rel="noopener" {
                                    (render_inline(&button.text))
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Renders one accordion entry: toggle button plus panel.
fn accordion_item(section: &Section, expanded: bool) -> Markup {
    let panel_id = section.anchor_id();
    let button_id = format!("{panel_id}-btn");
    let (aria_expanded, aria_hidden) = if expanded { ("true", "false") } else { ("false", "true") };

    html! {
        div.sec-item {
            button.sec-btn.is-active[expanded] id=(button_id) type="button"
                aria-expanded=(aria_expanded) aria-controls=(panel_id) data-target=(panel_id) {
                span.sec-title { (section.title) }
                span.sec-arrow aria-hidden="true" { ">" }
            }
            div.sec-panel.is-active[expanded] id=(panel_id) role="region"
                aria-labelledby=(button_id) aria-hidden=(aria_hidden) {
                ul {
                    @for item in &section.items {
                        li {
                            @if let Some(url) = &item.url {
                                a href=(url) target="_blank" rel="noopener" { (item.text) }
                            } @else {
                                span { (item.text) }
                            }
                        }
                    }
                    @if section.items.is_empty() {
                        li { span {} }
                    }
                }
            }
        }
    }
}

fn accordion(sections: &[Section]) -> Markup {
    html! {
        section.sections data-animate="3" {
            div.accordion {
                @for (idx, section) in sections.iter().enumerate() {
                    (accordion_item(section, idx == 0))
                }
            }
        }
    }
}

fn contact_section(contact: &Contact, images: &ImagesConfig) -> Markup {
    html! {
        section.contact data-animate="3" {
            @for line in &contact.lines {
                p { (render_inline(line)) }
            }
            @if !contact.social.is_empty() {
                div.social-icons {
                    @for link in &contact.social {
                        a href=(link.url) target="_blank" rel="noopener" {
                            img src=(images.social_icon(&link.name)) alt=(link.name);
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Page Renderer
// ============================================================================

/// Render the whole document. Pure: same inputs, same bytes.
pub fn render_page(content: &Content, config: &SiteConfig, hero_src: &str) -> Markup {
    let images = &config.images;

    let page = html! {
        div.page {
            (page_header(&content.header, config))
            (hero_band(hero_src, &images.hero_alt))
            (body_text(&content.body))
            div.section-divider aria-hidden="true" {}
            @if let Some(block) = &content.beneficiaries {
                (beneficiaries_section(block, images))
            }
            @if !content.button_groups.is_empty() {
                (indicator_section(&content.button_groups, &content.sections, images))
            }
            @if let Some(block) = &content.registration {
                (registration_section(block, images))
            }
            (accordion(&content.sections))
            @if let Some(contact) = &content.contact {
                (contact_section(contact, images))
            }
        }
    };

    base_document(
        document_title(&content.header, config),
        &config.lang,
        &stylesheet(config),
        page,
    )
}

// ============================================================================
// Tests
// ============================================================================
