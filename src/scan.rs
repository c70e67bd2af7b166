//! Content loading.
//!
//! Stage 1 of the pipeline. Reads the content root and builds the immutable
//! [`Content`] record tree the renderer consumes.
//!
//! ## Directory Structure
//!
//! ```text
//! content/                          # Content root
//! ├── site.toml                     # Site configuration (optional)
//! ├── Titulo.txt                    # eyebrow / title / subtitle
//! ├── Cuerpo.txt                    # one paragraph per line
//! ├── BENEFICIARIOS.txt             # lead, lines, trailing `text <url>` button
//! ├── REGISTRO DE USUARIOS.txt      # heading + `text <url>` buttons
//! ├── Contacto.txt                  # contact paragraphs
//! ├── Redes.txt                     # `icon.png <url>` social links
//! ├── Despegables/
//! │   ├── Des1-Metodología.txt      # accordion section, order 1
//! │   └── Des2-Cobertura.txt        # items, optionally `text <url>`
//! └── Botones/
//!     └── Indicadores/              # one button group per directory
//!         ├── 1.Fallecidos.txt      # card, order 1
//!         ├── 2.Heridos.txt
//!         └── Pie.txt               # footer with <Section> references
//! ```
//!
//! Every file is optional. Missing files and directories produce empty or
//! absent records; names that do not follow the conventions are skipped.
//!
//! ## Ordering
//!
//! Directory listings are sorted by file name before records are sorted by
//! their numeric order, so equal orders always keep the same relative order.

use crate::config::{self, SiteConfig};
use crate::naming::{self, split_link};
use crate::text::read_lines;
use crate::types::{
    Beneficiaries, Button, ButtonGroup, Contact, Content, LinkButton, PageHeader, Registration,
    Section, SectionItem, SocialLink,
};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const TITLE_FILE: &str = "Titulo.txt";
pub const BODY_FILE: &str = "Cuerpo.txt";
pub const SECTIONS_DIR: &str = "Despegables";
pub const BUTTONS_DIR: &str = "Botones";
pub const FOOTER_FILE: &str = "Pie.txt";
pub const BENEFICIARIES_FILE: &str = "BENEFICIARIOS.txt";
pub const REGISTRATION_PREFIX: &str = "REGISTRO";
pub const CONTACT_FILE: &str = "Contacto.txt";
pub const SOCIAL_FILE: &str = "Redes.txt";

const BENEFICIARIES_TITLE: &str = "BENEFICIARIOS";

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Content plus the site configuration found next to it.
#[derive(Debug, Serialize)]
pub struct Site {
    pub content: Content,
    pub config: SiteConfig,
}

/// Load the content root and its `site.toml` (defaults if absent).
pub fn load_site(root: &Path) -> Result<Site, ScanError> {
    let content = scan(root)?;
    let config = config::load_config(root)?;
    Ok(Site { content, config })
}

/// Load every content file under `root`.
pub fn scan(root: &Path) -> Result<Content, ScanError> {
    let content = Content {
        header: parse_header(root)?,
        body: read_lines(&root.join(BODY_FILE))?,
        sections: parse_sections(&root.join(SECTIONS_DIR))?,
        button_groups: parse_button_groups(&root.join(BUTTONS_DIR))?,
        beneficiaries: parse_beneficiaries(&root.join(BENEFICIARIES_FILE))?,
        registration: parse_registration(root)?,
        contact: parse_contact(root)?,
    };

    tracing::info!(
        sections = content.sections.len(),
        button_groups = content.button_groups.len(),
        "loaded content from {}",
        root.display()
    );
    Ok(content)
}

fn parse_header(root: &Path) -> Result<PageHeader, ScanError> {
    let mut lines = read_lines(&root.join(TITLE_FILE))?.into_iter();
    Ok(PageHeader {
        eyebrow: lines.next().unwrap_or_default(),
        title: lines.next().unwrap_or_default(),
        subtitle: lines.next().unwrap_or_default(),
    })
}

/// Parse `Des<N>-<Title>.txt` files into sections sorted by order.
fn parse_sections(dir: &Path) -> Result<Vec<Section>, ScanError> {
    let mut sections = Vec::new();
    for path in list_files(dir)? {
        let name = file_name(&path);
        let Some(parsed) = naming::parse_section_file(&name) else {
            if name.starts_with("Des") {
                tracing::debug!("skipping section file with unexpected name: {name}");
            }
            continue;
        };

        let items = read_lines(&path)?
            .into_iter()
            .map(|line| match split_link(&line) {
                (text, Some(url)) => SectionItem {
                    text,
                    url: Some(url),
                },
                (_, None) => SectionItem {
                    text: line,
                    url: None,
                },
            })
            .collect();

        sections.push(Section {
            order: parsed.number,
            title: parsed.title,
            items,
        });
    }

    sections.sort_by_key(|s| s.order);
    Ok(sections)
}

/// Parse each directory under `Botones/` into a button group.
///
/// Groups without a single valid button are dropped.
fn parse_button_groups(dir: &Path) -> Result<Vec<ButtonGroup>, ScanError> {
    let mut groups = Vec::new();
    for group_dir in list_dirs(dir)? {
        let mut footer = String::new();
        let mut buttons = Vec::new();

        for path in list_files(&group_dir)? {
            let name = file_name(&path);
            if name.eq_ignore_ascii_case(FOOTER_FILE) {
                footer = read_lines(&path)?.join(" ");
                continue;
            }
            let Some(parsed) = naming::parse_button_file(&name) else {
                tracing::debug!("skipping button file with unexpected name: {name}");
                continue;
            };
            buttons.push(Button {
                order: parsed.number,
                title: parsed.title,
                text: read_lines(&path)?.join(" "),
            });
        }

        if buttons.is_empty() {
            tracing::debug!("skipping empty button group: {}", group_dir.display());
            continue;
        }

        buttons.sort_by_key(|b| b.order);
        groups.push(ButtonGroup {
            title: file_name(&group_dir),
            buttons,
            footer,
        });
    }
    Ok(groups)
}

/// Parse `BENEFICIARIOS.txt`.
///
/// The first line is the lead. With three or more lines the last one is a
/// `text <url>` button, kept only when it carries a url.
fn parse_beneficiaries(path: &Path) -> Result<Option<Beneficiaries>, ScanError> {
    let mut lines = read_lines(path)?;
    if lines.is_empty() {
        return Ok(None);
    }

    let button = if lines.len() > 2 {
        lines.pop().and_then(|line| match split_link(&line) {
            (text, Some(url)) => Some(LinkButton { text, url }),
            (_, None) => None,
        })
    } else {
        None
    };

    let lead = lines.remove(0);
    Ok(Some(Beneficiaries {
        title: BENEFICIARIES_TITLE.to_string(),
        lead,
        lines,
        button,
    }))
}

/// Parse the first `REGISTRO*.txt` in name order.
///
/// The title is the file stem; the first line is a paragraph and every
/// further line with a url is a button.
fn parse_registration(root: &Path) -> Result<Option<Registration>, ScanError> {
    let Some(path) = list_files(root)?.into_iter().find(|p| {
        let name = file_name(p);
        name.starts_with(REGISTRATION_PREFIX) && name.ends_with(".txt")
    }) else {
        return Ok(None);
    };

    let mut lines = read_lines(&path)?;
    if lines.is_empty() {
        return Ok(None);
    }
    let rest = lines.split_off(1);
    let buttons = rest
        .iter()
        .filter_map(|line| match split_link(line) {
            (text, Some(url)) => Some(LinkButton { text, url }),
            (_, None) => {
                tracing::debug!("registration line without url ignored: {line}");
                None
            }
        })
        .collect();

    let title = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(Some(Registration {
        title,
        lines,
        buttons,
    }))
}

/// Parse `Contacto.txt` and `Redes.txt` into the footer block.
fn parse_contact(root: &Path) -> Result<Option<Contact>, ScanError> {
    let lines = read_lines(&root.join(CONTACT_FILE))?;
    let social: Vec<SocialLink> = read_lines(&root.join(SOCIAL_FILE))?
        .into_iter()
        .filter_map(|line| match split_link(&line) {
            (name, Some(url)) if !name.is_empty() && !url.is_empty() => {
                Some(SocialLink { name, url })
            }
            _ => {
                tracing::debug!("social link without name or url ignored: {line}");
                None
            }
        })
        .collect();

    if lines.is_empty() && social.is_empty() {
        return Ok(None);
    }
    Ok(Some(Contact { lines, social }))
}

// ============================================================================
// Directory listing
// ============================================================================

/// Regular files directly inside `dir`, sorted by name. Missing dir → empty.
fn list_files(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    list_entries(dir, |p| p.is_file())
}

/// Subdirectories directly inside `dir`, sorted by name. Missing dir → empty.
fn list_dirs(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    list_entries(dir, |p| p.is_dir())
}

fn list_entries(dir: &Path, keep: impl Fn(&Path) -> bool) -> Result<Vec<PathBuf>, ScanError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| !file_name(p).starts_with('.') && keep(p.as_path()))
        .collect();

    entries.sort();
    Ok(entries)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}
