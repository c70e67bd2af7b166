//! CLI output formatting for the scan, check and build commands.
//!
//! # Information-First Display
//!
//! Output reads as a content inventory: every entity leads with its positional
//! index and title, with details (anchor ids, urls, footer targets) on
//! indented context lines.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Header
//!     Eyebrow: Observatorio Nacional de Seguridad Vial
//!     Title: Informe Anual de Siniestralidad
//!
//! Body (2 paragraphs)
//!
//! Sections
//! 001 Metodología (2 items)
//!     Anchor: sec-01
//!
//! Indicators
//! 001 Indicadores (3 buttons)
//!     001 Fallecidos
//!     Footer: Revise la <Cobertura> y la <Metodologia> de cálculo.
//!         Cobertura → sec-02
//!
//! Config
//!     site.toml
//! ```
//!
//! ## Build
//!
//! ```text
//! Page → index.html
//!     Hero: assets/img/im_principal.png
//! Generated 3 sections, 1 button group, 3 buttons
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::config::CONFIG_FILE;
use crate::generate::Generated;
use crate::links::{footer_labels, resolve_section};
use crate::types::{ButtonGroup, Content, Section};
use std::path::Path;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// `1 item`, `3 items`.
fn plural(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}

/// Format an entity header: positional index + title + count detail.
///
/// ```text
/// 001 Metodología (2 items)
/// ```
fn entity_header(index: usize, title: &str, detail: &str) -> String {
    format!("{} {} ({})", format_index(index), title, detail)
}

/// Footer label resolution lines: `Label → sec-NN` or `Label (unresolved)`.
fn footer_targets(footer: &str, sections: &[Section], depth: usize) -> Vec<String> {
    footer_labels(footer)
        .into_iter()
        .map(|label| match resolve_section(label, sections) {
            Some(section) => format!("{}{} \u{2192} {}", indent(depth), label, section.anchor_id()),
            None => format!("{}{} (unresolved)", indent(depth), label),
        })
        .collect()
}

fn count_buttons(groups: &[ButtonGroup]) -> usize {
    groups.iter().map(|g| g.buttons.len()).sum()
}

// ============================================================================
// Scan output
// ============================================================================

/// Format the content inventory found under `source_root`.
pub fn format_scan_output(content: &Content, source_root: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Header".to_string());
    let header = &content.header;
    for (label, value) in [
        ("Eyebrow", &header.eyebrow),
        ("Title", &header.title),
        ("Subtitle", &header.subtitle),
    ] {
        if !value.is_empty() {
            lines.push(format!("{}{}: {}", indent(1), label, value));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Body ({})",
        plural(content.body.len(), "paragraph", "paragraphs")
    ));

    if !content.sections.is_empty() {
        lines.push(String::new());
        lines.push("Sections".to_string());
        for (i, section) in content.sections.iter().enumerate() {
            lines.push(entity_header(
                i + 1,
                &section.title,
                &plural(section.items.len(), "item", "items"),
            ));
            lines.push(format!("{}Anchor: {}", indent(1), section.anchor_id()));
        }
    }

    if !content.button_groups.is_empty() {
        lines.push(String::new());
        lines.push("Indicators".to_string());
        for (i, group) in content.button_groups.iter().enumerate() {
            lines.push(entity_header(
                i + 1,
                &group.title,
                &plural(group.buttons.len(), "button", "buttons"),
            ));
            for (j, button) in group.buttons.iter().enumerate() {
                lines.push(format!("{}{} {}", indent(1), format_index(j + 1), button.title));
            }
            if !group.footer.is_empty() {
                lines.push(format!("{}Footer: {}", indent(1), group.footer));
                lines.extend(footer_targets(&group.footer, &content.sections, 2));
            }
        }
    }

    if let Some(block) = &content.beneficiaries {
        lines.push(String::new());
        lines.push("Beneficiaries".to_string());
        lines.push(format!("{}Lead: {}", indent(1), block.lead));
        for line in &block.lines {
            lines.push(format!("{}{}", indent(1), line));
        }
        if let Some(button) = &block.button {
            lines.push(format!(
                "{}Button: {} \u{2192} {}",
                indent(1),
                button.text,
                button.url
            ));
        }
    }

    if let Some(block) = &content.registration {
        lines.push(String::new());
        lines.push(format!("Registration: {}", block.title));
        for line in &block.lines {
            lines.push(format!("{}{}", indent(1), line));
        }
        for button in &block.buttons {
            lines.push(format!(
                "{}Button: {} \u{2192} {}",
                indent(1),
                button.text,
                button.url
            ));
        }
    }

    if let Some(contact) = &content.contact {
        lines.push(String::new());
        lines.push(format!(
            "Contact ({})",
            plural(contact.lines.len(), "line", "lines")
        ));
        for link in &contact.social {
            lines.push(format!("{}{} \u{2192} {}", indent(1), link.name, link.url));
        }
    }

    if source_root.join(CONFIG_FILE).is_file() {
        lines.push(String::new());
        lines.push("Config".to_string());
        lines.push(format!("{}{}", indent(1), CONFIG_FILE));
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(content: &Content, source_root: &Path) {
    for line in format_scan_output(content, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Check output
// ============================================================================

/// Format a summary of what a build would render, with any problems found.
///
/// Problems are unresolved footer labels and a missing hero image; neither
/// stops a build.
pub fn format_check_output(content: &Content, hero_src: &str, hero_found: bool) -> Vec<String> {
    let mut problems = Vec::new();

    if !hero_found {
        problems.push(format!("{}Hero image not found: {}", indent(1), hero_src));
    }
    for group in &content.button_groups {
        for label in footer_labels(&group.footer) {
            if resolve_section(label, &content.sections).is_none() {
                problems.push(format!(
                    "{}{}: footer label <{}> matches no section",
                    indent(1),
                    group.title,
                    label
                ));
            }
        }
    }

    let mut lines = vec![summary_line("Would render", content)];
    if problems.is_empty() {
        lines.push("No problems found".to_string());
    } else {
        lines.push(format!("Warnings ({})", problems.len()));
        lines.extend(problems);
    }
    lines
}

/// Print check output to stdout.
pub fn print_check_output(content: &Content, hero_src: &str, hero_found: bool) {
    for line in format_check_output(content, hero_src, hero_found) {
        println!("{}", line);
    }
}

// ============================================================================
// Build output
// ============================================================================

fn summary_line(verb: &str, content: &Content) -> String {
    format!(
        "{} {}, {}, {}",
        verb,
        plural(content.sections.len(), "section", "sections"),
        plural(content.button_groups.len(), "button group", "button groups"),
        plural(count_buttons(&content.button_groups), "button", "buttons"),
    )
}

/// Format build output: the written page, the hero reference and totals.
pub fn format_generate_output(content: &Content, generated: &Generated) -> Vec<String> {
    let mut lines = vec![format!("Page \u{2192} {}", generated.path.display())];
    if generated.hero_found {
        lines.push(format!("{}Hero: {}", indent(1), generated.hero_src));
    } else {
        lines.push(format!("{}Hero: {} (missing)", indent(1), generated.hero_src));
    }
    lines.push(summary_line("Generated", content));
    lines
}

/// Print build output to stdout.
pub fn print_generate_output(content: &Content, generated: &Generated) {
    for line in format_generate_output(content, generated) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
