//! Footer cross-references from indicator groups to accordion sections.
//!
//! A group footer can point at a section by writing part of its title in angle
//! brackets:
//!
//! ```text
//! Ver la metodología en <Cobertura>.
//! ```
//!
//! Labels and section titles are compared after [`normalize`], so accents,
//! case and punctuation never matter. A label matches when its normalized form
//! is a substring of the normalized section title; the first section in
//! accordion order wins. Unmatched labels render as plain inline markup with
//! the brackets removed.

use crate::markup::render_inline;
use crate::types::Section;
use maud::{Markup, html};
use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

static BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("Invalid label regex"));

/// Fold text for label matching: strip diacritics, lowercase, keep `[a-z0-9]`.
///
/// - `"Cobertura Nacional"` → `"coberturanacional"`
/// - `"¡COBERTURA!"` → `"cobertura"`
/// - `"Vía Pública"` → `"viapublica"`
pub fn normalize(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Find the first section whose title contains `label` after normalization.
///
/// Labels that normalize to nothing never match.
pub fn resolve_section<'a>(label: &str, sections: &'a [Section]) -> Option<&'a Section> {
    let needle = normalize(label);
    if needle.is_empty() {
        return None;
    }
    sections
        .iter()
        .find(|section| normalize(&section.title).contains(&needle))
}

/// A piece of footer text: either plain inline markup or a bracketed label.
#[derive(Debug, PartialEq)]
enum Segment<'a> {
    Plain(&'a str),
    Label(&'a str),
}

fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut last = 0;
    for m in BRACKETED.find_iter(text) {
        if m.start() > last {
            out.push(Segment::Plain(&text[last..m.start()]));
        }
        let inner = &text[m.start() + 1..m.end() - 1];
        out.push(Segment::Label(inner.trim()));
        last = m.end();
    }
    if last < text.len() {
        out.push(Segment::Plain(&text[last..]));
    }
    out
}

/// Bracketed labels in a footer, trimmed, in text order.
pub fn footer_labels(text: &str) -> Vec<&str> {
    segments(text)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Label(label) => Some(label),
            Segment::Plain(_) => None,
        })
        .collect()
}

/// Render a group footer, turning resolvable labels into section deep links.
pub fn render_footer(text: &str, sections: &[Section]) -> Markup {
    html! {
        @for segment in segments(text) {
            @match segment {
                Segment::Plain(plain) => { (render_inline(plain)) }
                Segment::Label(label) => {
                    @if let Some(section) = resolve_section(label, sections) {
                        a.indicator-link href="#" data-open=(section.anchor_id()) {
                            (render_inline(label))
                        }
                    } @else {
                        (render_inline(label))
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(order: u32, title: &str) -> Section {
        Section {
            order,
            title: title.to_string(),
            items: vec![],
        }
    }

    #[test]
    fn normalize_strips_accents_case_and_punctuation() {
        assert_eq!(normalize("Cobertura"), "cobertura");
        assert_eq!(normalize("COBERTURA!"), "cobertura");
        assert_eq!(normalize("Vía Pública, 2024"), "viapublica2024");
    }

    #[test]
    fn normalize_handles_precomposed_and_decomposed_forms() {
        assert_eq!(normalize("Educaci\u{f3}n"), normalize("Educacio\u{301}n"));
    }

    #[test]
    fn normalize_drops_non_latin_letters() {
        assert_eq!(normalize("Señal ß"), "senal");
    }

    #[test]
    fn label_matches_section_by_substring() {
        let sections = vec![section(1, "Metodología"), section(2, "Cobertura Nacional")];
        let found = resolve_section("Cobertura", &sections).unwrap();
        assert_eq!(found.order, 2);
    }

    #[test]
    fn label_match_ignores_accents_and_case() {
        let sections = vec![section(1, "Metodología del estudio")];
        assert!(resolve_section("METODOLOGIA", &sections).is_some());
        assert!(resolve_section("metodología!", &sections).is_some());
    }

    #[test]
    fn first_matching_section_wins() {
        let sections = vec![section(1, "Datos regionales"), section(2, "Datos")];
        assert_eq!(resolve_section("datos", &sections).unwrap().order, 1);
    }

    #[test]
    fn punctuation_only_label_never_matches() {
        let sections = vec![section(1, "Cobertura")];
        assert!(resolve_section("!!", &sections).is_none());
    }

    #[test]
    fn segments_split_on_brackets() {
        assert_eq!(
            segments("Ver < Cobertura > y más"),
            vec![
                Segment::Plain("Ver "),
                Segment::Label("Cobertura"),
                Segment::Plain(" y más"),
            ]
        );
    }

    #[test]
    fn footer_labels_in_order() {
        assert_eq!(
            footer_labels("Revise la <Cobertura> y la\n<Metodologia> de cálculo."),
            vec!["Cobertura", "Metodologia"]
        );
        assert!(footer_labels("sin etiquetas").is_empty());
    }

    #[test]
    fn footer_link_targets_section_id() {
        let sections = vec![section(3, "Cobertura Nacional")];
        let html = render_footer("Detalle en <Cobertura>.", &sections).into_string();
        assert!(html.starts_with("Detalle en <a "));
        assert!(html.contains(r#"class="indicator-link""#));
        assert!(html.contains(r#"data-open="sec-03""#));
        assert!(html.ends_with(">Cobertura</a>."));
    }

    #[test]
    fn unresolved_label_renders_without_brackets() {
        let sections = vec![section(1, "Cobertura")];
        let html = render_footer("Ver <Anexos> *pronto*", &sections).into_string();
        assert_eq!(html, "Ver Anexos <strong>pronto</strong>");
    }

    #[test]
    fn label_markup_is_rendered_inside_link() {
        let sections = vec![section(1, "Cobertura")];
        let html = render_footer("<**Cobertura**>", &sections).into_string();
        assert!(html.contains(r#"data-open="sec-01""#));
        assert!(html.contains("<strong>Cobertura</strong>"));
    }
}
