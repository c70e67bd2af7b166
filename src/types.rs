//! Content records shared by the loader and the renderer.
//!
//! The loader builds a [`Content`] once; the renderer only reads it. Every
//! record serializes to JSON so `simple-landing scan --json` can show exactly
//! what would be rendered.

use serde::Serialize;

/// Everything read from the content root.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Content {
    pub header: PageHeader,
    /// One paragraph per non-blank line of `Cuerpo.txt`.
    pub body: Vec<String>,
    /// Accordion sections, sorted by order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<Section>,
    /// Indicator button groups, sorted by directory name.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub button_groups: Vec<ButtonGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beneficiaries: Option<Beneficiaries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration: Option<Registration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
}

/// Eyebrow, title and subtitle from the first three lines of `Titulo.txt`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageHeader {
    pub eyebrow: String,
    pub title: String,
    pub subtitle: String,
}

/// A collapsible accordion section from `Despegables/Des<N>-<Title>.txt`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    /// Sort key from the filename number.
    pub order: u32,
    pub title: String,
    pub items: Vec<SectionItem>,
}

impl Section {
    /// In-page anchor id of the section panel, e.g. `sec-03`.
    pub fn anchor_id(&self) -> String {
        format!("sec-{:02}", self.order)
    }
}

/// One line of a section, optionally linking somewhere.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionItem {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A directory under `Botones/`: a row of indicator cards plus a footer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ButtonGroup {
    /// Directory name, shown as the group heading.
    pub title: String,
    /// Cards sorted by order. Never empty.
    pub buttons: Vec<Button>,
    /// `Pie.txt` lines joined by spaces; may contain `<LABEL>` references.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub footer: String,
}

/// An indicator card from `<N>.<Title>.txt`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Button {
    pub order: u32,
    pub title: String,
    /// File lines joined by spaces.
    pub text: String,
}

/// A `text <url>` call to action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkButton {
    pub text: String,
    pub url: String,
}

/// The `BENEFICIARIOS.txt` block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Beneficiaries {
    pub title: String,
    pub lead: String,
    pub lines: Vec<String>,
    /// Present only when the trailing line carried a `<url>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button: Option<LinkButton>,
}

/// The `REGISTRO*.txt` block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Registration {
    /// Filename stem, e.g. `REGISTRO DE USUARIOS`.
    pub title: String,
    pub lines: Vec<String>,
    pub buttons: Vec<LinkButton>,
}

/// Footer contact text and social links.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Contact {
    pub lines: Vec<String>,
    pub social: Vec<SocialLink>,
}

/// A `Redes.txt` entry. `name` doubles as the icon filename.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}
