//! # Simple Landing
//!
//! Builds a single-page institutional landing site from a folder of plain
//! text files. Non-technical editors maintain the text files; this crate
//! turns them into one self-contained `index.html`.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Scan      content/  →  Content   (text files → structured records)
//! 2. Generate  Content   →  index.html (records → one HTML document)
//! ```
//!
//! Both stages are deterministic: the same content tree always renders the
//! same bytes. The renderer is a pure function from records to markup, so
//! unit tests exercise every page region without touching the filesystem.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — reads the content folder into a [`types::Content`] record |
//! | [`generate`] | Stage 2 — renders the page with Maud and writes it |
//! | [`text`] | Encoding-tolerant file reading and line cleanup |
//! | [`naming`] | `DesN-Title.txt`, `N.Title.txt` and `text <url>` parsers |
//! | [`markup`] | Inline emphasis and `<link:"label"=url>` rendering |
//! | [`links`] | Footer `<Label>` cross-references into accordion sections |
//! | [`config`] | `site.toml` loading, validation, merging, and palette CSS |
//! | [`types`] | Content records shared by scan, generate and output |
//! | [`output`] | CLI output formatting — content inventory and build results |
//!
//! # Content Folder
//!
//! ```text
//! content/
//! ├── Titulo.txt                 # eyebrow, title, subtitle
//! ├── Cuerpo.txt                 # body paragraphs
//! ├── Despegables/
//! │   └── Des1-Metodología.txt   # accordion section, one item per line
//! ├── Botones/
//! │   └── Indicadores/
//! │       ├── 1.Fallecidos.txt   # indicator card
//! │       └── Pie.txt            # group footer with <Label> links
//! ├── BENEFICIARIOS.txt
//! ├── REGISTRO DE USUARIOS.txt
//! ├── Contacto.txt
//! ├── Redes.txt
//! └── site.toml                  # optional presentation settings
//! ```
//!
//! Every file is optional. Missing files drop their region; malformed names
//! and lines are skipped. Only unreadable files, an invalid `site.toml` or an
//! unwritable output fail the build.
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/). All interpolated
//! text is escaped by default; the only raw HTML in the page is the inlined
//! stylesheet and script, both compiled into the binary.
//!
//! ## Tolerant Decoding
//!
//! Editors save files from whatever tool is at hand. [`text::decode`] accepts
//! UTF-8 (with or without BOM), falls back to Windows-1252, and never fails.

pub mod config;
pub mod generate;
pub mod links;
pub mod markup;
pub mod naming;
pub mod output;
pub mod scan;
pub mod text;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
