//! Reading hand-edited content files.
//!
//! Content files are written by people in whatever editor is at hand, so the
//! same folder can mix UTF-8 (with or without a BOM) and legacy Windows-1252
//! files. Every file goes through [`decode`], which tries each encoding in
//! [`DECODERS`] strictly and only then falls back to lossy UTF-8. Decoding
//! never fails; at worst undecodable bytes become `U+FFFD`.
//!
//! After decoding, files are consumed as *content lines*: every line trimmed,
//! blank lines dropped. See [`content_lines`].

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use std::fs;
use std::io;
use std::path::Path;

/// Encodings tried in order. The first strict decode that succeeds wins.
pub const DECODERS: &[&Encoding] = &[UTF_8, WINDOWS_1252];

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Line separators recognized when splitting a decoded file.
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Decode raw file bytes into text.
pub fn decode(bytes: &[u8]) -> String {
    for encoding in DECODERS {
        let input = if *encoding == UTF_8 {
            bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)
        } else {
            bytes
        };
        if let Some(text) = encoding.decode_without_bom_handling_and_without_replacement(input) {
            if *encoding != UTF_8 {
                tracing::debug!(encoding = encoding.name(), "decoded with fallback encoding");
            }
            return text.into_owned();
        }
    }
    tracing::debug!("no strict decoder matched, decoding lossily");
    String::from_utf8_lossy(bytes).into_owned()
}

/// Split decoded text into trimmed, non-blank lines.
pub fn content_lines(text: &str) -> Vec<String> {
    text.split(LINE_BREAKS)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Read a file and return its decoded text.
///
/// Returns `Ok(None)` when the path is not a regular file, so callers can
/// treat a missing file as "no content".
pub fn read_text(path: &Path) -> io::Result<Option<String>> {
    if !path.is_file() {
        return Ok(None);
    }
    let bytes = fs::read(path)?;
    Ok(Some(decode(&bytes)))
}

/// Read a file as content lines. Missing files yield an empty list.
pub fn read_lines(path: &Path) -> io::Result<Vec<String>> {
    Ok(read_text(path)?
        .map(|text| content_lines(&text))
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn decodes_plain_utf8() {
        assert_eq!(decode("Cobertura Nacional".as_bytes()), "Cobertura Nacional");
    }

    #[test]
    fn strips_utf8_bom() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice("Título".as_bytes());
        assert_eq!(decode(&bytes), "Título");
    }

    #[test]
    fn falls_back_to_windows_1252() {
        // "Información" with ó as the single byte 0xF3
        let bytes = b"Informaci\xF3n";
        assert_eq!(decode(bytes), "Información");
    }

    #[test]
    fn windows_1252_specific_characters() {
        // 0x93/0x94 are curly quotes and 0x80 is the euro sign in cp1252
        let bytes = b"\x93hola\x94 \x80";
        assert_eq!(decode(bytes), "\u{201c}hola\u{201d} \u{20ac}");
    }

    #[test]
    fn undefined_cp1252_bytes_do_not_panic() {
        let bytes = b"a\x81b\x8Dc\x90";
        let text = decode(bytes);
        assert!(text.starts_with('a'));
        assert_eq!(text.chars().count(), 6);
    }

    #[test]
    fn content_lines_trims_and_drops_blanks() {
        let lines = content_lines("  uno \n\n\t\r\ndos\r\n   \ntres");
        assert_eq!(lines, vec!["uno", "dos", "tres"]);
    }

    #[test]
    fn content_lines_splits_on_bare_carriage_return() {
        assert_eq!(content_lines("a\rb"), vec!["a", "b"]);
    }

    #[test]
    fn content_lines_of_whitespace_is_empty() {
        assert!(content_lines(" \n \n\t").is_empty());
    }

    #[test]
    fn read_lines_missing_file_is_empty() {
        let tmp = TempDir::new().unwrap();
        let lines = read_lines(&tmp.path().join("Nada.txt")).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn read_text_directory_is_none() {
        let tmp = TempDir::new().unwrap();
        assert!(read_text(tmp.path()).unwrap().is_none());
    }

    #[test]
    fn read_lines_decodes_legacy_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("Cuerpo.txt");
        std::fs::write(&path, b"Se\xF1al\r\n\r\nV\xEDa").unwrap();
        assert_eq!(read_lines(&path).unwrap(), vec!["Señal", "Vía"]);
    }
}
