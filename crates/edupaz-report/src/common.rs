//! Shared labels and OOXML packaging helpers.

use std::borrow::Cow;
use std::io::{Cursor, Write};

use anyhow::{Context, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use edupaz_model::GeneralField;

/// Form title, used as the first sheet row and the document title.
pub const FORM_TITLE: &str = "Información general de la Institución";

/// Document section heading above the general fields.
pub const GENERAL_SECTION: &str = "Información general";

/// Label of the institution name field.
pub const NAME_LABEL: &str = "Nombre de la Institución";

/// Label of the municipality field.
pub const MUNICIPALITY_LABEL: &str = "Municipio";

/// Sheet title row above the timeline table.
pub const TIMELINE_TITLE: &str = "Línea de tiempo";

/// Document section heading above the timeline table.
pub const TIMELINE_SECTION: &str = "Línea de tiempo – Escuela / Territorio";

/// Timeline column labels, in event field order.
pub const TIMELINE_HEADERS: [&str; 4] = [
    "Tiempo / época",
    "Contexto local: problemáticas confrontadas",
    "Hechos de transformaciones positivas",
    "Personas / organizaciones destacadas por su solidaridad",
];

/// Name of the single worksheet.
pub const SHEET_NAME: &str = "Datos";

/// Stand-in for empty values in the on-screen preview. Never exported.
pub const PREVIEW_PLACEHOLDER: &str = "—";

/// Prefix of every exported file name.
pub const FILENAME_PREFIX: &str = "Info_Institucion_";

/// OPC content types namespace.
pub const CONTENT_TYPES_NS: &str = "http://schemas.openxmlformats.org/package/2006/content-types";

/// OPC package relationships namespace.
pub const PACKAGE_RELS_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

/// Office document relationships namespace (`r:` prefix).
pub const OFFICE_RELS_NS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Relationship type of the package's main part.
pub const OFFICE_DOCUMENT_REL: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";

/// Relationship type of a styles part.
pub const STYLES_REL: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";

/// Label shown for a general field.
pub fn general_label(field: GeneralField) -> &'static str {
    match field {
        GeneralField::Name => NAME_LABEL,
        GeneralField::Municipality => MUNICIPALITY_LABEL,
    }
}

/// Whether `ch` is allowed in XML 1.0 character data.
pub fn is_xml_char(ch: char) -> bool {
    matches!(ch, '\t' | '\n' | '\r' | '\u{20}'..='\u{d7ff}' | '\u{e000}'..='\u{fffd}')
        || ch >= '\u{10000}'
}

/// Drop characters XML cannot carry, such as pasted control codes.
pub fn strip_invalid_xml(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_xml_char) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.chars().filter(|ch| is_xml_char(*ch)).collect())
    }
}

/// Turn `\r\n` and lone `\r` into `\n`.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// In-memory OPC package (the zip container shared by XLSX and DOCX).
pub struct Package {
    zip: ZipWriter<Cursor<Vec<u8>>>,
    options: SimpleFileOptions,
}

impl Package {
    pub fn new() -> Self {
        // Fixed timestamps keep the archive bytes stable for the same input.
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default());
        Self {
            zip: ZipWriter::new(Cursor::new(Vec::new())),
            options,
        }
    }

    /// Add a part whose content is already serialized.
    pub fn add_part(&mut self, name: &str, content: &[u8]) -> Result<()> {
        self.zip
            .start_file(name, self.options)
            .with_context(|| format!("start part {name}"))?;
        self.zip
            .write_all(content)
            .with_context(|| format!("write part {name}"))?;
        Ok(())
    }

    /// Add an XML part, writing the declaration before handing over the writer.
    pub fn add_xml_part<F>(&mut self, name: &str, build: F) -> Result<()>
    where
        F: FnOnce(&mut Writer<Vec<u8>>) -> Result<()>,
    {
        let mut xml = Writer::new(Vec::new());
        xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
        build(&mut xml).with_context(|| format!("build part {name}"))?;
        self.add_part(name, &xml.into_inner())
    }

    pub fn finish(self) -> Result<Vec<u8>> {
        let cursor = self.zip.finish().context("finish package")?;
        Ok(cursor.into_inner())
    }
}

/// One `<Override>` entry of `[Content_Types].xml`.
pub struct ContentOverride<'a> {
    pub part: &'a str,
    pub content_type: &'a str,
}

/// Write `[Content_Types].xml` with the `rels`/`xml` defaults.
pub fn write_content_types(package: &mut Package, overrides: &[ContentOverride<'_>]) -> Result<()> {
    package.add_xml_part("[Content_Types].xml", |xml| {
        let mut root = BytesStart::new("Types");
        root.push_attribute(("xmlns", CONTENT_TYPES_NS));
        xml.write_event(Event::Start(root))?;
        for (extension, content_type) in [
            ("rels", "application/vnd.openxmlformats-package.relationships+xml"),
            ("xml", "application/xml"),
        ] {
            let mut node = BytesStart::new("Default");
            node.push_attribute(("Extension", extension));
            node.push_attribute(("ContentType", content_type));
            xml.write_event(Event::Empty(node))?;
        }
        for entry in overrides {
            let mut node = BytesStart::new("Override");
            node.push_attribute(("PartName", entry.part));
            node.push_attribute(("ContentType", entry.content_type));
            xml.write_event(Event::Empty(node))?;
        }
        xml.write_event(Event::End(BytesEnd::new("Types")))?;
        Ok(())
    })
}

/// Write a relationships part; each entry is `(id, type, target)`.
pub fn write_relationships(
    package: &mut Package,
    part: &str,
    relationships: &[(&str, &str, &str)],
) -> Result<()> {
    package.add_xml_part(part, |xml| {
        let mut root = BytesStart::new("Relationships");
        root.push_attribute(("xmlns", PACKAGE_RELS_NS));
        xml.write_event(Event::Start(root))?;
        for (id, kind, target) in relationships {
            let mut node = BytesStart::new("Relationship");
            node.push_attribute(("Id", *id));
            node.push_attribute(("Type", *kind));
            node.push_attribute(("Target", *target));
            xml.write_event(Event::Empty(node))?;
        }
        xml.write_event(Event::End(BytesEnd::new("Relationships")))?;
        Ok(())
    })
}

/// Write `<name xml:space="preserve">text</name>`.
pub fn write_preserved_text<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    let mut start = BytesStart::new(name);
    start.push_attribute(("xml:space", "preserve"));
    writer.write_event(Event::Start(start))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use zip::ZipArchive;

    use super::*;

    fn read_part(bytes: &[u8], name: &str) -> String {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut out = String::new();
        file.read_to_string(&mut out).unwrap();
        out
    }

    #[test]
    fn test_general_labels() {
        assert_eq!(general_label(GeneralField::Name), "Nombre de la Institución");
        assert_eq!(general_label(GeneralField::Municipality), "Municipio");
    }

    #[test]
    fn test_xml_char_ranges() {
        for ch in ['\t', '\n', '\r', ' ', 'á', '\u{fffd}', '\u{1f600}'] {
            assert!(is_xml_char(ch), "{ch:?}");
        }
        for ch in ['\u{0}', '\u{1}', '\u{b}', '\u{c}', '\u{1f}', '\u{fffe}', '\u{ffff}'] {
            assert!(!is_xml_char(ch), "{ch:?}");
        }
    }

    #[test]
    fn test_strip_invalid_xml() {
        assert_eq!(strip_invalid_xml("pasted\u{1}text\u{b}tab"), "pastedtexttab");
        assert!(matches!(strip_invalid_xml("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn test_normalize_newlines() {
        assert_eq!(normalize_newlines("a\r\nb\rc\n"), "a\nb\nc\n");
        assert!(matches!(normalize_newlines("a\nb"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_xml_part_has_declaration_and_escapes_text() {
        let mut package = Package::new();
        package
            .add_xml_part("part.xml", |xml| write_preserved_text(xml, "t", "a < b & c"))
            .unwrap();
        let bytes = package.finish().unwrap();

        let part = read_part(&bytes, "part.xml");
        assert!(part.starts_with(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#));
        assert!(part.ends_with(r#"<t xml:space="preserve">a &lt; b &amp; c</t>"#));
    }

    #[test]
    fn test_content_types_lists_overrides() {
        let mut package = Package::new();
        write_content_types(
            &mut package,
            &[ContentOverride {
                part: "/word/document.xml",
                content_type: "application/test+xml",
            }],
        )
        .unwrap();
        let bytes = package.finish().unwrap();

        let part = read_part(&bytes, "[Content_Types].xml");
        assert!(part.contains(r#"<Default Extension="rels""#));
        assert!(part.contains(
            r#"<Override PartName="/word/document.xml" ContentType="application/test+xml"/>"#
        ));
    }

    #[test]
    fn test_package_bytes_are_stable() {
        let build = || {
            let mut package = Package::new();
            write_relationships(
                &mut package,
                "_rels/.rels",
                &[("rId1", OFFICE_DOCUMENT_REL, "word/document.xml")],
            )
            .unwrap();
            package.finish().unwrap()
        };
        assert_eq!(build(), build());
    }
}
