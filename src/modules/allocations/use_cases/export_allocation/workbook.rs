// Single sheet .xlsx writer.
//
// An xlsx file is a zip of SpreadsheetML parts. Cells are written as inline strings or
// numbers, so no shared string table or style sheet is needed.

use std::io::{Cursor, Write};

use thiserror::Error;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::modules::allocations::use_cases::list_allocations::queries::AllocationRow;

pub const CONTENT_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const HEADER: [&str; 8] = [
    "exam_id", "stu_id", "stu_name", "year", "subject", "room_id", "bench_id", "seat_no",
];

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/></Types>"#;

const ROOT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;

const WORKBOOK_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="Allocation" sheetId="1" r:id="rId1"/></sheets></workbook>"#;

const WORKBOOK_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/></Relationships>"#;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

enum Cell<'a> {
    Text(&'a str),
    Number(i64),
    Empty,
}

fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}

fn write_row(sheet: &mut String, row_no: usize, cells: &[Cell<'_>]) {
    sheet.push_str(&format!(r#"<row r="{row_no}">"#));
    for (i, cell) in cells.iter().enumerate() {
        let column = char::from(b'A' + i as u8);
        match cell {
            Cell::Text(text) => sheet.push_str(&format!(
                r#"<c r="{column}{row_no}" t="inlineStr"><is><t>{}</t></is></c>"#,
                escape_xml(text)
            )),
            Cell::Number(n) => {
                sheet.push_str(&format!(r#"<c r="{column}{row_no}"><v>{n}</v></c>"#))
            }
            Cell::Empty => {}
        }
    }
    sheet.push_str("</row>");
}

fn sheet_xml(rows: &[AllocationRow]) -> String {
    let mut sheet = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>"#,
    );
    let header: Vec<Cell<'_>> = HEADER.iter().map(|h| Cell::Text(h)).collect();
    write_row(&mut sheet, 1, &header);

    for (i, row) in rows.iter().enumerate() {
        let cells = [
            Cell::Number(row.exam_id),
            Cell::Number(row.stu_id),
            Cell::Text(&row.stu_name),
            row.year.map_or(Cell::Empty, |y| Cell::Number(i64::from(y))),
            row.subject.as_deref().map_or(Cell::Empty, Cell::Text),
            Cell::Text(&row.room_id),
            Cell::Text(&row.bench_id),
            Cell::Number(i64::from(row.seat_no)),
        ];
        write_row(&mut sheet, i + 2, &cells);
    }
    sheet.push_str("</sheetData></worksheet>");
    sheet
}

pub fn render_workbook(rows: &[AllocationRow]) -> Result<Vec<u8>, ExportError> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    let parts: [(&str, String); 5] = [
        ("[Content_Types].xml", CONTENT_TYPES_XML.to_string()),
        ("_rels/.rels", ROOT_RELS_XML.to_string()),
        ("xl/workbook.xml", WORKBOOK_XML.to_string()),
        ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS_XML.to_string()),
        ("xl/worksheets/sheet1.xml", sheet_xml(rows)),
    ];
    for (name, body) in parts {
        zip.start_file(name, options)?;
        zip.write_all(body.as_bytes())?;
    }

    Ok(zip.finish()?.into_inner())
}

#[cfg(test)]
mod workbook_tests {
    use super::*;
    use rstest::rstest;
    use std::io::Read;
    use zip::ZipArchive;

    fn row(stu_id: i64, stu_name: &str, seat_no: u32) -> AllocationRow {
        AllocationRow {
            exam_id: 1,
            stu_id,
            stu_name: stu_name.to_string(),
            year: Some(2),
            subject: Some("CS301".to_string()),
            room_id: "B201".to_string(),
            bench_id: "1".to_string(),
            seat_no,
        }
    }

    fn read_part(bytes: Vec<u8>, name: &str) -> String {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut part = archive.by_name(name).unwrap();
        let mut content = String::new();
        part.read_to_string(&mut content).unwrap();
        content
    }

    #[rstest]
    fn it_should_write_a_header_and_one_row_per_seat() {
        let bytes = render_workbook(&[row(10, "Asha Rao", 1), row(11, "Ben & Co", 2)]).unwrap();
        let sheet = read_part(bytes, "xl/worksheets/sheet1.xml");

        assert!(sheet.contains(r#"<c r="A1" t="inlineStr"><is><t>exam_id</t></is></c>"#));
        assert!(sheet.contains(r#"<c r="H1" t="inlineStr"><is><t>seat_no</t></is></c>"#));
        assert!(sheet.contains(r#"<c r="B2"><v>10</v></c>"#));
        assert!(sheet.contains("<t>Ben &amp; Co</t>"));
        assert_eq!(sheet.matches("<row ").count(), 3);
    }

    #[rstest]
    fn it_should_package_a_workbook() {
        let bytes = render_workbook(&[]).unwrap();
        assert_eq!(&bytes[..2], b"PK");
        let types = read_part(bytes, "[Content_Types].xml");
        assert!(types.contains("/xl/worksheets/sheet1.xml"));
    }
}
