// Minimal PDF 1.4 writer for the room seating sheet.
//
// Layout: A4 portrait, Helvetica, one title line, a header row and one line per seat.
// A new page starts when the next line would cross the bottom margin. Text outside
// printable ASCII is replaced with '?' since only the standard Type1 fonts are used.

use crate::modules::allocations::use_cases::list_allocations::queries::AllocationRow;

pub const CONTENT_TYPE: &str = "application/pdf";

const PAGE_WIDTH: u32 = 595;
const PAGE_HEIGHT: u32 = 842;
const MARGIN: u32 = 50;
const LINE_HEIGHT: u32 = 15;
const NAME_WIDTH: usize = 22;
const COLUMNS: [(u32, &str); 5] = [
    (50, "Stu ID"),
    (110, "Name"),
    (290, "Bench"),
    (360, "Seat"),
    (420, "Exam"),
];

fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '(' | ')' | '\\' => {
                escaped.push('\\');
                escaped.push(c);
            }
            ' '..='~' => escaped.push(c),
            _ => escaped.push('?'),
        }
    }
    escaped
}

fn truncate(value: &str, width: usize) -> String {
    value.chars().take(width).collect()
}

struct Page {
    content: String,
    y: u32,
}

impl Page {
    fn new() -> Self {
        Self {
            content: String::new(),
            y: PAGE_HEIGHT - MARGIN,
        }
    }

    fn text(&mut self, font: &str, size: u32, x: u32, value: &str) {
        self.content.push_str(&format!(
            "BT /{font} {size} Tf {x} {} Td ({}) Tj ET\n",
            self.y,
            escape_text(value)
        ));
    }

    fn rule(&mut self) {
        let y = self.y + 4;
        self.content.push_str(&format!(
            "0.5 w {MARGIN} {y} m {} {y} l S\n",
            PAGE_WIDTH - MARGIN
        ));
    }

    fn header(&mut self) {
        for (x, label) in COLUMNS {
            self.text("F2", 10, x, label);
        }
        self.y -= LINE_HEIGHT;
        self.rule();
        self.y -= 5;
    }

    fn is_full(&self) -> bool {
        self.y < MARGIN + LINE_HEIGHT
    }
}

fn layout_pages(room_id: &str, rows: &[AllocationRow]) -> Vec<String> {
    let mut pages = Vec::new();
    let mut page = Page::new();
    page.text("F2", 14, MARGIN, &format!("Seating Arrangement - Room {room_id}"));
    page.y -= 30;
    page.header();

    for row in rows {
        if page.is_full() {
            pages.push(std::mem::replace(&mut page, Page::new()).content);
            page.header();
        }
        let cells = [
            row.stu_id.to_string(),
            truncate(&row.stu_name, NAME_WIDTH),
            row.bench_id.clone(),
            row.seat_no.to_string(),
            row.exam_id.to_string(),
        ];
        for ((x, _), cell) in COLUMNS.iter().zip(cells.iter()) {
            page.text("F1", 10, *x, cell);
        }
        page.y -= LINE_HEIGHT;
    }
    pages.push(page.content);
    pages
}

/// Object numbers: 1 catalog, 2 page tree, 3 and 4 fonts, then a page and its content
/// stream per page.
pub fn render_pdf(room_id: &str, rows: &[AllocationRow]) -> Vec<u8> {
    let pages = layout_pages(room_id, rows);
    let page_ids: Vec<usize> = (0..pages.len()).map(|i| 5 + 2 * i).collect();

    let mut objects: Vec<String> = vec![
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            page_ids
                .iter()
                .map(|id| format!("{id} 0 R"))
                .collect::<Vec<_>>()
                .join(" "),
            pages.len()
        ),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold >>".to_string(),
    ];
    for (content, page_id) in pages.iter().zip(&page_ids) {
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {PAGE_WIDTH} {PAGE_HEIGHT}] \
             /Resources << /Font << /F1 3 0 R /F2 4 0 R >> >> /Contents {} 0 R >>",
            page_id + 1
        ));
        objects.push(format!(
            "<< /Length {} >>\nstream\n{content}endstream",
            content.len()
        ));
    }

    let mut out = String::from("%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.push_str(&format!("{} 0 obj\n{body}\nendobj\n", i + 1));
    }

    let xref_at = out.len();
    out.push_str(&format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1));
    for offset in offsets {
        out.push_str(&format!("{offset:010} 00000 n \n"));
    }
    out.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_at}\n%%EOF\n",
        objects.len() + 1
    ));
    out.into_bytes()
}
