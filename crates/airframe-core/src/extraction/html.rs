use crate::parsing::normalize::{clean_text, normalize_label, normalize_ws};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table").expect("valid table selector"));
static LIST_ITEM: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("li").expect("valid li selector"));
static BOLD: LazyLock<Selector> = LazyLock::new(|| Selector::parse("b").expect("valid b selector"));

/// Upper bound for colspan/rowspan attributes.
const MAX_SPAN: usize = 1000;

/// A table with spans expanded: every row has exactly `headers.len()` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    /// Cleaned column headers. Stacked header rows are joined with a space;
    /// a table without header rows gets positional names ("0", "1", ...).
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn width(&self) -> usize {
        self.headers.len()
    }
}

/// A bulleted item with a bolded lead phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    /// Cleaned, lowercased bold text.
    pub label: String,
    /// Full text of the item, bold phrase included.
    pub text: String,
}

/// The parts of a page the extractors look at.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub tables: Vec<RawTable>,
    pub list_items: Vec<ListItem>,
}

impl Document {
    /// Parse UTF-8 markup. Never fails: a page with no tables or bullets
    /// simply yields an empty document.
    pub fn parse(markup: &str) -> Document {
        let html = Html::parse_document(markup);
        let tables = html.select(&TABLE).map(read_table).collect();
        let list_items = html.select(&LIST_ITEM).filter_map(read_list_item).collect();
        Document { tables, list_items }
    }
}

#[derive(Debug, Clone)]
struct Cell {
    text: String,
    is_header: bool,
    colspan: usize,
    rowspan: usize,
}

fn read_table(table: ElementRef<'_>) -> RawTable {
    let mut head: Vec<Vec<Cell>> = Vec::new();
    let mut body: Vec<Vec<Cell>> = Vec::new();

    // Only this table's own rows; nested tables are read separately.
    for child in table.children().filter_map(ElementRef::wrap) {
        match child.value().name() {
            "thead" => head.extend(rows_of(child)),
            "tbody" | "tfoot" => body.extend(rows_of(child)),
            "tr" => body.push(read_row(child)),
            _ => {}
        }
    }

    // Without <thead>, leading all-<th> rows are the header.
    if head.is_empty() {
        let leading = body
            .iter()
            .take_while(|row| !row.is_empty() && row.iter().all(|c| c.is_header))
            .count();
        head = body.drain(..leading).collect();
    }

    let head = expand_spans(head);
    let mut rows = expand_spans(body);

    let width = head
        .iter()
        .chain(rows.iter())
        .map(Vec::len)
        .max()
        .unwrap_or(0);

    let headers = if head.is_empty() {
        (0..width).map(|i| i.to_string()).collect()
    } else {
        (0..width).map(|col| header_name(&head, col)).collect()
    };

    for row in &mut rows {
        row.resize(width, String::new());
    }

    RawTable { headers, rows }
}

fn rows_of(section: ElementRef<'_>) -> Vec<Vec<Cell>> {
    section
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "tr")
        .map(read_row)
        .collect()
}

fn read_row(tr: ElementRef<'_>) -> Vec<Cell> {
    tr.children()
        .filter_map(ElementRef::wrap)
        .filter_map(|cell| {
            let is_header = match cell.value().name() {
                "th" => true,
                "td" => false,
                _ => return None,
            };
            let mut text = String::new();
            collect_text(cell, &mut text);
            Some(Cell {
                text: normalize_ws(&text),
                is_header,
                colspan: span(cell, "colspan"),
                rowspan: span(cell, "rowspan"),
            })
        })
        .collect()
}

fn span(cell: ElementRef<'_>, attr: &str) -> usize {
    cell.value()
        .attr(attr)
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(1)
        .clamp(1, MAX_SPAN)
}

/// Concatenate descendant text; `<br>` becomes a space, styles are skipped.
fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(el) = ElementRef::wrap(child) {
            match el.value().name() {
                "br" => out.push(' '),
                "style" | "script" => {}
                _ => collect_text(el, out),
            }
        } else if let Some(text) = child.value().as_text() {
            out.push_str(text);
        }
    }
}

/// Lay cells out on a grid, repeating spanned cells into every slot they cover.
fn expand_spans(rows: Vec<Vec<Cell>>) -> Vec<Vec<String>> {
    let mut grid = Vec::with_capacity(rows.len());
    // Per column: text carried down by a rowspan, and rows still to fill.
    let mut carried: Vec<Option<(String, usize)>> = Vec::new();

    for row in rows {
        let mut line: Vec<String> = Vec::new();
        let mut cells = row.into_iter();

        loop {
            let col = line.len();
            if let Some(slot) = carried.get_mut(col) {
                if let Some((text, left)) = slot.as_mut() {
                    line.push(text.clone());
                    *left -= 1;
                    if *left == 0 {
                        *slot = None;
                    }
                    continue;
                }
            }

            let Some(cell) = cells.next() else {
                break;
            };
            for _ in 0..cell.colspan {
                let col = line.len();
                if cell.rowspan > 1 {
                    if carried.len() <= col {
                        carried.resize(col + 1, None);
                    }
                    carried[col] = Some((cell.text.clone(), cell.rowspan - 1));
                }
                line.push(cell.text.clone());
            }
        }

        // Spans hanging past this row's last real cell.
        let last_carried = carried.iter().rposition(Option::is_some);
        if let Some(last) = last_carried {
            for col in line.len()..=last {
                match carried[col].as_mut() {
                    Some((text, left)) => {
                        line.push(text.clone());
                        *left -= 1;
                        if *left == 0 {
                            carried[col] = None;
                        }
                    }
                    None => line.push(String::new()),
                }
            }
        }

        grid.push(line);
    }

    grid
}

fn header_name(head: &[Vec<String>], col: usize) -> String {
    let mut parts: Vec<String> = Vec::new();
    for row in head {
        let Some(text) = row.get(col) else {
            continue;
        };
        let text = clean_text(text);
        if !text.is_empty() && !parts.contains(&text) {
            parts.push(text);
        }
    }
    parts.join(" ")
}

fn read_list_item(li: ElementRef<'_>) -> Option<ListItem> {
    let bold = li.select(&BOLD).next()?;
    Some(ListItem {
        label: normalize_label(&stripped_text(bold)),
        text: stripped_text(li),
    })
}

/// Descendant text fragments, each trimmed, joined by single spaces.
fn stripped_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
