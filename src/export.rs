use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    CanvasRenderingContext2d, Document, Element, HtmlAnchorElement, HtmlCanvasElement,
    HtmlSelectElement,
};

use crate::app_config::EXPORT_FILENAME;
use crate::local_store::js_err;

const ACTIVE_CONTAINER_SELECTOR: &str = ".tab-content.active .bingo-container";
const PLAY_CONTAINER_ID: &str = "bingo-play";
const CONFIG_CONTAINER_ID: &str = "bingo-config";

const MIN_EXPORT_WIDTH: f64 = 480.0;
const HEADER_ROW_RATIO: f64 = 0.5;
const CELL_PADDING: f64 = 6.0;
const FONT_FAMILY: &str = "sans-serif";
const BACKGROUND: &str = "#ffffff";
const GRID_LINE: &str = "#333333";
const HEADER_FILL: &str = "#2f2f7a";
const HEADER_TEXT: &str = "#ffffff";
const MARKED_FILL: &str = "#f5c542";
const CELL_TEXT: &str = "#111111";

#[derive(Clone, Debug, Default, PartialEq)]
struct RasterCell {
    lines: Vec<String>,
    header: bool,
    marked: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Layout {
    cell_w: f64,
    header_h: f64,
    body_h: f64,
    width: f64,
    height: f64,
}

impl Layout {
    fn new(width: f64, cols: usize, header_rows: usize, body_rows: usize) -> Self {
        let width = width.max(MIN_EXPORT_WIDTH);
        let cols = cols.max(1) as f64;
        let cell_w = width / cols;
        let body_h = cell_w;
        let header_h = cell_w * HEADER_ROW_RATIO;
        let height = header_h * header_rows as f64 + body_h * body_rows as f64;
        Self {
            cell_w,
            header_h,
            body_h,
            width,
            height: height.max(1.0),
        }
    }

    fn row_height(&self, header: bool) -> f64 {
        if header {
            self.header_h
        } else {
            self.body_h
        }
    }
}

/// Rasterizes the card of the active tab into `cartela-bingo.png`. Nothing
/// is reported to the user; failures only reach the console.
pub(crate) fn export_active_card() {
    if let Err(err) = try_export() {
        gloo::console::error!("export: failed", js_err(err));
    }
}

fn try_export() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let Some(container) = find_container(&document) else {
        gloo::console::error!("export: card container not found");
        return Ok(());
    };
    let rows = collect_rows(&container)?;
    if rows.is_empty() {
        gloo::console::error!("export: card container has no rows");
        return Ok(());
    }
    let scale = window.device_pixel_ratio().max(1.0);
    let width = container.get_bounding_client_rect().width();
    let canvas = paint(&document, &rows, width, scale)?;
    let url = canvas.to_data_url_with_type("image/png")?;
    download(&document, &url)
}

fn find_container(document: &Document) -> Option<Element> {
    document
        .query_selector(ACTIVE_CONTAINER_SELECTOR)
        .ok()
        .flatten()
        .or_else(|| document.get_element_by_id(PLAY_CONTAINER_ID))
        .or_else(|| document.get_element_by_id(CONFIG_CONTAINER_ID))
}

fn collect_rows(container: &Element) -> Result<Vec<Vec<RasterCell>>, JsValue> {
    let rows = container.query_selector_all("tr")?;
    let mut out = Vec::new();
    for index in 0..rows.length() {
        let Some(row) = rows.item(index).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };
        let children = row.children();
        let mut cells = Vec::new();
        for cell_index in 0..children.length() {
            let Some(cell) = children.item(cell_index) else {
                continue;
            };
            let tag = cell.tag_name().to_ascii_lowercase();
            if tag != "td" && tag != "th" {
                continue;
            }
            cells.push(RasterCell {
                lines: cell_lines(&cell),
                header: tag == "th",
                marked: cell.class_list().contains("marked"),
            });
        }
        if !cells.is_empty() {
            out.push(cells);
        }
    }
    Ok(out)
}

fn cell_lines(cell: &Element) -> Vec<String> {
    let children = cell.children();
    let mut lines = Vec::new();
    for index in 0..children.length() {
        let Some(child) = children.item(index) else {
            continue;
        };
        let text = match child.dyn_ref::<HtmlSelectElement>() {
            Some(select) => u32::try_from(select.selected_index())
                .ok()
                .and_then(|selected| select.item(selected))
                .and_then(|option| option.text_content()),
            None if child.tag_name().eq_ignore_ascii_case("button") => None,
            None => child.text_content(),
        };
        if let Some(text) = text.map(|text| text.trim().to_string()) {
            if !text.is_empty() {
                lines.push(text);
            }
        }
    }
    if children.length() == 0 {
        if let Some(text) = cell.text_content() {
            let text = text.trim();
            if !text.is_empty() {
                lines.push(text.to_string());
            }
        }
    }
    lines
}

fn paint(
    document: &Document,
    rows: &[Vec<RasterCell>],
    width: f64,
    scale: f64,
) -> Result<HtmlCanvasElement, JsValue> {
    let cols = rows.iter().map(Vec::len).max().unwrap_or(1);
    let header_rows = rows
        .iter()
        .filter(|row| row.iter().all(|cell| cell.header))
        .count();
    let layout = Layout::new(width, cols, header_rows, rows.len() - header_rows);

    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()?;
    canvas.set_width((layout.width * scale).ceil() as u32);
    canvas.set_height((layout.height * scale).ceil() as u32);
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()?;
    ctx.scale(scale, scale)?;
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, layout.width, layout.height);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_line_width(1.0);

    let mut y = 0.0;
    for row in rows {
        let header = row.iter().all(|cell| cell.header);
        let row_h = layout.row_height(header);
        for (col, cell) in row.iter().enumerate() {
            let x = col as f64 * layout.cell_w;
            paint_cell(&ctx, cell, x, y, layout.cell_w, row_h)?;
        }
        y += row_h;
    }
    Ok(canvas)
}

fn paint_cell(
    ctx: &CanvasRenderingContext2d,
    cell: &RasterCell,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
) -> Result<(), JsValue> {
    let fill = if cell.header {
        Some(HEADER_FILL)
    } else if cell.marked {
        Some(MARKED_FILL)
    } else {
        None
    };
    if let Some(fill) = fill {
        ctx.set_fill_style_str(fill);
        ctx.fill_rect(x, y, w, h);
    }
    ctx.set_stroke_style_str(GRID_LINE);
    ctx.stroke_rect(x, y, w, h);

    let font_px = if cell.header { h * 0.55 } else { (h * 0.14).max(10.0) };
    ctx.set_font(&format!(
        "{}{font_px:.0}px {FONT_FAMILY}",
        if cell.header { "bold " } else { "" }
    ));
    ctx.set_fill_style_str(if cell.header { HEADER_TEXT } else { CELL_TEXT });

    let max_width = (w - CELL_PADDING * 2.0).max(1.0);
    let mut lines = Vec::new();
    for line in &cell.lines {
        lines.extend(wrap_words(line, max_width, |text| {
            ctx.measure_text(text).map(|m| m.width()).unwrap_or(0.0)
        }));
    }
    let line_h = font_px * 1.2;
    let first = y + h / 2.0 - line_h * (lines.len().saturating_sub(1)) as f64 / 2.0;
    for (index, line) in lines.iter().enumerate() {
        ctx.fill_text_with_max_width(line, x + w / 2.0, first + line_h * index as f64, max_width)?;
    }
    Ok(())
}

/// Greedy word wrap; a single word wider than `max_width` keeps its own line.
fn wrap_words(text: &str, max_width: f64, measure: impl Fn(&str) -> f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{current} {word}");
        if measure(&candidate) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn download(document: &Document, url: &str) -> Result<(), JsValue> {
    let link = document
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()?;
    link.set_download(EXPORT_FILENAME);
    link.set_href(url);
    link.click();
    Ok(())
}
