//! Plain-text tables and pagination for CLI listings.

use crate::utils::formatting::{pad_right, visible_width};

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: AsRef<str>>(headers: &[S]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.as_ref().to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| visible_width(h)).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(visible_width(cell));
            }
        }
        widths
    }

    pub fn render(&self, separator: char) -> String {
        self.render_with(separator, |cell| cell.to_string())
    }

    /// Render, passing each padded body cell through `style` (e.g. to colour
    /// it). Padding is computed on the plain text.
    pub fn render_with<F>(&self, separator: char, style: F) -> String
    where
        F: Fn(&str) -> String,
    {
        let widths = self.widths();
        let mut out = String::new();

        let header: Vec<String> = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| pad_right(h, *w))
            .collect();
        out.push_str(header.join(" ").trim_end());
        out.push('\n');

        let total: usize = widths.iter().sum::<usize>() + widths.len().saturating_sub(1);
        out.push_str(&separator.to_string().repeat(total));
        out.push('\n');

        for row in &self.rows {
            let cells: Vec<String> = widths
                .iter()
                .enumerate()
                .map(|(i, w)| {
                    let cell = row.get(i).map(String::as_str).unwrap_or("");
                    style(&pad_right(cell, *w))
                })
                .collect();
            out.push_str(cells.join(" ").trim_end());
            out.push('\n');
        }

        out
    }
}

/// One page of a listing. Pages are 1-based.
#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub number: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// Slice out page `number` (clamped to the last page). A page size of 0
/// shows everything on one page.
pub fn paginate<T>(items: &[T], number: usize, page_size: usize) -> Page<'_, T> {
    let total_items = items.len();
    if page_size == 0 || total_items == 0 {
        return Page {
            items,
            number: 1,
            total_pages: 1,
            total_items,
        };
    }

    let total_pages = total_items.div_ceil(page_size);
    let number = number.clamp(1, total_pages);
    let start = (number - 1) * page_size;
    let end = (start + page_size).min(total_items);

    Page {
        items: &items[start..end],
        number,
        total_pages,
        total_items,
    }
}
