// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

pub struct Table<'a, T, C: TableColumn<T>> {
    columns: &'a [C],
    data: &'a [T],
    separator: &'a str,
    padding: bool,
}

impl<'a, T, C: TableColumn<T>> Table<'a, T, C> {
    pub fn new(columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            columns,
            data,
            separator: " ",
            padding: true,
        }
    }

    fn column_widths(&self, table: &[Vec<Cow<'_, str>>]) -> Vec<usize> {
        let mut max_width = vec![0; self.columns.len()];
        for row in table {
            for (i, cell) in row.iter().enumerate() {
                max_width[i] = max_width[i].max(cell.width());
            }
        }
        max_width
    }
}

impl<T, C: TableColumn<T>> fmt::Display for Table<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table: Vec<Vec<Cow<'_, str>>> = self
            .data
            .iter()
            .map(|row| self.columns.iter().map(|col| col.format(row)).collect())
            .collect();

        let widths = self.column_widths(&table);
        let last = self.columns.len().saturating_sub(1);
        for (row, cells) in self.data.iter().zip(table.iter()) {
            for (i, (col, cell)) in self.columns.iter().zip(cells).enumerate() {
                // Left-aligned last column does not need padding
                let pad = self.padding
                    && !(i == last && col.padding_direction() == PaddingDirection::Left);
                let cell = match (pad, col.padding_direction()) {
                    (true, dir) => pad_cell(cell, widths[i], dir),
                    (false, _) => cell.to_string(),
                };

                match col.get_color(row) {
                    Some(color) => write!(f, "{}", cell.color(color))?,
                    None => write!(f, "{cell}")?,
                }

                if i < last {
                    write!(f, "{}", self.separator)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Pads by display width so that wide characters line up.
fn pad_cell(cell: &str, width: usize, direction: PaddingDirection) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    match direction {
        PaddingDirection::Left => format!("{cell}{fill}"),
        PaddingDirection::Right => format!("{fill}{cell}"),
    }
}

pub trait TableColumn<T> {
    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn get_color(&self, _data: &T) -> Option<Color> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}
