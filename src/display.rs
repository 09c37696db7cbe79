use std::fmt::{Display, Write};

use colored::Colorize;

use crate::{BinaryTree, DynamicArray, Queue, Stack};

/// Options shared by all text renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Horizontal space per tree level, and between cells of linear containers
    pub column_width: usize,
    /// Highlight the next element to leave a queue
    pub color: bool,
    /// Text rendered for a container with nothing in it
    pub empty_marker: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            column_width: 2,
            color: false,
            empty_marker: "(empty)".into(),
        }
    }
}

impl RenderOptions {
    pub fn with_column_width(mut self, column_width: usize) -> Self {
        self.column_width = column_width.max(1);
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_empty_marker(mut self, empty_marker: impl Into<String>) -> Self {
        self.empty_marker = empty_marker.into();
        self
    }
}

/// Renders a container as multi-line text.
pub trait Render {
    fn render(&self, options: &RenderOptions) -> String;
}

fn cells<'a, T: Display + 'a>(items: impl Iterator<Item = &'a T>) -> Vec<String> {
    items.map(ToString::to_string).collect()
}

fn width(cell: &str) -> usize {
    cell.chars().count()
}

impl<T: Display> Render for Stack<T> {
    fn render(&self, options: &RenderOptions) -> String {
        if self.is_empty() {
            return options.empty_marker.clone();
        }

        let cells = cells(self.iter());
        let inner = cells.iter().map(|cell| width(cell)).max().unwrap_or(0);
        let rule = "─".repeat(inner + 2);

        let mut out = format!("┌{rule}┐\n");
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                let _ = writeln!(out, "├{rule}┤");
            }
            let _ = writeln!(out, "│ {cell:<inner$} │");
        }
        let _ = write!(out, "└{rule}┘");
        out
    }
}

impl<T: Display> Render for Queue<T> {
    fn render(&self, options: &RenderOptions) -> String {
        if self.is_empty() {
            return options.empty_marker.clone();
        }

        let gap = " ".repeat(options.column_width);
        self.iter()
            .enumerate()
            .map(|(i, item)| {
                let cell = format!("[{item}]");
                if i == 0 && options.color {
                    cell.yellow().bold().to_string()
                } else {
                    cell
                }
            })
            .collect::<Vec<_>>()
            .join(&gap)
    }
}

impl<T: Display> Render for DynamicArray<T> {
    fn render(&self, options: &RenderOptions) -> String {
        if self.is_empty() {
            return options.empty_marker.clone();
        }

        let values = cells(self.iter());
        let gap = " ".repeat(options.column_width);

        let mut header = String::new();
        let mut row = String::new();
        for (index, value) in values.iter().enumerate() {
            let index = index.to_string();
            let cell = width(&index).max(width(value));
            if !header.is_empty() {
                header.push_str(&gap);
                row.push_str(&gap);
            }
            let _ = write!(header, "{index:<cell$}");
            let _ = write!(row, "{value:<cell$}");
        }

        format!("{}\n{}", header.trim_end(), row.trim_end())
    }
}

impl Render for BinaryTree {
    fn render(&self, options: &RenderOptions) -> String {
        if self.is_empty_node() {
            return options.empty_marker.clone();
        }

        let column_width = options.column_width.max(1);
        let mut out = String::new();
        let mut iter = self.iter().peekable();
        let mut root_children = false;

        while let Some(node) = iter.next() {
            // Peek at the next node to see if there are siblings
            let has_siblings = iter
                .peek()
                .is_some_and(|next| next.depth() == node.depth());
            let has_children = node.has_left() || node.has_right();

            if node.depth() == 0 {
                root_children = has_children;
                out.push(if has_children { '┏' } else { '━' });
            } else {
                // The position of the first character of the content from the previous row
                let pos = node.depth() * column_width;
                for i in 0..pos {
                    out.push(if i % column_width == 0 { '┃' } else { ' ' });
                }
                out.push(if has_children || has_siblings {
                    '┣'
                } else {
                    '┗'
                });
            }

            if let Some(branch) = node.branch() {
                let _ = write!(out, "{branch}:");
            }

            if node.has_item() {
                let _ = write!(out, "{}", node.get_item());
            } else {
                out.push('·');
            }
            out.push('\n');
        }

        if root_children {
            out.push('┗');
        } else {
            out.pop();
        }
        out
    }
}

impl BinaryTree {
    fn is_empty_node(&self) -> bool {
        !self.has_item() && !self.has_left() && !self.has_right()
    }
}

impl std::fmt::Display for BinaryTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(&RenderOptions::default()))
    }
}

impl<T: Display> Display for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(&RenderOptions::default()))
    }
}

impl<T: Display> Display for Queue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(&RenderOptions::default()))
    }
}
