//! Column alignment over laid-out rows.
//!
//! Each row is a list of cells followed by a verbatim tail. An alignment
//! group for column `c` is a maximal run of consecutive rows that all have
//! a cell at `c`, nested inside the group for column `c - 1`. Cells are
//! padded to the widest cell of their group plus the padding; tails are
//! never padded.

/// One output line before alignment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    pub cells: Vec<String>,
    pub tail: String,
}

impl Row {
    pub fn new(cells: Vec<String>, tail: impl Into<String>) -> Self {
        Self {
            cells,
            tail: tail.into(),
        }
    }
}

/// Align rows into lines. Trailing whitespace is kept; callers trim.
pub fn align(rows: &[Row], padding: usize) -> Vec<String> {
    let mut aligner = Aligner {
        rows,
        padding,
        widths: Vec::new(),
        out: vec![String::new(); rows.len()],
    };
    aligner.format(0, rows.len());
    aligner.out
}

struct Aligner<'a> {
    rows: &'a [Row],
    padding: usize,
    widths: Vec<usize>,
    out: Vec<String>,
}

impl Aligner<'_> {
    fn format(&mut self, mut line0: usize, line1: usize) {
        let column = self.widths.len();
        let mut this = line0;
        while this < line1 {
            if column >= self.rows[this].cells.len() {
                this += 1;
                continue;
            }

            // rows before the group are complete at this depth
            self.write_lines(line0, this);
            line0 = this;

            let mut width = 0;
            while this < line1 && column < self.rows[this].cells.len() {
                width = width.max(cell_width(&self.rows[this].cells[column]) + self.padding);
                this += 1;
            }

            self.widths.push(width);
            self.format(line0, this);
            self.widths.pop();
            line0 = this;
        }
        self.write_lines(line0, line1);
    }

    fn write_lines(&mut self, line0: usize, line1: usize) {
        for i in line0..line1 {
            let row = &self.rows[i];
            let mut line = String::new();
            for (j, cell) in row.cells.iter().enumerate() {
                line.push_str(cell);
                if let Some(&width) = self.widths.get(j) {
                    let pad = width.saturating_sub(cell_width(cell));
                    line.extend(std::iter::repeat(' ').take(pad));
                }
            }
            line.push_str(&row.tail);
            self.out[i] = line;
        }
    }
}

fn cell_width(cell: &str) -> usize {
    cell.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(cells: &[&str], tail: &str) -> Row {
        Row::new(cells.iter().map(|c| c.to_string()).collect(), tail)
    }

    fn trimmed(rows: &[Row]) -> Vec<String> {
        align(rows, 1)
            .into_iter()
            .map(|l| l.trim_end().to_string())
            .collect()
    }

    #[test]
    fn test_aligns_columns() {
        let rows = [
            row(&["@param", "array"], "&$x"),
            row(&["@param", "string"], "&...$bar"),
            row(&["@return", "?float"], ""),
        ];
        assert_eq!(
            trimmed(&rows),
            vec!["@param  array  &$x", "@param  string &...$bar", "@return ?float"]
        );
    }

    #[test]
    fn test_tail_only_rows_split_groups() {
        let rows = [
            row(&["@param", "int"], "$a"),
            row(&[], "Some text."),
            row(&["@return", "void"], ""),
        ];
        assert_eq!(
            trimmed(&rows),
            vec!["@param int $a", "Some text.", "@return void"]
        );
    }

    #[test]
    fn test_nested_groups() {
        let rows = [
            row(&["@phpstan-type", "A", "int"], ""),
            row(&["@var", "int"], "$x"),
            row(&["@author"], "Jack"),
        ];
        assert_eq!(
            trimmed(&rows),
            vec![
                "@phpstan-type A   int",
                "@var          int $x",
                "@author       Jack",
            ]
        );
    }

    #[test]
    fn test_wide_chars_count_once() {
        let rows = [row(&["@var", "žluť"], "$a"), row(&["@var", "int"], "$b")];
        assert_eq!(trimmed(&rows), vec!["@var žluť $a", "@var int  $b"]);
    }

    #[test]
    fn test_empty() {
        assert!(align(&[], 1).is_empty());
    }
}
