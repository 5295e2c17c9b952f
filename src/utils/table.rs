/// A simple text-based table for Discord messages using code blocks
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    col_widths: Vec<usize>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Table {
            col_widths: headers.iter().map(|h| h.chars().count()).collect(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Add a row; cells past the header count are dropped
    pub fn add_row<S: AsRef<str>>(&mut self, row: &[S]) {
        let row: Vec<String> = row
            .iter()
            .take(self.headers.len())
            .map(|s| s.as_ref().to_string())
            .collect();

        for (i, col) in row.iter().enumerate() {
            self.col_widths[i] = self.col_widths[i].max(col.chars().count());
        }

        self.rows.push(row);
    }

    /// Render the table as a code block
    pub fn render(&self) -> String {
        let mut output = String::from("```\n");

        output.push_str(&self.render_row(&self.headers));
        output.push('\n');
        output.push_str(&self.render_separator());
        output.push('\n');

        for row in &self.rows {
            output.push_str(&self.render_row(row));
            output.push('\n');
        }

        output.push_str("```");
        output
    }

    fn render_row(&self, row: &[String]) -> String {
        row.iter()
            .zip(&self.col_widths)
            .map(|(col, &width)| format!("{:<width$}", col, width = width))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    }

    fn render_separator(&self) -> String {
        self.col_widths
            .iter()
            .map(|&w| "-".repeat(w))
            .collect::<Vec<_>>()
            .join("-+-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_table() {
        let mut table = Table::new(&["Pair", "Symbol"]);
        table.add_row(&["BTC/USDT", "BTCUSDT"]);
        table.add_row(&["ETH/BTC", "ETHBTC"]);

        let rendered = table.render();
        assert_eq!(
            rendered,
            "```\nPair     | Symbol\n---------+--------\nBTC/USDT | BTCUSDT\nETH/BTC  | ETHBTC\n```"
        );
    }

    #[test]
    fn test_extra_cells_are_dropped() {
        let mut table = Table::new(&["Code"]);
        table.add_row(&["USD".to_string(), "ignored".to_string()]);
        assert!(!table.render().contains("ignored"));
    }
}
