//! Peer Comparison Table Model
//!
//! Ordered typed columns plus row records. Every mutation keeps each row's
//! key set equal to the current column id set; rows are reconciled eagerly,
//! never lazily at render time.

use std::collections::HashMap;

/// Id of the reserved name column. Always present, always rendered first.
pub const NAME_COLUMN: &str = "name";

/// Cell formatting applied per column
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ColumnKind {
    Text,
    Number,
    Percentage,
}

impl ColumnKind {
    /// All kinds, in the order the add-column select lists them
    pub const ALL: [ColumnKind; 3] = [
        ColumnKind::Text,
        ColumnKind::Number,
        ColumnKind::Percentage,
    ];

    /// Stable key used as the select option value
    pub fn key(self) -> &'static str {
        match self {
            ColumnKind::Text => "text",
            ColumnKind::Number => "number",
            ColumnKind::Percentage => "percentage",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ColumnKind::Text => "Text",
            ColumnKind::Number => "Number",
            ColumnKind::Percentage => "Percentage",
        }
    }

    pub fn from_key(key: &str) -> Option<ColumnKind> {
        ColumnKind::ALL.into_iter().find(|k| k.key() == key)
    }
}

/// A column in the peer table
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Column {
    pub id: String,
    pub label: String,
    pub kind: ColumnKind,
}

impl Column {
    fn new(id: &str, label: &str, kind: ColumnKind) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            kind,
        }
    }
}

/// A row record keyed by column id
pub type PeerRow = HashMap<String, String>;

/// The peer comparison table: column schema, rows, and the saved
/// default column-id list.
#[derive(Clone, Debug, PartialEq)]
pub struct PeerTable {
    columns: Vec<Column>,
    rows: Vec<PeerRow>,
    default_columns: Vec<String>,
}

impl PeerTable {
    /// Build the seed table: the seven base columns and four well-known peers
    pub fn seed() -> Self {
        let columns = vec![
            Column::new(NAME_COLUMN, "Name", ColumnKind::Text),
            Column::new("market_cap", "Market Cap", ColumnKind::Text),
            Column::new("adv", "ADV", ColumnKind::Text),
            Column::new("eps_fy1", "EPS FY+1 y/y", ColumnKind::Percentage),
            Column::new("eps_fy2", "EPS FY+2 y/y", ColumnKind::Percentage),
            Column::new("pe_fy1", "P/E FY+1", ColumnKind::Number),
            Column::new("pe_fy2", "P/E FY+2", ColumnKind::Number),
        ];

        let mut table = Self {
            default_columns: columns.iter().map(|c| c.id.clone()).collect(),
            columns,
            rows: Vec::new(),
        };

        for name in [
            "Apple Inc.",
            "Microsoft Corp.",
            "Alphabet Inc.",
            "Meta Platforms",
        ] {
            table.add_row(name);
        }

        table
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[PeerRow] {
        &self.rows
    }

    pub fn default_columns(&self) -> &[String] {
        &self.default_columns
    }

    /// Append a column and extend every row with an empty value for it.
    /// Empty id or label aborts the mutation. Duplicate ids are accepted
    /// as-is; later lookups resolve to the same underlying key.
    pub fn add_column(&mut self, id: &str, label: &str, kind: ColumnKind) -> bool {
        if id.is_empty() || label.is_empty() {
            return false;
        }

        self.columns.push(Column::new(id, label, kind));
        for row in &mut self.rows {
            row.entry(id.to_string()).or_default();
        }
        true
    }

    /// Remove a column and strip its entry from every row. The name column
    /// and unknown ids are left untouched.
    pub fn remove_column(&mut self, id: &str) {
        if id == NAME_COLUMN || !self.columns.iter().any(|c| c.id == id) {
            return;
        }

        self.columns.retain(|c| c.id != id);
        for row in &mut self.rows {
            row.remove(id);
        }
    }

    /// Append a peer row. Well-known names get the canned reference
    /// template, anything else the generic default. The new row is filled
    /// for exactly the current column set.
    pub fn add_row(&mut self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }

        let template = reference_template(name);
        let row: PeerRow = self
            .columns
            .iter()
            .map(|col| {
                let value = if col.id == NAME_COLUMN {
                    name.to_string()
                } else {
                    template
                        .get(col.id.as_str())
                        .map(|v| v.to_string())
                        .unwrap_or_default()
                };
                (col.id.clone(), value)
            })
            .collect();

        self.rows.push(row);
        true
    }

    /// Remove the row at `index`; out-of-bounds indexes are ignored
    pub fn remove_row(&mut self, index: usize) {
        if index < self.rows.len() {
            self.rows.remove(index);
        }
    }

    /// Snapshot the current ordered column-id list as the default view.
    /// Column and row data are unaffected.
    pub fn save_default_columns(&mut self) {
        self.default_columns = self.columns.iter().map(|c| c.id.clone()).collect();
    }
}

/// Canned reference values for well-known peers, keyed by column id.
/// Unknown names fall back to the generic template.
fn reference_template(name: &str) -> HashMap<&'static str, &'static str> {
    let known: [(&str, [(&str, &str); 6]); 4] = [
        (
            "apple inc.",
            [
                ("market_cap", "$2.8T"),
                ("adv", "$10.2B"),
                ("eps_fy1", "6.50"),
                ("eps_fy2", "7.00"),
                ("pe_fy1", "28.1"),
                ("pe_fy2", "26.0"),
            ],
        ),
        (
            "microsoft corp.",
            [
                ("market_cap", "$2.7T"),
                ("adv", "$8.5B"),
                ("eps_fy1", "11.20"),
                ("eps_fy2", "12.10"),
                ("pe_fy1", "32.0"),
                ("pe_fy2", "29.5"),
            ],
        ),
        (
            "alphabet inc.",
            [
                ("market_cap", "$1.8T"),
                ("adv", "$5.7B"),
                ("eps_fy1", "7.80"),
                ("eps_fy2", "8.50"),
                ("pe_fy1", "25.0"),
                ("pe_fy2", "23.0"),
            ],
        ),
        (
            "meta platforms",
            [
                ("market_cap", "$1.1T"),
                ("adv", "$4.2B"),
                ("eps_fy1", "17.50"),
                ("eps_fy2", "19.00"),
                ("pe_fy1", "22.0"),
                ("pe_fy2", "20.5"),
            ],
        ),
    ];

    let lowered = name.to_lowercase();
    let fields = known
        .into_iter()
        .find(|(key, _)| *key == lowered)
        .map(|(_, fields)| fields)
        .unwrap_or([
            ("market_cap", "$100B"),
            ("adv", "$1.0B"),
            ("eps_fy1", "2.00"),
            ("eps_fy2", "2.20"),
            ("pe_fy1", "20.0"),
            ("pe_fy2", "18.0"),
        ]);

    fields.into_iter().collect()
}

/// Ticker symbols for known reference entities, matched case-insensitively
/// on the exact display name.
pub fn ticker_for(name: &str) -> Option<&'static str> {
    let tickers = [
        ("apple inc.", "AAPL"),
        ("microsoft corp.", "MSFT"),
        ("alphabet inc.", "GOOGL"),
        ("meta platforms", "META"),
        ("amazon.com inc.", "AMZN"),
    ];

    let lowered = name.to_lowercase();
    tickers
        .into_iter()
        .find(|(key, _)| *key == lowered)
        .map(|(_, symbol)| symbol)
}

/// Display name with the ticker appended when one is known
pub fn display_name(name: &str) -> String {
    match ticker_for(name) {
        Some(symbol) => format!("{} ({})", name, symbol),
        None => name.to_string(),
    }
}

/// Presentation-only cell formatting; stored data is never changed
pub fn format_cell(value: &str, kind: ColumnKind) -> String {
    if value.is_empty() {
        return "-".to_string();
    }

    match kind {
        ColumnKind::Percentage => format!("{}%", value),
        ColumnKind::Number | ColumnKind::Text => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn column_ids(table: &PeerTable) -> HashSet<String> {
        table.columns().iter().map(|c| c.id.clone()).collect()
    }

    fn assert_rows_consistent(table: &PeerTable) {
        let ids = column_ids(table);
        for row in table.rows() {
            let keys: HashSet<String> = row.keys().cloned().collect();
            assert_eq!(keys, ids);
        }
    }

    #[test]
    fn test_seed_shape() {
        let table = PeerTable::seed();
        assert_eq!(table.columns().len(), 7);
        assert_eq!(table.rows().len(), 4);
        assert_eq!(table.columns()[0].id, NAME_COLUMN);
        assert_rows_consistent(&table);
    }

    #[test]
    fn test_add_column_extends_every_row() {
        let mut table = PeerTable::seed();
        assert!(table.add_column("revenue", "Revenue", ColumnKind::Number));

        assert_eq!(table.columns().len(), 8);
        for row in table.rows() {
            assert_eq!(row.get("revenue").map(String::as_str), Some(""));
        }
        assert_rows_consistent(&table);
    }

    #[test]
    fn test_add_column_rejects_empty_id_or_label() {
        let mut table = PeerTable::seed();
        let before = table.clone();

        assert!(!table.add_column("", "Revenue", ColumnKind::Number));
        assert!(!table.add_column("revenue", "", ColumnKind::Number));
        assert_eq!(table, before);
    }

    #[test]
    fn test_remove_column_strips_rows() {
        let mut table = PeerTable::seed();
        table.add_column("revenue", "Revenue", ColumnKind::Number);
        table.remove_column("revenue");

        assert_eq!(table.columns().len(), 7);
        for row in table.rows() {
            assert!(!row.contains_key("revenue"));
        }
        assert_rows_consistent(&table);
    }

    #[test]
    fn test_remove_name_column_is_noop() {
        let mut table = PeerTable::seed();
        let before = table.clone();

        table.remove_column(NAME_COLUMN);
        assert_eq!(table, before);
    }

    #[test]
    fn test_remove_unknown_column_is_noop() {
        let mut table = PeerTable::seed();
        let before = table.clone();

        table.remove_column("ebitda");
        assert_eq!(table, before);
    }

    #[test]
    fn test_consistency_under_mutation_sequence() {
        let mut table = PeerTable::seed();

        table.add_column("revenue", "Revenue", ColumnKind::Number);
        assert_rows_consistent(&table);
        table.add_row("Amazon.com Inc.");
        assert_rows_consistent(&table);
        table.add_column("margin", "Op. Margin", ColumnKind::Percentage);
        assert_rows_consistent(&table);
        table.remove_column("revenue");
        assert_rows_consistent(&table);
        table.remove_row(0);
        assert_rows_consistent(&table);
        table.remove_column("margin");
        assert_rows_consistent(&table);
    }

    #[test]
    fn test_add_row_known_template() {
        let mut table = PeerTable::seed();
        table.add_row("Apple Inc.");

        let row = table.rows().last().unwrap();
        assert_eq!(row["name"], "Apple Inc.");
        assert_eq!(row["market_cap"], "$2.8T");
        assert_eq!(row["adv"], "$10.2B");
        assert_eq!(row["pe_fy1"], "28.1");
    }

    #[test]
    fn test_add_row_template_match_is_case_insensitive() {
        let mut table = PeerTable::seed();
        table.add_row("MICROSOFT CORP.");

        let row = table.rows().last().unwrap();
        assert_eq!(row["name"], "MICROSOFT CORP.");
        assert_eq!(row["market_cap"], "$2.7T");
    }

    #[test]
    fn test_add_row_unknown_gets_generic_template() {
        let mut table = PeerTable::seed();
        table.add_row("Acme Co.");

        let row = table.rows().last().unwrap();
        assert_eq!(row["market_cap"], "$100B");
        assert_eq!(row["pe_fy1"], "20.0");
    }

    #[test]
    fn test_add_row_fills_only_current_columns() {
        let mut table = PeerTable::seed();
        table.add_column("revenue", "Revenue", ColumnKind::Number);
        table.add_row("Apple Inc.");

        let row = table.rows().last().unwrap();
        assert_eq!(row["revenue"], "");
        assert_rows_consistent(&table);
    }

    #[test]
    fn test_add_row_empty_name_is_noop() {
        let mut table = PeerTable::seed();
        assert!(!table.add_row(""));
        assert_eq!(table.rows().len(), 4);
    }

    #[test]
    fn test_remove_row_out_of_bounds_is_noop() {
        let mut table = PeerTable::seed();
        table.remove_row(99);
        assert_eq!(table.rows().len(), 4);
    }

    #[test]
    fn test_save_default_columns_snapshots_ids() {
        let mut table = PeerTable::seed();
        table.add_column("revenue", "Revenue", ColumnKind::Number);
        assert!(!table.default_columns().contains(&"revenue".to_string()));

        table.save_default_columns();
        assert!(table.default_columns().contains(&"revenue".to_string()));

        // Later mutations leave the snapshot alone
        table.remove_column("revenue");
        assert!(table.default_columns().contains(&"revenue".to_string()));
    }

    #[test]
    fn test_format_cell() {
        assert_eq!(format_cell("", ColumnKind::Number), "-");
        assert_eq!(format_cell("", ColumnKind::Text), "-");
        assert_eq!(format_cell("12.5", ColumnKind::Percentage), "12.5%");
        assert_eq!(format_cell("28.1", ColumnKind::Number), "28.1");
        assert_eq!(format_cell("$2.8T", ColumnKind::Text), "$2.8T");
    }

    #[test]
    fn test_display_name_ticker_lookup() {
        assert_eq!(display_name("Apple Inc."), "Apple Inc. (AAPL)");
        assert_eq!(display_name("apple inc."), "apple inc. (AAPL)");
        assert_eq!(display_name("Acme Co."), "Acme Co.");
    }

    #[test]
    fn test_column_kind_keys_round_trip() {
        for kind in ColumnKind::ALL {
            assert_eq!(ColumnKind::from_key(kind.key()), Some(kind));
        }
        assert_eq!(ColumnKind::from_key("currency"), None);
    }
}
