//! Financial Statements Model
//!
//! Fixed mock statement grid (15 metrics x 7 fiscal years) with the
//! per-metric formatting rules and the tab-separated export used by the
//! "Copy to Excel" action.

/// Fiscal year columns: data key and display label
pub const YEARS: [(&str, &str); 7] = [
    ("2020", "FY20"),
    ("2021", "FY21"),
    ("2022", "FY22"),
    ("2023", "FY23"),
    ("2024E", "FY24E"),
    ("2025E", "FY25E"),
    ("2026E", "FY26E"),
];

/// A statement cell: either a raw dollar amount or a preformatted ratio
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Cell {
    Amount(f64),
    Preformatted(&'static str),
}

/// One statement row: metric name plus a value per fiscal year
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatementRow {
    pub metric: &'static str,
    pub cells: [Cell; 7],
}

use Cell::{Amount, Preformatted};

/// The mock statement grid, in display order
pub const ROWS: [StatementRow; 15] = [
    StatementRow {
        metric: "Revenue",
        cells: [
            Amount(274515.0),
            Amount(365817.0),
            Amount(394328.0),
            Amount(383285.0),
            Amount(400000.0),
            Amount(420000.0),
            Amount(440000.0),
        ],
    },
    StatementRow {
        metric: "Revenue y/y",
        cells: [
            Preformatted("5.5%"),
            Preformatted("33.3%"),
            Preformatted("7.8%"),
            Preformatted("-2.8%"),
            Preformatted("4.4%"),
            Preformatted("5.0%"),
            Preformatted("4.8%"),
        ],
    },
    StatementRow {
        metric: "Gross profit",
        cells: [
            Amount(104956.0),
            Amount(152836.0),
            Amount(170782.0),
            Amount(162024.0),
            Amount(170000.0),
            Amount(180000.0),
            Amount(190000.0),
        ],
    },
    StatementRow {
        metric: "Gross profit y/y",
        cells: [
            Preformatted("6.7%"),
            Preformatted("45.7%"),
            Preformatted("11.8%"),
            Preformatted("-5.1%"),
            Preformatted("4.9%"),
            Preformatted("5.9%"),
            Preformatted("5.6%"),
        ],
    },
    StatementRow {
        metric: "Gross margin %",
        cells: [
            Preformatted("38.2%"),
            Preformatted("41.8%"),
            Preformatted("43.3%"),
            Preformatted("42.3%"),
            Preformatted("42.5%"),
            Preformatted("42.9%"),
            Preformatted("43.2%"),
        ],
    },
    StatementRow {
        metric: "Operating Profit, Adj.",
        cells: [
            Amount(66288.0),
            Amount(108949.0),
            Amount(119437.0),
            Amount(114304.0),
            Amount(120000.0),
            Amount(126000.0),
            Amount(132000.0),
        ],
    },
    StatementRow {
        metric: "Operating Profit, Adj. y/y",
        cells: [
            Preformatted("4.7%"),
            Preformatted("64.4%"),
            Preformatted("9.6%"),
            Preformatted("-4.3%"),
            Preformatted("5.0%"),
            Preformatted("5.0%"),
            Preformatted("4.8%"),
        ],
    },
    StatementRow {
        metric: "Operating Margin %",
        cells: [
            Preformatted("24.1%"),
            Preformatted("29.8%"),
            Preformatted("30.3%"),
            Preformatted("29.8%"),
            Preformatted("30.0%"),
            Preformatted("30.0%"),
            Preformatted("30.0%"),
        ],
    },
    StatementRow {
        metric: "EPS",
        cells: [
            Amount(3.28),
            Amount(5.67),
            Amount(6.11),
            Amount(6.13),
            Amount(6.50),
            Amount(7.00),
            Amount(7.50),
        ],
    },
    StatementRow {
        metric: "EPS y/y",
        cells: [
            Preformatted("10.4%"),
            Preformatted("72.9%"),
            Preformatted("7.8%"),
            Preformatted("0.3%"),
            Preformatted("6.0%"),
            Preformatted("7.7%"),
            Preformatted("7.1%"),
        ],
    },
    StatementRow {
        metric: "Op. CF",
        cells: [
            Amount(80067.0),
            Amount(104038.0),
            Amount(122151.0),
            Amount(110543.0),
            Amount(115000.0),
            Amount(120000.0),
            Amount(125000.0),
        ],
    },
    StatementRow {
        metric: "CAPEX",
        cells: [
            Amount(7309.0),
            Amount(11085.0),
            Amount(10708.0),
            Amount(10804.0),
            Amount(11000.0),
            Amount(11500.0),
            Amount(12000.0),
        ],
    },
    StatementRow {
        metric: "FCF",
        cells: [
            Amount(72758.0),
            Amount(92953.0),
            Amount(111443.0),
            Amount(99739.0),
            Amount(104000.0),
            Amount(108500.0),
            Amount(113000.0),
        ],
    },
    StatementRow {
        metric: "Net Debt",
        cells: [
            Amount(-79639.0),
            Amount(-79665.0),
            Amount(-54067.0),
            Amount(-57000.0),
            Amount(-60000.0),
            Amount(-65000.0),
            Amount(-70000.0),
        ],
    },
    StatementRow {
        metric: "Net Debt/EBITDA",
        cells: [
            Preformatted("-1.0x"),
            Preformatted("-0.9x"),
            Preformatted("-0.6x"),
            Preformatted("-0.6x"),
            Preformatted("-0.6x"),
            Preformatted("-0.7x"),
            Preformatted("-0.7x"),
        ],
    },
];

/// Ratio rows render italic and indented in the table
pub fn is_ratio_metric(metric: &str) -> bool {
    metric.contains("margin") || metric.contains("y/y")
}

/// Format a statement cell for its metric row
pub fn format_value(cell: Cell, metric: &str) -> String {
    let value = match cell {
        Preformatted(text) => return text.to_string(),
        Amount(value) => value,
    };

    if is_ratio_metric(metric) {
        format!("{}%", value)
    } else if metric == "EPS" {
        format!("${:.2}", value)
    } else if metric.contains("Debt/EBITDA") {
        format!("{}x", value)
    } else {
        format!("${}", group_thousands(value))
    }
}

/// Render a whole number with comma separators, e.g. -79639 -> "-79,639"
fn group_thousands(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.abs().to_string();

    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Tab-separated export of the whole grid: header row of year labels, then
/// one formatted row per metric. This is the clipboard payload.
pub fn to_tsv() -> String {
    let mut text = String::from("Metric");
    for (_, label) in YEARS {
        text.push('\t');
        text.push_str(label);
    }
    text.push('\n');

    for row in ROWS {
        text.push_str(row.metric);
        for cell in row.cells {
            text.push('\t');
            text.push_str(&format_value(cell, row.metric));
        }
        text.push('\n');
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amounts_group_thousands() {
        assert_eq!(format_value(Amount(274515.0), "Revenue"), "$274,515");
        assert_eq!(format_value(Amount(-79639.0), "Net Debt"), "$-79,639");
        assert_eq!(format_value(Amount(7309.0), "CAPEX"), "$7,309");
    }

    #[test]
    fn test_format_eps_two_decimals() {
        assert_eq!(format_value(Amount(3.28), "EPS"), "$3.28");
        assert_eq!(format_value(Amount(7.0), "EPS"), "$7.00");
    }

    #[test]
    fn test_preformatted_cells_pass_through() {
        assert_eq!(format_value(Preformatted("-2.8%"), "Revenue y/y"), "-2.8%");
        assert_eq!(
            format_value(Preformatted("-1.0x"), "Net Debt/EBITDA"),
            "-1.0x"
        );
    }

    #[test]
    fn test_ratio_metric_detection() {
        assert!(is_ratio_metric("Gross margin %"));
        assert!(is_ratio_metric("EPS y/y"));
        assert!(!is_ratio_metric("EPS"));
        assert!(!is_ratio_metric("Net Debt"));
    }

    #[test]
    fn test_tsv_shape() {
        let tsv = to_tsv();
        let lines: Vec<&str> = tsv.lines().collect();

        assert_eq!(lines.len(), 1 + ROWS.len());
        assert_eq!(lines[0], "Metric\tFY20\tFY21\tFY22\tFY23\tFY24E\tFY25E\tFY26E");
        assert!(lines[1].starts_with("Revenue\t$274,515\t$365,817"));

        for line in &lines {
            assert_eq!(line.matches('\t').count(), YEARS.len());
        }
    }
}
