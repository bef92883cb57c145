//! HTML table extraction.

use scraper::{ElementRef, Html, Selector};

/// Collapse runs of whitespace into single spaces and trim the ends.
pub fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// First `<table>` in document order, if the page has one.
pub fn find_table(doc: &Html) -> Option<ElementRef<'_>> {
    let selector = Selector::parse("table").expect("CSS selector for tables should be valid");
    doc.select(&selector).next()
}

/// Extract `(headers, rows)` from one table element.
///
/// Headers come from every `th` inside the table, in document order, each
/// whitespace-collapsed. Rows come from every `tr` after the first; a row
/// contributes one entry per `td`, trimmed, with empty cells normalized to
/// `"N/A"`. Rows without any `td` (nested header rows, spacers) are skipped.
pub fn parse_table(table: ElementRef<'_>) -> (Vec<String>, Vec<Vec<String>>) {
    let th = Selector::parse("th").expect("CSS selector for header cells should be valid");
    let tr = Selector::parse("tr").expect("CSS selector for rows should be valid");
    let td = Selector::parse("td").expect("CSS selector for data cells should be valid");

    let headers: Vec<String> = table
        .select(&th)
        .map(|cell| collapse_whitespace(&cell.text().collect::<String>()))
        .collect();

    let mut rows = Vec::new();
    for row in table.select(&tr).skip(1) {
        let cells: Vec<String> = row
            .select(&td)
            .map(|cell| {
                let text = cell.text().collect::<String>();
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    "N/A".to_string()
                } else {
                    trimmed.to_string()
                }
            })
            .collect();
        if !cells.is_empty() {
            rows.push(cells);
        }
    }

    (headers, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<html><body>
        <table>
            <tr><th>  City/Post </th><th>Interview Required
                Visitors   (B1/B2)</th></tr>
            <tr><td> Paris </td><td>30 Days</td></tr>
            <tr><td>Mexico City</td><td>  </td></tr>
            <tr></tr>
        </table>
    </body></html>"#;

    #[test]
    fn headers_are_collapsed() {
        let doc = Html::parse_document(SAMPLE);
        let table = find_table(&doc).unwrap();
        let (headers, _) = parse_table(table);
        assert_eq!(
            headers,
            ["City/Post", "Interview Required Visitors (B1/B2)"]
        );
        for header in &headers {
            assert!(!header.contains("  "));
            assert_eq!(header, header.trim());
        }
    }

    #[test]
    fn cells_are_trimmed_and_empty_becomes_na() {
        let doc = Html::parse_document(SAMPLE);
        let table = find_table(&doc).unwrap();
        let (_, rows) = parse_table(table);
        assert_eq!(
            rows,
            [
                vec!["Paris".to_string(), "30 Days".to_string()],
                vec!["Mexico City".to_string(), "N/A".to_string()],
            ]
        );
    }

    #[test]
    fn rows_without_data_cells_are_skipped() {
        let doc = Html::parse_document(SAMPLE);
        let table = find_table(&doc).unwrap();
        let (_, rows) = parse_table(table);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn parsing_twice_is_identical() {
        let doc = Html::parse_document(SAMPLE);
        let table = find_table(&doc).unwrap();
        assert_eq!(parse_table(table), parse_table(table));
    }

    #[test]
    fn page_without_table() {
        let doc = Html::parse_document("<html><body><p>maintenance</p></body></html>");
        assert!(find_table(&doc).is_none());
    }

    #[test]
    fn collapse_whitespace_examples() {
        assert_eq!(collapse_whitespace("  a  \n\t b  "), "a b");
        assert_eq!(collapse_whitespace(""), "");
        assert_eq!(collapse_whitespace("plain"), "plain");
    }
}
