// Flattens a Google Docs body tree into reading-order plain text.
//
// Paragraphs end with a newline, table rows render as `cell | cell` lines and
// tables of contents are inlined. Only table cells are trimmed here; trimming
// the whole document is left to the caller.

use serde_json::Value;

use super::document_model::{content_from_value, StructuralElement, Table};

/// Flattens a sequence of structural elements.
pub fn flatten(elements: &[StructuralElement]) -> String {
    let mut text = String::new();
    for element in elements {
        flatten_element(element, &mut text);
    }
    text
}

/// Flattens a raw `body.content` JSON value. Non-arrays yield `""`.
pub fn flatten_value(value: Option<&Value>) -> String {
    flatten(&content_from_value(value))
}

fn flatten_element(element: &StructuralElement, output: &mut String) {
    match element {
        StructuralElement::Paragraph(paragraph) => {
            for run in &paragraph.elements {
                if let Some(content) = &run.content {
                    output.push_str(content);
                }
            }
            output.push('\n');
        }
        StructuralElement::Table(table) => flatten_table(table, output),
        StructuralElement::TableOfContents(toc) => output.push_str(&flatten(&toc.content)),
        StructuralElement::Other => {}
    }
}

fn flatten_table(table: &Table, output: &mut String) {
    for row in &table.rows {
        let cells: Vec<String> = row
            .cells
            .iter()
            .map(|cell| flatten(&cell.content).trim().to_string())
            .collect();
        output.push_str(&cells.join(" | "));
        output.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn paragraph(runs: &[&str]) -> Value {
        let elements: Vec<Value> = runs
            .iter()
            .map(|run| json!({ "textRun": { "content": run } }))
            .collect();
        json!({ "paragraph": { "elements": elements } })
    }

    fn cell(content: Vec<Value>) -> Value {
        json!({ "content": content })
    }

    fn table(rows: Vec<Vec<Value>>) -> Value {
        let rows: Vec<Value> = rows
            .into_iter()
            .map(|cells| json!({ "tableCells": cells }))
            .collect();
        json!({ "table": { "tableRows": rows } })
    }

    #[test]
    fn test_non_sequence_input_is_empty() {
        assert_eq!(flatten_value(None), "");
        assert_eq!(flatten_value(Some(&Value::Null)), "");
        assert_eq!(flatten_value(Some(&json!(3))), "");
        assert_eq!(flatten_value(Some(&json!("body"))), "");
        assert_eq!(flatten_value(Some(&json!({ "content": [] }))), "");
    }

    #[test]
    fn test_paragraph_concatenates_runs() {
        let body = json!([paragraph(&["Hello, ", "world"])]);
        assert_eq!(flatten_value(Some(&body)), "Hello, world\n");
    }

    #[test]
    fn test_paragraph_preserves_embedded_whitespace() {
        let body = json!([paragraph(&["  line one\n", "\tline two\n"])]);
        assert_eq!(flatten_value(Some(&body)), "  line one\n\tline two\n\n");
    }

    #[test]
    fn test_empty_paragraph_still_adds_newline() {
        let body = json!([
            { "paragraph": { "elements": [] } },
            { "paragraph": { "elements": [ { "textRun": {} }, { "pageBreak": {} } ] } }
        ]);
        assert_eq!(flatten_value(Some(&body)), "\n\n");
    }

    #[test]
    fn test_table_row_joins_trimmed_cells() {
        let body = json!([table(vec![vec![
            cell(vec![paragraph(&["A"])]),
            cell(vec![paragraph(&["  B  "])]),
        ]])]);
        assert_eq!(flatten_value(Some(&body)), "A | B\n");
    }

    #[test]
    fn test_table_rows_in_order() {
        let body = json!([table(vec![
            vec![cell(vec![paragraph(&["Name"])]), cell(vec![paragraph(&["Qty"])])],
            vec![cell(vec![paragraph(&["Apples"])]), cell(vec![paragraph(&["3"])])],
        ])]);
        assert_eq!(flatten_value(Some(&body)), "Name | Qty\nApples | 3\n");
    }

    #[test]
    fn test_row_without_cells_is_blank_line() {
        let body = json!([{ "table": { "tableRows": [ {} ] } }]);
        assert_eq!(flatten_value(Some(&body)), "\n");
    }

    #[test]
    fn test_empty_cells_keep_separators() {
        let body = json!([table(vec![vec![
            cell(vec![]),
            json!({}),
            cell(vec![paragraph(&["C"])]),
        ]])]);
        assert_eq!(flatten_value(Some(&body)), " |  | C\n");
    }

    #[test]
    fn test_table_of_contents_adds_no_extra_newline() {
        let body = json!([{ "tableOfContents": { "content": [paragraph(&["X"])] } }]);
        assert_eq!(flatten_value(Some(&body)), "X\n");
    }

    #[test]
    fn test_nested_table_becomes_trimmed_cell_text() {
        let inner = table(vec![
            vec![cell(vec![paragraph(&["a"])]), cell(vec![paragraph(&["b"])])],
            vec![cell(vec![paragraph(&["c"])]), cell(vec![paragraph(&["d"])])],
        ]);
        let body = json!([table(vec![vec![
            cell(vec![inner]),
            cell(vec![paragraph(&["outer"])]),
        ]])]);

        assert_eq!(flatten_value(Some(&body)), "a | b\nc | d | outer\n");
    }

    #[test]
    fn test_unknown_elements_are_skipped() {
        let body = json!([
            { "sectionBreak": { "sectionStyle": {} } },
            paragraph(&["kept"]),
            null,
            "stray",
            { "table": { "columns": 2 } }
        ]);
        assert_eq!(flatten_value(Some(&body)), "kept\n");
    }

    #[test]
    fn test_top_level_result_is_not_trimmed() {
        let body = json!([paragraph(&["  padded  "])]);
        assert_eq!(flatten_value(Some(&body)), "  padded  \n");
    }

    #[test]
    fn test_flatten_is_idempotent() {
        let body = json!([
            paragraph(&["Title"]),
            table(vec![vec![cell(vec![paragraph(&["x"])])]]),
        ]);
        let elements = content_from_value(Some(&body));

        assert_eq!(flatten(&elements), flatten(&elements));
    }

    #[test]
    fn test_order_is_preserved() {
        let first = paragraph(&["one"]);
        let second = paragraph(&["two"]);

        assert_eq!(
            flatten_value(Some(&json!([first.clone(), second.clone()]))),
            "one\ntwo\n"
        );
        assert_eq!(flatten_value(Some(&json!([second, first]))), "two\none\n");
    }

    #[test]
    fn test_flatten_typed_elements() {
        use crate::core::documents::document_model::{Paragraph, ParagraphElement};

        let elements = vec![
            StructuralElement::Other,
            StructuralElement::Paragraph(Paragraph {
                elements: vec![ParagraphElement {
                    content: Some("typed".to_string()),
                }],
            }),
        ];
        assert_eq!(flatten(&elements), "typed\n");
        assert_eq!(flatten(&[]), "");
    }
}
