// Domain model for Google Docs content.
//
// The Docs API returns a deeply nested JSON tree and adds new element kinds
// over time, so the model is built leniently: any JSON value maps to SOME tree,
// and shapes we don't recognise become `StructuralElement::Other` instead of
// failing the whole request.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

// ============================================================================
// DOCUMENT BODY TREE
// ============================================================================

/// One node in a document's content tree.
#[derive(Debug, Clone, PartialEq)]
pub enum StructuralElement {
    Paragraph(Paragraph),
    Table(Table),
    TableOfContents(TableOfContents),
    /// Section breaks, page breaks and anything newer than this model.
    Other,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    pub elements: Vec<ParagraphElement>,
}

/// A paragraph child. Only text runs carry content; inline objects, auto text
/// and the like keep `content` empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParagraphElement {
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableCell {
    pub content: Vec<StructuralElement>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableOfContents {
    pub content: Vec<StructuralElement>,
}

/// The parts of a fetched document the relay cares about.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub title: String,
    pub body: Vec<StructuralElement>,
}

// ============================================================================
// LENIENT CONSTRUCTION
// ============================================================================

/// Parses a content list. Anything that isn't a JSON array is an empty list.
pub fn content_from_value(value: Option<&Value>) -> Vec<StructuralElement> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().map(StructuralElement::from_value).collect())
        .unwrap_or_default()
}

impl StructuralElement {
    /// Classifies a single element. Paragraphs win over tables, tables over
    /// tables of contents; a kind only counts when its child list is an array.
    pub fn from_value(value: &Value) -> Self {
        if let Some(elements) = value
            .pointer("/paragraph/elements")
            .and_then(Value::as_array)
        {
            return StructuralElement::Paragraph(Paragraph {
                elements: elements.iter().map(ParagraphElement::from_value).collect(),
            });
        }

        if let Some(rows) = value.pointer("/table/tableRows").and_then(Value::as_array) {
            return StructuralElement::Table(Table {
                rows: rows.iter().map(TableRow::from_value).collect(),
            });
        }

        if let Some(content) = value.pointer("/tableOfContents/content") {
            if content.is_array() {
                return StructuralElement::TableOfContents(TableOfContents {
                    content: content_from_value(Some(content)),
                });
            }
        }

        StructuralElement::Other
    }
}

impl ParagraphElement {
    fn from_value(value: &Value) -> Self {
        Self {
            content: value
                .pointer("/textRun/content")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }
}

impl TableRow {
    fn from_value(value: &Value) -> Self {
        let cells = value
            .get("tableCells")
            .and_then(Value::as_array)
            .map(|cells| cells.iter().map(TableCell::from_value).collect())
            .unwrap_or_default();
        Self { cells }
    }
}

impl TableCell {
    fn from_value(value: &Value) -> Self {
        Self {
            content: content_from_value(value.get("content")),
        }
    }
}

impl Document {
    /// Builds a document from a `documents.get` response body.
    pub fn from_value(value: &Value) -> Self {
        Self {
            title: value
                .get("title")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            body: content_from_value(value.pointer("/body/content")),
        }
    }
}

// Deserializing goes through `Value` so it inherits the lenient rules above:
// any well-formed JSON becomes a tree.

impl<'de> Deserialize<'de> for StructuralElement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_paragraph_runs() {
        let element = StructuralElement::from_value(&json!({
            "paragraph": { "elements": [
                { "textRun": { "content": "Hi" } },
                { "inlineObjectElement": { "inlineObjectId": "kix.1" } }
            ]}
        }));

        assert_eq!(
            element,
            StructuralElement::Paragraph(Paragraph {
                elements: vec![
                    ParagraphElement {
                        content: Some("Hi".to_string())
                    },
                    ParagraphElement { content: None },
                ],
            })
        );
    }

    #[test]
    fn test_paragraph_without_elements_is_other() {
        let element = StructuralElement::from_value(&json!({ "paragraph": {} }));
        assert_eq!(element, StructuralElement::Other);
    }

    #[test]
    fn test_table_missing_cells_defaults_to_empty() {
        let element = StructuralElement::from_value(&json!({
            "table": { "tableRows": [ {}, { "tableCells": "nope" } ] }
        }));

        assert_eq!(
            element,
            StructuralElement::Table(Table {
                rows: vec![TableRow::default(), TableRow::default()],
            })
        );
    }

    #[test]
    fn test_unknown_kinds_are_other() {
        assert_eq!(
            StructuralElement::from_value(&json!({ "sectionBreak": {} })),
            StructuralElement::Other
        );
        assert_eq!(StructuralElement::from_value(&json!(42)), StructuralElement::Other);
        assert_eq!(
            StructuralElement::from_value(&json!({ "tableOfContents": { "content": {} } })),
            StructuralElement::Other
        );
    }

    #[test]
    fn test_non_array_content_is_empty() {
        assert!(content_from_value(None).is_empty());
        assert!(content_from_value(Some(&Value::Null)).is_empty());
        assert!(content_from_value(Some(&json!("text"))).is_empty());
        assert!(content_from_value(Some(&json!({ "paragraph": {} }))).is_empty());
    }

    #[test]
    fn test_document_from_response() {
        let document: Document = serde_json::from_value(json!({
            "documentId": "abc",
            "title": "Notes",
            "body": { "content": [ { "sectionBreak": {} } ] }
        }))
        .unwrap();

        assert_eq!(document.title, "Notes");
        assert_eq!(document.body, vec![StructuralElement::Other]);
    }

    #[test]
    fn test_document_missing_fields() {
        let document: Document = serde_json::from_value(json!({ "title": 7 })).unwrap();
        assert_eq!(document, Document::default());
    }
}
