use std::collections::BTreeMap;

/// A single table cell.
///
/// Raw CSV cells arrive as `Text`; the literal decoder widens them into the
/// full value domain (lists, records, numbers, booleans). `Missing` stands
/// for an empty source cell.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Missing,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<CellValue>),
    Record(BTreeMap<String, CellValue>),
}

/// Shared default for accessors that need a `&CellValue` for absent cells.
pub static MISSING: CellValue = CellValue::Missing;

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, CellValue::Int(_) | CellValue::Float(_))
    }

    /// Numeric view of the cell, for `Int` and `Float` only.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Int(v) => Some(*v as f64),
            CellValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[CellValue]> {
        match self {
            CellValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Truthiness of decoded dataset values: empty and zero values are
    /// falsy, `Missing` is falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            CellValue::Missing => false,
            CellValue::Bool(b) => *b,
            CellValue::Int(v) => *v != 0,
            CellValue::Float(v) => *v != 0.0,
            CellValue::Text(s) => !s.is_empty(),
            CellValue::List(items) => !items.is_empty(),
            CellValue::Record(fields) => !fields.is_empty(),
        }
    }

    /// Canonical string rendering used for grouping keys and duplicate
    /// detection. Scalars render bare (`Text("a")` is `a`, `Int(10)` is
    /// `10`); nested values render in literal form so distinct structures
    /// get distinct keys.
    pub fn key(&self) -> String {
        match self {
            CellValue::Missing => String::new(),
            CellValue::Bool(true) => "True".to_string(),
            CellValue::Bool(false) => "False".to_string(),
            CellValue::Int(v) => v.to_string(),
            CellValue::Float(v) => format!("{v}"),
            CellValue::Text(s) => s.clone(),
            CellValue::List(items) => {
                let parts: Vec<String> = items.iter().map(CellValue::nested_key).collect();
                format!("[{}]", parts.join(", "))
            }
            CellValue::Record(fields) => {
                let parts: Vec<String> = fields
                    .iter()
                    .map(|(k, v)| format!("'{}': {}", k, v.nested_key()))
                    .collect();
                format!("{{{}}}", parts.join(", "))
            }
        }
    }

    fn nested_key(&self) -> String {
        match self {
            CellValue::Text(s) => format!("'{s}'"),
            CellValue::Missing => "None".to_string(),
            other => other.key(),
        }
    }

    /// Variant name for data-type summaries.
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Missing => "missing",
            CellValue::Bool(_) => "bool",
            CellValue::Int(_) => "int",
            CellValue::Float(_) => "float",
            CellValue::Text(_) => "text",
            CellValue::List(_) => "list",
            CellValue::Record(_) => "record",
        }
    }
}
