// dataforge-core/src/domain/dataset.rs
//
// The in-memory table model. A Dataset is column-major: every domain
// generator declares an explicit ordered schema and fills it column by
// column, then computes derived columns strictly afterwards through
// `TableBuilder::derive`. A finished Dataset is immutable.

use std::fmt;

use chrono::NaiveDate;

use crate::domain::error::DomainError;

/// Declared value kind of a column. Checked when sampled values are
/// attached to the table, so a schema drift is caught at generation time
/// instead of surfacing as a malformed CSV cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticType {
    Text,
    Categorical,
    Integer,
    Float,
    Date,
}

/// One typed scalar cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Int(i64),
    Float(f64),
    Date(NaiveDate),
}

impl Value {
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Text(_) => "text",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Date(_) => "date",
        }
    }

    fn matches(&self, ty: SemanticType) -> bool {
        matches!(
            (self, ty),
            (Value::Text(_), SemanticType::Text)
                | (Value::Text(_), SemanticType::Categorical)
                | (Value::Int(_), SemanticType::Integer)
                | (Value::Float(_), SemanticType::Float)
                | (Value::Date(_), SemanticType::Date)
        )
    }
}

/// Display is the CSV cell encoding (dates as ISO `%Y-%m-%d`).
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{}", s),
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

/// (name, semantic type) pair; each domain schema is an explicit ordered
/// list of these rather than an incidental construction order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub ty: SemanticType,
}

impl ColumnSpec {
    pub const fn new(name: &'static str, ty: SemanticType) -> Self {
        Self { name, ty }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Column {
    spec: ColumnSpec,
    values: Vec<Value>,
}

/// A named, finished table for one business domain.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    name: String,
    n_rows: usize,
    columns: Vec<Column>,
}

impl Dataset {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn row_count(&self) -> usize {
        self.n_rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Column names in declaration order (the CSV header).
    pub fn headers(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.spec.name).collect()
    }

    pub fn column(&self, name: &str) -> Option<&[Value]> {
        self.columns
            .iter()
            .find(|c| c.spec.name == name)
            .map(|c| c.values.as_slice())
    }

    /// One row as cell references, in declared column order.
    pub fn row(&self, index: usize) -> Vec<&Value> {
        self.columns.iter().map(|c| &c.values[index]).collect()
    }
}

/// Read-only view over one row while derived columns are being computed.
/// Accessors fail on unknown names or type mismatches so a formula typo
/// is a hard error, not a silent zero.
pub struct RowView<'a> {
    columns: &'a [Column],
    index: usize,
}

impl<'a> RowView<'a> {
    /// Index of the row being evaluated. Used by generators that pair a
    /// pre-sampled per-row vector (e.g. a cost multiplier) with a formula.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn value(&self, name: &str) -> Result<&'a Value, DomainError> {
        self.columns
            .iter()
            .find(|c| c.spec.name == name)
            .map(|c| &c.values[self.index])
            .ok_or_else(|| DomainError::UnknownColumn(name.to_string()))
    }

    /// Numeric accessor; integer columns are widened to f64 so formulas
    /// can mix the two without casts at every call site.
    pub fn f64(&self, name: &str) -> Result<f64, DomainError> {
        match self.value(name)? {
            Value::Float(v) => Ok(*v),
            Value::Int(v) => Ok(*v as f64),
            other => Err(DomainError::ValueTypeMismatch {
                column: name.to_string(),
                expected: "float",
                actual: other.type_name(),
            }),
        }
    }

    pub fn i64(&self, name: &str) -> Result<i64, DomainError> {
        match self.value(name)? {
            Value::Int(v) => Ok(*v),
            other => Err(DomainError::ValueTypeMismatch {
                column: name.to_string(),
                expected: "integer",
                actual: other.type_name(),
            }),
        }
    }

    pub fn date(&self, name: &str) -> Result<NaiveDate, DomainError> {
        match self.value(name)? {
            Value::Date(d) => Ok(*d),
            other => Err(DomainError::ValueTypeMismatch {
                column: name.to_string(),
                expected: "date",
                actual: other.type_name(),
            }),
        }
    }
}

/// Builds one Dataset: sampled columns first, derived columns after.
pub struct TableBuilder {
    name: String,
    n_rows: usize,
    columns: Vec<Column>,
}

impl TableBuilder {
    pub fn new(name: impl Into<String>, n_rows: usize) -> Self {
        Self {
            name: name.into(),
            n_rows,
            columns: Vec::new(),
        }
    }

    /// Attach a sampled column. The value count must equal the row count
    /// and every value must match the declared semantic type.
    pub fn sampled(&mut self, spec: ColumnSpec, values: Vec<Value>) -> Result<(), DomainError> {
        if values.len() != self.n_rows {
            return Err(DomainError::ColumnLengthMismatch {
                table: self.name.clone(),
                column: spec.name.to_string(),
                values: values.len(),
                expected: self.n_rows,
            });
        }
        self.check_new(&spec)?;
        for value in &values {
            if !value.matches(spec.ty) {
                return Err(DomainError::ValueTypeMismatch {
                    column: spec.name.to_string(),
                    expected: spec.name_of_type(),
                    actual: value.type_name(),
                });
            }
        }
        self.columns.push(Column { spec, values });
        Ok(())
    }

    /// Compute a derived column row by row. The closure only sees columns
    /// that already exist, so derivation order is explicit in the caller.
    pub fn derive<F>(&mut self, spec: ColumnSpec, f: F) -> Result<(), DomainError>
    where
        F: Fn(&RowView<'_>) -> Result<Value, DomainError>,
    {
        self.check_new(&spec)?;
        let mut values = Vec::with_capacity(self.n_rows);
        for index in 0..self.n_rows {
            let row = RowView {
                columns: &self.columns,
                index,
            };
            let value = f(&row)?;
            if !value.matches(spec.ty) {
                return Err(DomainError::ValueTypeMismatch {
                    column: spec.name.to_string(),
                    expected: spec.name_of_type(),
                    actual: value.type_name(),
                });
            }
            values.push(value);
        }
        self.columns.push(Column { spec, values });
        Ok(())
    }

    pub fn finish(self) -> Dataset {
        Dataset {
            name: self.name,
            n_rows: self.n_rows,
            columns: self.columns,
        }
    }

    fn check_new(&self, spec: &ColumnSpec) -> Result<(), DomainError> {
        if self.columns.iter().any(|c| c.spec.name == spec.name) {
            return Err(DomainError::DuplicateColumn {
                table: self.name.clone(),
                column: spec.name.to_string(),
            });
        }
        Ok(())
    }
}

impl ColumnSpec {
    fn name_of_type(&self) -> &'static str {
        match self.ty {
            SemanticType::Text => "text",
            SemanticType::Categorical => "categorical",
            SemanticType::Integer => "integer",
            SemanticType::Float => "float",
            SemanticType::Date => "date",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QTY: ColumnSpec = ColumnSpec::new("quantity", SemanticType::Integer);
    const PRICE: ColumnSpec = ColumnSpec::new("price", SemanticType::Float);

    #[test]
    fn test_sampled_column_length_checked() {
        let mut t = TableBuilder::new("demo", 3);
        let err = t.sampled(QTY, vec![Value::Int(1), Value::Int(2)]);
        assert!(matches!(
            err,
            Err(DomainError::ColumnLengthMismatch { expected: 3, .. })
        ));
    }

    #[test]
    fn test_sampled_column_type_checked() {
        let mut t = TableBuilder::new("demo", 1);
        let err = t.sampled(QTY, vec![Value::Float(1.5)]);
        assert!(matches!(err, Err(DomainError::ValueTypeMismatch { .. })));
    }

    #[test]
    fn test_duplicate_column_rejected() {
        let mut t = TableBuilder::new("demo", 1);
        t.sampled(QTY, vec![Value::Int(1)]).unwrap();
        let err = t.sampled(QTY, vec![Value::Int(2)]);
        assert!(matches!(err, Err(DomainError::DuplicateColumn { .. })));
    }

    #[test]
    fn test_derive_sees_sampled_columns() {
        let mut t = TableBuilder::new("demo", 2);
        t.sampled(QTY, vec![Value::Int(2), Value::Int(3)]).unwrap();
        t.sampled(PRICE, vec![Value::Float(10.0), Value::Float(4.0)])
            .unwrap();
        t.derive(ColumnSpec::new("total", SemanticType::Float), |r| {
            Ok(Value::Float(r.f64("quantity")? * r.f64("price")?))
        })
        .unwrap();
        let ds = t.finish();
        assert_eq!(ds.headers(), vec!["quantity", "price", "total"]);
        assert_eq!(
            ds.column("total").unwrap(),
            &[Value::Float(20.0), Value::Float(12.0)]
        );
    }

    #[test]
    fn test_derive_unknown_column_is_error() {
        let mut t = TableBuilder::new("demo", 1);
        t.sampled(QTY, vec![Value::Int(1)]).unwrap();
        let err = t.derive(ColumnSpec::new("broken", SemanticType::Float), |r| {
            Ok(Value::Float(r.f64("missing")?))
        });
        assert!(matches!(err, Err(DomainError::UnknownColumn(_))));
    }

    #[test]
    fn test_zero_row_table_is_valid() {
        let mut t = TableBuilder::new("demo", 0);
        t.sampled(QTY, vec![]).unwrap();
        t.derive(ColumnSpec::new("double", SemanticType::Integer), |r| {
            Ok(Value::Int(r.i64("quantity")? * 2))
        })
        .unwrap();
        let ds = t.finish();
        assert_eq!(ds.row_count(), 0);
        assert_eq!(ds.column_count(), 2);
    }

    #[test]
    fn test_value_display_encoding() {
        let d = NaiveDate::from_ymd_opt(2022, 3, 9).unwrap();
        assert_eq!(Value::Date(d).to_string(), "2022-03-09");
        assert_eq!(Value::Float(12.5).to_string(), "12.5");
        assert_eq!(Value::text("North").to_string(), "North");
    }
}
