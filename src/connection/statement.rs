// Parameterized statements and result rows exchanged with a TableConnection

use super::ConnectionError;

/// A single bound parameter or column value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Real(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Null)
    }
}

/// SQL text with positional parameters (`?1`, `?2`, ...)
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    sql: &'static str,
    params: Vec<Value>,
}

impl Statement {
    /// Create a statement with no bound parameters.
    ///
    /// The SQL text is `'static` so that only fixed statement templates can be
    /// issued; caller-supplied values must go through [`Statement::bind`].
    pub fn new(sql: &'static str) -> Self {
        Self {
            sql,
            params: Vec::new(),
        }
    }

    /// Bind the next positional parameter.
    pub fn bind(mut self, value: impl Into<Value>) -> Self {
        self.params.push(value.into());
        self
    }

    pub fn sql(&self) -> &'static str {
        self.sql
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }
}

/// One result row, columns in select order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    values: Vec<Value>,
}

impl Row {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get a column value by index.
    pub fn get(&self, index: usize) -> Result<&Value, ConnectionError> {
        self.values
            .get(index)
            .ok_or_else(|| ConnectionError::Query(format!("Column {} out of range", index)))
    }

    /// Get a text column by index. NULL and non-text values are errors.
    pub fn text(&self, index: usize) -> Result<&str, ConnectionError> {
        match self.get(index)? {
            Value::Text(s) => Ok(s),
            other => Err(ConnectionError::Query(format!(
                "Column {} is not text: {:?}",
                index, other
            ))),
        }
    }

    /// Get an integer column by index.
    pub fn integer(&self, index: usize) -> Result<i64, ConnectionError> {
        match self.get(index)? {
            Value::Integer(i) => Ok(*i),
            other => Err(ConnectionError::Query(format!(
                "Column {} is not an integer: {:?}",
                index, other
            ))),
        }
    }
}
