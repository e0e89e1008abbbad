// TableConnection implementation backed by libsql
//
// Converts between the connection-layer Value/Row types and libsql values.
// Every connect() initializes the schema on the new handle.

use async_trait::async_trait;

use super::client::{TursoClient, TursoError, TursoHandle};
use super::schema::initialize_schema;
use crate::connection::{ConnectionError, Row, Statement, TableConnection, Value};

impl From<TursoError> for ConnectionError {
    fn from(error: TursoError) -> Self {
        match error {
            TursoError::Connect(msg) => ConnectionError::Connect(msg),
            TursoError::Query(msg) => ConnectionError::Query(msg),
            TursoError::Constraint(msg) => ConnectionError::Constraint(msg),
        }
    }
}

fn to_libsql_value(value: &Value) -> libsql::Value {
    match value {
        Value::Null => libsql::Value::Null,
        Value::Integer(i) => libsql::Value::Integer(*i),
        Value::Real(f) => libsql::Value::Real(*f),
        Value::Text(s) => libsql::Value::Text(s.clone()),
    }
}

fn from_libsql_value(value: libsql::Value) -> Result<Value, ConnectionError> {
    match value {
        libsql::Value::Null => Ok(Value::Null),
        libsql::Value::Integer(i) => Ok(Value::Integer(i)),
        libsql::Value::Real(f) => Ok(Value::Real(f)),
        libsql::Value::Text(s) => Ok(Value::Text(s)),
        libsql::Value::Blob(_) => Err(ConnectionError::Query(
            "Blob columns are not supported".to_string(),
        )),
    }
}

fn bound_params(statement: &Statement) -> libsql::params::Params {
    libsql::params::Params::Positional(statement.params().iter().map(to_libsql_value).collect())
}

#[async_trait]
impl TableConnection for TursoClient {
    type Handle = TursoHandle;

    async fn connect(&self) -> Result<TursoHandle, ConnectionError> {
        let handle = self.connection()?;
        initialize_schema(&handle).await?;
        crate::debug!("Connected to glossary database at {}", self.location());
        Ok(handle)
    }

    async fn run_query(
        &self,
        handle: &TursoHandle,
        statement: &Statement,
    ) -> Result<Vec<Row>, ConnectionError> {
        let mut rows = handle
            .query(statement.sql(), bound_params(statement))
            .await?;
        let column_count = rows.column_count();

        let mut result = Vec::new();
        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| ConnectionError::Query(e.to_string()))?
        {
            let mut values = Vec::with_capacity(column_count.max(0) as usize);
            for index in 0..column_count {
                let value = row
                    .get_value(index)
                    .map_err(|e| ConnectionError::Query(e.to_string()))?;
                values.push(from_libsql_value(value)?);
            }
            result.push(Row::new(values));
        }

        Ok(result)
    }

    async fn run_statement(
        &self,
        handle: &TursoHandle,
        statement: &Statement,
    ) -> Result<u64, ConnectionError> {
        let affected = handle
            .execute(statement.sql(), bound_params(statement))
            .await?;
        Ok(affected)
    }
}

#[cfg(test)]
#[path = "connection_test.rs"]
mod tests;
