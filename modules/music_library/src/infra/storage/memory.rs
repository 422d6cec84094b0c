//! In-process row store
//!
//! Behaves like the hosted store for the operations the services use:
//! store-side defaults on insert, unknown tables and columns rejected,
//! mutating calls return the affected rows.

use crate::domain::schema::{ComposerField, EntityFields, RecordingField, Row, WorkField};
use crate::domain::store::{Filter, Order, RowStore};
use anyhow::{anyhow, bail, Result};
use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Store-side default for a column omitted on insert
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnDefault {
    Value(Value),
    /// Fresh UUID v4 string
    Uuid,
    /// Current time, RFC 3339 UTC
    Now,
}

/// Declared table: its columns and their defaults
#[derive(Debug, Clone)]
pub struct TableDef {
    name: String,
    columns: Vec<String>,
    defaults: HashMap<String, ColumnDefault>,
}

impl TableDef {
    pub fn new(name: &str, columns: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            defaults: HashMap::new(),
        }
    }

    /// Declare a table from an entity's field table; `id` and `created_at` are generated
    pub fn for_entity<F: EntityFields>() -> Self {
        let columns = F::columns();
        let mut def = Self::new(F::TABLE, &columns);
        if columns.contains(&"id") {
            def = def.with_default("id", ColumnDefault::Uuid);
        }
        if columns.contains(&"created_at") {
            def = def.with_default("created_at", ColumnDefault::Now);
        }
        def
    }

    pub fn with_default(mut self, column: &str, default: ColumnDefault) -> Self {
        self.defaults.insert(column.to_string(), default);
        self
    }

    fn check_columns<'a>(&self, columns: impl IntoIterator<Item = &'a String>) -> Result<()> {
        for column in columns {
            if !self.columns.contains(column) {
                bail!("column '{}' does not exist on table '{}'", column, self.name);
            }
        }
        Ok(())
    }

    fn materialize(&self, mut row: Row) -> Row {
        for column in &self.columns {
            if row.contains_key(column) {
                continue;
            }
            let value = match self.defaults.get(column) {
                Some(ColumnDefault::Value(value)) => value.clone(),
                Some(ColumnDefault::Uuid) => Value::String(uuid::Uuid::new_v4().to_string()),
                Some(ColumnDefault::Now) => Value::String(chrono::Utc::now().to_rfc3339()),
                None => Value::Null,
            };
            row.insert(column.clone(), value);
        }
        row
    }
}

struct Table {
    def: TableDef,
    rows: Vec<Row>,
}

/// Row store holding tables in memory
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<HashMap<String, Table>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with the composers, works and recordings tables
    pub fn music_library() -> Self {
        Self::new()
            .with_table(
                TableDef::for_entity::<ComposerField>()
                    .with_default(
                        ComposerField::SheetMusicCount.column(),
                        ColumnDefault::Value(Value::from(0)),
                    )
                    .with_default(
                        ComposerField::RecordingCount.column(),
                        ColumnDefault::Value(Value::from(0)),
                    ),
            )
            .with_table(TableDef::for_entity::<WorkField>())
            .with_table(TableDef::for_entity::<RecordingField>())
    }

    pub fn with_table(self, def: TableDef) -> Self {
        self.tables.write().insert(
            def.name.clone(),
            Table {
                def,
                rows: Vec::new(),
            },
        );
        self
    }

    /// Number of rows currently held in `table`
    pub fn row_count(&self, table: &str) -> usize {
        self.tables
            .read()
            .get(table)
            .map(|t| t.rows.len())
            .unwrap_or(0)
    }
}

fn unknown_table(table: &str) -> anyhow::Error {
    anyhow!("table '{}' does not exist", table)
}

fn matches(row: &Row, filters: &[Filter]) -> bool {
    filters.iter().all(|filter| match row.get(&filter.column) {
        Some(Value::String(value)) => *value == filter.value,
        Some(Value::Null) | None => false,
        Some(other) => other.to_string() == filter.value,
    })
}

fn compare(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::String(a)), Some(Value::String(b))) => a.cmp(b),
        (Some(Value::Number(a)), Some(Value::Number(b))) => a
            .as_f64()
            .partial_cmp(&b.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::Bool(a)), Some(Value::Bool(b))) => a.cmp(b),
        // nulls sort last, as in PostgreSQL ascending order
        (None | Some(Value::Null), None | Some(Value::Null)) => Ordering::Equal,
        (None | Some(Value::Null), _) => Ordering::Greater,
        (_, None | Some(Value::Null)) => Ordering::Less,
        (Some(a), Some(b)) => a.to_string().cmp(&b.to_string()),
    }
}

#[async_trait]
impl RowStore for MemoryStore {
    async fn select(
        &self,
        table: &str,
        filters: &[Filter],
        order: Option<&Order>,
    ) -> Result<Vec<Row>> {
        let tables = self.tables.read();
        let table = tables.get(table).ok_or_else(|| unknown_table(table))?;
        table.def.check_columns(filters.iter().map(|f| &f.column))?;

        let mut rows: Vec<Row> = table
            .rows
            .iter()
            .filter(|row| matches(row, filters))
            .cloned()
            .collect();

        if let Some(order) = order {
            table.def.check_columns([&order.column])?;
            rows.sort_by(|a, b| {
                let ordering = compare(a.get(&order.column), b.get(&order.column));
                if order.ascending {
                    ordering
                } else {
                    ordering.reverse()
                }
            });
        }
        Ok(rows)
    }

    async fn insert(&self, table: &str, row: Row) -> Result<Vec<Row>> {
        let mut tables = self.tables.write();
        let table = tables.get_mut(table).ok_or_else(|| unknown_table(table))?;
        table.def.check_columns(row.keys())?;

        let row = table.def.materialize(row);
        table.rows.push(row.clone());
        Ok(vec![row])
    }

    async fn update(&self, table: &str, changes: Row, filters: &[Filter]) -> Result<Vec<Row>> {
        let mut tables = self.tables.write();
        let table = tables.get_mut(table).ok_or_else(|| unknown_table(table))?;
        table.def.check_columns(changes.keys())?;
        table.def.check_columns(filters.iter().map(|f| &f.column))?;

        let mut updated = Vec::new();
        for row in table.rows.iter_mut().filter(|row| matches(row, filters)) {
            for (column, value) in &changes {
                row.insert(column.clone(), value.clone());
            }
            updated.push(row.clone());
        }
        Ok(updated)
    }

    async fn delete(&self, table: &str, filters: &[Filter]) -> Result<Vec<Row>> {
        let mut tables = self.tables.write();
        let table = tables.get_mut(table).ok_or_else(|| unknown_table(table))?;
        table.def.check_columns(filters.iter().map(|f| &f.column))?;

        let (deleted, kept): (Vec<Row>, Vec<Row>) = table
            .rows
            .drain(..)
            .partition(|row| matches(row, filters));
        table.rows = kept;
        Ok(deleted)
    }
}
