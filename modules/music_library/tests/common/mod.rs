//! Shared test harness: a recording, fault-injecting wrapper around the memory store

#![allow(dead_code)]

use async_trait::async_trait;
use music_library::domain::schema::Row;
use music_library::domain::{Filter, Order, RowStore, Services};
use music_library::infra::storage::MemoryStore;
use music_library::{Composer, Config, NewComposer};
use parking_lot::Mutex;
use std::sync::Arc;

/// Store call kinds, for recording and fault injection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Select,
    Insert,
    Update,
    Delete,
}

/// One call as the wrapped store received it
#[derive(Debug, Clone)]
pub struct Call {
    pub op: Op,
    pub table: String,
    pub row: Option<Row>,
    pub filters: Vec<Filter>,
}

/// Delegates to a [`MemoryStore`], recording every call and optionally failing some
pub struct SpyStore {
    inner: MemoryStore,
    calls: Mutex<Vec<Call>>,
    fail_on: Mutex<Option<(Op, String)>>,
    empty_inserts: Mutex<bool>,
}

impl SpyStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: MemoryStore::music_library(),
            calls: Mutex::new(Vec::new()),
            fail_on: Mutex::new(None),
            empty_inserts: Mutex::new(false),
        })
    }

    /// Make every `op` against `table` fail with a transport-style error
    pub fn fail_on(&self, op: Op, table: &str) {
        *self.fail_on.lock() = Some((op, table.to_string()));
    }

    /// Make inserts succeed without returning a row
    pub fn return_no_rows_on_insert(&self) {
        *self.empty_inserts.lock() = true;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    /// Rows passed to insert/update, in call order
    pub fn written_rows(&self, op: Op, table: &str) -> Vec<Row> {
        self.calls
            .lock()
            .iter()
            .filter(|c| c.op == op && c.table == table)
            .filter_map(|c| c.row.clone())
            .collect()
    }

    pub fn row_count(&self, table: &str) -> usize {
        self.inner.row_count(table)
    }

    fn record(&self, op: Op, table: &str, row: Option<&Row>, filters: &[Filter]) -> anyhow::Result<()> {
        self.calls.lock().push(Call {
            op,
            table: table.to_string(),
            row: row.cloned(),
            filters: filters.to_vec(),
        });
        match &*self.fail_on.lock() {
            Some((fail_op, fail_table)) if *fail_op == op && fail_table == table => {
                anyhow::bail!("connection reset while calling '{table}'")
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl RowStore for SpyStore {
    async fn select(
        &self,
        table: &str,
        filters: &[Filter],
        order: Option<&Order>,
    ) -> anyhow::Result<Vec<Row>> {
        self.record(Op::Select, table, None, filters)?;
        self.inner.select(table, filters, order).await
    }

    async fn insert(&self, table: &str, row: Row) -> anyhow::Result<Vec<Row>> {
        self.record(Op::Insert, table, Some(&row), &[])?;
        let rows = self.inner.insert(table, row).await?;
        if *self.empty_inserts.lock() {
            return Ok(Vec::new());
        }
        Ok(rows)
    }

    async fn update(&self, table: &str, changes: Row, filters: &[Filter]) -> anyhow::Result<Vec<Row>> {
        self.record(Op::Update, table, Some(&changes), filters)?;
        self.inner.update(table, changes, filters).await
    }

    async fn delete(&self, table: &str, filters: &[Filter]) -> anyhow::Result<Vec<Row>> {
        self.record(Op::Delete, table, None, filters)?;
        self.inner.delete(table, filters).await
    }
}

pub fn services(store: Arc<SpyStore>, cascade_composer_delete: bool) -> Services {
    let config = Config {
        cascade_composer_delete,
        ..Config::default()
    };
    Services::new(store, &config)
}

pub fn bach() -> NewComposer {
    NewComposer {
        name: "Johann Sebastian Bach".into(),
        period: "Baroque".into(),
        image: "https://img.example/bach.jpg".into(),
    }
}

pub async fn create_bach(services: &Services) -> Composer {
    services
        .composers
        .create_composer(bach())
        .await
        .expect("create composer")
}
