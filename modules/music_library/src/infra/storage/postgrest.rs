//! Hosted-database client speaking the PostgREST protocol (Supabase REST)

use crate::domain::schema::Row;
use crate::domain::store::{Filter, Order, RowStore};
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::{Method, RequestBuilder};
use serde::Deserialize;
use url::Url;

const REST_PATH: &str = "rest/v1/";

/// PostgREST error body
#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    details: Option<String>,
}

/// Row store backed by a PostgREST endpoint
#[derive(Clone)]
pub struct PostgrestStore {
    client: reqwest::Client,
    base: Url,
    api_key: String,
    schema: Option<String>,
}

impl std::fmt::Debug for PostgrestStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgrestStore")
            .field("base", &self.base.as_str())
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

impl PostgrestStore {
    /// Create a client for the project at `project_url`
    pub fn new(project_url: &str, api_key: impl Into<String>) -> Result<Self> {
        let mut base = Url::parse(project_url)
            .with_context(|| format!("invalid store url '{project_url}'"))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let base = base
            .join(REST_PATH)
            .with_context(|| format!("invalid store url '{project_url}'"))?;

        Ok(Self {
            client: reqwest::Client::new(),
            base,
            api_key: api_key.into(),
            schema: None,
        })
    }

    /// Target a non-default database schema
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn request(
        &self,
        method: Method,
        table: &str,
        filters: &[Filter],
        order: Option<&Order>,
    ) -> Result<RequestBuilder> {
        let mut url = self
            .base
            .join(table)
            .with_context(|| format!("invalid table name '{table}'"))?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("select", "*");
            for filter in filters {
                query.append_pair(&filter.column, &format!("eq.{}", filter.value));
            }
            if let Some(order) = order {
                let direction = if order.ascending { "asc" } else { "desc" };
                query.append_pair("order", &format!("{}.{}", order.column, direction));
            }
        }

        let mut request = self
            .client
            .request(method.clone(), url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key);

        if method != Method::GET {
            request = request.header("Prefer", "return=representation");
        }
        if let Some(schema) = &self.schema {
            let header = if method == Method::GET {
                "Accept-Profile"
            } else {
                "Content-Profile"
            };
            request = request.header(header, schema);
        }
        Ok(request)
    }

    async fn send(&self, request: RequestBuilder, table: &str) -> Result<Vec<Row>> {
        let response = request
            .send()
            .await
            .with_context(|| format!("request to table '{table}' failed"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            match serde_json::from_str::<ApiError>(&body) {
                Ok(api_error) => bail!(
                    "store rejected request on '{}' ({}{}): {}{}",
                    table,
                    status,
                    api_error
                        .code
                        .map(|code| format!(", {code}"))
                        .unwrap_or_default(),
                    api_error.message,
                    api_error
                        .details
                        .map(|details| format!(" ({details})"))
                        .unwrap_or_default(),
                ),
                Err(_) => bail!("store rejected request on '{}' ({}): {}", table, status, body),
            }
        }

        response
            .json::<Vec<Row>>()
            .await
            .with_context(|| format!("invalid response body from table '{table}'"))
    }
}

#[async_trait]
impl RowStore for PostgrestStore {
    async fn select(
        &self,
        table: &str,
        filters: &[Filter],
        order: Option<&Order>,
    ) -> Result<Vec<Row>> {
        let request = self.request(Method::GET, table, filters, order)?;
        self.send(request, table).await
    }

    async fn insert(&self, table: &str, row: Row) -> Result<Vec<Row>> {
        let request = self.request(Method::POST, table, &[], None)?.json(&row);
        self.send(request, table).await
    }

    async fn update(&self, table: &str, changes: Row, filters: &[Filter]) -> Result<Vec<Row>> {
        let request = self
            .request(Method::PATCH, table, filters, None)?
            .json(&changes);
        self.send(request, table).await
    }

    async fn delete(&self, table: &str, filters: &[Filter]) -> Result<Vec<Row>> {
        let request = self.request(Method::DELETE, table, filters, None)?;
        self.send(request, table).await
    }
}
