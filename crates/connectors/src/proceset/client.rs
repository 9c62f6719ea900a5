use crate::{
    file::csv::{destination::write_frame, settings::CsvSettings, source::read_frame},
    proceset::{
        config::ClientConfig,
        error::{ProcesetError, ResponseFormatError},
        query::{self, DISCOVERY_QUERY, GRAPHQL_PATH},
        response::{DiscoveryData, GraphqlEnvelope},
    },
};
use model::records::frame::DataFrame;
use reqwest::multipart::{Form, Part};
use serde_json::{Value as JsonValue, json};
use std::fmt;
use tracing::{debug, info};

/// HTTP plumbing shared by every call: endpoint, key and the configured
/// client. Exists on its own so discovery can run before a `Connector` is
/// handed out.
#[derive(Clone)]
struct Session {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl Session {
    async fn post_query(&self, query: &str) -> Result<String, ProcesetError> {
        debug!("POST {} ({} byte query)", self.endpoint, query.len());
        let response = self
            .http
            .post(&self.endpoint)
            .query(&[("api_key", self.api_key.as_str())])
            .json(&json!({ "query": query }))
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;
        Self::read_body(response).await
    }

    async fn post_form(&self, form: Form) -> Result<String, ProcesetError> {
        debug!("POST {} (multipart)", self.endpoint);
        let response = self
            .http
            .post(&self.endpoint)
            .query(&[("api_key", self.api_key.as_str())])
            .multipart(form)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;
        Self::read_body(response).await
    }

    // Status codes are not checked: the platform reports failures in the body.
    // URLs are stripped from errors since they carry the API key.
    async fn read_body(response: reqwest::Response) -> Result<String, ProcesetError> {
        let status = response.status();
        let body = response.text().await.map_err(reqwest::Error::without_url)?;
        debug!("Response status {}, {} bytes", status, body.len());
        Ok(body)
    }

    async fn discover_guid(&self) -> Result<String, ProcesetError> {
        let body = self.post_query(DISCOVERY_QUERY).await?;
        let raw: JsonValue = serde_json::from_str(&body).map_err(ResponseFormatError::Json)?;

        let envelope: GraphqlEnvelope<DiscoveryData> = serde_json::from_value(raw)
            .map_err(|e| {
                ProcesetError::ConnectionDiscovery(format!("unexpected response shape: {e}"))
            })?;

        let Some(data) = envelope.data.as_ref() else {
            let reason = if envelope.errors.is_empty() {
                "response has no data".to_string()
            } else {
                envelope.error_messages()
            };
            return Err(ProcesetError::ConnectionDiscovery(reason));
        };

        data.first_guid().map(str::to_string).ok_or_else(|| {
            ProcesetError::ConnectionDiscovery("no connections registered".to_string())
        })
    }
}

/// Client for the platform's GraphQL API, bound to the ClickHouse connection
/// discovered when it was built.
#[derive(Clone)]
pub struct Connector {
    session: Session,
    conn_guid: String,
    csv: CsvSettings,
}

impl Connector {
    /// Builds a connector with default HTTP settings and resolves the
    /// connection GUID. Fails if discovery fails.
    pub async fn new(base_url: &str, api_key: &str) -> Result<Self, ProcesetError> {
        Self::with_config(base_url, api_key, ClientConfig::default()).await
    }

    pub async fn with_config(
        base_url: &str,
        api_key: &str,
        config: ClientConfig,
    ) -> Result<Self, ProcesetError> {
        let session = Session {
            http: config.build_http()?,
            endpoint: graphql_endpoint(base_url),
            api_key: api_key.to_string(),
        };

        info!("Discovering ClickHouse connection at '{}'", session.endpoint);
        let conn_guid = session.discover_guid().await?;
        info!("Resolved connection GUID {}", conn_guid);

        Ok(Connector {
            session,
            conn_guid,
            csv: config.csv,
        })
    }

    pub fn guid(&self) -> &str {
        &self.conn_guid
    }

    pub fn endpoint(&self) -> &str {
        &self.session.endpoint
    }

    /// Asks the platform again which connection it lists first. The GUID held
    /// by this connector is not changed.
    pub async fn get_guid(&self) -> Result<String, ProcesetError> {
        self.session.discover_guid().await
    }

    /// Sends a raw GraphQL document and returns the decoded JSON body as is,
    /// `errors` included.
    pub async fn send_request(&self, query: &str) -> Result<JsonValue, ProcesetError> {
        let body = self.session.post_query(query).await?;
        let value = serde_json::from_str(&body).map_err(ResponseFormatError::Json)?;
        Ok(value)
    }

    /// Runs SQL on the bound ClickHouse connection.
    ///
    /// The endpoint answers with CSV text rather than a JSON envelope, so the
    /// whole body goes to the CSV parser; a server-side error message ends up
    /// as a parse failure or a one-column table.
    pub async fn extract_data(&self, sql_script: &str) -> Result<DataFrame, ProcesetError> {
        let query = query::extract_data(&self.conn_guid, sql_script);
        let body = self.session.post_query(&query).await?;

        let frame = read_frame(&body, &self.csv).map_err(ResponseFormatError::Csv)?;
        info!("Extracted {} rows x {} columns", frame.height(), frame.width());
        Ok(frame)
    }

    /// Appends a frame to an existing table on the bound connection.
    pub async fn upload_data(
        &self,
        database_name: &str,
        table_name: &str,
        dataframe: &DataFrame,
    ) -> Result<JsonValue, ProcesetError> {
        let query = query::upload_data_table(&self.conn_guid, database_name, table_name);
        let table = write_frame(dataframe, &self.csv).map_err(ProcesetError::Serialization)?;

        info!(
            "Uploading {} rows to {}.{}",
            dataframe.height(),
            database_name,
            table_name
        );

        let form = Form::new()
            .part("query", Part::text(query).mime_str("application/json")?)
            .part(
                "file",
                Part::text(table)
                    .file_name("table.csv")
                    .mime_str("text/csv")?,
            );

        let body = self.session.post_form(form).await?;
        let value = serde_json::from_str(&body).map_err(ResponseFormatError::Json)?;
        Ok(value)
    }

    /// Starts an automation script and returns the platform's reply
    /// (`id`, `is_running`).
    pub async fn execute_script(&self, script_id: i64) -> Result<JsonValue, ProcesetError> {
        info!("Executing automation script {}", script_id);
        self.send_request(&query::execute_script(script_id)).await
    }
}

impl fmt::Debug for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connector")
            .field("endpoint", &self.session.endpoint)
            .field("api_key", &"***")
            .field("conn_guid", &self.conn_guid)
            .finish()
    }
}

fn graphql_endpoint(base_url: &str) -> String {
    if base_url.ends_with('/') {
        format!("{base_url}{GRAPHQL_PATH}")
    } else {
        format!("{base_url}/{GRAPHQL_PATH}")
    }
}
