use serde::Deserialize;

/// Standard GraphQL reply: `data` plus optional `errors`.
#[derive(Debug, Deserialize)]
pub struct GraphqlEnvelope<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}

impl<T> GraphqlEnvelope<T> {
    pub fn error_messages(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// `data` of the discovery query:
/// `connection.connections.items[].element.connection.guid`.
#[derive(Debug, Deserialize)]
pub struct DiscoveryData {
    pub connection: ConnectionNamespace,
}

#[derive(Debug, Deserialize)]
pub struct ConnectionNamespace {
    pub connections: ConnectionPage,
}

#[derive(Debug, Deserialize)]
pub struct ConnectionPage {
    pub items: Vec<ConnectionItem>,
}

#[derive(Debug, Deserialize)]
pub struct ConnectionItem {
    pub element: ConnectionElement,
}

#[derive(Debug, Deserialize)]
pub struct ConnectionElement {
    pub connection: ConnectionRef,
}

#[derive(Debug, Deserialize)]
pub struct ConnectionRef {
    pub guid: String,
}

impl DiscoveryData {
    /// GUID of the connection listed first.
    pub fn first_guid(&self) -> Option<&str> {
        self.connection
            .connections
            .items
            .first()
            .map(|item| item.element.connection.guid.as_str())
            .filter(|guid| !guid.is_empty())
    }
}
