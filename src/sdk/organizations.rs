//! Organization API operations

use log::debug;

use crate::config::api;
use crate::error::Result;

use super::ConsoleClient;

/// Build the organizations list path with its query string.
///
/// Queries are passed through untouched and in order; this client does not
/// interpret the query language.
pub(crate) fn organizations_path(queries: &[String], search: Option<&str>) -> String {
    let mut params: Vec<String> = queries
        .iter()
        .map(|q| format!("queries[]={}", urlencoding::encode(q)))
        .collect();

    if let Some(search) = search {
        params.push(format!("search={}", urlencoding::encode(search)));
    }

    if params.is_empty() {
        api::ORGANIZATIONS.to_string()
    } else {
        format!("{}?{}", api::ORGANIZATIONS, params.join("&"))
    }
}

impl ConsoleClient {
    /// List organizations visible to the current session (raw payload)
    pub async fn list_organizations(
        &self,
        queries: &[String],
        search: Option<&str>,
    ) -> Result<serde_json::Value> {
        let url = self.url(None, &organizations_path(queries, search));
        debug!("Fetching organizations from: {}", url);

        let response = self.get(&url).send().await?;
        self.parse_api_response(response, "fetch organizations")
            .await
    }
}
