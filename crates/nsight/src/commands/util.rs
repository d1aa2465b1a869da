//! Shared helpers for command handlers.

use nsight_api::ApiClient;

use crate::error::CliError;

/// Resolve a client identifier: a numeric id passes through, anything
/// else is matched against client names (exact, case-sensitive, first
/// match wins).
pub async fn resolve_client_id(api: &ApiClient, identifier: &str) -> Result<i64, CliError> {
    if let Ok(id) = identifier.parse::<i64>() {
        return Ok(id);
    }

    let clients = api.list_clients().await?;
    for client in &clients {
        if client.name == identifier {
            return Ok(client.client_id);
        }
    }
    Err(CliError::NotFound {
        resource_type: "client".into(),
        identifier: identifier.into(),
        list_command: "list_clients".into(),
    })
}

/// Resolve a site identifier: a numeric id passes through, anything else
/// is matched against site names across every client.
pub async fn resolve_site_id(api: &ApiClient, identifier: &str) -> Result<i64, CliError> {
    if let Ok(id) = identifier.parse::<i64>() {
        return Ok(id);
    }

    let clients = api.list_clients().await?;
    for client in &clients {
        let Ok(sites) = api.list_sites(client.client_id).await else {
            continue;
        };
        for site in &sites {
            if site.name == identifier {
                return Ok(site.site_id);
            }
        }
    }
    Err(CliError::NotFound {
        resource_type: "site".into(),
        identifier: identifier.into(),
        list_command: "list_clients".into(),
    })
}

/// Parse a comma-separated id list (`"12,13, 14"`).
pub fn parse_id_list(field: &'static str, raw: &str) -> Result<Vec<i64>, CliError> {
    raw.split(',')
        .map(|part| {
            part.trim().parse::<i64>().map_err(|_| CliError::Validation {
                field: field.into(),
                reason: format!("'{part}' is not a numeric id"),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_lists_parse_with_whitespace() {
        let ids = parse_id_list("patch_ids", "12,13, 14").expect("parse");
        assert_eq!(ids, [12, 13, 14]);
    }

    #[test]
    fn bad_id_list_is_usage_error() {
        let err = parse_id_list("patch_ids", "12,abc").expect_err("must fail");
        assert!(matches!(err, CliError::Validation { .. }));
    }
}
