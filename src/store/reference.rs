use tracing::{debug, instrument};

use crate::config::ReferenceSource;
use crate::error::{GpError, Result};
use crate::model::MembershipTable;
use crate::store;

/// Read a reference document from a URL or a local file.
#[instrument(skip(client))]
pub(crate) async fn read_source(
    client: &reqwest::Client,
    source: &ReferenceSource,
) -> Result<String> {
    match source {
        ReferenceSource::Url(url) => store::get_text(client.get(url), url).await,
        ReferenceSource::File(path) => {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|e| GpError::ReadReference {
                    path: path.clone(),
                    source: e,
                })
        }
    }
}

/// All known user identifiers.
pub(crate) async fn get_users(
    client: &reqwest::Client,
    source: &ReferenceSource,
) -> Result<Vec<String>> {
    let body = read_source(client, source).await?;
    let users: Vec<String> = store::decode(&body, &source.to_string())?;
    debug!(count = users.len(), "loaded users");
    Ok(users)
}

pub(crate) async fn get_membership_table(
    client: &reqwest::Client,
    source: &ReferenceSource,
) -> Result<MembershipTable> {
    let body = read_source(client, source).await?;
    let table: MembershipTable = store::decode(&body, &source.to_string())?;
    debug!(count = table.len(), "loaded membership periods");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_missing_file() {
        let client = reqwest::Client::new();
        let source = ReferenceSource::File("does/not/exist/users.json".into());
        let err = get_users(&client, &source).await.unwrap_err();
        assert!(matches!(err, GpError::ReadReference { .. }));
    }

    #[tokio::test]
    async fn test_read_local_files() {
        let dir = std::env::temp_dir().join(format!("gp-ranking-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let users_path = dir.join("users.json");
        let periods_path = dir.join("user_periods.json");
        std::fs::write(&users_path, r#"["lX57", "Sakasu"]"#).unwrap();
        std::fs::write(
            &periods_path,
            r#"{"lX57": {"start": "202304", "end": "202703", "begin": "2023spring"}}"#,
        )
        .unwrap();

        let client = reqwest::Client::new();
        let users = get_users(&client, &ReferenceSource::File(users_path))
            .await
            .unwrap();
        assert_eq!(users, ["lX57", "Sakasu"]);

        let table = get_membership_table(&client, &ReferenceSource::File(periods_path))
            .await
            .unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.get("lX57").is_some());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
