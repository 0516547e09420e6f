use std::{env, time::SystemTime};

use stash_rest::{Client, ConnectionInfo};

fn test_client() -> Option<Client> {
    let Some(port) = env::var_os("STASH_PORT") else {
        eprintln!("No server configured, skipping test.");
        return None;
    };
    let port = port.to_string_lossy().parse().unwrap();
    let scheme = env::var("STASH_SCHEME").unwrap_or_else(|_| "http".to_string());
    let mut info = ConnectionInfo::new(scheme, port);
    if let Ok(host) = env::var("STASH_HOST") {
        info = info.host(host);
    }
    if let Ok(session) = env::var("STASH_SESSION") {
        info = info.session_cookie(session);
    }
    Some(Client::new(&info).unwrap())
}

#[tokio::test]
async fn get_tags_returns_ok() {
    let Some(client) = test_client() else {
        return;
    };
    client.get("/tags").await.unwrap();
}

#[tokio::test]
async fn find_tag_by_name_returns_none_for_unknown_name() {
    let Some(client) = test_client() else {
        return;
    };
    let name = format!(
        "smoke_test_tag_{}",
        SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    );
    assert_eq!(client.find_tag_by_name(&name).await.unwrap(), None);
}

#[tokio::test]
async fn find_scenes_returns_ok() {
    let Some(client) = test_client() else {
        return;
    };
    client
        .find_scenes(Some(serde_json::json!({"per_page": 1})), None)
        .await
        .unwrap();
}
