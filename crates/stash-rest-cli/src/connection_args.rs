use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;
use log::debug;
use serde_json::Value;
use stash_rest::{BlockingClient, ConnectionInfo};

#[derive(Debug, clap::Args)]
pub struct ConnectionArgs {
    /// Read the connection from a JSON file, or `-` for stdin.
    ///
    /// Accepts either plugin input, with a `server_connection` key, or a bare connection object.
    /// Takes precedence over the individual connection options.
    #[arg(long, global = true)]
    connection: Option<PathBuf>,
    #[arg(long, global = true, env = "STASH_SCHEME", default_value = "http")]
    scheme: String,
    #[arg(long, global = true, env = "STASH_HOST", default_value = "localhost")]
    host: String,
    #[arg(long, global = true, env = "STASH_PORT", default_value_t = 9999)]
    port: u16,
    /// Value of the session cookie.
    #[arg(long, global = true, env = "STASH_SESSION", hide_env_values = true)]
    session: Option<String>,
    /// Give up on requests that take longer than this many seconds.
    #[arg(long, global = true)]
    timeout: Option<u64>,
}

fn read_connection(source: &Path) -> anyhow::Result<ConnectionInfo> {
    let text = if source.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read from stdin")?;
        text
    } else {
        fs::read_to_string(source).with_context(|| format!("Failed to read {source:?}"))?
    };
    let document: Value = serde_json::from_str(&text).context("Connection is not valid JSON")?;
    if document.get("server_connection").is_some() {
        ConnectionInfo::from_plugin_input(&text).context("Could not parse plugin input")
    } else {
        serde_json::from_value(document).context("Could not parse connection")
    }
}

impl ConnectionArgs {
    fn info(&self) -> anyhow::Result<ConnectionInfo> {
        let Self {
            connection,
            scheme,
            host,
            port,
            session,
            timeout: _,
        } = self;
        if let Some(source) = connection {
            return read_connection(source);
        }
        let mut info = ConnectionInfo::new(scheme, *port).host(host);
        if let Some(session) = session {
            info = info.session_cookie(session);
        }
        Ok(info)
    }

    pub fn client(&self) -> anyhow::Result<BlockingClient> {
        let info = self.info()?;
        let timeout = self.timeout.map(Duration::from_secs);
        let client = BlockingClient::builder(&info)
            .with_inner(|b| match timeout {
                Some(t) => b.timeout(t),
                None => b,
            })
            .build()
            .context("Could not create client")?;
        debug!("Using {}", client.base_url());
        Ok(client)
    }
}
