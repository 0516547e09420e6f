use serde_json::Value;
use stash_rest::{BlockingClient, Method};

use crate::commands::{parse_json, print_json};

#[derive(Clone, Debug, clap::Parser)]
pub struct GetCommand {
    /// Path below `/api/v1`, e.g. `/tags`.
    path: String,
}

impl GetCommand {
    pub fn exec(self, client: &BlockingClient) -> anyhow::Result<()> {
        print_json(&client.get(&self.path)?)
    }
}

#[derive(Clone, Debug, clap::Parser)]
pub struct SendCommand {
    /// Path below `/api/v1`, e.g. `/tags/1`.
    path: String,
    /// JSON body to send.
    #[arg(long, value_parser = parse_json)]
    data: Option<Value>,
}

impl SendCommand {
    pub fn exec(self, client: &BlockingClient, method: Method) -> anyhow::Result<()> {
        let Self { path, data } = self;
        print_json(&client.request(method, &path, data)?)
    }
}
