use serde_json::Value;
use stash_rest::BlockingClient;

use crate::commands::print_json;

#[derive(Clone, Debug, clap::Parser)]
pub struct FindTagCommand {
    /// Exact, case-sensitive name of the tag.
    name: String,
}

impl FindTagCommand {
    pub fn exec(self, client: &BlockingClient) -> anyhow::Result<()> {
        let id = client.find_tag_by_name(&self.name)?;
        print_json(&id.unwrap_or(Value::Null))
    }
}
