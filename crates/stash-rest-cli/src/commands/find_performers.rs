use serde_json::Value;
use stash_rest::BlockingClient;

use crate::commands::{parse_json, print_json};

#[derive(Clone, Debug, clap::Parser)]
pub struct FindPerformersCommand {
    #[arg(long, value_parser = parse_json)]
    filter: Option<Value>,
    /// Criteria on performer fields.
    #[arg(long, value_parser = parse_json)]
    performer_filter: Option<Value>,
}

impl FindPerformersCommand {
    pub fn exec(self, client: &BlockingClient) -> anyhow::Result<()> {
        let Self {
            filter,
            performer_filter,
        } = self;
        print_json(&client.find_performers(filter, performer_filter)?)
    }
}
