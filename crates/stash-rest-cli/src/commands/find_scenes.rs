use serde_json::Value;
use stash_rest::BlockingClient;

use crate::commands::{parse_json, print_json};

#[derive(Clone, Debug, clap::Parser)]
pub struct FindScenesCommand {
    /// Paging, sorting and search, e.g. `{"per_page": 10}`.
    #[arg(long, value_parser = parse_json)]
    filter: Option<Value>,
    /// Criteria on scene fields.
    #[arg(long, value_parser = parse_json)]
    scene_filter: Option<Value>,
}

impl FindScenesCommand {
    pub fn exec(self, client: &BlockingClient) -> anyhow::Result<()> {
        let Self {
            filter,
            scene_filter,
        } = self;
        print_json(&client.find_scenes(filter, scene_filter)?)
    }
}
