use stash_rest::BlockingClient;

use crate::commands::print_json;

#[derive(Clone, Debug, clap::Parser)]
pub struct CreateTagCommand {
    name: String,
}

impl CreateTagCommand {
    pub fn exec(self, client: &BlockingClient) -> anyhow::Result<()> {
        print_json(&client.create_tag(&self.name)?)
    }
}
