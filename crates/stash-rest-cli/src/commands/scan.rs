use stash_rest::BlockingClient;

use crate::commands::print_json;

#[derive(Clone, Debug, clap::Parser)]
pub struct ScanCommand {
    /// Library paths to scan; scans everything when omitted.
    paths: Vec<String>,
}

impl ScanCommand {
    pub fn exec(self, client: &BlockingClient) -> anyhow::Result<()> {
        print_json(&client.metadata_scan(self.paths)?)
    }
}
