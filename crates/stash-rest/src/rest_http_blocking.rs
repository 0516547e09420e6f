use crate::{client_blocking::BlockingClient, error::Result, rest_http::RestHttp};

pub trait BlockingRestHttp: RestHttp {
    fn send_blocking(self, client: &BlockingClient) -> Result<Self::ResponseData> {
        let (path, data) = self.to_path_and_data();
        let value = client.request(Self::METHOD, &path, data)?;
        self.parse(value)
    }
}

impl<T> BlockingRestHttp for T where T: RestHttp {}
