use std::time::Duration;

use hyper::ext::ReasonPhrase;
use image::DynamicImage;
use reqwest::blocking::{Client, Response};
use serde_json::Value;
use url::Url;

use crate::{error::Fault, params::Params};

const USER_AGENT: &str = "dee-wikiapi/0.1.1 (https://dee.ink)";

/// Anything that can turn an image URL into a decoded image.
pub(crate) trait ImageSource {
    fn load_image(&self, url: &str) -> Result<DynamicImage, Fault>;
}

/// Blocking HTTP transport. Owns the connection pool for the lifetime of the client.
#[derive(Debug, Clone)]
pub struct Transport {
    http: Client,
}

impl Transport {
    pub fn new() -> Result<Self, reqwest::Error> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http })
    }

    /// Same as [`Transport::new`] with a whole-request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { http })
    }

    /// Resolved request URL: the endpoint plus URL-encoded parameters.
    pub fn request_url(endpoint: &str, params: &Params) -> Result<Url, Fault> {
        let mut url = Url::parse(endpoint)?;
        {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in params.iter() {
                pairs.append_pair(name, value);
            }
        }
        Ok(url)
    }

    /// Single GET against `endpoint`. Statuses outside `200..300` become [`Fault::Status`].
    pub fn execute(&self, endpoint: &str, params: &Params, debug: bool) -> Result<Value, Fault> {
        let url = Self::request_url(endpoint, params)?;
        if debug {
            eprintln!("debug: request_url={url}");
        }

        let response = self.http.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(Fault::Status {
                status: status.as_u16(),
                status_text: status_text(&response),
            });
        }

        let body = response.text()?;
        let value: Value = serde_json::from_str(&body)?;
        if debug {
            eprintln!("debug: response=\n{}", serde_json::to_string_pretty(&value)?);
        }
        Ok(value)
    }
}

/// Reason phrase as sent by the server. hyper only keeps it when it differs
/// from the canonical one, so the canonical phrase fills in otherwise.
fn status_text(response: &Response) -> String {
    match response.extensions().get::<ReasonPhrase>() {
        Some(reason) => String::from_utf8_lossy(reason.as_bytes()).into_owned(),
        None => response
            .status()
            .canonical_reason()
            .unwrap_or_default()
            .to_string(),
    }
}

impl ImageSource for Transport {
    fn load_image(&self, url: &str) -> Result<DynamicImage, Fault> {
        let url = Url::parse(url)?;
        let bytes = self.http.get(url).send()?.error_for_status()?.bytes()?;
        Ok(image::load_from_memory(&bytes)?)
    }
}
