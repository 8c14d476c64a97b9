use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    json::JSON_SETTINGS,
    sink::{emit, Sink},
    Error, ResponseExt,
};

#[async_trait]
pub trait HttpClientGetExt {
    async fn get_and_deserialize<T>(
        &self,
        target: &str,
        output: Option<&dyn Sink>,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned;

    async fn get_and_ensure_not_found(
        &self,
        target: &str,
        output: Option<&dyn Sink>,
    ) -> Result<Response, Error>;

    async fn get_and_return_string(
        &self,
        target: &str,
        output: Option<&dyn Sink>,
    ) -> Result<String, Error>;

    async fn get_and_ensure_substring(
        &self,
        target: &str,
        substring: &str,
        output: Option<&dyn Sink>,
    ) -> Result<String, Error>;
}

#[async_trait]
impl HttpClientGetExt for Client {
    async fn get_and_deserialize<T>(
        &self,
        target: &str,
        output: Option<&dyn Sink>,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let response = send_get(self, target, output).await?;
        let response = response.ensure_success()?;
        let body = read_body(response, target).await?;
        emit(output, &format!("Response: {body}"));
        JSON_SETTINGS.deserialize(&body).map_err(|source| {
            debug!(%target, %source, "failed to deserialize response body");
            Error::Deserialize {
                target: target.to_owned(),
                body,
                source,
            }
        })
    }

    async fn get_and_ensure_not_found(
        &self,
        target: &str,
        output: Option<&dyn Sink>,
    ) -> Result<Response, Error> {
        let response = send_get(self, target, output).await?;
        response.ensure_not_found()
    }

    async fn get_and_return_string(
        &self,
        target: &str,
        output: Option<&dyn Sink>,
    ) -> Result<String, Error> {
        let response = send_get(self, target, output).await?;
        read_body(response, target).await
    }

    async fn get_and_ensure_substring(
        &self,
        target: &str,
        substring: &str,
        output: Option<&dyn Sink>,
    ) -> Result<String, Error> {
        let body = self.get_and_return_string(target, output).await?;
        if !body.contains(substring) {
            emit(
                output,
                &format!(
                    "Returning error because expected substring {substring:?} \
                     not found in response {body:?}"
                ),
            );
            return Err(Error::SubstringNotFound {
                expected: substring.to_owned(),
                body,
            });
        }
        Ok(body)
    }
}

async fn send_get(
    client: &Client,
    target: &str,
    output: Option<&dyn Sink>,
) -> Result<Response, Error> {
    emit(output, &format!("Requesting with GET {target}"));
    debug!(%target, "sending GET request");
    client
        .get(target)
        .send()
        .await
        .map_err(|source| Error::Request {
            target: target.to_owned(),
            source,
        })
}

async fn read_body(response: Response, target: &str) -> Result<String, Error> {
    response.text().await.map_err(|source| Error::Request {
        target: target.to_owned(),
        source,
    })
}
