//! Backend access over `gloo-net`.
//!
//! [`AuthFetch`] is the only place requests are sent from; it always attaches
//! the bearer credential of the resolved [`AuthContext`].
//! [`HttpMappingBackend`] builds the typed endpoints on top of it.

use common::backend::{
    CREATE_MAPPING_PATH, CURRENT_MAPPINGS_PATH, DELETE_MAPPING_PATH, MARKETS_PATH,
    MappingBackend, STORES_PATH,
};
use common::error::ApiError;
use common::fetch::{Method, RequestOptions, endpoint_url};
use common::model::{AuthContext, Mapping, Market, Store};
use common::requests::{CreateMappingRequest, DeleteMappingRequest};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Clone, PartialEq)]
pub struct AuthFetch {
    credential: String,
}

impl AuthFetch {
    pub fn new(context: &AuthContext) -> Self {
        Self {
            credential: context.credential.clone(),
        }
    }

    /// Sends `options` to `url` with the bearer credential attached.
    ///
    /// Status codes are not interpreted and nothing is retried.
    pub async fn send(&self, url: &str, options: RequestOptions) -> Result<Response, ApiError> {
        let options = options.authorize(&self.credential);

        let mut builder = match options.method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
        };
        for (name, value) in &options.headers {
            builder = builder.header(name, value);
        }

        let request = match options.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Request(e.to_string()))?;

        log::debug!("{:?} {}", options.method, url);
        request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
}

#[derive(Clone, PartialEq)]
pub struct HttpMappingBackend {
    fetch: AuthFetch,
    api_base: String,
}

impl HttpMappingBackend {
    pub fn new(context: &AuthContext, api_base: &str) -> Self {
        Self {
            fetch: AuthFetch::new(context),
            api_base: api_base.to_string(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let options = RequestOptions::get().with_header("Accept", "application/json");
        let response = self
            .fetch
            .send(&endpoint_url(&self.api_base, path), options)
            .await?;
        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn post_json<T: Serialize>(&self, path: &str, payload: &T) -> Result<(), ApiError> {
        let response = self
            .fetch
            .send(
                &endpoint_url(&self.api_base, path),
                RequestOptions::post_json(payload)?,
            )
            .await?;
        if response.ok() {
            Ok(())
        } else {
            Err(ApiError::Status(response.status()))
        }
    }
}

impl MappingBackend for HttpMappingBackend {
    async fn stores(&self) -> Result<Vec<Store>, ApiError> {
        self.get_json(STORES_PATH).await
    }

    async fn markets(&self) -> Result<Vec<Market>, ApiError> {
        self.get_json(MARKETS_PATH).await
    }

    async fn current_mappings(&self) -> Result<Vec<Mapping>, ApiError> {
        self.get_json(CURRENT_MAPPINGS_PATH).await
    }

    async fn create_mapping(&self, request: &CreateMappingRequest) -> Result<(), ApiError> {
        self.post_json(CREATE_MAPPING_PATH, request).await
    }

    async fn delete_mapping(&self, request: &DeleteMappingRequest) -> Result<(), ApiError> {
        self.post_json(DELETE_MAPPING_PATH, request).await
    }
}
