use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;

use cineradar_core::models::{
    CastMember, ExternalKey, ExternalMetadata, MediaDraft, MediaEntry, MediaId, MediaType,
    Suggestion, User,
};

use crate::error::ApiError;
use crate::traits::{MetadataService, SessionService, WatchlistService};
use crate::types::{
    CheckAuthResponse, CreditsResponse, DetailsResponse, LoginRequest, MediaListResponse,
    MessageBody, SearchItem, SearchResponse, SignupRequest, UserResponse, CAST_LIMIT,
};

/// CineRadar backend client.
///
/// One cookie store is shared by every request, so the session cookie set by
/// login rides along on all later calls. Cloning shares the store.
#[derive(Debug, Clone)]
pub struct CineRadarClient {
    base: Url,
    http: Client,
}

impl CineRadarClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http = Client::builder()
            .cookie_store(true)
            .timeout(timeout)
            .user_agent(concat!("cineradar/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            base: normalize_base(base_url)?,
            http,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base.join(path)?)
    }

    async fn check_response(resp: Response) -> Result<Response, ApiError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            Err(ApiError::Api {
                status,
                message: MessageBody::extract(&body),
            })
        }
    }

    async fn send(&self, req: RequestBuilder) -> Result<Response, ApiError> {
        let resp = req.send().await?;
        tracing::debug!(url = %resp.url(), status = resp.status().as_u16(), "backend response");
        Self::check_response(resp).await
    }

    async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        let resp = self.send(self.http.get(url)).await?;
        Self::read_json(resp).await
    }

    fn user_from(resp: UserResponse) -> Result<User, ApiError> {
        resp.user
            .ok_or_else(|| ApiError::Parse("response did not include a user".into()))
    }
}

/// Make sure the base path ends in `/` so relative joins append instead of replacing.
fn normalize_base(base_url: &str) -> Result<Url, ApiError> {
    let mut base = Url::parse(base_url.trim())?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base)
}

impl SessionService for CineRadarClient {
    async fn check_session(&self) -> Result<Option<User>, ApiError> {
        let resp: CheckAuthResponse = self.get_json("check_auth").await?;
        Ok(resp.user.filter(|_| resp.authenticated))
    }

    async fn login(&self, username: &str, password: &str) -> Result<User, ApiError> {
        let url = self.endpoint("login")?;
        let resp = self
            .send(self.http.post(url).json(&LoginRequest { username, password }))
            .await?;
        Self::user_from(Self::read_json(resp).await?)
    }

    async fn signup(&self, username: &str, email: &str, password: &str) -> Result<User, ApiError> {
        let url = self.endpoint("signup")?;
        let body = SignupRequest {
            username,
            email,
            password,
        };
        let resp = self.send(self.http.post(url).json(&body)).await?;
        Self::user_from(Self::read_json(resp).await?)
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let url = self.endpoint("logout")?;
        self.send(self.http.post(url)).await?;
        Ok(())
    }
}

impl WatchlistService for CineRadarClient {
    async fn list(&self) -> Result<Vec<MediaEntry>, ApiError> {
        let resp: MediaListResponse = self.get_json("media").await?;
        Ok(resp.media)
    }

    async fn create(&self, draft: &MediaDraft) -> Result<(), ApiError> {
        let url = self.endpoint("create_media")?;
        self.send(self.http.post(url).json(draft)).await?;
        Ok(())
    }

    async fn update(&self, id: MediaId, draft: &MediaDraft) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("update_media/{id}"))?;
        self.send(self.http.patch(url).json(draft)).await?;
        Ok(())
    }

    async fn delete(&self, id: MediaId) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("delete_media/{id}"))?;
        self.send(self.http.delete(url)).await?;
        Ok(())
    }
}

impl MetadataService for CineRadarClient {
    async fn search(&self, media_type: MediaType, query: &str) -> Result<Vec<Suggestion>, ApiError> {
        let url = self.endpoint(&format!("tmdb_search/{}", media_type.as_api_str()))?;
        let resp = self
            .send(self.http.get(url).query(&[("query", query)]))
            .await?;
        let body: SearchResponse = Self::read_json(resp).await?;
        Ok(body
            .results
            .into_iter()
            .filter_map(SearchItem::into_suggestion)
            .collect())
    }

    async fn details(&self, key: ExternalKey) -> Result<ExternalMetadata, ApiError> {
        let body: DetailsResponse = self
            .get_json(&format!("tmdb/{}/{}", key.media_type.as_api_str(), key.id))
            .await?;
        Ok(body.into_metadata())
    }

    async fn credits(&self, key: ExternalKey) -> Result<Vec<CastMember>, ApiError> {
        let body: CreditsResponse = self
            .get_json(&format!(
                "tmdb_credits/{}/{}",
                key.id,
                key.media_type.as_api_str()
            ))
            .await?;
        Ok(body.into_cast(CAST_LIMIT))
    }
}
