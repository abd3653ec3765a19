//! OAuth2 service-account authentication (JWT bearer grant)

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use log::debug;
use serde::{Deserialize, Serialize};

use super::credentials::ServiceAccountKey;
use crate::error::AppError;

/// Read/write access to spreadsheets and drive files
pub const SCOPES: [&str; 2] = [
    "https://www.googleapis.com/auth/spreadsheets",
    "https://www.googleapis.com/auth/drive",
];

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// Claims of the signed assertion sent to the token endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(key: &ServiceAccountKey, scopes: &[&str], now: DateTime<Utc>) -> Self {
        let iat = now.timestamp();
        Self {
            iss: key.client_email.clone(),
            scope: scopes.join(" "),
            aud: key.token_uri.clone(),
            iat,
            exp: iat + ASSERTION_LIFETIME_SECS,
        }
    }
}

/// Bearer token returned by the token endpoint
#[derive(Debug, Clone)]
pub struct AccessToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    pub fn new(token: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            token: token.into(),
            expires_at,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct TokenErrorResponse {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

/// Sign the JWT assertion with the service account's RSA key
pub fn sign_assertion(key: &ServiceAccountKey, claims: &Claims) -> Result<String, AppError> {
    let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())
        .map_err(|e| AppError::Auth(format!("invalid private key: {}", e)))?;

    let mut header = Header::new(Algorithm::RS256);
    header.kid = key.private_key_id.clone();

    jsonwebtoken::encode(&header, claims, &encoding_key)
        .map_err(|e| AppError::Auth(format!("failed to sign assertion: {}", e)))
}

/// Exchange a signed assertion for an access token
pub async fn request_token(
    http: &reqwest::Client,
    token_uri: &str,
    assertion: &str,
) -> Result<AccessToken, AppError> {
    let response = http
        .post(token_uri)
        .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion)])
        .send()
        .await
        .map_err(|e| AppError::Auth(format!("token request failed: {}", e)))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| AppError::Auth(format!("failed to read token response: {}", e)))?;

    if !status.is_success() {
        let detail = match serde_json::from_str::<TokenErrorResponse>(&body) {
            Ok(err) => match err.error_description {
                Some(desc) => format!("{}: {}", err.error, desc),
                None => err.error,
            },
            Err(_) => body,
        };
        return Err(AppError::Auth(format!(
            "token endpoint returned {}: {}",
            status, detail
        )));
    }

    let token: TokenResponse = serde_json::from_str(&body)
        .map_err(|e| AppError::Auth(format!("invalid token response: {}", e)))?;

    let expires_at = Utc::now() + Duration::seconds(token.expires_in.unwrap_or(ASSERTION_LIFETIME_SECS));
    debug!("Obtained access token valid until {}", expires_at);

    Ok(AccessToken::new(token.access_token, expires_at))
}

/// Build a scoped credential for `key` and authenticate it
pub async fn authorize(
    http: &reqwest::Client,
    key: &ServiceAccountKey,
    scopes: &[&str],
) -> Result<AccessToken, AppError> {
    let claims = Claims::new(key, scopes, Utc::now());
    let assertion = sign_assertion(key, &claims)?;
    request_token(http, &key.token_uri, &assertion).await
}
