//! Shared fixtures for service tests.

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use photohub_auth::{PasswordHasher, PasswordValidator, TokenService};
use photohub_core::config::{Argon2Config, AuthConfig};
use photohub_database::Stores;
use photohub_entity::user::User;

use crate::auth::{AuthService, RegisterInput};
use crate::context::RequestContext;

fn b64(pem: &str) -> String {
    STANDARD.encode(pem)
}

pub fn auth_config() -> AuthConfig {
    AuthConfig {
        algorithm: "EdDSA".to_string(),
        access_token_private_key: b64(include_str!(
            "../../../tests/fixtures/keys/access_private.pem"
        )),
        access_token_public_key: b64(include_str!("../../../tests/fixtures/keys/access_public.pem")),
        refresh_token_private_key: b64(include_str!(
            "../../../tests/fixtures/keys/refresh_private.pem"
        )),
        refresh_token_public_key: b64(include_str!(
            "../../../tests/fixtures/keys/refresh_public.pem"
        )),
        access_token_ttl_minutes: 15,
        refresh_token_ttl_minutes: 60,
        cookie_domain: "localhost".to_string(),
        cookie_secure: false,
        password_min_length: 6,
        argon2: Argon2Config {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        },
    }
}

pub fn auth_service(stores: &Stores) -> AuthService {
    let config = auth_config();
    AuthService::new(
        stores.users.clone(),
        Arc::new(PasswordHasher::new(&config.argon2).unwrap()),
        Arc::new(PasswordValidator::new(&config)),
        Arc::new(TokenService::from_config(&config).unwrap()),
    )
}

pub fn register_input(username: &str, email: &str) -> RegisterInput {
    RegisterInput {
        username: username.to_string(),
        email: email.to_string(),
        password: "secret1".to_string(),
        age: 20,
        profile_image_url: None,
    }
}

/// Register a user and wrap it in a request context.
pub async fn signed_in(stores: &Stores, username: &str) -> RequestContext {
    let user: User = auth_service(stores)
        .register(register_input(username, &format!("{username}@x.com")))
        .await
        .unwrap();
    RequestContext::new(user)
}
