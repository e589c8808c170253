//! Sign-in, registration and sign-out flows

use super::Services;
use taskdeck_http::{LoginForm, RegisterForm};

/// Sign in and persist the issued tokens
pub async fn sign_in(services: &Services, form: &LoginForm) -> Result<(), String> {
    let session = services
        .auth()
        .login(form)
        .await
        .map_err(|e| e.user_message())?;
    services.store().save(&session);
    Ok(())
}

/// Create an account and persist the issued tokens
pub async fn register(services: &Services, form: &RegisterForm) -> Result<(), String> {
    let session = services
        .auth()
        .register(form)
        .await
        .map_err(|e| e.user_message())?;
    services.store().save(&session);
    Ok(())
}

/// Revoke the refresh token if possible, then always forget both tokens
pub async fn sign_out(services: &Services) {
    let refresh_token = services.store().refresh_token();
    services.auth().logout(refresh_token.as_deref()).await;
    services.store().clear();
    info!("Signed out");
}
