use crate::interactor::auth_interactor::AuthInteractor;
use crate::view::auth_view::AuthView;
use anyhow::Result;
use async_trait::async_trait;
use log::{error, info};
use std::sync::Arc;

#[async_trait]
pub trait AuthPresenter: Send + Sync {
    async fn start_login(&self) -> Result<()>;
    async fn handle_login_username(&self, username: &str) -> Result<()>;

    /// Complete the login dialogue. Returns whether the user is now
    /// authenticated; on failure only a generic message is shown, the
    /// server's error detail goes to the log.
    async fn handle_login_password(
        &self,
        telegram_id: i64,
        username: &str,
        password: &str,
    ) -> Result<bool>;

    async fn start_register(&self) -> Result<()>;
    async fn handle_register_username(&self, username: &str) -> Result<()>;
    async fn handle_register_email(&self) -> Result<()>;
    async fn handle_register_password(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<()>;
}

pub struct AuthPresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
}

impl<I, V> AuthPresenterImpl<I, V>
where
    I: AuthInteractor,
    V: AuthView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>) -> Self {
        Self { interactor, view }
    }
}

#[async_trait]
impl<I, V> AuthPresenter for AuthPresenterImpl<I, V>
where
    I: AuthInteractor + Send + Sync,
    V: AuthView + Send + Sync,
{
    async fn start_login(&self) -> Result<()> {
        self.view.prompt_login_username().await
    }

    async fn handle_login_username(&self, username: &str) -> Result<()> {
        self.view.prompt_login_password(username).await
    }

    async fn handle_login_password(
        &self,
        telegram_id: i64,
        username: &str,
        password: &str,
    ) -> Result<bool> {
        match self.interactor.login(telegram_id, username, password).await {
            Ok(_) => {
                self.view.display_login_success().await?;
                Ok(true)
            }
            Err(e) => {
                error!("Login failed for '{}': {:#}", username, e);
                self.view.display_login_error().await?;
                Ok(false)
            }
        }
    }

    async fn start_register(&self) -> Result<()> {
        self.view.prompt_register_username().await
    }

    async fn handle_register_username(&self, username: &str) -> Result<()> {
        self.view.prompt_register_email(username).await
    }

    async fn handle_register_email(&self) -> Result<()> {
        self.view.prompt_register_password().await
    }

    async fn handle_register_password(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<()> {
        match self.interactor.register(username, password, email).await {
            Ok(user) => {
                info!("Registered user '{}'", user.username);
                self.view.display_register_success(&user.username).await?;
            }
            Err(e) => {
                error!("Registration failed for '{}': {:#}", username, e);
                self.view.display_register_error().await?;
            }
        }

        Ok(())
    }
}
