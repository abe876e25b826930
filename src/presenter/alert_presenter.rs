use crate::entity::{AlertListState, AlertStatus};
use crate::interactor::alert_interactor::AlertInteractor;
use crate::utils::parse_target_price;
use crate::view::alert_view::AlertView;
use anyhow::Result;
use async_trait::async_trait;
use log::{error, info};
use std::sync::Arc;

#[async_trait]
pub trait AlertPresenter: Send + Sync {
    /// Fetch the page described by the list state and render it
    async fn show_dashboard(&self, telegram_id: i64, list: &mut AlertListState) -> Result<()>;

    /// Switch the status filter and refetch. The page is deliberately kept.
    async fn change_filter(
        &self,
        telegram_id: i64,
        list: &mut AlertListState,
        filter: Option<AlertStatus>,
    ) -> Result<()>;

    async fn next_page(&self, telegram_id: i64, list: &mut AlertListState) -> Result<()>;
    async fn prev_page(&self, telegram_id: i64, list: &mut AlertListState) -> Result<()>;

    /// Delete by id, then reload the current page/filter. The id is not
    /// checked against the rendered page; a delete from a stale message
    /// still goes to the backend.
    async fn delete_alert(
        &self,
        telegram_id: i64,
        list: &mut AlertListState,
        alert_id: i64,
    ) -> Result<()>;

    async fn start_create_flow(&self) -> Result<()>;
    async fn handle_coin_id(&self, coin_id: &str) -> Result<()>;

    /// Parse the target price input. Returns the parsed price after
    /// prompting for confirmation, or None after an invalid-input message.
    async fn handle_target_price(&self, coin_id: &str, text: &str) -> Result<Option<f64>>;

    async fn handle_create_confirmation(
        &self,
        telegram_id: i64,
        confirmation_text: &str,
        coin_id: &str,
        target_price: f64,
    ) -> Result<()>;
}

pub struct AlertPresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
}

impl<I, V> AlertPresenterImpl<I, V>
where
    I: AlertInteractor,
    V: AlertView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>) -> Self {
        Self { interactor, view }
    }

    async fn reload(&self, telegram_id: i64, list: &mut AlertListState) -> Result<()> {
        let generation = list.begin_fetch();

        match self
            .interactor
            .load_page(telegram_id, list.status_filter, list.offset())
            .await
        {
            Ok(alerts) => {
                // A stale response (newer fetch already started) is dropped
                if list.apply(generation, alerts) {
                    self.view.display_dashboard(list).await?;
                }
            }
            Err(e) => {
                error!("Error fetching alerts: {:#}", e);
                self.view.display_fetch_error().await?;
            }
        }

        Ok(())
    }
}

#[async_trait]
impl<I, V> AlertPresenter for AlertPresenterImpl<I, V>
where
    I: AlertInteractor + Send + Sync,
    V: AlertView + Send + Sync,
{
    async fn show_dashboard(&self, telegram_id: i64, list: &mut AlertListState) -> Result<()> {
        info!("Showing alert dashboard for user: {}", telegram_id);
        self.reload(telegram_id, list).await
    }

    async fn change_filter(
        &self,
        telegram_id: i64,
        list: &mut AlertListState,
        filter: Option<AlertStatus>,
    ) -> Result<()> {
        list.set_filter(filter);
        self.reload(telegram_id, list).await
    }

    async fn next_page(&self, telegram_id: i64, list: &mut AlertListState) -> Result<()> {
        list.next_page();
        self.reload(telegram_id, list).await
    }

    async fn prev_page(&self, telegram_id: i64, list: &mut AlertListState) -> Result<()> {
        list.prev_page();
        self.reload(telegram_id, list).await
    }

    async fn delete_alert(
        &self,
        telegram_id: i64,
        list: &mut AlertListState,
        alert_id: i64,
    ) -> Result<()> {
        match self.interactor.delete_alert(telegram_id, alert_id).await {
            Ok(result) => {
                info!("Deleted alert {}: {}", alert_id, result.detail);
                self.reload(telegram_id, list).await?;
            }
            Err(e) => {
                error!("Error deleting alert {}: {:#}", alert_id, e);
                self.view.display_delete_error().await?;
            }
        }

        Ok(())
    }

    async fn start_create_flow(&self) -> Result<()> {
        self.view.prompt_coin_id().await
    }

    async fn handle_coin_id(&self, coin_id: &str) -> Result<()> {
        self.view.prompt_target_price(coin_id).await
    }

    async fn handle_target_price(&self, coin_id: &str, text: &str) -> Result<Option<f64>> {
        match parse_target_price(text) {
            Some(price) => {
                self.view.prompt_create_confirmation(coin_id, price).await?;
                Ok(Some(price))
            }
            None => {
                self.view.display_invalid_price().await?;
                Ok(None)
            }
        }
    }

    async fn handle_create_confirmation(
        &self,
        telegram_id: i64,
        confirmation_text: &str,
        coin_id: &str,
        target_price: f64,
    ) -> Result<()> {
        let confirmation = confirmation_text.trim().to_lowercase();

        if confirmation == "yes" || confirmation == "y" {
            match self
                .interactor
                .create_alert(telegram_id, coin_id, target_price)
                .await
            {
                Ok(alert) => {
                    info!("Created alert {} for user {}", alert.id, telegram_id);
                    self.view.display_alert_created(&alert).await?;
                }
                Err(e) => {
                    error!("Error creating alert for '{}': {:#}", coin_id, e);
                    self.view.display_create_error().await?;
                }
            }
        } else {
            self.view.display_create_cancelled().await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::DeleteResult;
    use crate::entity::Alert;
    use anyhow::anyhow;
    use chrono::Utc;
    use std::sync::Mutex;

    struct MockAlertInteractor {
        calls: Mutex<Vec<String>>,
        fail_delete: bool,
        fail_load: bool,
    }

    impl MockAlertInteractor {
        fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_delete: false,
                fail_load: false,
            }
        }
    }

    #[async_trait]
    impl AlertInteractor for MockAlertInteractor {
        async fn create_alert(
            &self,
            _telegram_id: i64,
            coin_id: &str,
            target_price: f64,
        ) -> Result<Alert> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("create {} {}", coin_id, target_price));
            Ok(Alert {
                id: 1,
                coin_id: coin_id.to_string(),
                target_price,
                status: AlertStatus::Created,
                created_at: Utc::now(),
            })
        }

        async fn delete_alert(&self, _telegram_id: i64, alert_id: i64) -> Result<DeleteResult> {
            self.calls.lock().unwrap().push(format!("delete {}", alert_id));
            if self.fail_delete {
                return Err(anyhow!("backend said no"));
            }
            Ok(DeleteResult {
                detail: "Alert deleted".to_string(),
            })
        }

        async fn load_page(
            &self,
            _telegram_id: i64,
            status: Option<AlertStatus>,
            offset: u32,
        ) -> Result<Vec<Alert>> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("load status={:?} offset={}", status, offset));
            if self.fail_load {
                return Err(anyhow!("backend unreachable"));
            }
            Ok(Vec::new())
        }
    }

    struct RecordingAlertView {
        shown: Mutex<Vec<String>>,
    }

    impl RecordingAlertView {
        fn new() -> Self {
            Self {
                shown: Mutex::new(Vec::new()),
            }
        }

        fn record(&self, what: &str) {
            self.shown.lock().unwrap().push(what.to_string());
        }
    }

    #[async_trait]
    impl AlertView for RecordingAlertView {
        async fn display_dashboard(&self, list: &AlertListState) -> Result<()> {
            self.record(&format!("dashboard page={}", list.page()));
            Ok(())
        }
        async fn display_fetch_error(&self) -> Result<()> {
            self.record("fetch_error");
            Ok(())
        }
        async fn display_delete_error(&self) -> Result<()> {
            self.record("delete_error");
            Ok(())
        }
        async fn display_create_error(&self) -> Result<()> {
            self.record("create_error");
            Ok(())
        }
        async fn display_alert_created(&self, alert: &Alert) -> Result<()> {
            self.record(&format!("created #{}", alert.id));
            Ok(())
        }
        async fn prompt_coin_id(&self) -> Result<()> {
            self.record("prompt_coin_id");
            Ok(())
        }
        async fn prompt_target_price(&self, _coin_id: &str) -> Result<()> {
            self.record("prompt_target_price");
            Ok(())
        }
        async fn display_invalid_price(&self) -> Result<()> {
            self.record("invalid_price");
            Ok(())
        }
        async fn prompt_create_confirmation(&self, _coin_id: &str, _price: f64) -> Result<()> {
            self.record("confirm");
            Ok(())
        }
        async fn display_create_cancelled(&self) -> Result<()> {
            self.record("cancelled");
            Ok(())
        }
    }

    fn presenter(
        interactor: MockAlertInteractor,
    ) -> (
        AlertPresenterImpl<MockAlertInteractor, RecordingAlertView>,
        Arc<MockAlertInteractor>,
        Arc<RecordingAlertView>,
    ) {
        let interactor = Arc::new(interactor);
        let view = Arc::new(RecordingAlertView::new());
        (
            AlertPresenterImpl::new(interactor.clone(), view.clone()),
            interactor,
            view,
        )
    }

    #[tokio::test]
    async fn test_delete_reloads_current_page_and_filter() {
        let (presenter, interactor, view) = presenter(MockAlertInteractor::new());

        let mut list = AlertListState::new();
        list.next_page();
        list.next_page();
        list.set_filter(Some(AlertStatus::Created));

        presenter.delete_alert(7, &mut list, 42).await.unwrap();

        let calls = interactor.calls.lock().unwrap().clone();
        assert_eq!(
            calls,
            vec![
                "delete 42".to_string(),
                "load status=Some(Created) offset=20".to_string(),
            ]
        );
        assert_eq!(
            view.shown.lock().unwrap().clone(),
            vec!["dashboard page=3".to_string()]
        );
    }

    #[tokio::test]
    async fn test_delete_failure_shows_popup_without_reload() {
        let (presenter, interactor, view) = presenter(MockAlertInteractor {
            calls: Mutex::new(Vec::new()),
            fail_delete: true,
            fail_load: false,
        });

        let mut list = AlertListState::new();
        presenter.delete_alert(7, &mut list, 42).await.unwrap();

        let calls = interactor.calls.lock().unwrap().clone();
        assert_eq!(calls, vec!["delete 42".to_string()]);
        assert_eq!(
            view.shown.lock().unwrap().clone(),
            vec!["delete_error".to_string()]
        );
    }

    #[tokio::test]
    async fn test_fetch_failure_shows_generic_popup() {
        let (presenter, _interactor, view) = presenter(MockAlertInteractor {
            calls: Mutex::new(Vec::new()),
            fail_delete: false,
            fail_load: true,
        });

        let mut list = AlertListState::new();
        presenter.show_dashboard(7, &mut list).await.unwrap();

        assert_eq!(
            view.shown.lock().unwrap().clone(),
            vec!["fetch_error".to_string()]
        );
    }

    #[tokio::test]
    async fn test_filter_change_keeps_requesting_old_offset() {
        let (presenter, interactor, _view) = presenter(MockAlertInteractor::new());

        let mut list = AlertListState::new();
        list.next_page();
        list.next_page();

        presenter
            .change_filter(7, &mut list, Some(AlertStatus::Triggered))
            .await
            .unwrap();

        let calls = interactor.calls.lock().unwrap().clone();
        assert_eq!(
            calls,
            vec!["load status=Some(Triggered) offset=20".to_string()]
        );
    }

    #[tokio::test]
    async fn test_invalid_price_input_prompts_again() {
        let (presenter, _interactor, view) = presenter(MockAlertInteractor::new());

        let parsed = presenter
            .handle_target_price("bitcoin", "not-a-price")
            .await
            .unwrap();
        assert!(parsed.is_none());

        let parsed = presenter.handle_target_price("bitcoin", "65000").await.unwrap();
        assert_eq!(parsed, Some(65000.0));

        assert_eq!(
            view.shown.lock().unwrap().clone(),
            vec!["invalid_price".to_string(), "confirm".to_string()]
        );
    }

    #[tokio::test]
    async fn test_confirmation_no_cancels_without_create() {
        let (presenter, interactor, view) = presenter(MockAlertInteractor::new());

        presenter
            .handle_create_confirmation(7, "no", "bitcoin", 65000.0)
            .await
            .unwrap();

        assert!(interactor.calls.lock().unwrap().is_empty());
        assert_eq!(
            view.shown.lock().unwrap().clone(),
            vec!["cancelled".to_string()]
        );
    }
}
