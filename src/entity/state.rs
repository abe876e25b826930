use super::alert_list::AlertListState;

#[derive(Clone, Default, Debug)]
pub enum State {
    #[default]
    Start,
    AwaitingLoginUsername,
    AwaitingLoginPassword {
        username: String,
    },
    AwaitingRegisterUsername,
    AwaitingRegisterEmail {
        username: String,
    },
    AwaitingRegisterPassword {
        username: String,
        email: String,
    },
    AwaitingCoinId,
    AwaitingTargetPrice {
        coin_id: String,
    },
    AwaitingAlertConfirmation {
        coin_id: String,
        target_price: f64,
    },
    AlertDashboard {
        list: AlertListState,
    },
}
