use crate::clients::provider::ProviderClient;

#[derive(Clone, Debug)]
pub struct AppState {
    pub provider: ProviderClient,
}
impl AppState {
    pub fn new(provider: ProviderClient) -> Self {
        AppState { provider }
    }
}
