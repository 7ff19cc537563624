use async_trait::async_trait;
use shared::FeeCreationPayload;
use yew::prelude::*;

pub mod components;
pub mod hooks;
pub mod services;

use components::create_fee_dialog::CreateFeeDialog;
use hooks::use_fee_form::{FeeSubmitHandler, SubmitHandler};
use services::api::ApiClient;
use services::settings::AppSettings;

/// API client that reports in-flight submissions back to the page
struct TrackedApiClient {
    client: ApiClient,
    is_creating: UseStateHandle<bool>,
}

#[async_trait(?Send)]
impl FeeSubmitHandler for TrackedApiClient {
    async fn submit_fee(&self, payload: FeeCreationPayload) -> anyhow::Result<()> {
        self.is_creating.set(true);
        let result = self.client.submit_fee(payload).await;
        self.is_creating.set(false);
        result
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let is_creating = use_state(|| false);

    let on_submit = {
        let is_creating = is_creating.clone();
        use_memo((), move |_| {
            let settings = AppSettings::from_environment();
            SubmitHandler::new(TrackedApiClient {
                client: ApiClient::from_settings(&settings),
                is_creating,
            })
        })
    };

    html! {
        <main class="fee-admin">
            <header class="fee-admin-header">
                <h1>{"Fees"}</h1>
                <CreateFeeDialog on_submit={(*on_submit).clone()} is_loading={*is_creating} />
            </header>
        </main>
    }
}

/// Install the console logger and mount the app
pub fn run_app() {
    let settings = AppSettings::from_environment();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("Starting fee admin frontend");
    log::debug!("API base URL: {}", settings.api_base_url);

    yew::Renderer::<App>::new().render();
}
