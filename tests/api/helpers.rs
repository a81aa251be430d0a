use alterar_senha::configuration;
use alterar_senha::startup::Application;
use alterar_senha::telemetry;
use once_cell::sync::Lazy;
use uuid::Uuid;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const VALID_TOKEN: &str = "valid-access-token";

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber =
            telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        let _ = telemetry::init_subscriber(subscriber);
    } else {
        let subscriber =
            telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        let _ = telemetry::init_subscriber(subscriber);
    };
});

pub struct TestApp {
    pub address: String,
    // Stands in for both the auth api and the data api
    pub identity_server: MockServer,
    pub api_client: reqwest::Client,
    pub user_id: String,
}

impl TestApp {
    /// Spin up an instance of our application on a random port,
    /// talking to a mock identity provider.
    pub async fn spawn_app() -> TestApp {
        Lazy::force(&TRACING);

        let identity_server = MockServer::start().await;

        let config = {
            let mut config =
                configuration::get_configuration().expect("Failed to read configuration");
            // Use a random OS port
            config.application.port = 0;
            config.identity_provider.project_url = identity_server.uri();
            config.identity_provider.timeout_milliseconds = 2000;
            config
        };

        let application = Application::build(config).expect("Failed to build application.");
        let address = format!("http://127.0.0.1:{}", application.port());
        // Launch the server as a background task
        let _ = tokio::spawn(application.run_until_stopped());

        TestApp {
            address,
            identity_server,
            api_client: reqwest::Client::new(),
            user_id: Uuid::new_v4().to_string(),
        }
    }

    pub async fn change_password(
        &self,
        body: &serde_json::Value,
        token: Option<&str>,
    ) -> reqwest::Response {
        let mut request = self
            .api_client
            .post(format!("{}/alterar-senha", &self.address))
            .json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        request.send().await.expect("Failed to execute request.")
    }

    /// Sends the `Authorization` header verbatim.
    pub async fn change_password_with_authorization(
        &self,
        body: &serde_json::Value,
        authorization: &str,
    ) -> reqwest::Response {
        self.api_client
            .post(format!("{}/alterar-senha", &self.address))
            .header("Authorization", authorization)
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn change_password_raw(&self, body: &'static str) -> reqwest::Response {
        self.api_client
            .post(format!("{}/alterar-senha", &self.address))
            .header("Content-Type", "application/json")
            .bearer_auth(VALID_TOKEN)
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn preflight_change_password(&self) -> reqwest::Response {
        self.api_client
            .request(
                reqwest::Method::OPTIONS,
                format!("{}/alterar-senha", &self.address),
            )
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_health_check(&self) -> reqwest::Response {
        self.api_client
            .get(format!("{}/health_check", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// `VALID_TOKEN` resolves to `self.user_id`.
    pub async fn mock_get_user(&self) {
        Mock::given(path("/auth/v1/user"))
            .and(method("GET"))
            .and(header("Authorization", format!("Bearer {}", VALID_TOKEN).as_str()))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "id": self.user_id,
                    "aud": "authenticated",
                    "role": "authenticated"
                })),
            )
            .named("Get user from token")
            .mount(&self.identity_server)
            .await;
    }

    pub async fn mock_update_password(&self, response: ResponseTemplate, expected_calls: u64) {
        Mock::given(path(format!("/auth/v1/admin/users/{}", self.user_id)))
            .and(method("PUT"))
            .respond_with(response)
            .named("Update user password")
            .expect(expected_calls)
            .mount(&self.identity_server)
            .await;
    }

    pub async fn mock_clear_temporary_password(
        &self,
        response: ResponseTemplate,
        expected_calls: u64,
    ) {
        Mock::given(path("/rest/v1/usuarios"))
            .and(method("PATCH"))
            .respond_with(response)
            .named("Clear temporary password flag")
            .expect(expected_calls)
            .mount(&self.identity_server)
            .await;
    }
}

pub fn assert_cors_headers(response: &reqwest::Response) {
    let headers = response.headers();
    assert_eq!(headers.get("Access-Control-Allow-Origin").unwrap(), "*");
    assert_eq!(
        headers.get("Access-Control-Allow-Headers").unwrap(),
        "authorization, x-client-info, apikey, content-type"
    );
}

pub fn assert_is_json(response: &reqwest::Response) {
    assert_eq!(
        response.headers().get("Content-Type").unwrap(),
        "application/json"
    );
}
