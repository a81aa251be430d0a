use crate::configuration::Settings;
use crate::constant::{ALLOW_HEADERS, ALLOW_ORIGIN, CHANGE_PASSWORD_PATH, MAX_BODY_BYTES};
use crate::error::BizErrorEnum;
use crate::identity_client::IdentityClient;
use crate::profile_store::ProfileStore;
use crate::routes;
use actix_web::dev::{Server, ServiceResponse};
use actix_web::http::header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_ORIGIN};
use actix_web::http::{Method, StatusCode};
use actix_web::middleware::{DefaultHeaders, ErrorHandlerResponse, ErrorHandlers};
use actix_web::{web, App, HttpServer, ResponseError};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

// A new type to hold the newly built server and its port
pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    /// Everything the handler needs is resolved here, so a missing or
    /// invalid provider setting stops the process before it serves anything.
    pub fn build(config: Settings) -> Result<Self, BizErrorEnum> {
        let provider = config.identity_provider;
        let project_url = provider.url()?;
        let timeout = provider.timeout();
        let identity_client = IdentityClient::new(
            project_url.clone(),
            provider.service_role_key.clone(),
            timeout,
        )?;
        let profile_store = ProfileStore::new(project_url, provider.service_role_key, timeout)?;

        let address = format!("{}:{}", config.application.host, config.application.port);
        let listener = TcpListener::bind(address).map_err(|e| {
            tracing::error!("Failed to bind to TcpListener");
            BizErrorEnum::BindTcpListenerError(e)
        })?;
        // Port 0 asks the OS for a free port, read back the real one
        let port = listener
            .local_addr()
            .map_err(BizErrorEnum::BindTcpListenerError)?
            .port();

        let server = run(listener, identity_client, profile_store)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    // A more expressive name that makes it clear that
    // this function only returns when the application is stopped.
    pub async fn run_until_stopped(self) -> Result<(), BizErrorEnum> {
        self.server.await.map_err(|e| {
            tracing::error!("Failed to run server.");
            BizErrorEnum::RunServerError(e)
        })
    }
}

pub fn run(
    listener: TcpListener,
    identity_client: IdentityClient,
    profile_store: ProfileStore,
) -> Result<Server, BizErrorEnum> {
    // Re-use the same HTTP clients across multiple requests
    let identity_client = web::Data::new(identity_client);
    let profile_store = web::Data::new(profile_store);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(
                ErrorHandlers::new()
                    .handler(StatusCode::PAYLOAD_TOO_LARGE, payload_too_large),
            )
            .wrap(cors_headers())
            .wrap(TracingLogger::default())
            .app_data(web::PayloadConfig::new(MAX_BODY_BYTES))
            .app_data(identity_client.clone())
            .app_data(profile_store.clone())
            .route("/health_check", web::get().to(routes::health_check))
            .service(
                web::resource(CHANGE_PASSWORD_PATH)
                    .route(web::method(Method::OPTIONS).to(routes::change_password_preflight))
                    // Any other method runs the password change
                    .route(web::route().to(routes::change_password)),
            )
    })
    .listen(listener)
    .map_err(|e| {
        tracing::error!("Failed to listen to TcpListener");
        BizErrorEnum::ListenTcpListenerError(e)
    })?
    .run();

    // No .await here!
    Ok(server)
}

/// Added to every response, errors and pre-flight included.
fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW_ORIGIN))
        .add((ACCESS_CONTROL_ALLOW_HEADERS, ALLOW_HEADERS))
}

/// The body extractor answers an oversized body with a plain text 413,
/// swap it for the json failure every caller expects.
fn payload_too_large<B>(
    response: ServiceResponse<B>,
) -> actix_web::Result<ErrorHandlerResponse<B>> {
    tracing::error!("Request body is larger than {} bytes", MAX_BODY_BYTES);
    let (request, _) = response.into_parts();
    let response = BizErrorEnum::RequestBodyTooLarge(MAX_BODY_BYTES).error_response();
    let response = ServiceResponse::new(request, response).map_into_right_body();
    Ok(ErrorHandlerResponse::Response(response))
}
