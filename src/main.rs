use alterar_senha::configuration;
use alterar_senha::error::BizErrorEnum;
use alterar_senha::startup::Application;
use alterar_senha::telemetry;

#[tokio::main]
async fn main() -> Result<(), BizErrorEnum> {
    let subscriber =
        telemetry::get_subscriber("alterar-senha".into(), "info".into(), std::io::stdout);
    telemetry::init_subscriber(subscriber)?;

    // Fail fast if the provider url or key is missing
    let config = configuration::get_configuration()?;
    let application = Application::build(config)?;
    tracing::info!("Listening on port {}", application.port());
    application.run_until_stopped().await?;

    Ok(())
}
