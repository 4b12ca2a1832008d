use rbac_dashboard::{config, startup::App, telemetry};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // telemetry
    let subscriber = telemetry::get_subscriber("rbac-dashboard", "info", std::io::stdout);
    telemetry::init_subscriber(subscriber);

    // config
    let config = config::get()?;

    let app = App::build(&config)?;
    tracing::info!(addr = %app.addr(), "Listening");
    app.run_until_stopped().await
}
