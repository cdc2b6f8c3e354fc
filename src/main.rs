use devsetup::presentation::cli::CliApp;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = CliApp::new();
    app.init_logging();

    app.run().await
}
