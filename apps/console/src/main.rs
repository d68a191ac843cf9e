#[tokio::main]
async fn main() -> anyhow::Result<()> {
    quiz_console_lib::run().await
}
