pub async fn health_handler() -> &'static str {
    "✅ API is up and running!"
}
