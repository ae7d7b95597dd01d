/// Landing page (GET /).
pub async fn index() -> &'static str {
    "Welcome to the Image Sharing App!"
}
