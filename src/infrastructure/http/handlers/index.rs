//! 根路径：列出可直接访问的 GET 端点

use axum::response::Html;

/// 无路径参数的 GET 端点
pub const SITEMAP: &[&str] = &[
    "/",
    "/user",
    "/users",
    "/users/favorites",
    "/people",
    "/planets",
    "/vehicles",
    "/starships",
    "/species",
    "/films",
];

pub async fn sitemap() -> Html<String> {
    let links: String = SITEMAP
        .iter()
        .map(|path| format!("<li><a href='{0}'>{0}</a></li>", path))
        .collect();

    Html(format!(
        "<div style=\"text-align: center;\"><h1>Holocron API</h1>\
         <p>Available endpoints:</p>\
         <ul style=\"text-align: left;\">{}</ul></div>",
        links
    ))
}
