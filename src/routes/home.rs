// ABOUTME: Landing page route serving the embedded persona homepage
// ABOUTME: The page is compiled in so serving it never touches the filesystem
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::{response::Html, routing::get, Router};

use super::not_found;

/// Homepage embedded at compile time
const HOME_PAGE_HTML: &str = include_str!("../../templates/home.html");

/// Landing page routes
pub struct HomeRoutes;

impl HomeRoutes {
    /// `GET /`
    pub fn routes() -> Router {
        Router::new().route("/", get(Self::handle_home).fallback(not_found))
    }

    async fn handle_home() -> Html<&'static str> {
        Html(HOME_PAGE_HTML)
    }
}
