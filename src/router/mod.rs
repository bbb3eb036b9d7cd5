//! Mode dispatch: turns a parsed request into a response.
//!
//! The mode is fixed at startup; every connection of the process gets the
//! same one of the four behaviors. Routing misses are ordinary 404
//! responses, never errors.

pub mod login;
pub mod mapping;

use crate::assets;
use crate::config::{Config, Mode};
use crate::http::request::Request;
use crate::http::response::{Response, ResponseBuilder, StatusCode};

/// Produces the response for `req` under the configured mode. Only
/// full-serving mode ever awaits (for the asset read).
pub async fn route(req: &Request, cfg: &Config) -> Response {
    match cfg.mode {
        Mode::Parse => structural_echo(req),
        Mode::Echo => body_echo(req),
        Mode::Map => uri_mapping(req),
        Mode::Full => full_serving(req, cfg).await,
    }
}

/// Renders the request structure back as plain text so a client can verify
/// what the server saw: each header as "Name: Value", then the request
/// line tokens on a final line.
fn structural_echo(req: &Request) -> Response {
    let mut body = String::new();
    for h in &req.headers {
        body.push_str(&h.name);
        body.push_str(": ");
        body.push_str(&h.value);
        body.push_str("\r\n");
    }
    body.push_str(&req.method);
    body.push(' ');
    body.push_str(&req.target);
    body.push(' ');
    body.push_str(&req.version);

    ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "text/plain")
        .body(body.into_bytes())
        .build()
}

/// Mirrors the request verbatim: same headers in the same order, same body
/// bytes. A client-supplied Content-Length stays exactly as sent, even
/// when it disagrees with the body the parser actually captured.
fn body_echo(req: &Request) -> Response {
    Response {
        status: StatusCode::Ok,
        headers: req.headers.clone(),
        body: req.body.clone(),
    }
}

/// Answers GETs with the internal path a target maps to, demonstrating the
/// mapping without touching the filesystem.
fn uri_mapping(req: &Request) -> Response {
    let method = req.method.to_ascii_uppercase();
    let target = mapping::normalize_target(&req.target);

    match method.as_str() {
        "GET" => match mapping::map_uri(&target) {
            Some(internal) => ResponseBuilder::new(StatusCode::Ok)
                .header("Content-Type", "text/plain")
                .body(internal.as_bytes().to_vec())
                .build(),
            None => Response::not_found(),
        },
        "POST" if target == "/dopost" => ResponseBuilder::new(StatusCode::Ok).build(),
        _ => Response::not_found(),
    }
}

/// Serves mapped assets from disk and handles the login form.
async fn full_serving(req: &Request, cfg: &Config) -> Response {
    let method = req.method.to_ascii_uppercase();
    let target = mapping::normalize_target(&req.target);

    match method.as_str() {
        "GET" => {
            let Some(internal) = mapping::map_uri(&target) else {
                return Response::not_found();
            };
            match assets::load(&cfg.asset_root, internal).await {
                Ok(data) => ResponseBuilder::new(StatusCode::Ok)
                    .header("Content-Type", mapping::content_type_for(internal))
                    .body(data)
                    .build(),
                // Read failures of any cause are a plain 404.
                Err(_) => Response::not_found(),
            }
        }
        "POST" if target == "/dopost" => {
            let message = if login::credentials_match(&req.body, &cfg.username, &cfg.password) {
                "Login Success"
            } else {
                "Login Failed"
            };
            let body = format!("<html><body>{}</body></html>", message);
            ResponseBuilder::new(StatusCode::Ok)
                .header("Content-Type", "text/html")
                .body(body.into_bytes())
                .build()
        }
        _ => Response::not_found(),
    }
}
