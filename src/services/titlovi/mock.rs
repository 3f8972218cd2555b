//! In-process stand-in for titlovi.com used by tests

use axum::{
    body::Body,
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use encoding_rs::WINDOWS_1250;
use futures::stream;
use std::collections::HashMap;

use super::acquirer::tests::zip_with;

pub const SRT_TEXT: &str = "1\n00:00:01,000 --> 00:00:04,000\nŠta radiš ovdje?\n\n\
2\n00:00:05,000 --> 00:00:08,000\nČekam te već satima.\n\n\
3\n00:00:09,000 --> 00:00:12,000\nŽao mi je, đače.\n";

/// Bigger than the 1 MiB cap the client tests run with
const OVERSIZED: usize = 2 * 1024 * 1024;

/// Listing with six entries: three downloadable, three broken
pub const LISTING: &str = r#"
<html><body>
<ul class="titlovi">
  <li class="subtitleContainer">
    <h3><a href="/titlovi/the-movie-111/">Čudna šuma</a></h3>
    <h4>The.Movie.2010.720p.BluRay <i>(2010)</i></h4>
    <img class="lang" src="/img/flags/hr3.png">
    <span class="fps">fps: 23.976</span>
    <span class="downloads">5</span>
    <span class="dodao"><a href="/u/1">Đuro</a></span>
  </li>
  <li class="subtitleContainer">
    <h3><a href="/titlovi/the-movie-222/">The Movie</a></h3>
    <h4>The.Movie.2010.1080p.WEB-DL</h4>
    <img class="lang" src="/img/flags/rs3.png">
    <span class="fps">fps: N/A</span>
    <span class="downloads">20</span>
    <span class="dodao"><a href="/u/2">Marko</a></span>
  </li>
  <li class="subtitleContainer">
    <h3><a href="/titlovi/the-movie-333/">Tiny</a></h3>
    <span class="downloads">100</span>
  </li>
  <li class="subtitleContainer">
    <h3><a href="/titlovi/the-movie-444/">Image</a></h3>
    <span class="downloads">90</span>
  </li>
  <li class="subtitleContainer">
    <h3><a href="/titlovi/the-movie-555/">Missing</a></h3>
    <span class="downloads">80</span>
  </li>
  <li class="subtitleContainer">
    <h3><a href="/titlovi/the-movie-666/">Redirected</a></h3>
    <img class="lang" src="/img/flags/xx9.png">
    <span class="downloads">5 puta</span>
    <span class="dodao"><a href="/u/3">Ana</a></span>
  </li>
</ul>
</body></html>
"#;

const EMPTY_LISTING: &str = "<html><body><p>Nema rezultata</p></body></html>";

async fn search_page(
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if headers.get(header::COOKIE).and_then(|v| v.to_str().ok()) != Some("sid=1") {
        return StatusCode::FORBIDDEN.into_response();
    }

    match params.get("prijevod").map(String::as_str) {
        Some("tt1234567") | Some("tt0903747 S01E02") => Html(LISTING).into_response(),
        Some("tt0000500") => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        _ => Html(EMPTY_LISTING).into_response(),
    }
}

async fn download(
    State(origin): State<String>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if headers.get(header::REFERER).and_then(|v| v.to_str().ok()) != Some(origin.as_str()) {
        return StatusCode::FORBIDDEN.into_response();
    }

    match params.get("mediaid").map(String::as_str) {
        Some("111") => {
            let (legacy, _, _) = WINDOWS_1250.encode(SRT_TEXT);
            let archive = zip_with(&[
                ("info.nfo", b"release notes"),
                ("The.Movie.srt", &legacy[..]),
            ]);
            ([(header::CONTENT_TYPE, "application/zip")], archive).into_response()
        }
        Some("222") => (
            [(header::CONTENT_TYPE, "text/plain")],
            SRT_TEXT.as_bytes().to_vec(),
        )
            .into_response(),
        Some("333") => ([(header::CONTENT_TYPE, "text/plain")], "1\nshort\n").into_response(),
        Some("444") => (
            [(header::CONTENT_TYPE, "image/png")],
            vec![0x89u8; 512],
        )
            .into_response(),
        Some("666") => Redirect::temporary("/files/redirected.srt").into_response(),
        Some("777") => Redirect::temporary("/hop/4").into_response(),
        Some("888") => Redirect::temporary("/hop/5").into_response(),
        Some("997") => {
            let inflated = vec![b'a'; OVERSIZED];
            let archive = zip_with(&[("bomb.srt", &inflated[..])]);
            ([(header::CONTENT_TYPE, "application/zip")], archive).into_response()
        }
        Some("998") => {
            let chunks = (0..OVERSIZED / 8192).map(|_| Ok::<_, std::io::Error>(vec![b'a'; 8192]));
            (
                [(header::CONTENT_TYPE, "text/plain")],
                Body::from_stream(stream::iter(chunks)),
            )
                .into_response()
        }
        Some("999") => ([(header::CONTENT_TYPE, "text/plain")], vec![b'a'; OVERSIZED]).into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn redirected_file() -> Response {
    let mut body = vec![0xEF, 0xBB, 0xBF];
    body.extend_from_slice(SRT_TEXT.as_bytes());
    (
        [
            (header::CONTENT_TYPE, "application/x-subrip"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"redirected.srt\""),
        ],
        body,
    )
        .into_response()
}

/// Redirects `n` more times before serving the subtitle
async fn hop(Path(n): Path<u32>) -> Response {
    if n == 0 {
        redirected_file().await
    } else {
        Redirect::temporary(&format!("/hop/{}", n - 1)).into_response()
    }
}

/// Bind the fake site on a random local port and return its origin
pub async fn spawn_upstream() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let origin = format!("http://{}", listener.local_addr().unwrap());

    let app = Router::new()
        .route("/titlovi/", get(search_page))
        .route("/download/", get(download))
        .route("/files/redirected.srt", get(redirected_file))
        .route("/hop/:n", get(hop))
        .with_state(origin.clone());

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    origin
}
