//! A small HTTP server with two routes, built on hyper.
//!
//! Run with: cargo run --bin http_servers
//! Then: curl localhost:8090/hello ; curl localhost:8090/headers

use std::convert::Infallible;
use std::net::SocketAddr;

use bytes::Bytes;
use http_body_util::Full;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::{TokioIo, TokioTimer};
use tokio::net::TcpListener;

// A handler is an async function from a request to a response. Routing here
// is a plain match on the path; frameworks add sugar but nothing essential.
// Taking the body generically keeps the handler testable without sockets.
async fn route(
    req: Request<impl hyper::body::Body>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let resp = match req.uri().path() {
        "/hello" => Response::new(Full::new(Bytes::from("hello\n"))),
        "/headers" => {
            // Echo the request headers back, one per line.
            let mut body = String::new();
            for (name, value) in req.headers() {
                body.push_str(&format!("{}: {}\n", name, value.to_str().unwrap_or("<binary>")));
            }
            Response::new(Full::new(Bytes::from(body)))
        }
        _ => Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Full::new(Bytes::from("404 not found\n")))
            .expect("static response"),
    };
    Ok(resp)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let addr = SocketAddr::from(([127, 0, 0, 1], 8090));
    let listener = TcpListener::bind(addr).await?;
    println!("listening on http://{}", addr);

    // Accept loop: each connection gets its own task, and hyper drives the
    // HTTP/1 protocol over it, calling `route` per request.
    loop {
        let (stream, _) = listener.accept().await?;
        let io = TokioIo::new(stream);
        tokio::task::spawn(async move {
            if let Err(err) = http1::Builder::new()
                .timer(TokioTimer::new())
                .serve_connection(io, service_fn(route))
                .await
            {
                eprintln!("error serving connection: {:?}", err);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_of(resp: Response<Full<Bytes>>) -> String {
        let collected = resp.into_body().collect().await.expect("body");
        String::from_utf8(collected.to_bytes().to_vec()).expect("utf8 body")
    }

    fn request(path: &str) -> Request<Full<Bytes>> {
        Request::builder()
            .uri(path)
            .body(Full::new(Bytes::new()))
            .expect("request")
    }

    #[tokio::test]
    async fn test_hello_route() {
        let resp = route(request("/hello")).await.expect("infallible");
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_of(resp).await, "hello\n");
    }

    #[tokio::test]
    async fn test_headers_route_echoes() {
        let req = Request::builder()
            .uri("/headers")
            .header("x-example", "yes")
            .body(Full::new(Bytes::new()))
            .expect("request");
        let resp = route(req).await.expect("infallible");
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(body_of(resp).await.contains("x-example: yes"));
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let resp = route(request("/nope")).await.expect("infallible");
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
