use poem::{
    Endpoint, IntoResponse, Middleware, Request, Response, Result,
    http::{HeaderValue, Method, StatusCode, header},
};

const ALLOWED_METHODS: [Method; 2] = [Method::GET, Method::POST];

/// Cross-origin policy for the kiosk frontend.
///
/// Preflight probes are answered here without reaching the API, and methods
/// the API never serves are refused before any body is read.
pub struct KioskCors;

impl<E: Endpoint> Middleware<E> for KioskCors {
    type Output = KioskCorsEndpoint<E>;

    fn transform(&self, ep: E) -> Self::Output {
        KioskCorsEndpoint { inner: ep }
    }
}

pub struct KioskCorsEndpoint<E> {
    inner: E,
}

impl<E: Endpoint> Endpoint for KioskCorsEndpoint<E> {
    type Output = Response;

    async fn call(&self, req: Request) -> Result<Self::Output> {
        let mut response = if req.method() == Method::OPTIONS {
            StatusCode::OK.into_response()
        } else if ALLOWED_METHODS.contains(req.method()) {
            self.inner.get_response(req).await
        } else {
            Response::builder()
                .status(StatusCode::METHOD_NOT_ALLOWED)
                .body("Method Not Allowed")
        };

        let headers = response.headers_mut();
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, OPTIONS"),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        );

        Ok(response)
    }
}
