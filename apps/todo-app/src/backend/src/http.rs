use ic_http_certification::{HttpRequest, HttpResponse, Method};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HttpConversionError {
    #[error(r#"Unsupported HTTP method "{0}"."#)]
    UnsupportedMethod(String),

    #[error(transparent)]
    InvalidResponse(#[from] http::Error),
}

/// Converts a request received by the HTTP host into the router's request type.
///
/// Header values that are not visible ASCII are dropped.
pub fn decode_request<'a>(
    parts: &http::request::Parts,
    body: Vec<u8>,
) -> Result<HttpRequest<'a>, HttpConversionError> {
    let method = Method::from_str(parts.method.as_str())
        .map_err(|_| HttpConversionError::UnsupportedMethod(parts.method.to_string()))?;

    let url = parts
        .uri
        .path_and_query()
        .map(|path_and_query| path_and_query.as_str())
        .unwrap_or("/")
        .to_string();

    let headers = parts
        .headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.to_string(), value.to_string()))
        })
        .collect();

    Ok(HttpRequest::builder()
        .with_url(url)
        .with_method(method)
        .with_headers(headers)
        .with_body(body)
        .build())
}

/// Converts a router response back into a response the HTTP host can send.
pub fn encode_response(res: &HttpResponse) -> Result<http::Response<Vec<u8>>, HttpConversionError> {
    let mut builder = http::Response::builder().status(res.status_code().as_u16());

    for (header_name, header_value) in res.headers() {
        builder = builder.header(header_name.as_str(), header_value.as_str());
    }

    Ok(builder.body(res.body().to_vec())?)
}
