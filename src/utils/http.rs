/*---------- Imports ----------*/
use aws_lambda_events::{apigw::ApiGatewayProxyResponse, encodings::Body};
use http::{
    header::{
        ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
        CONTENT_TYPE,
    },
    HeaderMap, HeaderValue,
};
use serde_json::Value;

/*---------- Constants ----------*/
const ALLOWED_HEADERS: &str = "Content-Type, access-control-allow-origin";
const ALLOWED_METHODS: &str = "OPTIONS,POST,GET";

/*---------- Enums ----------*/

/// Which CORS headers go on a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cors {
    /// Content type and allowed origin only.
    Minimal,
    /// Also advertises the allowed request headers and methods.
    Full,
}

pub struct HttpResponse;

fn build_headers(cors: Cors) -> HeaderMap {
    let mut headers = HeaderMap::new();

    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));

    if cors == Cors::Full {
        headers.insert(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        );
        headers.insert(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        );
    }

    headers
}

impl HttpResponse {
    pub fn build_response(status_code: i64, cors: Cors, body: String) -> ApiGatewayProxyResponse {
        let mut response = ApiGatewayProxyResponse::default();

        response.status_code = status_code;
        response.headers = build_headers(cors);
        response.body = Some(Body::Text(body));

        response
    }

    /// 200 response whose body is the incoming event, serialized as received.
    pub fn echo_event(event: &Value, cors: Cors) -> ApiGatewayProxyResponse {
        Self::build_response(200, cors, event.to_string())
    }
}
