use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

/// Allow-list of browser origins permitted to talk to the relay.
#[derive(Debug, Clone)]
pub struct OriginPolicy {
    allow_any: bool,
    origins: Vec<String>,
}

impl OriginPolicy {
    pub fn new<S: AsRef<str>>(origins: &[S]) -> Self {
        let origins: Vec<String> = origins
            .iter()
            .map(|o| normalize(o.as_ref()).to_owned())
            .filter(|o| !o.is_empty())
            .collect();

        Self {
            allow_any: origins.iter().any(|o| o == "*"),
            origins,
        }
    }

    pub fn allows(&self, origin: &str) -> bool {
        self.allow_any || self.origins.iter().any(|o| o == normalize(origin))
    }

    pub fn cors_layer(&self) -> CorsLayer {
        let allow_origin = if self.allow_any {
            AllowOrigin::any()
        } else {
            let values: Vec<HeaderValue> = self
                .origins
                .iter()
                .filter_map(|o| match HeaderValue::from_str(o) {
                    Ok(value) => Some(value),
                    Err(_) => {
                        warn!("Ignoring unusable origin {:?}", o);
                        None
                    }
                })
                .collect();
            AllowOrigin::list(values)
        };

        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods([Method::GET, Method::POST])
    }
}

fn normalize(origin: &str) -> &str {
    origin.trim().trim_end_matches('/')
}
