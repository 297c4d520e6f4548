use gloo_net::http::{Request, Response};
use urlencoding::encode;

use crate::config::Config;
use crate::error::{ApiError, Operation};
use crate::model::{Catalog, Confirmation, Rejection};

pub fn activities_url(base: &str) -> String {
    format!("{base}/activities")
}

pub fn mutation_url(base: &str, op: Operation, activity: &str, email: &str) -> String {
    let tail = match op {
        Operation::Signup => "signup",
        Operation::Unregister => "participants",
    };
    format!(
        "{base}/activities/{}/{tail}?email={}",
        encode(activity),
        encode(email)
    )
}

async fn body_of(resp: &Response) -> Result<String, ApiError> {
    Ok(resp.text().await?)
}

pub async fn fetch_catalog(config: &Config) -> Result<Catalog, ApiError> {
    let resp = Request::get(&activities_url(&config.api_base)).send().await?;
    let body = body_of(&resp).await?;
    if !resp.ok() {
        let rejection: Rejection = serde_json::from_str(&body).unwrap_or_default();
        return Err(ApiError::Rejected {
            status: resp.status(),
            detail: rejection.detail().map(str::to_string),
        });
    }
    Ok(Catalog::from_json(&body)?)
}

/// POST signup or DELETE participant. A non-2xx reply whose body is not the
/// `{detail}` shape is a decode failure, same as a garbled 2xx body.
pub async fn send_mutation(
    config: &Config,
    op: Operation,
    activity: &str,
    email: &str,
) -> Result<Confirmation, ApiError> {
    let url = mutation_url(&config.api_base, op, activity, email);
    let request = match op {
        Operation::Signup => Request::post(&url),
        Operation::Unregister => Request::delete(&url),
    };
    let resp = request.send().await?;
    let body = body_of(&resp).await?;

    if resp.ok() {
        return Ok(serde_json::from_str(&body)?);
    }

    let rejection: Rejection = serde_json::from_str(&body)?;
    Err(ApiError::Rejected {
        status: resp.status(),
        detail: rejection.detail().map(str::to_string),
    })
}
