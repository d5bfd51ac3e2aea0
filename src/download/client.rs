// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::{OdlError, Result};
use crate::models::AcceptCookie;
use crate::user_agent;
use attohttpc::{ProxySettings, Response, Session};
use cookie_store::CookieStore;
use log::{debug, trace};
use std::io::{self, Read};
use std::time::Duration;
use url::Url;

pub trait HttpSession {
    /// Put the license cookie in the session's cookie store for `url`.
    fn seed_cookie(&mut self, url: &Url, cookie: &AcceptCookie) -> Result<()>;

    fn get(&mut self, url: &Url) -> Result<Box<dyn HttpResponse>>;

    /// POST an `application/x-www-form-urlencoded` body.
    fn post_form(&mut self, url: &Url, encoded_form: &str) -> Result<Box<dyn HttpResponse>>;
}

pub trait HttpResponse: Read {
    fn status(&self) -> u16;

    fn header(&self, name: &str) -> Option<&str>;

    fn final_url(&self) -> &str;

    fn content_length(&self) -> Option<u64> {
        self.header("Content-Length")?.parse().ok()
    }
}

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

const MAX_REDIRECTS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RequestMethod {
    Get,
    Post,
}

/// Blocking session that keeps cookies between requests.
///
/// Redirects are followed here instead of by attohttpc so that every hop gets
/// the User-Agent and the cookies the previous hops set.
pub struct AttohttpcSession {
    cookies: CookieStore,
    timeout: Duration,
    user_agent: String,
}

impl AttohttpcSession {
    pub fn new() -> Self {
        Self {
            cookies: CookieStore::default(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: user_agent::download_client(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Value of the `Cookie` header that would be sent to `url`.
    pub fn cookie_header(&self, url: &Url) -> Option<String> {
        let pairs: Vec<String> = self
            .cookies
            .get_request_values(url)
            .map(|(name, value)| format!("{name}={value}"))
            .collect();

        if pairs.is_empty() {
            None
        } else {
            Some(pairs.join("; "))
        }
    }

    fn store_cookies(&mut self, response: &Response, url: &Url) {
        for value in response.headers().get_all("set-cookie") {
            let Ok(raw) = value.to_str() else {
                debug!("Ignoring non-ASCII Set-Cookie from {url}");
                continue;
            };
            if let Err(e) = self.cookies.parse(raw, url) {
                debug!("Ignoring cookie from {url}: {e}");
            }
        }
    }

    fn send(
        &mut self,
        method: RequestMethod,
        url: &Url,
        encoded_form: Option<&str>,
    ) -> Result<Box<dyn HttpResponse>> {
        let mut method = method;
        let mut body = encoded_form.map(str::to_string);
        let mut current = url.clone();

        for _ in 0..=MAX_REDIRECTS {
            let response = self.send_once(method, &current, body.as_deref())?;
            self.store_cookies(&response, &current);

            let status = response.status();
            let location = response
                .headers()
                .get("location")
                .and_then(|value| value.to_str().ok())
                .map(str::to_string);

            let location = match location {
                Some(location) if status.is_redirection() => location,
                _ => {
                    return Ok(Box::new(AttohttpcResponse {
                        response,
                        url: current.to_string(),
                    }));
                }
            };

            let next = current.join(&location).map_err(|e| {
                OdlError::NetworkError(format!(
                    "Invalid redirect location '{location}' from {current}: {e}"
                ))
            })?;
            debug!("Redirect {} from {current} to {next}", status.as_u16());

            // 307 and 308 replay the request as-is, the rest become a plain GET
            if !matches!(status.as_u16(), 307 | 308) {
                method = RequestMethod::Get;
                body = None;
            }
            current = next;
        }

        Err(OdlError::NetworkError(format!(
            "Too many redirects while requesting {url}"
        )))
    }

    fn send_once(
        &self,
        method: RequestMethod,
        url: &Url,
        encoded_form: Option<&str>,
    ) -> Result<Response> {
        let mut session = Session::new();
        session.proxy_settings(ProxySettings::from_env());

        let request_builder = match method {
            RequestMethod::Get => session.get(url.as_str()),
            RequestMethod::Post => session.post(url.as_str()),
        };

        let mut request_builder = request_builder
            .timeout(self.timeout)
            .header("User-Agent", &self.user_agent)
            .follow_redirects(false);

        if let Some(cookie) = self.cookie_header(url) {
            trace!("Sending cookies to {url}: {cookie}");
            request_builder = request_builder.header("Cookie", cookie);
        }

        trace!("{method:?} {url}");
        let response = match encoded_form {
            Some(form) => request_builder
                .header("Content-Type", "application/x-www-form-urlencoded")
                .bytes(form.as_bytes())
                .send()?,
            None => request_builder.send()?,
        };

        Ok(response)
    }
}

impl Default for AttohttpcSession {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpSession for AttohttpcSession {
    fn seed_cookie(&mut self, url: &Url, cookie: &AcceptCookie) -> Result<()> {
        let raw = cookie.set_cookie_for(url);
        self.cookies.parse(&raw, url).map_err(|e| {
            OdlError::NetworkError(format!("Could not store license cookie for {url}: {e}"))
        })?;
        Ok(())
    }

    fn get(&mut self, url: &Url) -> Result<Box<dyn HttpResponse>> {
        self.send(RequestMethod::Get, url, None)
    }

    fn post_form(&mut self, url: &Url, encoded_form: &str) -> Result<Box<dyn HttpResponse>> {
        self.send(RequestMethod::Post, url, Some(encoded_form))
    }
}

struct AttohttpcResponse {
    response: Response,
    url: String,
}

impl Read for AttohttpcResponse {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.response.read(buf)
    }
}

impl HttpResponse for AttohttpcResponse {
    fn status(&self) -> u16 {
        self.response.status().as_u16()
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.response.headers().get(name)?.to_str().ok()
    }

    fn final_url(&self) -> &str {
        &self.url
    }
}
