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

use crate::models::Arch;
use url::Url;

/// Cookie that tells the vendor site the license agreement was accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptCookie {
    pub name: String,
    pub value: String,
    pub domain: String,
}

impl AcceptCookie {
    pub fn new(name: &str, value: &str, domain: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            domain: domain.to_string(),
        }
    }

    /// Whether `host` falls inside this cookie's domain.
    pub fn matches_host(&self, host: &str) -> bool {
        let domain = self.domain.trim_start_matches('.');
        if domain.is_empty() {
            return false;
        }
        host.eq_ignore_ascii_case(domain)
            || host
                .to_ascii_lowercase()
                .ends_with(&format!(".{}", domain.to_ascii_lowercase()))
    }

    /// Renders the cookie as a `Set-Cookie` value scoped to `url`.
    ///
    /// The configured domain is used when it covers the URL's host; otherwise
    /// the cookie becomes host-only for that URL.
    pub fn set_cookie_for(&self, url: &Url) -> String {
        let host = url.host_str().unwrap_or_default();
        if self.matches_host(host) {
            format!(
                "{}={}; Domain={}; Path=/",
                self.name,
                self.value,
                self.domain.trim_start_matches('.')
            )
        } else {
            format!("{}={}; Path=/", self.name, self.value)
        }
    }
}

/// One downloadable artifact group: a component at a version for one platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub component: String,
    pub version: String,
    pub files: Vec<String>,
    pub license_url: String,
    pub os: String,
    pub arch: Arch,
    pub lang: String,
    pub skip_auth: bool,
    pub accept_cookie: AcceptCookie,
}

impl Resource {
    pub fn matches(&self, selection: &Selection) -> bool {
        self.component == selection.component
            && self.version == selection.version
            && self.os == selection.os
            && self.arch == selection.arch
            && self.lang == selection.lang
    }
}

/// What the user asked for on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub component: String,
    pub version: String,
    pub os: String,
    pub arch: Arch,
    pub lang: String,
}

impl Selection {
    pub fn new(component: &str, version: &str, os: &str, arch: Arch, lang: &str) -> Self {
        Self {
            component: component.to_string(),
            version: version.to_string(),
            os: os.to_string(),
            arch,
            lang: lang.to_string(),
        }
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} ({}, {}, {})",
            self.component, self.version, self.os, self.arch, self.lang
        )
    }
}
