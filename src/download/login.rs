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

//! Sign-in form handling for the OTN single sign-on page.
//!
//! The page served in place of a gated file carries hidden inputs (request
//! ids, site tokens) that must be posted back along with the credentials.
//! Only that one page layout is supported: every `<input>` inside any
//! `<form>` is collected by name.

use crate::error::{OdlError, Result};
use log::debug;
use scraper::{Html, Selector};
use std::collections::BTreeMap;

/// Fixed endpoint that accepts the sign-in form.
pub const LOGIN_URL: &str = "https://login.oracle.com/oam/server/sso/auth_cred_submit";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    fields: BTreeMap<String, String>,
}

impl LoginForm {
    /// Scrape name/value pairs from every input of every form on the page.
    ///
    /// A later input with the same name replaces an earlier one. Inputs
    /// without a name are not submitted by browsers and are skipped; a missing
    /// value is sent as an empty string.
    pub fn from_html(html: &str) -> Result<Self> {
        let document = Html::parse_document(html);
        let forms = parse_selector("form")?;
        let inputs = parse_selector("input")?;

        let mut fields = BTreeMap::new();
        let mut form_count = 0;

        for form in document.select(&forms) {
            form_count += 1;
            for input in form.select(&inputs) {
                let Some(name) = input.value().attr("name") else {
                    continue;
                };
                let value = input.value().attr("value").unwrap_or_default();
                fields.insert(name.to_string(), value.to_string());
            }
        }

        if form_count == 0 {
            return Err(OdlError::LoginForm(
                "the response did not contain a sign-in form".to_string(),
            ));
        }

        debug!(
            "Collected {} field(s) from {form_count} form(s)",
            fields.len()
        );
        Ok(Self { fields })
    }

    pub fn with_credentials(mut self, username: &str, password: &str) -> Self {
        self.fields
            .insert("username".to_string(), username.to_string());
        self.fields
            .insert("password".to_string(), password.to_string());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// URL-encoded body, keys in sorted order.
    pub fn encode(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (name, value) in &self.fields {
            serializer.append_pair(name, value);
        }
        serializer.finish()
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector)
        .map_err(|e| OdlError::LoginForm(format!("invalid selector '{selector}': {e:?}")))
}
