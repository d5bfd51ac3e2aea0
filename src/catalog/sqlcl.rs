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

use crate::models::{AcceptCookie, Arch, Resource};

pub(super) fn resources() -> Vec<Resource> {
    let accept_cookie = AcceptCookie::new("oraclelicense", "accept-sqldev-cookie", ".oracle.com");

    vec![Resource {
        component: "sqlcl".to_string(),
        version: "4.2".to_string(),
        files: vec![
            "https://edelivery.oracle.com/akam/otn/java/sqldeveloper/sqlcl-4.2.0.16.355.0402-no-jre.zip"
                .to_string(),
        ],
        license_url: "http://www.oracle.com/technetwork/licenses/sqldev-license-152021.html"
            .to_string(),
        os: "na".to_string(),
        arch: Arch::Na,
        lang: "na".to_string(),
        skip_auth: false,
        accept_cookie,
    }]
}
