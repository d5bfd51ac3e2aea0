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

const LICENSE: &str = "http://www.oracle.com/technetwork/java/javase/terms/license/index.html";
const BASE_URL: &str =
    "http://download.oracle.com/otn-pub/java/jdk/8u131-b11/d54c1d3a095b4ff2b6607d096fa80163";

// The JDK mirrors only check the license cookie, no sign-in is needed.
pub(super) fn resources() -> Vec<Resource> {
    let accept_cookie =
        AcceptCookie::new("oraclelicense", "accept-securebackup-cookie", ".oracle.com");

    vec![
        Resource {
            component: "java".to_string(),
            version: "8u131".to_string(),
            files: vec![format!("{BASE_URL}/jdk-8u131-linux-x64.tar.gz")],
            license_url: LICENSE.to_string(),
            os: "linux".to_string(),
            arch: Arch::X64,
            lang: "na".to_string(),
            skip_auth: true,
            accept_cookie: accept_cookie.clone(),
        },
        Resource {
            component: "java".to_string(),
            version: "8u131".to_string(),
            files: vec![format!("{BASE_URL}/jdk-8u131-windows-x64.exe")],
            license_url: LICENSE.to_string(),
            os: "windows".to_string(),
            arch: Arch::X64,
            lang: "na".to_string(),
            skip_auth: true,
            accept_cookie,
        },
    ]
}
