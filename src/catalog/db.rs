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

const XE_LICENSE: &str =
    "http://www.oracle.com/technetwork/licenses/database-11g-express-license-459621.html";
const EE_LICENSE: &str = "http://www.oracle.com/technetwork/licenses/standard-license-152015.html";

pub(super) fn resources() -> Vec<Resource> {
    let xe_cookie = AcceptCookie::new("oraclelicense", "accept-sqldev-cookie", ".oracle.com");
    let ee_cookie = AcceptCookie::new("oraclelicense", "accept-dbindex-cookie", ".oracle.com");

    vec![
        // 11g XE, Linux 64-bit
        Resource {
            component: "db".to_string(),
            version: "11gXE".to_string(),
            files: vec![
                "https://edelivery.oracle.com/akam/otn/linux/oracle11g/xe/oracle-xe-11.2.0-1.0.x86_64.rpm.zip"
                    .to_string(),
            ],
            license_url: XE_LICENSE.to_string(),
            os: "linux".to_string(),
            arch: Arch::X64,
            lang: "na".to_string(),
            skip_auth: false,
            accept_cookie: xe_cookie.clone(),
        },
        // 11g XE, Windows 32-bit
        Resource {
            component: "db".to_string(),
            version: "11gXE".to_string(),
            files: vec![
                "https://edelivery.oracle.com/akam/otn/nt/oracle11g/xe/OracleXE112_Win32.zip"
                    .to_string(),
            ],
            license_url: XE_LICENSE.to_string(),
            os: "windows".to_string(),
            arch: Arch::X86,
            lang: "na".to_string(),
            skip_auth: false,
            accept_cookie: xe_cookie.clone(),
        },
        // 11g XE, Windows 64-bit
        Resource {
            component: "db".to_string(),
            version: "11gXE".to_string(),
            files: vec![
                "https://edelivery.oracle.com/akam/otn/nt/oracle11g/xe/OracleXE112_Win64.zip"
                    .to_string(),
            ],
            license_url: XE_LICENSE.to_string(),
            os: "windows".to_string(),
            arch: Arch::X64,
            lang: "na".to_string(),
            skip_auth: false,
            accept_cookie: xe_cookie,
        },
        // 12c EE, Linux 64-bit, shipped as a two part archive
        Resource {
            component: "db".to_string(),
            version: "12cEE".to_string(),
            files: vec![
                "https://edelivery.oracle.com/akam/otn/linux/oracle12c/121020/linuxamd64_12102_database_1of2.zip"
                    .to_string(),
                "https://edelivery.oracle.com/akam/otn/linux/oracle12c/121020/linuxamd64_12102_database_2of2.zip"
                    .to_string(),
            ],
            license_url: EE_LICENSE.to_string(),
            os: "linux".to_string(),
            arch: Arch::X64,
            lang: "na".to_string(),
            skip_auth: false,
            accept_cookie: ee_cookie,
        },
    ]
}
