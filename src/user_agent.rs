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

//! User-Agent sent with every request, redirects included.
//!
//! The OTN edge servers answer non-browser agents with an error page, so odl
//! identifies as a generic browser rather than by its own name.

pub const BROWSER: &str = "Mozilla/5.0";

/// User-Agent for the download session
pub fn download_client() -> String {
    BROWSER.to_string()
}
