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

use crate::error::OdlError;

pub fn get_exit_code(error: &OdlError) -> i32 {
    match error {
        OdlError::LicenseDeclined => 1,

        OdlError::InvalidArchitecture(_) | OdlError::ConfigError(_) | OdlError::InvalidUrl(_) => 2,

        OdlError::MissingUsername => 3,

        OdlError::ResourceNotFound { .. } => 4,

        OdlError::NetworkError(_) | OdlError::Http(_) => 20,

        OdlError::LoginForm(_) => 65,

        OdlError::Io(_) => 74,
    }
}
