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

//! Static table of every resource odl knows how to fetch.
//!
//! Each provider module contributes a fixed list; [`Catalog::new`] joins them
//! in the order they are declared here. That order is also the tie-break when
//! two entries describe the same selection.

mod db;
mod java;
mod sqlcl;
mod sqldev;

use crate::models::Resource;

pub struct Catalog {
    resources: Vec<Resource>,
}

impl Catalog {
    pub fn new() -> Self {
        let mut resources = Vec::new();
        resources.extend(db::resources());
        resources.extend(sqlcl::resources());
        resources.extend(sqldev::resources());
        resources.extend(java::resources());
        Self { resources }
    }

    pub fn from_resources(resources: Vec<Resource>) -> Self {
        Self { resources }
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn iter(&self) -> impl Iterator<Item = &Resource> {
        self.resources.iter()
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
