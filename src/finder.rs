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

use crate::catalog::Catalog;
use crate::models::{Resource, Selection};
use log::{debug, trace};

/// Looks up catalog entries by exact selection.
pub struct ResourceFinder<'a> {
    catalog: &'a Catalog,
}

impl<'a> ResourceFinder<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Returns the first resource, in catalog order, whose component, version,
    /// os, arch and lang all equal the selection. "na" is compared like any
    /// other value; there are no wildcards.
    pub fn find(&self, selection: &Selection) -> Option<&'a Resource> {
        let found = self.catalog.iter().find(|resource| {
            trace!(
                "Comparing {selection} with {} {} ({}, {}, {})",
                resource.component, resource.version, resource.os, resource.arch, resource.lang
            );
            resource.matches(selection)
        });

        match found {
            Some(resource) => debug!("Resolved {selection} to {:?}", resource.files),
            None => debug!("No catalog entry for {selection}"),
        }

        found
    }
}
