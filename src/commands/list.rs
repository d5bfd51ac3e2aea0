use crate::catalog::Catalog;
use crate::error::Result;
use comfy_table::{Cell, Table};
use log::debug;

pub struct ListCommand {
    catalog: Catalog,
}

impl ListCommand {
    pub fn new() -> Result<Self> {
        Ok(Self {
            catalog: Catalog::new(),
        })
    }

    pub fn execute(&self) -> Result<()> {
        debug!("Listing {} catalog entries", self.catalog.len());
        println!("{}", render_table(&self.catalog));
        Ok(())
    }
}

fn render_table(catalog: &Catalog) -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_BORDERS_ONLY);
    table.set_header(vec![
        Cell::new("Component"),
        Cell::new("Version"),
        Cell::new("OS"),
        Cell::new("Arch"),
        Cell::new("Lang"),
        Cell::new("Files"),
        Cell::new("Sign-in"),
    ]);

    for resource in catalog.iter() {
        table.add_row(vec![
            Cell::new(&resource.component),
            Cell::new(&resource.version),
            Cell::new(&resource.os),
            Cell::new(resource.arch),
            Cell::new(&resource.lang),
            Cell::new(resource.files.len()),
            Cell::new(if resource.skip_auth { "no" } else { "yes" }),
        ]);
    }

    table
}
