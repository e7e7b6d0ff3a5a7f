mod execution_scenario_tests;
mod validation_scenario_tests;

use crate::Schema;
use crate::SchemaBuilder;

fn build_schema(sdl: &str) -> Schema {
    SchemaBuilder::new()
        .load_str(None, sdl)
        .expect("parse")
        .build()
        .expect("valid schema")
}
