//! Loads range declarations from JSON, then validates a request.
//!
//! Run with `RUST_LOG=paramguard_validator=debug` to see rejected parameters.

use paramguard_validator::prelude::*;
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let declarations: Vec<ParamOptions> = serde_json::from_value(json!([
        { "name": "page", "type": "integer", "default": 1, "between": [1, 100] },
        { "name": "ratios", "type": {"array_of": "float"}, "between": {"from": 0.0, "to": 1.0} },
    ]))?;

    let mut validators = Vec::new();
    for options in declarations {
        let name = options.name.clone();
        validators.push((name, options.build()?));
    }

    let scope = ScopeContext::root();
    let checks: Vec<ParamCheck<'_>> = validators
        .iter()
        .map(|(name, validator)| ParamCheck {
            name,
            scope: &scope,
            validator,
        })
        .collect();

    let request = ParamValue::from(json!({ "page": 7, "ratios": [0.1, 0.5, 1.5] }));
    match validate_params(&checks, &request) {
        Ok(()) => println!("request accepted"),
        Err(errors) => println!("request rejected: {errors}"),
    }

    Ok(())
}
