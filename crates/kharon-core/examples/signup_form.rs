//! Signup form validation example
//!
//! Validates the same request body under both error policies, then a body
//! with several mistakes to show what each policy reports.
//!
//! Copyright (c) 2025 Kharon Team
//! Licensed under the Apache-2.0 license

use kharon_core::{filtered_to_json, validate_with, Config, Options, RawInput, Validator};
use serde_json::{json, Value};

fn signup_rules(v: &mut Validator) -> kharon_core::Result<()> {
    v.email("email", Options::new().required())?;
    v.text("password", Options::new().required().regex(".{8,}"))?;
    v.text(
        "password_confirmation",
        Options::new().required().equals_key("password").extract(false),
    )?;
    v.integer("age", Options::new().min(18.0))?;
    v.boolean("newsletter", Options::new())?;
    v.date("birthday", Options::new().rename("born_on"))?;
    v.text("country", Options::new().in_values(["GR", "IT", "FR"]))?;
    v.array("interests", Options::new().contains(["rivers"]))?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Kharon Signup Form Demo ===\n");

    let valid = json!({
        "email": "charon@styx.gr",
        "password": "obol-for-the-ferry",
        "password_confirmation": "obol-for-the-ferry",
        "age": "2734",
        "newsletter": "false",
        "birthday": "1990-04-01",
        "country": "GR",
        "interests": ["rivers", "boats"],
        "csrf_token": "dropped-because-undeclared"
    });

    let invalid = json!({
        "email": "charon-at-styx",
        "password": "obol",
        "password_confirmation": "drachma",
        "age": "12",
        "country": "Atlantis",
        "interests": ["boats"]
    });

    demo("valid body", &valid, Config::raising())?;
    println!();
    demo("invalid body", &invalid, Config::raising())?;
    println!();
    demo("invalid body", &invalid, Config::collecting())?;

    Ok(())
}

fn demo(label: &str, body: &Value, config: Config) -> Result<(), Box<dyn std::error::Error>> {
    println!("--- {} ({} policy) ---", label, config.error_policy);

    let datas = RawInput::try_from(body.clone())?;
    match validate_with(datas, &config, signup_rules) {
        Ok(report) => {
            println!("filtered: {}", filtered_to_json(&report.filtered)?);
            if report.is_valid() {
                println!("no violations");
            }
            for record in &report.errors {
                println!("violation: {}", record);
            }
        }
        Err(e) => println!("aborted: {}", e),
    }

    Ok(())
}
