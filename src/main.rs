use clap::{Arg, ArgMatches, Command};
use serde_json::Value;
use std::fs;
use regex::Regex;
use anyhow::{anyhow, Result};

use covarray_agent::covering_array::{self, CoveringArray};

fn main() {
    let matches = Command::new("covarray-agent")
        .version("1.0.0")
        .author("Henk-Jan Lebbink")
        .about("IPOG t-way covering array generator agent")
        .subcommand(
            Command::new("generate")
                .about("Generate a t-way covering array")
                .arg(Arg::new("input")
                    .short('i')
                    .long("input")
                    .help("Input: JSON file path, inline JSON, or 'a=[1,2] b=[x,y] strength=2' DSL")
                    .required(true))
                .arg(Arg::new("format")
                    .short('f')
                    .long("format")
                    .help("Output format")
                    .value_parser(["json", "human", "dump"])
                    .default_value("human"))
        )
        .subcommand(
            Command::new("check")
                .about("Check a covering array against its parameters")
                .arg(Arg::new("input")
                    .short('i')
                    .long("input")
                    .help("Input: JSON file path or inline JSON with parameters, strength, and rows")
                    .required(true))
        )
        .subcommand(
            Command::new("examples")
                .about("Show usage examples")
        )
        .get_matches();

    let result = match matches.subcommand() {
        Some(("generate", sub_matches)) => handle_generate(sub_matches),
        Some(("check", sub_matches)) => handle_check(sub_matches),
        Some(("examples", _)) => handle_examples(),
        _ => {
            eprintln!("Use --help for usage information");
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[derive(Debug, serde::Deserialize)]
struct ParametersRequest {
    parameters: Vec<ParameterSpec>,
    #[serde(default = "default_strength")]
    strength: i64,
}

#[derive(Debug, serde::Deserialize)]
struct ParameterSpec {
    name: String,
    values: Vec<Value>,
}

fn default_strength() -> i64 {
    2
}

fn handle_generate(matches: &ArgMatches) -> Result<()> {
    let input = matches.get_one::<String>("input").expect("input is required by clap");
    let format = matches.get_one::<String>("format").expect("format has default value in clap");

    let request = parse_parameters_request(input)?;
    let parameters: Vec<(String, Vec<Value>)> =
        request.parameters.into_iter().map(|p| (p.name, p.values)).collect();

    let array = covering_array::generate(&parameters, request.strength).map_err(|e| anyhow!(e.to_string()))?;

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&ArrayJson::from(&array))?),
        "human" => print_human_readable(&array),
        "dump" => println!("{}", covering_array::dump(&plain_array(&array))),
        _ => return Err(anyhow!("Unknown format: {}", format)),
    }

    Ok(())
}

#[derive(Debug, serde::Deserialize)]
struct CheckRequest {
    parameters: Vec<ParameterSpec>,
    strength: i64,
    rows: Vec<Vec<Value>>,
}

fn handle_check(matches: &ArgMatches) -> Result<()> {
    let input = matches.get_one::<String>("input").expect("input is required by clap");

    let text = read_input_text(input)?;
    let request: CheckRequest = serde_json::from_str(&text)?;

    let parameter_names: Vec<String> = request.parameters.iter().map(|p| p.name.clone()).collect();
    let parameters: Vec<(String, Vec<Value>)> =
        request.parameters.into_iter().map(|p| (p.name, p.values)).collect();

    let array = CoveringArray { parameter_names, rows: request.rows };

    match covering_array::check(&parameters, &array, request.strength) {
        Ok(()) => {
            println!("OK: covering array satisfies strength {}", request.strength);
            Ok(())
        }
        Err(e) => Err(anyhow!(e.to_string())),
    }
}

/// Read `input` as a file path if one exists, otherwise treat it as the raw
/// text (inline JSON or DSL) to parse directly.
fn read_input_text(input: &str) -> Result<String> {
    if let Ok(contents) = fs::read_to_string(input) {
        Ok(contents)
    } else {
        Ok(input.to_string())
    }
}

fn parse_parameters_request(input: &str) -> Result<ParametersRequest> {
    let text = read_input_text(input)?;

    if let Ok(request) = serde_json::from_str::<ParametersRequest>(&text) {
        return Ok(request);
    }

    parse_dsl(&text)
}

/// Parse the small inline DSL: `name=[v1,v2,...]` tokens plus an optional
/// `strength=N` token, e.g. `a=[1,2] b=[x,y,z] strength=2`.
fn parse_dsl(input: &str) -> Result<ParametersRequest> {
    let param_pattern = Regex::new(r"(\w+)\s*=\s*\[([^\]]*)\]")?;
    let strength_pattern = Regex::new(r"strength\s*=\s*(-?\d+)")?;

    let mut parameters = Vec::new();
    for caps in param_pattern.captures_iter(input) {
        let name = caps[1].to_string();
        let values: Vec<Value> = caps[2]
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(parse_dsl_value)
            .collect();
        parameters.push(ParameterSpec { name, values });
    }

    if parameters.is_empty() {
        return Err(anyhow!(
            "Could not parse input format. Supported formats:\n\
            - JSON: {{\"parameters\": [{{\"name\": \"a\", \"values\": [1,2]}}], \"strength\": 2}}\n\
            - DSL: a=[1,2] b=[x,y,z] strength=2"
        ));
    }

    let strength = strength_pattern
        .captures(input)
        .map(|caps| caps[1].parse())
        .transpose()
        .map_err(|e| anyhow!("Failed to parse strength: {}", e))?
        .unwrap_or_else(default_strength);

    Ok(ParametersRequest { parameters, strength })
}

fn parse_dsl_value(token: &str) -> Value {
    if let Ok(n) = token.parse::<i64>() {
        Value::from(n)
    } else {
        Value::from(token.to_string())
    }
}

#[derive(serde::Serialize)]
struct ArrayJson {
    parameter_names: Vec<String>,
    rows: Vec<Vec<Value>>,
    row_count: usize,
}

impl From<&CoveringArray<Value>> for ArrayJson {
    fn from(array: &CoveringArray<Value>) -> Self {
        ArrayJson {
            parameter_names: array.parameter_names.clone(),
            rows: array.rows.clone(),
            row_count: array.num_rows(),
        }
    }
}

fn print_human_readable(array: &CoveringArray<Value>) {
    println!("Covering array: {} rows, {} parameters", array.num_rows(), array.num_parameters());
    println!("{}", array.parameter_names.join(" "));
    println!("{}", "-".repeat(array.parameter_names.join(" ").len()));
    for row in &array.rows {
        let line: Vec<String> = row.iter().map(plain).collect();
        println!("{}", line.join(" "));
    }
}

/// Render a JSON value the way its domain declared it, not as JSON: strings
/// lose their surrounding quotes, everything else uses its normal text form.
fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// `array` with every cell rendered through [`plain`], for formats (like
/// `dump`) that expect bare domain-value text rather than JSON syntax.
fn plain_array(array: &CoveringArray<Value>) -> CoveringArray<String> {
    CoveringArray {
        parameter_names: array.parameter_names.clone(),
        rows: array.rows.iter().map(|row| row.iter().map(plain).collect()).collect(),
    }
}

fn handle_examples() -> Result<()> {
    println!("Usage Examples:");
    println!("===============");

    println!("\n1. JSON format:");
    println!("   covarray-agent generate -i '{{\"parameters\": [{{\"name\": \"a\", \"values\": [1,2]}}, {{\"name\": \"b\", \"values\": [\"x\",\"y\",\"z\"]}}], \"strength\": 2}}'");

    println!("\n2. DSL format:");
    println!("   covarray-agent generate -i 'a=[1,2] b=[x,y,z] strength=2'");

    println!("\n3. Dump output:");
    println!("   covarray-agent generate -i 'a=[1,2] b=[x,y,z]' -f dump");

    println!("\n4. From file:");
    println!("   covarray-agent generate -i request.json");

    println!("\n5. Check a previously generated array:");
    println!("   covarray-agent check -i check_request.json");

    Ok(())
}
