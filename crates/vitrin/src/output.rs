use libvitrin_core::VitrinError;
use serde::Serialize;

use crate::cli::Cli;

/// JSON response envelope
#[derive(Serialize)]
pub struct JsonResponse<T: Serialize> {
    pub schema_version: u32,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonError>,
}

#[derive(Serialize)]
pub struct JsonError {
    pub code: String,
    pub message: String,
}

/// Output a successful result
pub fn output_success<T: Serialize>(cli: &Cli, data: T) {
    if cli.json {
        let response = JsonResponse {
            schema_version: 1,
            ok: true,
            data: Some(data),
            error: None,
        };
        match serde_json::to_string_pretty(&response) {
            Ok(text) => println!("{}", text),
            Err(e) => eprintln!("error: {}", e),
        }
    } else if !cli.quiet {
        match serde_json::to_string_pretty(&data) {
            Ok(text) => println!("{}", text),
            Err(e) => eprintln!("error: {}", e),
        }
    }
}

/// Output an error
pub fn output_error(cli: &Cli, err: &VitrinError) {
    if cli.json {
        let response: JsonResponse<()> = JsonResponse {
            schema_version: 1,
            ok: false,
            data: None,
            error: Some(JsonError {
                code: err.error_code().to_string(),
                message: err.to_string(),
            }),
        };
        match serde_json::to_string_pretty(&response) {
            Ok(text) => eprintln!("{}", text),
            Err(e) => eprintln!("error: {}", e),
        }
    } else {
        eprintln!("error: {}", err);
    }
}

/// Print human-readable output (ignored in quiet and JSON modes)
pub fn print_human(cli: &Cli, msg: &str) {
    if !cli.json && !cli.quiet {
        println!("{}", msg);
    }
}
