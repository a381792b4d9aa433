use crate::domain::models::{ErrorBody, JsonErr, JsonOut};
use serde::Serialize;

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

pub fn print_json<T: Serialize>(data: &T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok: true, data })?
    );
    Ok(())
}

pub fn error_json(code: &str, message: &str) -> String {
    let err = JsonErr {
        ok: false,
        error: ErrorBody {
            code: code.to_string(),
            message: message.to_string(),
        },
    };
    serde_json::to_string_pretty(&err).unwrap_or_else(|_| {
        format!(r#"{{"ok":false,"error":{{"code":"{}","message":"internal"}}}}"#, code)
    })
}

/// Failures go to stdout in JSON mode so callers parse one stream; otherwise stderr.
pub fn print_error(json: bool, code: &str, message: &str) {
    if json {
        println!("{}", error_json(code, message));
    } else {
        eprintln!("error: {}", message);
    }
}
